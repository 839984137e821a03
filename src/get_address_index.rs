use crate::coordinate::round3;
use crate::{CoordinateKey, Gateway, Station};
use serde::Deserialize;
use std::collections::HashMap;

impl Gateway {
    /// Resolves each station's rounded coordinates to a place name through
    /// the nearby-address endpoint and collects the results into an index
    /// keyed by [`CoordinateKey`].
    ///
    /// Lookups that fail to fetch or come back without the expected fields
    /// are skipped; the affected stations simply get no entry. When two
    /// stations round to the same key, the later response wins.
    pub async fn get_address_index(&self, stations: &[Station]) -> HashMap<CoordinateKey, String> {
        #[derive(Deserialize)]
        struct Coordinate {
            longitude: f64,
            latitude: f64,
        }

        #[derive(Deserialize)]
        struct Data {
            coordinate: Coordinate,
            name: String,
        }

        #[derive(Deserialize)]
        struct Response {
            data: Data,
        }

        //https://api.i-mobility.at/routing/api/v1/nearby_address?latitude=48.191&longitude=16.330

        let mut addresses = HashMap::new();
        for station in stations {
            let (longitude, latitude) = station.coordinates;

            // The endpoint takes latitude first, although the coordinate
            // pair stores longitude first.
            let url = format!(
                "{}?latitude={}&longitude={}",
                self.address_url,
                round3(latitude),
                round3(longitude)
            );

            let res: Response = match self.get(&url).await {
                Ok(res) => res,
                Err(err) => {
                    println!("Error fetching address from {} ({}).", url, err);
                    continue;
                }
            };

            addresses.insert(
                CoordinateKey::new(res.data.coordinate.longitude, res.data.coordinate.latitude),
                res.data.name,
            );
        }

        addresses
    }
}
