use crate::{normalize_stations, Error, Gateway, RawStation, Station, ZeroBoxesPolicy};

impl Gateway {
    /// Retrieves the station feed and normalizes it. The result is in feed
    /// order; `get_annotated_stations` applies the canonical sort.
    pub async fn get_stations(&self, zero_boxes: ZeroBoxesPolicy) -> Result<Vec<Station>, Error> {
        //https://wegfinder.at/api/v1/stations

        let raw: Vec<RawStation> = self.get(&self.stations_url).await?;
        normalize_stations(raw, zero_boxes)
    }
}
