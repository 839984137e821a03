use crate::{add_addresses, Error, Gateway, Station, ZeroBoxesPolicy};

impl Gateway {
    /// Runs the full pipeline: fetch the feed, normalize, sort by free
    /// bikes descending with the name as tie break, then resolve and join
    /// addresses.
    ///
    /// A failed feed fetch is returned as an error; failed address lookups
    /// only leave the affected stations carrying the `NO_ADDRESS` sentinel.
    pub async fn get_annotated_stations(
        &self,
        zero_boxes: ZeroBoxesPolicy,
    ) -> Result<Vec<Station>, Error> {
        let mut stations = self.get_stations(zero_boxes).await?;

        stations.sort_by(|a, b| {
            b.free_bikes
                .cmp(&a.free_bikes)
                .then_with(|| a.name.cmp(&b.name))
        });

        let addresses = self.get_address_index(&stations).await;
        add_addresses(&mut stations, &addresses);

        Ok(stations)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Error, Gateway, ZeroBoxesPolicy, NO_ADDRESS};
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn feed() -> serde_json::Value {
        serde_json::json!([
            {
                "internal_id": 1101, "name": "Westbahnhof", "status": "aktiv",
                "free_bikes": 2, "boxes": 10, "free_boxes": 8,
                "longitude": 16.37, "latitude": 48.2
            },
            {
                "internal_id": 1102, "name": "Custozzagasse", "status": "inaktiv",
                "free_bikes": 5, "boxes": 8, "free_boxes": 2,
                "longitude": 16.422, "latitude": 48.19
            },
            {
                "internal_id": 1103, "name": "Alserbach", "status": "aktiv",
                "free_bikes": 5, "boxes": 12, "free_boxes": 6,
                "longitude": 16.351, "latitude": 48.211
            },
            {
                "internal_id": 1104, "name": "Donauinsel", "status": "aktiv",
                "free_bikes": 0, "boxes": 10, "free_boxes": 10,
                "longitude": 16.413, "latitude": 48.228
            }
        ])
    }

    fn address_body(longitude: f64, latitude: f64, name: &str) -> serde_json::Value {
        serde_json::json!({
            "data": {
                "coordinate": { "longitude": longitude, "latitude": latitude },
                "name": name
            }
        })
    }

    async fn gateway(server: &MockServer) -> Gateway {
        Gateway::with_urls(
            &format!("{}/stations", server.uri()),
            &format!("{}/nearby_address", server.uri()),
            None,
        )
        .await
        .unwrap()
    }

    async fn mount_fixture(server: &MockServer) {
        Mock::given(method("GET"))
            .and(path("/stations"))
            .respond_with(ResponseTemplate::new(200).set_body_json(feed()))
            .mount(server)
            .await;
        Mock::given(method("GET"))
            .and(path("/nearby_address"))
            .and(query_param("latitude", "48.2"))
            .and(query_param("longitude", "16.37"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(address_body(16.37, 48.2, "Europaplatz 2")),
            )
            .mount(server)
            .await;
        Mock::given(method("GET"))
            .and(path("/nearby_address"))
            .and(query_param("latitude", "48.211"))
            .and(query_param("longitude", "16.351"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(address_body(16.351, 48.211, "Alserbachstrasse 30")),
            )
            .mount(server)
            .await;
        // The third station's lookup never succeeds.
        Mock::given(method("GET"))
            .and(path("/nearby_address"))
            .and(query_param("latitude", "48.19"))
            .respond_with(ResponseTemplate::new(404))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn produces_the_sorted_annotated_station_list() {
        let server = MockServer::start().await;
        mount_fixture(&server).await;

        let gateway = gateway(&server).await;
        let stations = gateway
            .get_annotated_stations(ZeroBoxesPolicy::Fail)
            .await
            .unwrap();

        // The zero-bike station is gone; ties sort by name ascending.
        let names: Vec<&str> = stations.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Alserbach", "Custozzagasse", "Westbahnhof"]);

        assert_eq!(stations[0].address, "Alserbachstrasse 30");
        assert_eq!(stations[1].address, NO_ADDRESS);
        assert_eq!(stations[2].address, "Europaplatz 2");

        assert!(stations[0].active);
        assert!(!stations[1].active);
        assert_eq!(stations[0].free_ratio, 0.5);
        assert_eq!(stations[2].coordinates, (16.37, 48.2));
    }

    #[tokio::test]
    async fn is_idempotent_on_a_fixed_feed() {
        let server = MockServer::start().await;
        mount_fixture(&server).await;

        let gateway = gateway(&server).await;
        let first = gateway
            .get_annotated_stations(ZeroBoxesPolicy::Fail)
            .await
            .unwrap();
        let second = gateway
            .get_annotated_stations(ZeroBoxesPolicy::Fail)
            .await
            .unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn propagates_a_feed_fetch_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/stations"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let gateway = gateway(&server).await;
        let err = gateway
            .get_annotated_stations(ZeroBoxesPolicy::Fail)
            .await
            .unwrap_err();

        match err {
            Error::ApiError(status, _) => assert_eq!(status, 500),
            other => panic!("Expected ApiError, got {:?}.", other),
        }
    }
}
