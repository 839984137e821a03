use crate::{CoordinateKey, Station, NO_ADDRESS};
use std::collections::HashMap;

/// Annotates each station with the indexed name for its rounded
/// coordinates, or the `NO_ADDRESS` sentinel when the key is absent.
///
/// This is an exact-key lookup, not a nearest-match search; both sides of
/// the join round through [`CoordinateKey`] so only genuine precision
/// mismatches miss.
pub fn add_addresses(stations: &mut [Station], addresses: &HashMap<CoordinateKey, String>) {
    for station in stations.iter_mut() {
        let key = CoordinateKey::new(station.coordinates.0, station.coordinates.1);
        station.address = match addresses.get(&key) {
            Some(name) => name.clone(),
            None => NO_ADDRESS.to_string(),
        };
    }
}
