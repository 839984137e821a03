use crate::{Error, RawStation, Station, NO_ADDRESS};

/// What to do with a feed record whose `boxes` count is zero, which would
/// make the free-box ratio a division by zero.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ZeroBoxesPolicy {
    /// Drop the record and continue.
    Skip,
    /// Abort normalization with `Error::ZeroCapacity`.
    Fail,
}

/// Reshapes feed records into canonical stations.
///
/// Records without free bikes are dropped. `status == "aktiv"` becomes
/// `active`, the free-box ratio is computed, and the coordinate pair is
/// assembled as `(longitude, latitude)`. The feed's `internal_id` and
/// `status` are not carried over. Input order is preserved.
pub fn normalize_stations(
    raw: Vec<RawStation>,
    zero_boxes: ZeroBoxesPolicy,
) -> Result<Vec<Station>, Error> {
    let mut stations = vec![];
    for station in raw {
        if station.free_bikes == 0 {
            continue;
        }

        if station.boxes == 0 {
            match zero_boxes {
                ZeroBoxesPolicy::Skip => {
                    println!("Skipping station \"{}\" with zero boxes.", station.name);
                    continue;
                }
                ZeroBoxesPolicy::Fail => {
                    return Err(Error::ZeroCapacity(format!(
                        "Station \"{}\" has zero boxes.",
                        station.name
                    )));
                }
            }
        }

        stations.push(Station {
            free_ratio: station.free_boxes as f64 / station.boxes as f64,
            active: station.status == "aktiv",
            coordinates: (station.longitude, station.latitude),
            name: station.name,
            free_bikes: station.free_bikes,
            boxes: station.boxes,
            free_boxes: station.free_boxes,
            address: NO_ADDRESS.to_string(),
        });
    }

    Ok(stations)
}
