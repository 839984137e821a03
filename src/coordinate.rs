/// A geographic coordinate pair rounded to three decimal places, stored as
/// integer millidegrees so it can serve as an exact hash-map key.
///
/// This is the join key between the station feed and the geocoder: both
/// sides round to the same precision in the same `(longitude, latitude)`
/// order. Coordinates near a half-millidegree boundary can still land on
/// different keys; such misses are accepted and surface as the
/// `NO_ADDRESS` sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CoordinateKey {
    pub millidegrees_longitude: i64,

    pub millidegrees_latitude: i64,
}

impl CoordinateKey {
    pub fn new(longitude: f64, latitude: f64) -> CoordinateKey {
        CoordinateKey {
            millidegrees_longitude: (longitude * 1000.0).round() as i64,
            millidegrees_latitude: (latitude * 1000.0).round() as i64,
        }
    }
}

/// Rounds to three decimal places, the precision of [`CoordinateKey`].
pub(crate) fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
