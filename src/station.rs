use serde::{Deserialize, Serialize};

/// Address assigned to a station whose rounded coordinates have no entry in
/// the address index.
pub const NO_ADDRESS: &str = "Does not match coordinates";

/// One element of the wegfinder station feed, as served.
#[derive(Deserialize, Debug, Clone)]
pub struct RawStation {
    pub name: String,

    pub status: String,

    pub free_bikes: u32,

    pub boxes: u32,

    pub free_boxes: u32,

    pub longitude: f64,

    pub latitude: f64,

    /// Opaque feed identifier, dropped during normalization.
    #[serde(default)]
    pub internal_id: serde_json::Value,
}

/// A bike-sharing station with its availability figures and, after the
/// address join, a human-readable location.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Station {
    pub name: String,

    pub free_bikes: u32,

    pub boxes: u32,

    pub free_boxes: u32,

    pub active: bool,

    pub free_ratio: f64,

    /// `(longitude, latitude)` in degrees; serializes as a two-element
    /// array.
    pub coordinates: (f64, f64),

    pub address: String,
}
