//! Raw WeatherSTEM API types and the normalized record shapes.
//!
//! The API returns a JSON array with one object per station, each carrying a
//! `record` (the reading series) and a `station` (site metadata). Every
//! scalar arrives string-encoded. The raw structs default any missing key to
//! its empty value, so only a structurally wrong document (not an array of
//! station objects) is a fatal parse error.
//!
//! WeatherSTEM has had a formatting problem since June 2020: when a station
//! is "down", numeric scalars come back as numbers instead of the usual
//! strings, and the whole array fails to decode. Expect that once in a while.

use serde::{Deserialize, Serialize};

use crate::geo::Coord;

/// One station's payload: the reading series plus the site metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherInfo {
    pub record: RecordInfo,
    pub station: StationInfo,
}

/// The reading-series envelope for one station.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordInfo {
    pub readings: Vec<ReadingInfo>,
    pub last_rain_time: String,
    /// Observation timestamp for the reading series.
    pub time: String,
    pub id: String,
    pub hilo: HiloInfo,
    pub now: String,
    pub derived: u8,
    /// Present only while the station is reported down.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub down_since: Option<String>,
}

/// Site metadata for the station which recorded the series.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StationInfo {
    pub domain: DomainInfo,
    pub cameras: Vec<CameraInfo>,
    pub name: String,
    pub handle: String,
    /// Decimal-degree strings; the normalizer parses them tolerantly.
    pub lon: String,
    pub lat: String,
    pub facebook: String,
    pub twitter: String,
    pub wunderground: String,
}

/// One sensor measurement, tagged by a free-text sensor-type label.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadingInfo {
    pub id: String,
    pub sensor: String,
    pub sensor_type: String,
    pub transmitter: String,
    pub unit: String,
    pub unit_symbol: String,
    pub value: String,
}

/// A 24-hour extreme reported alongside the series, usually for temperature.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HiloInfo {
    pub name: String,
    pub min: String,
    pub max: String,
    pub min_time: String,
    pub symbol: String,
    pub max_time: String,
    pub property: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub unit: String,
}

/// The alias a station records under.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainInfo {
    pub name: String,
    pub handle: String,
}

/// Pointer to a recent image from the station camera.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraInfo {
    pub image: String,
    pub name: String,
}

/// The fixed-schema record one station's readings normalize into.
///
/// Slot positions within each group:
/// `temperature` is air, dewpoint, wet bulb globe, wind chill, heat index;
/// `windspeed` is sustained, gust, vane direction in degrees;
/// `rain` is accumulation, rate; `sun` is solar radiation, UV.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherData {
    pub label: String,
    /// Station identity: handle, display name, observation timestamp.
    pub stations: [String; 3],
    pub topo: Coord,
    pub distance: f64,
    #[serde(rename = "temp")]
    pub temperature: [f64; 5],
    pub humidity: f64,
    pub windspeed: [f64; 3],
    /// Compass pair derived from the vane direction: abbreviation, rose name.
    pub wind: [String; 2],
    pub pressure: f64,
    #[serde(rename = "ptrend")]
    pub pressure_trend: String,
    pub rain: [f64; 2],
    pub sun: [f64; 2],
}

/// Unit symbols for every [`WeatherData`] slot, in the same shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherUnits {
    pub label: String,
    pub stations: [String; 3],
    pub topo: TopoUnits,
    pub distance: String,
    #[serde(rename = "temp")]
    pub temperature: [String; 5],
    pub humidity: String,
    pub windspeed: [String; 3],
    pub wind: [String; 2],
    pub pressure: String,
    #[serde(rename = "ptrend")]
    pub pressure_trend: String,
    pub rain: [String; 2],
    pub sun: [String; 2],
}

/// Unit symbols for the station coordinate pair.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopoUnits {
    pub lat: String,
    pub lon: String,
}

/// Decode the response body: a JSON array with one entry per station.
pub fn parse_stations(body: &str) -> Result<Vec<WeatherInfo>, serde_json::Error> {
    serde_json::from_str(body)
}
