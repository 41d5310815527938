//! Converts one station's string-encoded readings into the fixed schema.
//!
//! Dispatch is a flat label table rather than anything data-driven: the
//! sensor vocabulary is small and changes rarely, and the table keeps the
//! label-to-slot mapping reviewable in one screen.

use crate::compass::{RosePoints, degree_to_heading};
use crate::geo::Coord;
use crate::model::{RecordInfo, StationInfo, TopoUnits, WeatherData, WeatherUnits};
use crate::parse::parse_f64_or_zero;

/// Destination slot for one sensor-type label.
#[derive(Debug, Clone, Copy)]
enum Slot {
    Temperature(usize),
    Humidity,
    WindSpeed(usize),
    Pressure,
    PressureTrend,
    Rain(usize),
    Sun(usize),
}

/// Every sensor-type label the normalizer recognizes. Readings tagged with
/// any other label are skipped.
const SENSOR_SLOTS: [(&str, Slot); 15] = [
    ("Thermometer", Slot::Temperature(0)),
    ("Dewpoint", Slot::Temperature(1)),
    ("Wet Bulb Globe Temperature", Slot::Temperature(2)),
    ("Wind Chill", Slot::Temperature(3)),
    ("Heat Index", Slot::Temperature(4)),
    ("Hygrometer", Slot::Humidity),
    ("Anemometer", Slot::WindSpeed(0)),
    ("10 Minute Wind Gust", Slot::WindSpeed(1)),
    ("Wind Vane", Slot::WindSpeed(2)),
    ("Barometer", Slot::Pressure),
    ("Barometer Tendency", Slot::PressureTrend),
    ("Rain Gauge", Slot::Rain(0)),
    ("Rain Rate", Slot::Rain(1)),
    ("Solar Radiation Sensor", Slot::Sun(0)),
    ("UV Radiation Sensor", Slot::Sun(1)),
];

fn slot_for(sensor_type: &str) -> Option<Slot> {
    SENSOR_SLOTS
        .iter()
        .find(|(label, _)| *label == sensor_type)
        .map(|(_, slot)| *slot)
}

/// Build the fixed-schema record and its unit-symbol twin from one station's
/// raw payload.
///
/// Numeric parsing is tolerant: an unparseable value lands as zero instead
/// of failing the whole station. When a label repeats, the later reading
/// wins. A `Wind Vane` reading also refreshes the compass pair, using the
/// ornate rose names when `ornate` is set. `distance` stays zero here; the
/// caller fills it once it has picked a unit.
pub fn normalize(
    station: &StationInfo,
    record: &RecordInfo,
    ornate: bool,
) -> (WeatherData, WeatherUnits) {
    let identity = [
        station.handle.clone(),
        station.name.clone(),
        record.time.clone(),
    ];

    let mut data = WeatherData {
        label: "data".to_string(),
        stations: identity.clone(),
        topo: Coord::new(
            parse_f64_or_zero(&station.lat),
            parse_f64_or_zero(&station.lon),
        ),
        ..Default::default()
    };
    let mut units = WeatherUnits {
        label: "units".to_string(),
        stations: identity,
        topo: TopoUnits {
            lat: "&deg;".to_string(),
            lon: "&deg;".to_string(),
        },
        ..Default::default()
    };

    for reading in &record.readings {
        let Some(slot) = slot_for(&reading.sensor_type) else {
            continue;
        };
        let symbol = reading.unit_symbol.clone();
        match slot {
            Slot::Temperature(i) => {
                data.temperature[i] = parse_f64_or_zero(&reading.value);
                units.temperature[i] = symbol;
            }
            Slot::Humidity => {
                data.humidity = parse_f64_or_zero(&reading.value);
                units.humidity = symbol;
            }
            Slot::WindSpeed(i) => {
                data.windspeed[i] = parse_f64_or_zero(&reading.value);
                units.windspeed[i] = symbol;
                // The vane slot doubles as the compass heading source.
                if i == 2 {
                    let (abbr, name) =
                        degree_to_heading(data.windspeed[2], RosePoints::Sixteen, ornate);
                    data.wind = [abbr, name];
                }
            }
            Slot::Pressure => {
                data.pressure = parse_f64_or_zero(&reading.value);
                units.pressure = symbol;
            }
            Slot::PressureTrend => {
                // Categorical: the value is a word like "Steady", kept as-is.
                data.pressure_trend = reading.value.clone();
                units.pressure_trend = symbol;
            }
            Slot::Rain(i) => {
                data.rain[i] = parse_f64_or_zero(&reading.value);
                units.rain[i] = symbol;
            }
            Slot::Sun(i) => {
                data.sun[i] = parse_f64_or_zero(&reading.value);
                units.sun[i] = symbol;
            }
        }
    }

    (data, units)
}
