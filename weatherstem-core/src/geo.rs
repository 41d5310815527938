//! Great-circle geometry for station coordinates.
//!
//! The API reports station positions as decimal-degree strings and the
//! operator supplies their own position in the config file. Distances are
//! haversine values on the mean Earth radius, offered in the three units the
//! CLI can print.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0088;

/// Kilometers per statute mile.
const KM_PER_MILE: f64 = 1.609_344;

/// Kilometers per nautical mile.
const KM_PER_NM: f64 = 1.852;

/// A geographic coordinate in decimal degrees, plus its derived radian form.
///
/// Only `lat`/`lon` are part of the wire format. Call [`Coord::calc`] after
/// deserializing (or build with [`Coord::new`]) before asking for distances.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Coord {
    pub lat: f64,
    pub lon: f64,
    #[serde(skip)]
    pub lat_rad: f64,
    #[serde(skip)]
    pub lon_rad: f64,
}

impl Coord {
    /// A coordinate with the radian form already derived.
    pub fn new(lat: f64, lon: f64) -> Self {
        let mut coord = Coord {
            lat,
            lon,
            ..Default::default()
        };
        coord.calc();
        coord
    }

    /// Derive the radian form of the coordinate.
    pub fn calc(&mut self) {
        self.lat_rad = self.lat.to_radians();
        self.lon_rad = self.lon.to_radians();
    }
}

/// Haversine great-circle distance in kilometers.
///
/// Both coordinates must carry their derived radian form.
pub fn distance_km(a: &Coord, b: &Coord) -> f64 {
    let dlat = b.lat_rad - a.lat_rad;
    let dlon = b.lon_rad - a.lon_rad;

    let h = (dlat / 2.0).sin().powi(2)
        + a.lat_rad.cos() * b.lat_rad.cos() * (dlon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

/// Great-circle distance in statute miles.
pub fn distance_mi(a: &Coord, b: &Coord) -> f64 {
    distance_km(a, b) / KM_PER_MILE
}

/// Great-circle distance in nautical miles.
pub fn distance_nm(a: &Coord, b: &Coord) -> f64 {
    distance_km(a, b) / KM_PER_NM
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calc_derives_radians() {
        let mut coord = Coord {
            lat: 90.0,
            lon: -180.0,
            ..Default::default()
        };
        coord.calc();

        assert!((coord.lat_rad - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert!((coord.lon_rad + std::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn new_is_equivalent_to_calc() {
        let mut manual = Coord {
            lat: 29.13,
            lon: -80.95,
            ..Default::default()
        };
        manual.calc();

        assert_eq!(Coord::new(29.13, -80.95), manual);
    }

    #[test]
    fn distance_to_self_is_zero() {
        let here = Coord::new(40.7678, -73.9814);
        assert_eq!(distance_km(&here, &here), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Coord::new(29.13, -80.95);
        let b = Coord::new(29.0, -81.3);
        assert!((distance_km(&a, &b) - distance_km(&b, &a)).abs() < 1e-9);
    }

    #[test]
    fn one_degree_of_equatorial_longitude() {
        let origin = Coord::new(0.0, 0.0);
        let east = Coord::new(0.0, 1.0);

        // 2 * pi * R / 360
        assert!((distance_km(&origin, &east) - 111.195).abs() < 0.01);
    }

    #[test]
    fn unit_conversions_stay_in_ratio() {
        let a = Coord::new(29.13, -80.95);
        let b = Coord::new(28.08, -80.6);
        let km = distance_km(&a, &b);

        assert!((distance_mi(&a, &b) - km / 1.609_344).abs() < 1e-9);
        assert!((distance_nm(&a, &b) - km / 1.852).abs() < 1e-9);
        assert!(distance_nm(&a, &b) < distance_mi(&a, &b));
        assert!(distance_mi(&a, &b) < km);
    }
}
