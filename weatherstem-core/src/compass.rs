//! Compass-rose headings for wind direction.
//!
//! Converts a wind-vane bearing in degrees into a cardinal abbreviation and
//! a rose name. Two namings are offered: the standard English points and the
//! ornate names of the historical Mediterranean rose.

/// How finely a bearing is bucketed onto the rose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosePoints {
    Four,
    Eight,
    Sixteen,
}

impl RosePoints {
    fn count(self) -> usize {
        match self {
            RosePoints::Four => 4,
            RosePoints::Eight => 8,
            RosePoints::Sixteen => 16,
        }
    }
}

const ABBREVIATIONS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

const STANDARD_NAMES: [&str; 16] = [
    "North",
    "North-Northeast",
    "Northeast",
    "East-Northeast",
    "East",
    "East-Southeast",
    "Southeast",
    "South-Southeast",
    "South",
    "South-Southwest",
    "Southwest",
    "West-Southwest",
    "West",
    "West-Northwest",
    "Northwest",
    "North-Northwest",
];

/// The eight classical winds and their half-winds.
const ORNATE_NAMES: [&str; 16] = [
    "Tramontana",
    "Greco-Tramontana",
    "Greco",
    "Greco-Levante",
    "Levante",
    "Levante-Scirocco",
    "Scirocco",
    "Ostro-Scirocco",
    "Ostro",
    "Ostro-Libeccio",
    "Libeccio",
    "Ponente-Libeccio",
    "Ponente",
    "Maestro-Ponente",
    "Maestro",
    "Maestro-Tramontana",
];

/// Convert a bearing to its rose abbreviation and name.
///
/// Bearings outside `[0, 360)` wrap. `ornate` selects the historical
/// Mediterranean naming instead of the standard English one.
pub fn degree_to_heading(degrees: f64, points: RosePoints, ornate: bool) -> (String, String) {
    let count = points.count();
    let index = sector(degrees, count) * (16 / count);

    let name = if ornate {
        ORNATE_NAMES[index]
    } else {
        STANDARD_NAMES[index]
    };

    (ABBREVIATIONS[index].to_string(), name.to_string())
}

/// Sector index on a `count`-point rose, nearest point wins.
fn sector(degrees: f64, count: usize) -> usize {
    let mut wrapped = degrees % 360.0;
    if wrapped < 0.0 {
        wrapped += 360.0;
    }

    let width = 360.0 / count as f64;
    ((wrapped / width).round() as usize) % count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cardinal_points() {
        assert_eq!(
            degree_to_heading(0.0, RosePoints::Sixteen, false),
            ("N".to_string(), "North".to_string())
        );
        assert_eq!(
            degree_to_heading(90.0, RosePoints::Sixteen, false),
            ("E".to_string(), "East".to_string())
        );
        assert_eq!(
            degree_to_heading(180.0, RosePoints::Sixteen, false),
            ("S".to_string(), "South".to_string())
        );
        assert_eq!(
            degree_to_heading(270.0, RosePoints::Sixteen, false),
            ("W".to_string(), "West".to_string())
        );
    }

    #[test]
    fn sixteen_point_boundaries() {
        // Sector width is 22.5 degrees; the switchover is at the half-width.
        assert_eq!(degree_to_heading(11.2, RosePoints::Sixteen, false).0, "N");
        assert_eq!(degree_to_heading(11.3, RosePoints::Sixteen, false).0, "NNE");
        assert_eq!(degree_to_heading(22.5, RosePoints::Sixteen, false).0, "NNE");
        assert_eq!(degree_to_heading(33.8, RosePoints::Sixteen, false).0, "NE");
        assert_eq!(
            degree_to_heading(348.7, RosePoints::Sixteen, false).0,
            "NNW"
        );
        assert_eq!(degree_to_heading(348.8, RosePoints::Sixteen, false).0, "N");
    }

    #[test]
    fn bearings_wrap() {
        assert_eq!(degree_to_heading(360.0, RosePoints::Sixteen, false).0, "N");
        assert_eq!(degree_to_heading(450.0, RosePoints::Sixteen, false).0, "E");
        assert_eq!(degree_to_heading(-90.0, RosePoints::Sixteen, false).0, "W");
    }

    #[test]
    fn ornate_naming() {
        assert_eq!(
            degree_to_heading(0.0, RosePoints::Sixteen, true),
            ("N".to_string(), "Tramontana".to_string())
        );
        assert_eq!(
            degree_to_heading(45.0, RosePoints::Sixteen, true),
            ("NE".to_string(), "Greco".to_string())
        );
        assert_eq!(
            degree_to_heading(202.5, RosePoints::Sixteen, true),
            ("SSW".to_string(), "Ostro-Libeccio".to_string())
        );
    }

    #[test]
    fn coarser_roses_round_to_their_points() {
        // 30 degrees is NNE on sixteen points but NE on eight and N on four.
        assert_eq!(degree_to_heading(30.0, RosePoints::Sixteen, false).0, "NNE");
        assert_eq!(degree_to_heading(30.0, RosePoints::Eight, false).0, "NE");
        assert_eq!(degree_to_heading(30.0, RosePoints::Four, false).0, "N");
    }
}
