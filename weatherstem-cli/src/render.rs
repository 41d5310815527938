//! Text renderings of a normalized station record.
//!
//! The line layouts here are the program's output contract; scripts scrape
//! them. `units_block` carries a unit symbol after each figure, `lite_block`
//! is the bare-numbers view. Both end every line with a newline so blocks
//! concatenate cleanly across stations.

use std::fmt::Write as _;

use weatherstem_core::{WeatherData, WeatherUnits};

/// Conventional inches-of-mercury to millibar factor. The mbar column
/// assumes the station reports pressure in inHg.
const INHG_TO_MBAR: f64 = 33.86386;

/// Wet bulb globe temperature danger flag, in degrees Fahrenheit.
pub fn wbgt_flag(temp: f64) -> &'static str {
    if temp < 82.0 {
        " "
    } else if temp < 87.0 {
        "⚊"
    } else if temp < 90.0 {
        "⚌"
    } else if temp < 92.0 {
        "☰"
    } else {
        "⚑"
    }
}

/// The WBGT flag legend, printed for any non-flag argument.
pub fn legend() -> &'static str {
    "Current WBGT flags:
   <82°F       - normal
 ⚊ 82°F - 87°F - Level 1
 ⚌ 87°F - 90°F - Level 2
 ☰ 90°F - 92°F - Level 3
 ⚑ >92°F       - Level 4
"
}

/// Decode the handful of HTML entities the API embeds in unit symbols.
/// `&amp;` goes last so a double-escaped entity decodes one level only.
fn unescape(s: &str) -> String {
    s.replace("&deg;", "°")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&amp;", "&")
}

/// Full rendering: every figure with its unit symbol.
///
/// Pressure, sustained-wind and rain units print raw while the rest decode
/// entities; that unevenness is part of the contract.
pub fn units_block(data: &WeatherData, units: &WeatherUnits) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} ({}) {:.2}{} {}",
        data.stations[1], data.stations[0], data.distance, units.distance, data.stations[2]
    );
    let _ = writeln!(
        out,
        " T: {:.1}{} DP: {:.1}{} H: {:.1}%",
        data.temperature[0],
        unescape(&units.temperature[0]),
        data.temperature[1],
        unescape(&units.temperature[1]),
        data.humidity
    );
    let _ = writeln!(
        out,
        "WB: {:.1}{} {} WC: {:.1}{} HI: {:.1}{}",
        data.temperature[2],
        unescape(&units.temperature[2]),
        wbgt_flag(data.temperature[2]),
        data.temperature[3],
        unescape(&units.temperature[3]),
        data.temperature[4],
        unescape(&units.temperature[4])
    );
    let _ = writeln!(
        out,
        " P: {:.3}{} [{:.2}mbar] {}",
        data.pressure,
        units.pressure,
        data.pressure * INHG_TO_MBAR,
        data.pressure_trend
    );
    let _ = writeln!(
        out,
        " W: {:.1}{} {:.1}{} gust, {}{} {}",
        data.windspeed[0],
        units.windspeed[0],
        data.windspeed[1],
        unescape(&units.windspeed[1]),
        data.windspeed[2],
        unescape(&units.windspeed[2]),
        data.wind[1]
    );
    let _ = writeln!(
        out,
        " R: {:.2}{} {:.2}{}",
        data.rain[0], units.rain[0], data.rain[1], units.rain[1]
    );
    out
}

/// Lightweight rendering: bare figures, no unit symbols.
pub fn lite_block(data: &WeatherData) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} ({}) {} {}",
        data.stations[1], data.stations[0], data.stations[2], data.distance
    );
    let _ = writeln!(
        out,
        "   T: {} DP: {} H: {}",
        data.temperature[0], data.temperature[1], data.humidity
    );
    let _ = writeln!(
        out,
        "{} WB: {} WC: {} HI: {}",
        wbgt_flag(data.temperature[2]),
        data.temperature[2],
        data.temperature[3],
        data.temperature[4]
    );
    let _ = writeln!(out, "   P: {} {}", data.pressure, data.pressure_trend);
    let _ = writeln!(
        out,
        "   W: {} {} gust ({:.0}° {})",
        data.windspeed[0], data.windspeed[1], data.windspeed[2], data.wind[1]
    );
    let _ = writeln!(out, "   R: {} gauge {} rate", data.rain[0], data.rain[1]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (WeatherData, WeatherUnits) {
        let data = WeatherData {
            label: "data".to_string(),
            stations: [
                "ponceinlet".to_string(),
                "Ponce Inlet".to_string(),
                "2020-06-27 15:45:12".to_string(),
            ],
            distance: 12.5,
            temperature: [88.9, 71.2, 84.3, 88.9, 95.1],
            humidity: 56.0,
            windspeed: [4.2, 6.9, 240.0],
            wind: ["WSW".to_string(), "West-Southwest".to_string()],
            pressure: 30.01,
            pressure_trend: "Steady".to_string(),
            rain: [0.12, 0.04],
            sun: [612.0, 5.4],
            ..Default::default()
        };
        let units = WeatherUnits {
            label: "units".to_string(),
            stations: data.stations.clone(),
            distance: "NM".to_string(),
            temperature: ["&deg;F"; 5].map(String::from),
            humidity: "%".to_string(),
            windspeed: ["mph", "mph", "&deg;"].map(String::from),
            wind: [String::new(), String::new()],
            pressure: "inHg".to_string(),
            pressure_trend: String::new(),
            rain: ["\"", "\"/hr"].map(String::from),
            sun: ["W/m&sup2;", ""].map(String::from),
            ..Default::default()
        };
        (data, units)
    }

    #[test]
    fn wbgt_flag_breaks_at_the_documented_thresholds() {
        assert_eq!(wbgt_flag(75.0), " ");
        assert_eq!(wbgt_flag(81.9), " ");
        assert_eq!(wbgt_flag(82.0), "⚊");
        assert_eq!(wbgt_flag(86.9), "⚊");
        assert_eq!(wbgt_flag(87.0), "⚌");
        assert_eq!(wbgt_flag(89.9), "⚌");
        assert_eq!(wbgt_flag(90.0), "☰");
        assert_eq!(wbgt_flag(91.9), "☰");
        assert_eq!(wbgt_flag(92.0), "⚑");
        assert_eq!(wbgt_flag(104.0), "⚑");
    }

    #[test]
    fn unescape_decodes_unit_entities() {
        assert_eq!(unescape("&deg;F"), "°F");
        assert_eq!(unescape("mph"), "mph");
        assert_eq!(unescape("&lt;&gt;&quot;"), "<>\"");
        // One level only: a double-escaped degree stays an entity.
        assert_eq!(unescape("&amp;deg;"), "&deg;");
    }

    #[test]
    fn units_block_lays_out_all_six_lines() {
        let (data, units) = sample();
        let block = units_block(&data, &units);
        let lines: Vec<&str> = block.lines().collect();

        assert_eq!(
            lines,
            [
                "Ponce Inlet (ponceinlet) 12.50NM 2020-06-27 15:45:12",
                " T: 88.9°F DP: 71.2°F H: 56.0%",
                "WB: 84.3°F ⚊ WC: 88.9°F HI: 95.1°F",
                " P: 30.010inHg [1016.25mbar] Steady",
                " W: 4.2mph 6.9mph gust, 240° West-Southwest",
                " R: 0.12\" 0.04\"/hr",
            ]
        );
        assert!(block.ends_with('\n'));
    }

    #[test]
    fn lite_block_lays_out_all_six_lines() {
        let (data, _) = sample();
        let block = lite_block(&data);
        let lines: Vec<&str> = block.lines().collect();

        assert_eq!(
            lines,
            [
                "Ponce Inlet (ponceinlet) 2020-06-27 15:45:12 12.5",
                "   T: 88.9 DP: 71.2 H: 56",
                "⚊ WB: 84.3 WC: 88.9 HI: 95.1",
                "   P: 30.01 Steady",
                "   W: 4.2 6.9 gust (240° West-Southwest)",
                "   R: 0.12 gauge 0.04 rate",
            ]
        );
    }

    #[test]
    fn calm_wbgt_renders_as_a_blank_flag() {
        let (mut data, _) = sample();
        data.temperature[2] = 75.0;

        let block = lite_block(&data);
        let flag_line = block.lines().nth(2).expect("third line");
        assert_eq!(flag_line, "  WB: 75 WC: 88.9 HI: 95.1");
    }

    #[test]
    fn legend_names_every_level() {
        let legend = legend();
        assert!(legend.starts_with("Current WBGT flags:\n"));
        assert!(legend.contains("   <82°F       - normal"));
        assert!(legend.contains(" ⚊ 82°F - 87°F - Level 1"));
        assert!(legend.contains(" ⚌ 87°F - 90°F - Level 2"));
        assert!(legend.contains(" ☰ 90°F - 92°F - Level 3"));
        assert!(legend.contains(" ⚑ >92°F       - Level 4"));
        assert!(legend.ends_with('\n'));
    }
}
