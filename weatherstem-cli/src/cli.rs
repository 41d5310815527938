use anyhow::{Context, Result};
use clap::Parser;
use weatherstem_core::{
    Config, ConfigError, Coord, StationSource, WebSource, candidate_paths,
    geo::{distance_km, distance_mi, distance_nm},
    normalize, parse_stations,
};

use crate::render;

/// What a starter config should look like, shown when none is found.
const EXAMPLE_CONFIG: &str = r#"{"version":"3.0","api_url":"https://api.weatherstem.com/api","api_key":"yourApiKey","stations":["station1@domain.weatherstem.com","stationX@domain.weatherstem.com"],"me":{"lat":43.14,"lon":-111.275}}"#;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weatherstem", version, about = "Local WeatherSTEM stations at a glance")]
pub struct Cli {
    /// Output cooked data as JSON
    #[arg(long)]
    pub json: bool,

    /// Output station distances in kilometers
    #[arg(long)]
    pub kilo: bool,

    /// Output station distances in statute miles
    #[arg(long)]
    pub mile: bool,

    /// Output lightweight cooked data
    #[arg(long)]
    pub lite: bool,

    /// Output original API results
    #[arg(long)]
    pub orig: bool,

    /// Output ornate compass rose directions
    #[arg(long)]
    pub rose: bool,

    /// Any extra argument prints the WBGT flag legend instead
    #[arg(hide = true)]
    pub legend: Vec<String>,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        if !self.legend.is_empty() {
            print!("{}", render::legend());
            return Ok(());
        }

        let config = match Config::resolve(&candidate_paths()) {
            Ok(config) => config,
            Err(err) => {
                if matches!(err, ConfigError::NotFound) {
                    eprintln!(
                        "Config file not found. It should look like this and be in \
                         'weatherstem.json', either in the current or in your $HOME/.config \
                         directory."
                    );
                    eprintln!("{EXAMPLE_CONFIG}");
                }
                return Err(err.into());
            }
        };

        let source = WebSource::from_config(&config)?;
        let body = source.fetch_raw().await.context("Call to API failed")?;

        let stations = parse_stations(&body)
            .with_context(|| format!("Cannot unmarshal API results: {}", truncate_body(&body)))?;

        for info in &stations {
            if self.orig {
                println!("{}", serde_json::to_string(info)?);
                continue;
            }

            let (mut data, mut units) = normalize(&info.station, &info.record, self.rose);
            let (distance, unit) = self.station_distance(&config.me, &data.topo);
            data.distance = distance;
            units.distance = unit.to_string();

            if self.json {
                println!("{}", serde_json::to_string(&data)?);
                println!("{}", serde_json::to_string(&units)?);
            } else if self.lite {
                print!("{}", render::lite_block(&data));
            } else {
                print!("{}", render::units_block(&data, &units));
            }
        }

        Ok(())
    }

    /// Distance from the observer to a station, in the unit the flags chose.
    fn station_distance(&self, me: &Coord, topo: &Coord) -> (f64, &'static str) {
        if self.kilo {
            (distance_km(me, topo), "km")
        } else if self.mile {
            (distance_mi(me, topo), "mi")
        } else {
            (distance_nm(me, topo), "NM")
        }
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        // The cap may fall inside a multi-byte character; back off to a boundary.
        let mut cut = MAX;
        while !body.is_char_boundary(cut) {
            cut -= 1;
        }
        format!("{}...", &body[..cut])
    } else {
        body.to_string()
    }
}
