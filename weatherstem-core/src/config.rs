//! Loads the API user settings from the usual JSON locations.
//!
//! Resolution is two-phase: the schema version is sniffed from the raw text
//! before any structural decode, so a file written for a newer schema is
//! rejected outright instead of being half-read. Only the first candidate
//! file that can be read decides the outcome; later candidates are probed
//! when a file is absent, never as fallbacks after a bad one.

use std::fs;
use std::path::{Path, PathBuf};

use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::geo::Coord;

/// Config schema version this build expects.
pub const CONFIG_VERSION: &str = "3.0";

/// File name probed in each candidate location.
pub const CONFIG_FILE: &str = "weatherstem.json";

// Central Park. Stands in when an older config carries no usable location.
const FALLBACK_LAT: f64 = 40.7678;
const FALLBACK_LON: f64 = -73.9814;

/// Why the settings could not be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found in any of the usual locations")]
    NotFound,

    #[error("no version in config file {}", .path.display())]
    MissingVersion { path: PathBuf },

    #[error("cannot parse config file {}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("config version mismatch, {found} should be {supported}")]
    UnsupportedVersion { found: String, supported: String },
}

/// API user settings: endpoint, key, station list and observer location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub version: String,
    pub api_url: String,
    pub api_key: String,
    /// Station handles in the `station@domain.weatherstem.com` syntax.
    pub stations: Vec<String>,
    /// Where the observer is; station distances are measured from here.
    #[serde(default)]
    pub me: Coord,
}

impl Config {
    /// Probe the candidates in order and load the first readable file.
    pub fn resolve(candidates: &[PathBuf]) -> Result<Self, ConfigError> {
        for path in candidates {
            let Ok(raw) = fs::read_to_string(path) else {
                // Absent or unreadable just means the wrong location.
                continue;
            };
            debug!(path = %path.display(), "found config candidate");
            return Self::from_raw(&raw, path);
        }
        Err(ConfigError::NotFound)
    }

    /// Judge one raw config document: sniff the version, then decode.
    fn from_raw(raw: &str, path: &Path) -> Result<Self, ConfigError> {
        let Some(version) = extract_version(raw) else {
            return Err(ConfigError::MissingVersion {
                path: path.to_path_buf(),
            });
        };

        let mut config = if version == CONFIG_VERSION {
            decode(raw, path)?
        } else if version.as_str() <= CONFIG_VERSION {
            // Lexical string compare; the scheme assumes one-digit majors.
            warn!("Using a version {version} config file in a version {CONFIG_VERSION} app.");
            warn!("Version 2 added your geolocation. Your location could become NYC.");
            warn!("Version 3 uses the Aug 2020 API v1 'station@domain.weatherstem.com' syntax.");
            let mut config = decode(raw, path)?;
            if config.me.lat == 0.0 {
                config.me.lat = FALLBACK_LAT;
            }
            if config.me.lon == 0.0 {
                config.me.lon = FALLBACK_LON;
            }
            config
        } else {
            return Err(ConfigError::UnsupportedVersion {
                found: version,
                supported: CONFIG_VERSION.to_string(),
            });
        };

        config.me.calc();
        Ok(config)
    }
}

fn decode(raw: &str, path: &Path) -> Result<Config, ConfigError> {
    serde_json::from_str(raw).map_err(|source| ConfigError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}

/// Pull the version string out of the raw text without a structural parse.
/// Returns `None` when no quoted value follows a `"version"` key.
fn extract_version(raw: &str) -> Option<String> {
    let (_, after_key) = raw.split_once(r#""version""#)?;
    let (_, after_quote) = after_key.split_once('"')?;
    let (version, _) = after_quote.split_once('"')?;
    Some(version.to_string())
}

/// The usual config locations, most specific first: the working directory,
/// then a dotfile in `$HOME`, then `$HOME/.config`.
pub fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(CONFIG_FILE)];
    if let Some(dirs) = BaseDirs::new() {
        let home = dirs.home_dir();
        paths.push(home.join(format!(".{CONFIG_FILE}")));
        paths.push(home.join(".config").join(CONFIG_FILE));
    }
    paths
}
