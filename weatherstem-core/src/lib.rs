//! Core library for the `weatherstem` CLI.
//!
//! This crate defines:
//! - Config discovery, version gating and migration
//! - The raw WeatherSTEM API model and its fixed-schema normalized form
//! - Station payload sources (live API, saved files)
//! - Great-circle distances and compass headings
//!
//! It is used by `weatherstem-cli`, but can also be reused by other binaries or services.

pub mod compass;
pub mod config;
pub mod geo;
pub mod model;
pub mod normalize;
pub mod parse;
pub mod source;

pub use compass::{RosePoints, degree_to_heading};
pub use config::{CONFIG_VERSION, Config, ConfigError, candidate_paths};
pub use geo::{Coord, distance_km, distance_mi, distance_nm};
pub use model::{WeatherData, WeatherInfo, WeatherUnits, parse_stations};
pub use normalize::normalize;
pub use source::{FileSource, StationSource, WebSource};
