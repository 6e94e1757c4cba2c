//! Core library for the `meteo` weather tool.
//!
//! This crate defines:
//! - Resolution of a city name into a display-ready [`WeatherSummary`]
//! - WMO weather-code classification, hour alignment and sun progress
//! - The HTTP fetch capability and the Open-Meteo endpoints
//! - Configuration handling
//!
//! It is used by `meteo-cli`, but can also be reused by other front-ends.

pub mod align;
pub mod classify;
pub mod config;
pub mod error;
pub mod locale;
pub mod model;
pub mod notify;
pub mod provider;
pub mod resolver;
pub mod sun;

pub use classify::{Band, Condition, Gradient, classify};
pub use config::{Config, Endpoints};
pub use error::{ResolveError, TransportError};
pub use locale::Language;
pub use model::{DayItem, HourItem, Place, RawForecast, WeatherSummary};
pub use notify::BackgroundChannel;
pub use provider::{HttpFetch, ReqwestFetch};
pub use resolver::{Resolver, derive_summary, resolver_from_config};
pub use sun::SunColor;
