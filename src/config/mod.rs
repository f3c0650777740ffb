//! Clock configuration schema and derivations.
//!
//! Defines the closed style sets a clock can be assembled from, the
//! [`ClockConfig`] value object with its canonical name and query-string
//! derivations, and TOML-backed deployment [`Settings`].

mod clock;
mod settings;
mod types;


pub use clock::ClockConfig;
pub use settings::{RenderSettings, Settings};
pub use types::{AnchorStyle, DialStyle, Escapement, GearStyle, HandStyle};
