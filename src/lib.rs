//! Autoclock - reactive configuration core for a parametric clock renderer.
//!
//! A user assembles a clock from closed style sets (escapement, gears,
//! anchor, hands, dial); the choices accumulate in a single
//! [`config::ClockConfig`] owned by a [`store::ClockStore`], which
//! broadcasts snapshots over two replay-of-latest channels. Preview
//! consumers turn those snapshots into render-request URLs against the
//! external image-generation service. The main features include:
//!
//! - Closed, enum-typed style sets with stable wire names
//! - Canonical name and query-string derivation from a configuration
//! - A reactive store with a full-configuration channel and a narrower
//!   appearance channel for targeted preview invalidation
//! - URL builders and URL streams for the rendering service endpoints
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use autoclock::config::GearStyle;
//! use autoclock::store::ClockStore;
//!
//! // Create a store holding the default configuration
//! let store = ClockStore::with_defaults();
//!
//! // Apply a choice and read the result
//! store.set_gear_style(GearStyle::Moons);
//! println!("{}", store.configuration().name());
//! ```

/// Clock configuration schema, style sets and deployment settings.
pub mod config;

/// Core error types and result aliases.
pub mod core;

/// URL construction for the external rendering service.
pub mod render;

/// Reactive configuration store with change notification.
pub mod store;

/// Tracing initialization.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use core::{AutoclockError, Result};
