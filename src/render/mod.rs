//! URL construction for the external rendering service.
//!
//! The rendering backend is consumed purely over HTTP GET: this module
//! turns a [`ClockConfig`] into the two request URLs the service exposes,
//! and adapts the store's channels into streams of ready-to-fetch URLs for
//! preview consumers. Fetching the image — and coping with a fetch that
//! fails — is the consumer's job.

use futures::{Stream, StreamExt};

use crate::config::{ClockConfig, RenderSettings};
use crate::store::ClockStore;

/// Request-URL builder for the rendering service.
#[derive(Debug, Clone)]
pub struct RenderEndpoints {
    base_url: String,
}

impl RenderEndpoints {
    /// Creates a builder for a service rooted at `base_url`. Trailing
    /// slashes are stripped.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self { base_url }
    }

    /// URL of a full-clock render for this configuration.
    pub fn clock_url(&self, config: &ClockConfig) -> String {
        format!(
            "{}/generate_clock/clock?{}",
            self.base_url,
            config.query_string()
        )
    }

    /// URL of a dial/hand preview render for this configuration.
    pub fn dial_url(&self, config: &ClockConfig) -> String {
        format!(
            "{}/generate_clock/dial?{}",
            self.base_url,
            config.dial_query_string()
        )
    }
}

impl From<RenderSettings> for RenderEndpoints {
    fn from(settings: RenderSettings) -> Self {
        Self::new(settings.base_url)
    }
}

/// Stream of full-clock render URLs: the URL for the current configuration
/// immediately, then one per mutation.
pub fn clock_urls(
    store: &ClockStore,
    endpoints: RenderEndpoints,
) -> impl Stream<Item = String> + Send {
    store
        .configuration_monitored()
        .map(move |config| endpoints.clock_url(&config))
}

/// Stream of dial preview URLs, following the appearance channel only: a
/// gear or anchor choice does not produce a new URL here.
pub fn dial_urls(
    store: &ClockStore,
    endpoints: RenderEndpoints,
) -> impl Stream<Item = String> + Send {
    store
        .appearance_monitored()
        .map(move |config| endpoints.dial_url(&config))
}
