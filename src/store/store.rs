use futures::Stream;
use tracing::debug;

use crate::config::{AnchorStyle, ClockConfig, DialStyle, GearStyle, HandStyle};

use super::Property;

/// Single source of truth for the in-progress clock configuration.
///
/// Holds one [`ClockConfig`], initialized to the defaults, and fans out
/// changes over two channels:
///
/// - the *configuration* channel fires on every mutation;
/// - the *appearance* channel fires only on hand or dial mutations.
///
/// The split keeps appearance-preview consumers — whose reaction is a
/// remote image fetch — from re-rendering when a gear or anchor choice
/// changes, since neither affects the dial preview image.
///
/// Mutations run synchronously to completion; there is exactly one logical
/// writer (the store), any number of readers. Clones share the same state.
#[derive(Clone)]
pub struct ClockStore {
    configuration: Property<ClockConfig>,
    appearance: Property<ClockConfig>,
}

impl Default for ClockStore {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl ClockStore {
    /// Creates a store holding the default configuration.
    pub fn with_defaults() -> Self {
        let config = ClockConfig::default();

        Self {
            configuration: Property::new(config.clone()),
            appearance: Property::new(config),
        }
    }

    /// Snapshot of the current configuration.
    pub fn configuration(&self) -> ClockConfig {
        self.configuration.get()
    }

    /// Watch the full configuration.
    ///
    /// Yields the current configuration immediately, then on every
    /// mutation. Never completes; drop the stream to unsubscribe.
    pub fn configuration_monitored(&self) -> impl Stream<Item = ClockConfig> + Send {
        self.configuration.watch()
    }

    /// Watch the appearance-relevant subset of changes.
    ///
    /// Same replay-of-latest semantics, but only hand and dial mutations
    /// publish here. The replayed snapshot reflects the configuration as of
    /// the last appearance-relevant mutation.
    pub fn appearance_monitored(&self) -> impl Stream<Item = ClockConfig> + Send {
        self.appearance.watch()
    }

    /// Updates the gear style. Publishes on the configuration channel.
    pub fn set_gear_style(&self, gear_style: GearStyle) {
        debug!(%gear_style, "gear style selected");
        self.configuration.update(|config| config.gear_style = gear_style);
    }

    /// Updates the anchor style. Publishes on the configuration channel.
    pub fn set_anchor_style(&self, anchor_style: AnchorStyle) {
        debug!(%anchor_style, "anchor style selected");
        self.configuration
            .update(|config| config.anchor_style = anchor_style);
    }

    /// Updates hand style, centred-second flag and outline flag as one
    /// logical change: one publish on each of the configuration and
    /// appearance channels.
    pub fn set_hands(&self, hand_style: HandStyle, centred_second: bool, outline: bool) {
        debug!(%hand_style, centred_second, outline, "hands selected");
        self.configuration.update(|config| {
            config.hand_style = hand_style;
            config.centred_second_hand = centred_second;
            config.hand_has_outline = outline;
        });
        self.appearance.set(self.configuration.get());
    }

    /// Updates the dial presence and styles as one logical change: one
    /// publish on each of the configuration and appearance channels.
    pub fn set_dial(&self, has_dial: bool, dial_style: DialStyle, seconds_style: DialStyle) {
        debug!(has_dial, %dial_style, %seconds_style, "dial selected");
        self.configuration.update(|config| {
            config.has_dial = has_dial;
            config.dial_style = dial_style;
            config.dial_seconds_style = seconds_style;
        });
        self.appearance.set(self.configuration.get());
    }
}
