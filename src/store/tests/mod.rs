//! Unit tests for the store's channel semantics.

#![allow(clippy::unwrap_used)]

use std::time::Duration;

use futures::StreamExt;
use tokio::time::timeout;

use crate::config::{AnchorStyle, ClockConfig, DialStyle, GearStyle, HandStyle};
use crate::store::ClockStore;

const QUIET: Duration = Duration::from_millis(50);

#[tokio::test]
async fn configuration_replays_current_value_on_subscribe() {
    let store = ClockStore::with_defaults();

    let mut configurations = store.configuration_monitored();
    let first = configurations.next().await.unwrap();

    assert_eq!(first, ClockConfig::default());
}

#[tokio::test]
async fn appearance_replays_current_value_on_subscribe() {
    let store = ClockStore::with_defaults();

    let mut appearances = store.appearance_monitored();
    let first = appearances.next().await.unwrap();

    assert_eq!(first, ClockConfig::default());
}

#[tokio::test]
async fn late_subscriber_sees_latest_value() {
    let store = ClockStore::with_defaults();
    store.set_gear_style(GearStyle::Moons);

    let mut configurations = store.configuration_monitored();
    let first = configurations.next().await.unwrap();

    assert_eq!(first.gear_style, GearStyle::Moons);
}

#[tokio::test]
async fn gear_change_publishes_configuration_only() {
    let store = ClockStore::with_defaults();

    let mut configurations = store.configuration_monitored();
    let mut appearances = store.appearance_monitored();
    configurations.next().await.unwrap();
    appearances.next().await.unwrap();

    store.set_gear_style(GearStyle::Snowflake);

    let updated = configurations.next().await.unwrap();
    assert_eq!(updated.gear_style, GearStyle::Snowflake);

    assert!(
        timeout(QUIET, appearances.next()).await.is_err(),
        "gear changes must not wake the appearance channel"
    );
}

#[tokio::test]
async fn anchor_change_publishes_configuration_only() {
    let store = ClockStore::with_defaults();

    let mut appearances = store.appearance_monitored();
    appearances.next().await.unwrap();

    store.set_anchor_style(AnchorStyle::Curved);

    assert_eq!(store.configuration().anchor_style, AnchorStyle::Curved);
    assert!(timeout(QUIET, appearances.next()).await.is_err());
}

#[tokio::test]
async fn hands_change_publishes_both_channels() {
    let store = ClockStore::with_defaults();

    let mut configurations = store.configuration_monitored();
    let mut appearances = store.appearance_monitored();
    configurations.next().await.unwrap();
    appearances.next().await.unwrap();

    store.set_hands(HandStyle::Breguet, true, false);

    let config = configurations.next().await.unwrap();
    assert_eq!(config.hand_style, HandStyle::Breguet);

    let appearance = appearances.next().await.unwrap();
    assert_eq!(appearance.hand_style, HandStyle::Breguet);
}

#[tokio::test]
async fn hands_change_is_one_notification_cycle() {
    let store = ClockStore::with_defaults();

    let mut configurations = store.configuration_monitored();
    let mut appearances = store.appearance_monitored();
    configurations.next().await.unwrap();
    appearances.next().await.unwrap();

    store.set_hands(HandStyle::Sword, true, false);

    // All three fields land in the first emission, not across three.
    let config = configurations.next().await.unwrap();
    assert_eq!(config.hand_style, HandStyle::Sword);
    assert!(config.centred_second_hand);
    assert!(!config.hand_has_outline);

    assert!(timeout(QUIET, configurations.next()).await.is_err());
    appearances.next().await.unwrap();
    assert!(timeout(QUIET, appearances.next()).await.is_err());
}

#[tokio::test]
async fn dial_change_publishes_both_channels() {
    let store = ClockStore::with_defaults();

    let mut configurations = store.configuration_monitored();
    let mut appearances = store.appearance_monitored();
    configurations.next().await.unwrap();
    appearances.next().await.unwrap();

    store.set_dial(true, DialStyle::Roman, DialStyle::ConcentricCircles);

    let config = configurations.next().await.unwrap();
    assert!(config.has_dial);
    assert_eq!(config.dial_style, DialStyle::Roman);
    assert_eq!(config.dial_seconds_style, DialStyle::ConcentricCircles);

    let appearance = appearances.next().await.unwrap();
    assert_eq!(appearance.dial_style, DialStyle::Roman);
}

#[tokio::test]
async fn appearance_snapshot_reflects_last_appearance_mutation() {
    let store = ClockStore::with_defaults();

    store.set_hands(HandStyle::Spade, false, true);
    store.set_gear_style(GearStyle::Tree);

    // The appearance channel has not republished since the gear change.
    let mut appearances = store.appearance_monitored();
    let snapshot = appearances.next().await.unwrap();
    assert_eq!(snapshot.hand_style, HandStyle::Spade);
    assert_eq!(snapshot.gear_style, GearStyle::Arcs);

    // The full channel always carries everything.
    assert_eq!(store.configuration().gear_style, GearStyle::Tree);
}

#[test]
fn snapshot_reflects_each_mutation() {
    let store = ClockStore::with_defaults();

    store.set_gear_style(GearStyle::Cartwheel);
    store.set_anchor_style(AnchorStyle::CurvedMatchingWheel);
    store.set_hands(HandStyle::Moon, true, true);
    store.set_dial(true, DialStyle::Circles, DialStyle::LinesArc);

    let config = store.configuration();
    assert_eq!(config.gear_style, GearStyle::Cartwheel);
    assert_eq!(config.anchor_style, AnchorStyle::CurvedMatchingWheel);
    assert_eq!(config.hand_style, HandStyle::Moon);
    assert!(config.centred_second_hand);
    assert!(config.hand_has_outline);
    assert!(config.has_dial);
    assert_eq!(config.dial_style, DialStyle::Circles);
}

#[test]
fn clones_share_state() {
    let store = ClockStore::with_defaults();
    let handle = store.clone();

    handle.set_gear_style(GearStyle::Diamonds);

    assert_eq!(store.configuration().gear_style, GearStyle::Diamonds);
}

#[tokio::test]
async fn publishing_same_value_still_notifies() {
    let store = ClockStore::with_defaults();

    let mut configurations = store.configuration_monitored();
    configurations.next().await.unwrap();

    // Re-selecting the already-current gear is still a mutation cycle.
    store.set_gear_style(GearStyle::Arcs);
    configurations.next().await.unwrap();
}

#[tokio::test]
async fn dropped_subscriptions_are_released() {
    let store = ClockStore::with_defaults();

    {
        let _configurations = store.configuration_monitored();
        let _appearances = store.appearance_monitored();
    }

    // Mutating after subscribers have gone must not fail or wedge.
    store.set_gear_style(GearStyle::Flower);
    store.set_hands(HandStyle::Arrows, false, false);

    let mut configurations = store.configuration_monitored();
    let config = configurations.next().await.unwrap();
    assert_eq!(config.gear_style, GearStyle::Flower);
}
