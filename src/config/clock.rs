use serde::{Deserialize, Serialize};

use crate::core::{AutoclockError, Result};

use super::types::{AnchorStyle, DialStyle, Escapement, GearStyle, HandStyle};

/// One complete clock configuration.
///
/// Value object with plain value semantics: every field always holds a
/// value (the defaults below), there is no unset state. The store owns the
/// single live instance; everything else works on snapshots delivered
/// through the store's channels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// Escapement mechanism type. Not exposed through the configurator,
    /// but part of a configuration's identity.
    pub escapement: Escapement,
    /// Cutout style of the going-train gears.
    pub gear_style: GearStyle,
    /// Visual style of the escapement anchor.
    pub anchor_style: AnchorStyle,
    /// Pendulum period in seconds, typically 1.5 or 2.
    pub pendulum_period_s: f64,
    /// Run duration between windings, in days.
    pub days: u32,
    /// Whether the second hand sits on the centre arbor.
    pub centred_second_hand: bool,
    /// Whether the clock has a dial at all.
    pub has_dial: bool,
    /// Style of the main dial face.
    pub dial_style: DialStyle,
    /// Style of the seconds sub-dial. Only meaningful when `has_dial` is
    /// set and the pendulum period is 1.5 or 2 (the trains that drive a
    /// second hand).
    pub dial_seconds_style: DialStyle,
    /// Style of the hands.
    pub hand_style: HandStyle,
    /// Whether the hands are printed with a contrasting outline.
    pub hand_has_outline: bool,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            escapement: Escapement::Deadbeat,
            gear_style: GearStyle::Arcs,
            anchor_style: AnchorStyle::Straight,
            pendulum_period_s: 2.0,
            days: 8,
            centred_second_hand: false,
            has_dial: false,
            dial_style: DialStyle::LinesArc,
            dial_seconds_style: DialStyle::LinesArc,
            hand_style: HandStyle::SimpleRound,
            hand_has_outline: true,
        }
    }
}

impl ClockConfig {
    /// Whether this train drives a second hand. True for the 1.5s and 2s
    /// pendulum periods only.
    pub fn has_seconds_hand(&self) -> bool {
        self.pendulum_period_s == 1.5 || self.pendulum_period_s == 2.0
    }

    /// Derives the canonical, human-readable name for this configuration.
    ///
    /// Pure function of the fields: equal configurations always produce the
    /// identical string. Informational only — render requests are built from
    /// [`ClockConfig::query_string`], never from the name.
    pub fn name(&self) -> String {
        let mut dial_style_string = String::new();
        if self.has_dial {
            dial_style_string = format!("_{}", self.dial_style);
            if self.has_seconds_hand() {
                dial_style_string.push_str(&format!("_{}", self.dial_seconds_style));
            }
        }

        format!(
            "autoclock_{period}s_{days}day{centred_second}_{dial}{dial_style}_{gear}_{anchor}_{hands}",
            period = self.pendulum_period_s,
            days = self.days,
            centred_second = if self.centred_second_hand {
                "centred_second"
            } else {
                ""
            },
            dial = if self.has_dial { "dial" } else { "nodial" },
            dial_style = dial_style_string,
            gear = self.gear_style,
            anchor = self.anchor_style,
            hands = format!(
                "{}{}",
                self.hand_style,
                if self.hand_has_outline { "_outline" } else { "" }
            ),
        )
    }

    /// The wire parameters for a full-clock render request, in the fixed
    /// order the rendering service documents.
    ///
    /// The service takes the anchor under the `escapement_style` key — the
    /// anchor is the escapement's visible part. The mechanism type itself
    /// has no wire parameter; it never varies through the configurator.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("pendulum_period_s", self.pendulum_period_s.to_string()),
            ("days", self.days.to_string()),
            (
                "centred_second_hand",
                self.centred_second_hand.to_string(),
            ),
            ("has_dial", self.has_dial.to_string()),
            ("dial_style", self.dial_style.to_string()),
            ("dial_seconds_style", self.dial_seconds_style.to_string()),
            ("gear_style", self.gear_style.to_string()),
            ("hand_style", self.hand_style.to_string()),
            ("hand_has_outline", self.hand_has_outline.to_string()),
            ("escapement_style", self.anchor_style.to_string()),
        ]
    }

    /// The wire parameters for a dial/hand preview request: only the fields
    /// that change the preview image. Gear, anchor, period and run duration
    /// are deliberately absent.
    pub fn dial_query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            (
                "centred_second_hand",
                self.centred_second_hand.to_string(),
            ),
            ("dial_style", self.dial_style.to_string()),
            ("dial_seconds_style", self.dial_seconds_style.to_string()),
            ("hand_style", self.hand_style.to_string()),
            ("hand_has_outline", self.hand_has_outline.to_string()),
        ]
    }

    /// Derives the query string for a full-clock render request.
    ///
    /// Pure function of the fields, fixed field order.
    pub fn query_string(&self) -> String {
        join_pairs(&self.query_pairs())
    }

    /// Derives the query string for a dial/hand preview request.
    pub fn dial_query_string(&self) -> String {
        join_pairs(&self.dial_query_pairs())
    }

    /// Rebuilds a configuration from a raw query string.
    ///
    /// A leading `?` is tolerated; an empty query yields the defaults.
    ///
    /// # Errors
    /// Returns [`AutoclockError::MalformedQueryPair`] for components without
    /// a `=`, and the parse errors of [`ClockConfig::from_query_pairs`].
    pub fn from_query_str(query: &str) -> Result<Self> {
        let query = query.strip_prefix('?').unwrap_or(query);
        if query.is_empty() {
            return Ok(Self::default());
        }

        let pairs = query
            .split('&')
            .map(|component| {
                component
                    .split_once('=')
                    .ok_or_else(|| AutoclockError::MalformedQueryPair {
                        pair: component.to_string(),
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        Self::from_query_pairs(pairs)
    }

    /// Rebuilds a configuration from parsed `key=value` pairs, overlaying
    /// them on the defaults. Unknown keys are ignored — the rendering
    /// service does the same.
    ///
    /// Round-trips with [`ClockConfig::query_string`] for every
    /// configuration reachable through the store.
    ///
    /// # Errors
    /// Returns [`AutoclockError::UnknownStyle`] for a style value outside
    /// its closed set and [`AutoclockError::InvalidParameter`] for a
    /// numeric or boolean value that fails to parse.
    pub fn from_query_pairs<'a>(
        pairs: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self> {
        let mut config = Self::default();

        for (key, value) in pairs {
            match key {
                "pendulum_period_s" => {
                    config.pendulum_period_s = parse_number("pendulum_period_s", value)?;
                }
                "days" => config.days = parse_number("days", value)?,
                "centred_second_hand" => {
                    config.centred_second_hand = parse_bool("centred_second_hand", value)?;
                }
                "has_dial" => config.has_dial = parse_bool("has_dial", value)?,
                "dial_style" => config.dial_style = value.parse()?,
                "dial_seconds_style" => config.dial_seconds_style = value.parse()?,
                "gear_style" => config.gear_style = value.parse()?,
                "hand_style" => config.hand_style = value.parse()?,
                "hand_has_outline" => {
                    config.hand_has_outline = parse_bool("hand_has_outline", value)?;
                }
                "escapement_style" => config.anchor_style = value.parse()?,
                _ => {}
            }
        }

        Ok(config)
    }
}

fn join_pairs(pairs: &[(&'static str, String)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&")
}

fn parse_number<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    value
        .parse()
        .map_err(|e: T::Err| AutoclockError::InvalidParameter {
            key,
            value: value.to_string(),
            details: e.to_string(),
        })
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(AutoclockError::InvalidParameter {
            key,
            value: value.to_string(),
            details: "expected 'true' or 'false'".to_string(),
        }),
    }
}
