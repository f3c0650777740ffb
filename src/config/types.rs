use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::AutoclockError;

/// Escapement mechanism type.
///
/// The mechanism regulating timekeeping. Only the deadbeat escapement is
/// selectable through the configurator; the field is still part of a
/// configuration's identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Escapement {
    /// Deadbeat anchor escapement
    Deadbeat,
    /// Recoil escapement
    Recoil,
    /// Grasshopper escapement
    Grasshopper,
}

impl Escapement {
    /// Every escapement mechanism, in presentation order.
    pub const ALL: [Escapement; 3] = [
        Escapement::Deadbeat,
        Escapement::Recoil,
        Escapement::Grasshopper,
    ];

    /// Wire name of this mechanism (the literal variant name).
    pub fn as_str(&self) -> &'static str {
        match self {
            Escapement::Deadbeat => "DEADBEAT",
            Escapement::Recoil => "RECOIL",
            Escapement::Grasshopper => "GRASSHOPPER",
        }
    }
}

impl fmt::Display for Escapement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Escapement {
    type Err = AutoclockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|escapement| escapement.as_str() == s)
            .copied()
            .ok_or_else(|| AutoclockError::UnknownStyle {
                kind: "escapement",
                value: s.to_string(),
            })
    }
}

/// Visual cutout style for the gears of the going train.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GearStyle {
    /// No cutouts at all
    Solid,
    /// Semicircular arcs between the spokes
    Arcs,
    /// Steeper, non-semicircular arcs
    Arcs2,
    /// Punched-out circles with smaller circles between
    Circles,
    /// Only the rims of a ring of circles
    CirclesHollow,
    /// Circles with crescent-moon variations
    Moons,
    /// Four plain spokes
    Simple4,
    /// Five plain spokes
    Simple5,
    /// Thin radial spokes
    Spokes,
    /// Steam locomotive driving wheel
    Steamtrain,
    /// Cartwheel with curved spokes
    Cartwheel,
    /// Flower petal cutouts
    Flower,
    /// Honeycomb lattice
    Honeycomb,
    /// Honeycomb lattice with smaller cells
    HoneycombSmall,
    /// Pseudorandom snowflake branches
    Snowflake,
    /// Flowing curved arms
    Curves,
    /// Diamond lattice
    Diamonds,
    /// Branching tree structure
    Tree,
}

impl GearStyle {
    /// Every selectable gear style, in presentation order.
    pub const ALL: [GearStyle; 18] = [
        GearStyle::Solid,
        GearStyle::Arcs,
        GearStyle::Arcs2,
        GearStyle::Circles,
        GearStyle::CirclesHollow,
        GearStyle::Moons,
        GearStyle::Simple4,
        GearStyle::Simple5,
        GearStyle::Spokes,
        GearStyle::Steamtrain,
        GearStyle::Cartwheel,
        GearStyle::Flower,
        GearStyle::Honeycomb,
        GearStyle::HoneycombSmall,
        GearStyle::Snowflake,
        GearStyle::Curves,
        GearStyle::Diamonds,
        GearStyle::Tree,
    ];

    /// Wire name of this style (the literal variant name).
    pub fn as_str(&self) -> &'static str {
        match self {
            GearStyle::Solid => "SOLID",
            GearStyle::Arcs => "ARCS",
            GearStyle::Arcs2 => "ARCS2",
            GearStyle::Circles => "CIRCLES",
            GearStyle::CirclesHollow => "CIRCLES_HOLLOW",
            GearStyle::Moons => "MOONS",
            GearStyle::Simple4 => "SIMPLE4",
            GearStyle::Simple5 => "SIMPLE5",
            GearStyle::Spokes => "SPOKES",
            GearStyle::Steamtrain => "STEAMTRAIN",
            GearStyle::Cartwheel => "CARTWHEEL",
            GearStyle::Flower => "FLOWER",
            GearStyle::Honeycomb => "HONEYCOMB",
            GearStyle::HoneycombSmall => "HONEYCOMB_SMALL",
            GearStyle::Snowflake => "SNOWFLAKE",
            GearStyle::Curves => "CURVES",
            GearStyle::Diamonds => "DIAMONDS",
            GearStyle::Tree => "TREE",
        }
    }
}

impl fmt::Display for GearStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GearStyle {
    type Err = AutoclockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|style| style.as_str() == s)
            .copied()
            .ok_or_else(|| AutoclockError::UnknownStyle {
                kind: "gear style",
                value: s.to_string(),
            })
    }
}

/// Visual style of the escapement anchor arms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnchorStyle {
    /// Straight arms
    Straight,
    /// Curved arms
    Curved,
    /// Curved arms with a radius matching the escape wheel
    CurvedMatchingWheel,
}

impl AnchorStyle {
    /// Every selectable anchor style, in presentation order.
    pub const ALL: [AnchorStyle; 3] = [
        AnchorStyle::Straight,
        AnchorStyle::Curved,
        AnchorStyle::CurvedMatchingWheel,
    ];

    /// Wire name of this style (the literal variant name).
    pub fn as_str(&self) -> &'static str {
        match self {
            AnchorStyle::Straight => "STRAIGHT",
            AnchorStyle::Curved => "CURVED",
            AnchorStyle::CurvedMatchingWheel => "CURVED_MATCHING_WHEEL",
        }
    }
}

impl fmt::Display for AnchorStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnchorStyle {
    type Err = AutoclockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|style| style.as_str() == s)
            .copied()
            .ok_or_else(|| AutoclockError::UnknownStyle {
                kind: "anchor style",
                value: s.to_string(),
            })
    }
}

/// Visual style of the dial face and of the seconds sub-dial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DialStyle {
    /// Wedge-shaped minute lines around an arc
    LinesArc,
    /// Roman numerals
    Roman,
    /// Two concentric circles joined along the spokes
    ConcentricCircles,
    /// A circle per marker
    Circles,
    /// Tony the Clock face
    TonyTheClock,
}

impl DialStyle {
    /// Every selectable dial style, in presentation order.
    pub const ALL: [DialStyle; 5] = [
        DialStyle::LinesArc,
        DialStyle::Roman,
        DialStyle::ConcentricCircles,
        DialStyle::Circles,
        DialStyle::TonyTheClock,
    ];

    /// Wire name of this style (the literal variant name).
    pub fn as_str(&self) -> &'static str {
        match self {
            DialStyle::LinesArc => "LINES_ARC",
            DialStyle::Roman => "ROMAN",
            DialStyle::ConcentricCircles => "CONCENTRIC_CIRCLES",
            DialStyle::Circles => "CIRCLES",
            DialStyle::TonyTheClock => "TONY_THE_CLOCK",
        }
    }
}

impl fmt::Display for DialStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DialStyle {
    type Err = AutoclockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|style| style.as_str() == s)
            .copied()
            .ok_or_else(|| AutoclockError::UnknownStyle {
                kind: "dial style",
                value: s.to_string(),
            })
    }
}

/// Visual style of the hour, minute and second hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HandStyle {
    /// Plain rectangular hands
    Square,
    /// Simple tapering hands
    Simple,
    /// Simple hands with rounded ends
    SimpleRound,
    /// Cuckoo-clock carved hands
    Cuckoo,
    /// Spade-tipped hands
    Spade,
    /// Breguet hands with a single circle on each
    Breguet,
    /// Syringe-shaped hands
    Syringe,
    /// Sword-shaped hands
    Sword,
    /// Hands built from chained circles
    Circles,
    /// Christmas tree hands
    XmasTree,
    /// Ornate baroque hands
    Baroque,
    /// Arrow-tipped hands
    Arrows,
    /// Moon-tipped hands
    Moon,
}

impl HandStyle {
    /// Every selectable hand style, in presentation order.
    pub const ALL: [HandStyle; 13] = [
        HandStyle::Square,
        HandStyle::Simple,
        HandStyle::SimpleRound,
        HandStyle::Cuckoo,
        HandStyle::Spade,
        HandStyle::Breguet,
        HandStyle::Syringe,
        HandStyle::Sword,
        HandStyle::Circles,
        HandStyle::XmasTree,
        HandStyle::Baroque,
        HandStyle::Arrows,
        HandStyle::Moon,
    ];

    /// Wire name of this style (the literal variant name).
    pub fn as_str(&self) -> &'static str {
        match self {
            HandStyle::Square => "SQUARE",
            HandStyle::Simple => "SIMPLE",
            HandStyle::SimpleRound => "SIMPLE_ROUND",
            HandStyle::Cuckoo => "CUCKOO",
            HandStyle::Spade => "SPADE",
            HandStyle::Breguet => "BREGUET",
            HandStyle::Syringe => "SYRINGE",
            HandStyle::Sword => "SWORD",
            HandStyle::Circles => "CIRCLES",
            HandStyle::XmasTree => "XMAS_TREE",
            HandStyle::Baroque => "BAROQUE",
            HandStyle::Arrows => "ARROWS",
            HandStyle::Moon => "MOON",
        }
    }
}

impl fmt::Display for HandStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HandStyle {
    type Err = AutoclockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|style| style.as_str() == s)
            .copied()
            .ok_or_else(|| AutoclockError::UnknownStyle {
                kind: "hand style",
                value: s.to_string(),
            })
    }
}
