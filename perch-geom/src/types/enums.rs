use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Edge of the trigger the content is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Top,
    #[default]
    Bottom,
    Left,
    Right,
}

impl Side {
    pub const fn opposite(self) -> Self {
        match self {
            Side::Top => Side::Bottom,
            Side::Bottom => Side::Top,
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Axis this side pushes content along.
    pub const fn axis(self) -> Axis {
        match self {
            Side::Top | Side::Bottom => Axis::Vertical,
            Side::Left | Side::Right => Axis::Horizontal,
        }
    }

    /// Next side going clockwise (top, right, bottom, left).
    pub const fn clockwise(self) -> Self {
        match self {
            Side::Top => Side::Right,
            Side::Right => Side::Bottom,
            Side::Bottom => Side::Left,
            Side::Left => Side::Top,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Bottom => "bottom",
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub const fn cross(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}

/// Cross-axis position of the content relative to the trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Start,
    #[default]
    Center,
    End,
}

/// A `(side, alignment)` pair.
///
/// Parses from and prints as `"bottom"`, `"top-start"`, `"left-end"`; a bare
/// side means center alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Placement {
    pub side: Side,
    pub alignment: Alignment,
}

impl Placement {
    pub const fn new(side: Side, alignment: Alignment) -> Self {
        Self { side, alignment }
    }

    pub const fn top() -> Self {
        Self::new(Side::Top, Alignment::Center)
    }

    pub const fn bottom() -> Self {
        Self::new(Side::Bottom, Alignment::Center)
    }

    pub const fn left() -> Self {
        Self::new(Side::Left, Alignment::Center)
    }

    pub const fn right() -> Self {
        Self::new(Side::Right, Alignment::Center)
    }

    pub const fn with_alignment(self, alignment: Alignment) -> Self {
        Self { alignment, ..self }
    }

    /// Same alignment on the opposite side.
    pub const fn flipped(self) -> Self {
        Self {
            side: self.side.opposite(),
            alignment: self.alignment,
        }
    }

    /// Default fallback order: the opposite side first, then the two
    /// remaining sides clockwise from the opposite. Alignment is kept.
    pub fn default_fallbacks(self) -> Vec<Placement> {
        let opposite = self.side.opposite();
        let mut order = vec![opposite];
        let mut next = opposite.clockwise();
        while order.len() < 3 {
            if next != self.side {
                order.push(next);
            }
            next = next.clockwise();
        }
        order
            .into_iter()
            .map(|side| Placement::new(side, self.alignment))
            .collect()
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.alignment {
            Alignment::Center => f.write_str(self.side.as_str()),
            Alignment::Start => write!(f, "{}-start", self.side.as_str()),
            Alignment::End => write!(f, "{}-end", self.side.as_str()),
        }
    }
}

/// Error returned when a placement string is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid placement '{0}' (expected e.g. 'bottom', 'top-start', 'left-end')")]
pub struct ParsePlacementError(pub String);

impl FromStr for Placement {
    type Err = ParsePlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        let (side, alignment) = match normalized.split_once('-') {
            Some((side, alignment)) => (side, Some(alignment)),
            None => (normalized.as_str(), None),
        };

        let side = match side {
            "top" => Side::Top,
            "bottom" => Side::Bottom,
            "left" => Side::Left,
            "right" => Side::Right,
            _ => return Err(ParsePlacementError(s.to_string())),
        };

        let alignment = match alignment {
            None | Some("center") => Alignment::Center,
            Some("start") => Alignment::Start,
            Some("end") => Alignment::End,
            Some(_) => return Err(ParsePlacementError(s.to_string())),
        };

        Ok(Placement::new(side, alignment))
    }
}

impl TryFrom<String> for Placement {
    type Error = ParsePlacementError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Placement> for String {
    fn from(placement: Placement) -> Self {
        placement.to_string()
    }
}
