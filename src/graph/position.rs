//! 2D position of a node

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A 2D position with x and y coordinates
///
/// Coordinates are finite. Missing, `null` or non-finite coordinates become
/// `0.0`, so a snapshot always reads back.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    #[serde(default, deserialize_with = "coordinate")]
    pub x: f64,
    #[serde(default, deserialize_with = "coordinate")]
    pub y: f64,
}

fn finite(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

fn coordinate<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.map_or(0.0, finite))
}

impl Position {
    /// Create a position; NaN and infinite coordinates become `0.0`
    pub fn new(x: f64, y: f64) -> Self {
        Position {
            x: finite(x),
            y: finite(y),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position(x={}, y={})", self.x, self.y)
    }
}

impl From<(f64, f64)> for Position {
    fn from((x, y): (f64, f64)) -> Self {
        Position::new(x, y)
    }
}
