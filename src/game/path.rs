//! Ball path: one left/right decision per level.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single bounce decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Ball stays on the same peg index.
    #[serde(rename = "L")]
    Left,
    /// Ball moves one peg to the right.
    #[serde(rename = "R")]
    Right,
}

impl Direction {
    /// Wire symbol (`L` or `R`).
    pub fn symbol(self) -> char {
        match self {
            Direction::Left => 'L',
            Direction::Right => 'R',
        }
    }
}

/// Ordered sequence of decisions, top level first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path(Vec<Direction>);

impl Path {
    /// Empty path with room for `rows` decisions.
    pub fn with_capacity(rows: usize) -> Self {
        Self(Vec::with_capacity(rows))
    }

    /// Append one decision.
    pub fn push(&mut self, direction: Direction) {
        self.0.push(direction);
    }

    /// Number of decisions.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no decision has been made.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Count of `Right` decisions, i.e. the landing bin.
    pub fn rights(&self) -> usize {
        self.0.iter().filter(|d| **d == Direction::Right).count()
    }

    /// Decisions in order.
    pub fn directions(&self) -> &[Direction] {
        &self.0
    }
}

impl From<Vec<Direction>> for Path {
    fn from(directions: Vec<Direction>) -> Self {
        Self(directions)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for direction in &self.0 {
            write!(f, "{}", direction.symbol())?;
        }
        Ok(())
    }
}
