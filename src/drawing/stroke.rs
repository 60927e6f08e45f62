use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// A canvas coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// What the UI hands over when a player lifts their pen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StrokeInput {
    pub points: Vec<Point>,
    pub width: f32,
}

impl StrokeInput {
    pub fn new(points: impl Into<Vec<Point>>, width: f32) -> Self {
        Self {
            points: points.into(),
            width,
        }
    }
}

/// A committed line, stamped with its author.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub author: PlayerId,
    pub color: String,
    pub width: f32,
    pub points: Vec<Point>,
    /// Drawing round the line was drawn in (1-based).
    pub round: u32,
}

/// Per-round drawing data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DrawingState {
    pub lines: Vector<Stroke>,
    /// 1-based drawing round.
    pub current_round: u32,
    pub max_drawing_rounds: u32,
    pub drawing_time_per_player: u32,
}

impl DrawingState {
    /// Fresh drawing state for a new game round.
    #[must_use]
    pub fn new(max_drawing_rounds: u32, drawing_time_per_player: u32) -> Self {
        Self {
            lines: Vector::new(),
            current_round: 1,
            max_drawing_rounds: max_drawing_rounds.max(1),
            drawing_time_per_player,
        }
    }

    /// Whether `author` already committed a line in the current round.
    #[must_use]
    pub fn has_line(&self, author: PlayerId) -> bool {
        self.lines
            .iter()
            .any(|l| l.author == author && l.round == self.current_round)
    }

    /// Lines drawn by `author` across all rounds.
    pub fn lines_by(&self, author: PlayerId) -> impl Iterator<Item = &Stroke> {
        self.lines.iter().filter(move |l| l.author == author)
    }
}
