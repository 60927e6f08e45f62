//! Drawing-variant turn content: strokes and the drawing-round counter.
//!
//! The engine stores strokes as data for the gallery; it never rasterizes
//! them.

mod stroke;

pub use stroke::{DrawingState, Point, Stroke, StrokeInput};
