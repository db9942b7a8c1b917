//! Board representation.
//!
//! Contains stone colors, the per-point `Grid` container, the validated
//! `Position` snapshot, and the eight grid symmetries.

pub mod color;
pub mod grid;
pub mod position;
pub mod symmetry;

pub use color::{Color, ALL_COLORS};
pub use grid::{Grid, Loc};
pub use position::{BoardError, Position};
pub use symmetry::Symmetry;
