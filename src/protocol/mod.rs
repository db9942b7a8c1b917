//! GSI protocol handling.
//!
//! This module implements parsing and serialization for the GSI (Go Scoring
//! Interface) protocol: text board diagrams, JSON positions and results, and
//! the command parser for the main loop.

pub mod diagram;
pub mod json;
pub mod parser;

pub use diagram::{encode_diagram, format_classification, parse_diagram, DiagramError};
pub use json::{encode_position_json, format_classification_json, parse_position_json, JsonError};
pub use parser::{parse_command, Command};
