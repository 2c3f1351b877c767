//! Configuration parsing for wf-kill
//!
//! This crate parses the KDL configuration of the compositor-side view
//! picker: which cursor to show while grabbing, which button selects a view,
//! and whether the selected view is asked to close.

mod error;
mod model;
mod parser;

pub use error::ConfigError;
pub use model::*;
pub use parser::{load_config, parse_button, parse_config, parse_config_str};
