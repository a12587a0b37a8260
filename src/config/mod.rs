//!
//! This module defines configuration structures and loading logic for glossort.
//! Settings come from an optional `.glossort.toml`, discovered upward from the
//! working directory, and are overridden by command-line flags.

pub mod types;
pub use types::*;

mod loading;
pub use loading::discover_config_upward;

mod parsers;
