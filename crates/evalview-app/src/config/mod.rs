//! Configuration file parsing for evalview
//!
//! Supports `.evalview/config.toml` in the working directory, or an explicit
//! file passed on the command line.

pub mod settings;
pub mod types;

pub use settings::{init_config_dir, load_settings, load_settings_from_file};
pub use types::*;
