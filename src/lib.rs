//! evalview Library
//!
//! Terminal review of OCR and extraction evaluation runs. The binary parses
//! arguments; everything else lives in the workspace crates re-exported
//! here.

use std::path::{Path, PathBuf};

use evalview_app::config::{self, Settings};
use evalview_catalog::FsCatalog;
use evalview_core::prelude::*;

pub use evalview_app as app;
pub use evalview_catalog as catalog;
pub use evalview_core as core;
pub use evalview_tui as tui;

/// Where to read results and settings from
#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    /// Base directory for relative paths and `.evalview/`
    pub base_path: PathBuf,
    /// Results directory given on the command line
    pub results_dir: Option<PathBuf>,
    /// Explicit config file, instead of `.evalview/config.toml`
    pub config_path: Option<PathBuf>,
}

/// Load settings for a launch
pub fn load_settings(options: &LaunchOptions) -> Settings {
    match &options.config_path {
        Some(path) => config::load_settings_from_file(path),
        None => config::load_settings(&options.base_path),
    }
}

/// Pick the results directory
///
/// A directory named on the command line must exist. The configured default
/// may be missing; the review screen then reports that no results exist.
pub fn resolve_results_dir(options: &LaunchOptions, settings: &Settings) -> Result<PathBuf> {
    match &options.results_dir {
        Some(dir) => {
            let dir = options.base_path.join(dir);
            if dir.is_dir() {
                Ok(dir)
            } else {
                Err(Error::ResultsDirNotFound { path: dir })
            }
        }
        None => Ok(options.base_path.join(&settings.catalog.results_dir)),
    }
}

/// Write a default `.evalview/config.toml` under `base_path`
pub fn init_config(base_path: &Path) -> Result<()> {
    config::init_config_dir(base_path)
}

/// Run the review TUI
pub async fn run(options: LaunchOptions) -> Result<()> {
    // Initialize logging (to file, since the TUI owns stdout)
    evalview_core::logging::init()?;

    let settings = load_settings(&options);
    let results_dir = resolve_results_dir(&options, &settings)?;
    info!("Results directory: {}", results_dir.display());

    let result = evalview_tui::run(FsCatalog::new(results_dir), settings).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("evalview exiting");
    result
}
