//! Settings parser for .evalview/config.toml

use super::types::Settings;
use evalview_core::prelude::*;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.toml";
const EVALVIEW_DIR: &str = ".evalview";

/// Load settings from `<base>/.evalview/config.toml`
///
/// Returns defaults when the file is missing, unreadable or invalid.
pub fn load_settings(base_path: &Path) -> Settings {
    load_settings_from_file(&base_path.join(EVALVIEW_DIR).join(CONFIG_FILENAME))
}

/// Load settings from an explicit config file path
pub fn load_settings_from_file(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Create a default config file in `.evalview/`
///
/// An existing config file is left untouched.
pub fn init_config_dir(base_path: &Path) -> Result<()> {
    let evalview_dir = base_path.join(EVALVIEW_DIR);

    if !evalview_dir.exists() {
        std::fs::create_dir_all(&evalview_dir)
            .map_err(|e| Error::config(format!("Failed to create .evalview dir: {}", e)))?;
    }

    let config_path = evalview_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        let default_content = r#"# evalview configuration

[catalog]
results_dir = "results"     # Directory holding <timestamp>/results.json

[ui]
preview_width = 40              # File preview width in columns
default_markdown_view = "raw"   # "raw" or "rendered"
default_json_pane = "summary_diff"  # summary_diff, full_diff, ground_truth, predicted, schema
show_run_details = false

[behavior]
browser = ""                # Empty = system default
"#;
        std::fs::write(&config_path, default_content)
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
        info!("Created default config at {:?}", config_path);
    }

    Ok(())
}
