//! Config domain: loader for the RON settings file.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::SettingsDef;

/// Error type for settings loading failures.
#[derive(Debug)]
pub struct SettingsLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for SettingsLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Load the settings file from disk.
pub fn load_settings(path: &Path) -> Result<SettingsDef, SettingsLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| SettingsLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_settings(&contents).map_err(|message| SettingsLoadError {
        file: file_name,
        message,
    })
}

/// Parse settings from RON text. Omitted sections and fields keep their
/// defaults.
pub fn parse_settings(contents: &str) -> Result<SettingsDef, String> {
    ron_options()
        .from_str(contents)
        .map_err(|e| format!("Parse error: {}", e))
}
