//! Settings file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::Settings;
use crate::error::{RecipedexError, Result};

/// File names searched for settings, in order.
pub const SETTINGS_FILE_NAMES: &[&str] = &["recipedex.yml", "recipedex.yaml"];

/// Find a settings file in `dir`.
pub fn find_settings_file(dir: &Path) -> Option<PathBuf> {
    SETTINGS_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

/// Load settings from a YAML file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file does not exist and
/// `ConfigParseError` if its content is not valid settings YAML.
pub fn load_settings(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            RecipedexError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            RecipedexError::Io(e)
        }
    })?;

    parse_settings(&content, path)
}

/// Parse YAML content into Settings.
///
/// An empty document yields the defaults.
pub fn parse_settings(content: &str, source_path: &Path) -> Result<Settings> {
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }
    serde_yaml::from_str(content).map_err(|e| RecipedexError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load settings from an explicit path, or from a settings file discovered
/// in `dir`, or fall back to the defaults.
pub fn resolve_settings(explicit: Option<&Path>, dir: &Path) -> Result<Settings> {
    match explicit {
        Some(path) => load_settings(path),
        None => match find_settings_file(dir) {
            Some(path) => load_settings(&path),
            None => Ok(Settings::default()),
        },
    }
}
