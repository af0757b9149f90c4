//! Pack file loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{RecipedexError, Result};

use super::schema::Pack;

/// File names searched for a pack, in order.
pub const PACK_FILE_NAMES: &[&str] = &[
    "recipedex-pack.yml",
    "recipedex-pack.yaml",
    "recipedex-pack.json",
];

/// Find a pack file in `dir`.
pub fn find_pack_file(dir: &Path) -> Option<PathBuf> {
    PACK_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

/// Load a pack from a YAML (`.yml`, `.yaml`) or JSON (`.json`) file.
///
/// Files with any other extension are read as YAML.
pub fn load_pack(path: &Path) -> Result<Pack> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            RecipedexError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            RecipedexError::Io(e)
        }
    })?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let parsed = if is_json {
        serde_json::from_str(&content).map_err(|e| e.to_string())
    } else {
        serde_yaml::from_str(&content).map_err(|e| e.to_string())
    };

    parsed.map_err(|message| RecipedexError::ConfigParseError {
        path: path.to_path_buf(),
        message,
    })
}
