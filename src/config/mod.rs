//! Settings for recipedex.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use recipedex::config::load_settings;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let path = temp.path().join("recipedex.yml");
//! fs::write(&path, "slow_lookup_threshold_ms: 50").unwrap();
//!
//! let settings = load_settings(&path).unwrap();
//! assert_eq!(settings.slow_lookup_threshold_ms, 50);
//! assert!(!settings.debug_mode);
//! ```

pub mod loader;
pub mod schema;

pub use loader::{
    find_settings_file, load_settings, parse_settings, resolve_settings, SETTINGS_FILE_NAMES,
};
pub use schema::Settings;
