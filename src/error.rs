//! Error types for recipedex operations.
//!
//! This module defines [`RecipedexError`], the error type returned by
//! registry construction, configuration and pack loading, and a [`Result`]
//! type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `RecipedexError` for failures the caller must handle (setup, I/O)
//! - Extension code (handlers, wrappers, plugins) returns `anyhow::Result`
//! - Per-recipe failures never surface here; they are reported through
//!   [`crate::registry::AddOutcome`] and [`crate::registry::LoadReport`]

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for recipedex operations.
#[derive(Debug, Error)]
pub enum RecipedexError {
    /// No ingredient helper is registered for this ingredient type.
    #[error("No ingredient helper registered for ingredient type: {type_name}")]
    UnknownIngredientType { type_name: String },

    /// A category UID was referenced that was never registered.
    #[error("Unknown recipe category: {uid}")]
    UnknownCategory { uid: String },

    /// Two categories were registered under the same UID.
    #[error("A recipe category is already registered for uid: {uid}")]
    DuplicateCategory { uid: String },

    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse a configuration or pack file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// A content pack is structurally invalid.
    #[error("Invalid content pack: {message}")]
    PackValidationError { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for recipedex operations.
pub type Result<T> = std::result::Result<T, RecipedexError>;

/// Signals a recipe whose structure is malformed, such as a shaped grid
/// whose dimensions disagree with its ingredient list.
///
/// Handlers and wrappers return this inside an `anyhow::Error`; the registry
/// recognises it by downcasting and logs it separately from generic crashes.
#[derive(Debug, Error)]
#[error("Broken crafting recipe: {message}")]
pub struct BrokenCraftingRecipe {
    pub message: String,
}

impl BrokenCraftingRecipe {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_ingredient_type_displays_name() {
        let err = RecipedexError::UnknownIngredientType {
            type_name: "my_mod::Gas".into(),
        };
        assert!(err.to_string().contains("my_mod::Gas"));
    }

    #[test]
    fn unknown_category_displays_uid() {
        let err = RecipedexError::UnknownCategory {
            uid: "minecraft.smelting".into(),
        };
        assert!(err.to_string().contains("minecraft.smelting"));
    }

    #[test]
    fn duplicate_category_displays_uid() {
        let err = RecipedexError::DuplicateCategory {
            uid: "minecraft.crafting".into(),
        };
        assert!(err.to_string().contains("minecraft.crafting"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = RecipedexError::ConfigParseError {
            path: PathBuf::from("/settings.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/settings.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: RecipedexError = io_err.into();
        assert!(matches!(err, RecipedexError::Io(_)));
    }

    #[test]
    fn broken_recipe_survives_anyhow_round_trip() {
        let err = anyhow::Error::new(BrokenCraftingRecipe::new("3x3 grid with 4 inputs"));
        let broken = err.downcast_ref::<BrokenCraftingRecipe>().unwrap();
        assert_eq!(broken.message, "3x3 grid with 4 inputs");
        assert!(err.to_string().contains("3x3 grid"));
    }
}
