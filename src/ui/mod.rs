//! Terminal output components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for terminal usage and [`MockUI`] for tests
//! - [`LoadProgress`], the progress scope around bulk recipe loads

pub mod mock;
pub mod progress;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use progress::{format_duration, LoadProgress};
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, RecipedexTheme};

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show results and status lines.
    #[default]
    Normal,
    /// Show results and errors only.
    Quiet,
}

impl OutputMode {
    /// Whether status lines (headers, successes, warnings, hints) are shown.
    pub fn shows_status(self) -> bool {
        matches!(self, OutputMode::Normal)
    }
}

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a result line. Shown in every mode.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Show a recipe category.
    fn show_category(&mut self, title: &str, uid: &str);

    /// Show a contextual hint.
    fn show_hint(&mut self, hint: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_mode_default_is_normal() {
        assert_eq!(OutputMode::default(), OutputMode::Normal);
    }

    #[test]
    fn quiet_hides_status() {
        assert!(OutputMode::Normal.shows_status());
        assert!(!OutputMode::Quiet.shows_status());
    }
}
