//! Output styling.

use console::Style;

/// Styles for each kind of output line.
#[derive(Debug, Clone)]
pub struct RecipedexTheme {
    pub success: Style,
    pub warning: Style,
    pub error: Style,
    /// Category titles and header text.
    pub highlight: Style,
    /// The header glyph.
    pub header: Style,
    /// Category UIDs.
    pub category: Style,
    pub hint: Style,
}

impl Default for RecipedexTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl RecipedexTheme {
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            highlight: Style::new().bold(),
            header: Style::new().bold().magenta(),
            category: Style::new().cyan(),
            hint: Style::new().magenta().dim(),
        }
    }

    /// Unstyled output, used when colors are off.
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
            category: Style::new(),
            hint: Style::new(),
        }
    }

    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    pub fn format_hint(&self, msg: &str) -> String {
        format!("{}", self.hint.apply_to(msg))
    }

    /// `◆` followed by the title.
    pub fn format_header(&self, title: &str) -> String {
        format!(
            "{} {}",
            self.header.apply_to("◆"),
            self.highlight.apply_to(title)
        )
    }

    /// Format a category line: title followed by its UID.
    pub fn format_category(&self, title: &str, uid: &str) -> String {
        format!(
            "{} {}",
            self.highlight.apply_to(title),
            self.category.apply_to(format!("({})", uid))
        )
    }
}

/// Colors are on for a terminal stdout unless `NO_COLOR` is set.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
