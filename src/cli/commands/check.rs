//! Check command implementation.
//!
//! The `recipedex check` command loads the pack and prints how each recipe
//! fared.

use crate::cli::args::CheckArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::source::RegistrySource;

/// The check command implementation.
pub struct CheckCommand {
    source: RegistrySource,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(source: RegistrySource, args: CheckArgs) -> Self {
        Self { source, args }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let registry = match self.source.load_or_report(ui)? {
            Ok(registry) => registry,
            Err(result) => return Ok(result),
        };
        let report = registry.load_report();

        ui.show_header("Pack check");
        ui.message(&report.to_string());

        for class in &report.unhandled_classes {
            ui.warning(&format!("No handler for recipe class {}", class.name()));
        }
        for failure in &report.failures {
            ui.error(&failure.to_string());
        }

        let categories = registry.recipe_categories();
        ui.message(&format!(
            "{} of {} categories have recipes",
            categories.len(),
            registry.index().categories().count()
        ));

        if !report.is_clean() {
            return Ok(CommandResult::failure(1));
        }
        if self.args.strict && report.unhandled > 0 {
            return Ok(CommandResult::failure(1));
        }

        ui.success("Pack loaded cleanly");
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn source_with(pack: &str) -> (TempDir, RegistrySource) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("recipedex-pack.yml");
        fs::write(&path, pack).unwrap();
        let source = RegistrySource::new(temp.path().to_path_buf());
        (temp, source)
    }

    #[test]
    fn clean_pack_succeeds() {
        let (_temp, source) = source_with(
            r#"
categories:
  - uid: smelting
    title: Smelting
recipes:
  - category: smelting
    inputs: ["minecraft:iron_ore"]
    outputs: ["minecraft:iron_ingot"]
"#,
        );
        let mut ui = MockUI::new();
        let result = CheckCommand::new(source, CheckArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        assert!(ui.has_message("Added 1 recipes"));
        assert!(ui.has_message("1 of 1 categories have recipes"));
    }

    #[test]
    fn unknown_category_fails() {
        let (_temp, source) = source_with(
            r#"
recipes:
  - category: nowhere
    inputs: ["minecraft:sand"]
    outputs: ["minecraft:glass"]
"#,
        );
        let mut ui = MockUI::new();
        let result = CheckCommand::new(source, CheckArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(ui.errors()[0].contains("unregistered category"));
        assert!(ui.errors()[0].contains("nowhere"));
    }
}
