//! Categories command implementation.
//!
//! The `recipedex categories` command lists categories that have recipes.

use crate::cli::args::CategoriesArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::source::RegistrySource;

/// The categories command implementation.
pub struct CategoriesCommand {
    source: RegistrySource,
    args: CategoriesArgs,
}

impl CategoriesCommand {
    /// Create a new categories command.
    pub fn new(source: RegistrySource, args: CategoriesArgs) -> Self {
        Self { source, args }
    }
}

impl Command for CategoriesCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let registry = match self.source.load_or_report(ui)? {
            Ok(registry) => registry,
            Err(result) => return Ok(result),
        };

        let categories = if self.args.uids.is_empty() {
            registry.recipe_categories()
        } else {
            registry.recipe_categories_for_uids(&self.args.uids)
        };

        if categories.is_empty() {
            ui.warning("No categories with recipes");
            return Ok(CommandResult::success());
        }

        for category in categories {
            ui.show_category(category.title(), category.uid());
            ui.message(&format!(
                "  {} recipes",
                registry.recipe_wrappers(category).len()
            ));
        }
        Ok(CommandResult::success())
    }
}
