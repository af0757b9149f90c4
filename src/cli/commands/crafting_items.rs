//! Crafting items command implementation.
//!
//! The `recipedex crafting-items` command shows the machines and workbenches
//! of a category.

use crate::cli::args::CraftingItemsArgs;
use crate::error::Result;
use crate::pack::{format_ingredient, parse_ingredient};
use crate::recipe::FocusMode;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::source::RegistrySource;

/// The crafting items command implementation.
pub struct CraftingItemsCommand {
    source: RegistrySource,
    args: CraftingItemsArgs,
}

impl CraftingItemsCommand {
    /// Create a new crafting items command.
    pub fn new(source: RegistrySource, args: CraftingItemsArgs) -> Self {
        Self { source, args }
    }
}

impl Command for CraftingItemsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let focus_value = match self.args.input.as_deref().map(parse_ingredient).transpose() {
            Ok(value) => value,
            Err(e) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(2));
            }
        };

        let registry = match self.source.load_or_report(ui)? {
            Ok(registry) => registry,
            Err(result) => return Ok(result),
        };

        let Some(category) = registry.recipe_category(&self.args.category) else {
            ui.error(&format!("Unknown recipe category: {}", self.args.category));
            return Ok(CommandResult::failure(2));
        };

        let focus = focus_value.map(|value| registry.create_focus(FocusMode::Input, value));
        let items = registry.crafting_items(category, focus.as_ref());

        ui.show_category(category.title(), category.uid());
        if items.is_empty() {
            ui.show_hint("This category has no crafting items");
        }
        for item in &items {
            ui.message(&format!("  {}", format_ingredient(item)));
        }
        Ok(CommandResult::success())
    }
}
