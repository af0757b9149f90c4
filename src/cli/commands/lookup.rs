//! Lookup command implementation.
//!
//! The `recipedex lookup` command shows which categories involve an
//! ingredient and the matching recipes in each.

use crate::cli::args::LookupArgs;
use crate::error::Result;
use crate::pack::parse_ingredient;
use crate::recipe::{Focus, FocusMode};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::render::format_wrapper;
use super::source::RegistrySource;

/// The lookup command implementation.
pub struct LookupCommand {
    source: RegistrySource,
    args: LookupArgs,
}

impl LookupCommand {
    /// Create a new lookup command.
    pub fn new(source: RegistrySource, args: LookupArgs) -> Self {
        Self { source, args }
    }

    fn focus_spec(&self) -> Option<(FocusMode, &str)> {
        match (&self.args.input, &self.args.output) {
            (Some(input), _) => Some((FocusMode::Input, input.as_str())),
            (None, Some(output)) => Some((FocusMode::Output, output.as_str())),
            (None, None) => None,
        }
    }
}

impl Command for LookupCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some((mode, notation)) = self.focus_spec() else {
            ui.error("Pass an ingredient with --input or --output");
            return Ok(CommandResult::failure(2));
        };
        let ingredient = match parse_ingredient(notation) {
            Ok(ingredient) => ingredient,
            Err(e) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(2));
            }
        };

        let registry = match self.source.load_or_report(ui)? {
            Ok(registry) => registry,
            Err(result) => return Ok(result),
        };

        let focus = registry.create_focus(mode, ingredient);
        let categories: Vec<_> = registry
            .recipe_categories_for_focus(&focus)
            .into_iter()
            .filter(|c| self.args.category.as_deref().is_none_or(|uid| c.uid() == uid))
            .collect();

        if categories.is_empty() {
            ui.warning(&format!("No recipes {} {}", describe(&focus), notation));
            return Ok(CommandResult::failure(1));
        }

        for category in categories {
            ui.show_category(category.title(), category.uid());
            for wrapper in registry.recipe_wrappers_for_focus(category, &focus) {
                ui.message(&format!("  {}", format_wrapper(&wrapper)));
            }
        }
        Ok(CommandResult::success())
    }
}

fn describe(focus: &Focus) -> &'static str {
    match focus.mode() {
        FocusMode::Input => "using",
        FocusMode::Output => "making",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    const PACK: &str = r#"
categories:
  - uid: crafting
    title: Crafting
  - uid: smelting
    title: Smelting
    crafting_items: ["minecraft:furnace"]
fluid_blocks:
  "minecraft:water": water
recipes:
  - category: smelting
    inputs: ["minecraft:iron_ore"]
    outputs: ["minecraft:iron_ingot"]
  - category: smelting
    inputs: ["minecraft:sand"]
    outputs: ["minecraft:glass"]
  - category: crafting
    inputs: ["minecraft:iron_ingot", "fluid:water"]
    outputs: ["minecraft:bucket"]
"#;

    fn run(args: LookupArgs) -> (CommandResult, MockUI) {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("recipedex-pack.yml"), PACK).unwrap();
        let source = RegistrySource::new(temp.path().to_path_buf());
        let mut ui = MockUI::new();
        let result = LookupCommand::new(source, args).execute(&mut ui).unwrap();
        (result, ui)
    }

    fn input(notation: &str) -> LookupArgs {
        LookupArgs {
            input: Some(notation.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn output_lookup_finds_producers() {
        let (result, ui) = run(LookupArgs {
            output: Some("minecraft:iron_ingot".into()),
            ..Default::default()
        });
        assert!(result.success);
        assert_eq!(ui.categories().len(), 1);
        assert_eq!(ui.categories()[0].1, "smelting");
        assert!(ui.has_message("minecraft:iron_ore -> minecraft:iron_ingot"));
    }

    #[test]
    fn crafting_item_lists_every_recipe_of_its_category() {
        let (result, ui) = run(input("minecraft:furnace"));
        assert!(result.success);
        assert_eq!(ui.categories()[0].1, "smelting");
        assert_eq!(ui.messages().len(), 2);
    }

    #[test]
    fn fluid_block_looks_up_the_fluid() {
        let (_, ui) = run(input("minecraft:water"));
        assert_eq!(ui.categories().len(), 1);
        assert_eq!(ui.categories()[0].1, "crafting");
    }

    #[test]
    fn category_filter() {
        let (result, ui) = run(LookupArgs {
            input: Some("minecraft:iron_ingot".into()),
            category: Some("smelting".into()),
            ..Default::default()
        });
        assert_eq!(result.exit_code, 1);
        assert!(ui.categories().is_empty());
        assert!(ui.warnings()[0].contains("No recipes using"));
    }

    #[test]
    fn bad_notation_is_reported() {
        let (result, ui) = run(input("fluid:"));
        assert_eq!(result.exit_code, 2);
        assert!(ui.errors()[0].contains("Missing fluid name"));
    }
}
