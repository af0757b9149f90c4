//! The plugin backed by the registry's own index.

use crate::recipe::{Focus, FocusMode, RecipeCategory, WrapperHandle};
use crate::registry::RecipeIndex;

use super::RegistryPlugin;

/// Answers lookups from the input and output recipe maps.
///
/// Output focus consults the output map. Input focus consults the input map,
/// which also carries the crafting-item links, so a furnace focus reaches
/// smelting even though no smelting recipe consumes a furnace.
#[derive(Debug, Default, Clone, Copy)]
pub struct InternalRecipePlugin;

impl RegistryPlugin for InternalRecipePlugin {
    fn category_uids(&self, index: &RecipeIndex, focus: &Focus) -> anyhow::Result<Vec<String>> {
        let map = match focus.mode() {
            FocusMode::Input => index.input_map(),
            FocusMode::Output => index.output_map(),
        };
        Ok(map.categories_for_ingredient(focus.value())?)
    }

    fn wrappers(
        &self,
        index: &RecipeIndex,
        category: &RecipeCategory,
    ) -> anyhow::Result<Vec<WrapperHandle>> {
        Ok(index.wrappers_for_category(category))
    }

    fn wrappers_for_focus(
        &self,
        index: &RecipeIndex,
        category: &RecipeCategory,
        focus: &Focus,
    ) -> anyhow::Result<Vec<WrapperHandle>> {
        let (mut matching, rest): (Vec<WrapperHandle>, Vec<WrapperHandle>) = index
            .wrappers_for_category(category)
            .into_iter()
            .partition(|wrapper| index.wrapper_matches(wrapper, focus));

        // A crafting item gives access to the whole category.
        if focus.mode() == FocusMode::Input && index.is_crafting_item(category.uid(), focus.value())
        {
            matching.extend(rest);
        }
        Ok(matching)
    }

    fn name(&self) -> &str {
        "internal"
    }
}
