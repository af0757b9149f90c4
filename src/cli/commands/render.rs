//! Text rendering of recipes for command output.

use crate::ingredient::IngredientGroup;
use crate::pack::format_ingredient;
use crate::recipe::{Ingredients, WrapperHandle};

/// One slot: alternatives joined by `|`.
pub fn format_group(group: &IngredientGroup) -> String {
    group
        .iter()
        .map(format_ingredient)
        .collect::<Vec<_>>()
        .join(" | ")
}

fn format_groups(groups: &[IngredientGroup]) -> String {
    if groups.is_empty() {
        return "nothing".to_string();
    }
    groups.iter().map(format_group).collect::<Vec<_>>().join(", ")
}

/// `inputs -> outputs` for a wrapper, or the wrapper's error.
pub fn format_wrapper(wrapper: &WrapperHandle) -> String {
    let mut ingredients = Ingredients::new();
    match wrapper.ingredients(&mut ingredients) {
        Ok(()) => format!(
            "{} -> {}",
            format_groups(ingredients.inputs()),
            format_groups(ingredients.outputs())
        ),
        Err(e) => format!("<unreadable recipe: {}>", e),
    }
}
