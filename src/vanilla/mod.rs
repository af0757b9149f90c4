//! Built-in ingredient types.
//!
//! Item stacks and fluid stacks are the two ingredient types every content
//! pack can use. Their helpers define how the index keys them:
//!
//! - [`items`] - [`ItemStack`] and [`ItemStackHelper`]
//! - [`fluids`] - [`FluidStack`], [`FluidStackHelper`] and the [`FluidBlocks`] table

pub mod fluids;
pub mod items;

pub use fluids::{FluidBlocks, FluidStack, FluidStackHelper, BUCKET_VOLUME};
pub use items::{ItemStack, ItemStackHelper, WILDCARD_META};

use crate::ingredient::IngredientRegistry;

/// An ingredient registry with the built-in item and fluid helpers.
pub fn default_ingredient_registry(items: ItemStackHelper) -> IngredientRegistry {
    IngredientRegistry::new()
        .with::<ItemStack, _>(items)
        .with::<FluidStack, _>(FluidStackHelper)
}

/// Turn a registry name such as `minecraft:iron_ore` into `Iron Ore`.
pub(crate) fn display_name_from_id(id: &str) -> String {
    let path = id.rsplit(':').next().unwrap_or(id);
    path.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// The namespace of a registry name, defaulting to `minecraft`.
pub(crate) fn namespace_of(id: &str) -> String {
    match id.split_once(':') {
        Some((namespace, _)) if !namespace.is_empty() => namespace.to_string(),
        _ => "minecraft".to_string(),
    }
}
