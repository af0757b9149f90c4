//! Declarative content packs.
//!
//! A pack describes categories, crafting items, item subtypes, fluid blocks
//! and recipes in YAML or JSON. [`Pack::into_registry`] turns it into a
//! ready [`RecipeRegistry`] whose recipes are [`PackRecipe`]s handled by
//! [`PackRecipeHandler`].
//!
//! - [`schema`] - The serde schema of a pack file
//! - [`loader`] - Reading packs from disk
//! - [`notation`] - The `item@meta` / `fluid:name` ingredient notation
//! - [`recipe`] - Pack recipes, their wrapper and handler
//!
//! # Example
//!
//! ```
//! use recipedex::config::Settings;
//! use recipedex::pack::Pack;
//! use recipedex::recipe::Focus;
//! use recipedex::vanilla::ItemStack;
//!
//! let pack: Pack = serde_yaml::from_str(r#"
//! categories:
//!   - uid: smelting
//!     title: Smelting
//!     crafting_items: ["minecraft:furnace"]
//! recipes:
//!   - category: smelting
//!     inputs: ["minecraft:iron_ore"]
//!     outputs: ["minecraft:iron_ingot"]
//! "#).unwrap();
//!
//! let registry = pack.into_registry(Settings::default()).unwrap();
//! let focus = Focus::input(ItemStack::new("minecraft:furnace"));
//! assert_eq!(registry.recipe_categories_for_focus(&focus)[0].uid(), "smelting");
//! ```

pub mod loader;
pub mod notation;
pub mod recipe;
pub mod schema;

use std::sync::Arc;

use crate::config::Settings;
use crate::error::Result;
use crate::ingredient::IngredientGroup;
use crate::recipe::{Recipe, RecipeCategory};
use crate::registry::{
    RecipeClickableArea, RecipeRegistry, SlotRangeTransfer, UNIVERSAL_RECIPE_TRANSFER_UID,
};
use crate::vanilla::{default_ingredient_registry, FluidBlocks, ItemStackHelper};

pub use loader::{find_pack_file, load_pack, PACK_FILE_NAMES};
pub use notation::{format_ingredient, parse_ingredient};
pub use recipe::{PackRecipe, PackRecipeHandler, PackRecipeWrapper, PACK_RECIPE, SHAPED_PACK_RECIPE};
pub use schema::{
    Pack, PackCategory, PackClickableArea, PackIngredient, PackRecipeDef, PackSlot, PackTransfer,
};

impl Pack {
    /// The recipes of this pack as registry input, in declaration order.
    ///
    /// # Errors
    ///
    /// Fails with `PackValidationError` on malformed ingredient notation.
    pub fn recipe_values(&self) -> Result<Vec<Arc<dyn Recipe>>> {
        self.recipes
            .iter()
            .map(|def| {
                let mut recipe = PackRecipe::new(def.category.clone())
                    .with_inputs(groups(&def.inputs)?)
                    .with_outputs(groups(&def.outputs)?);
                recipe.id = def.id.clone();
                if let Some([width, height]) = def.shape {
                    recipe = recipe.with_shape(width, height);
                }
                Ok(Arc::new(recipe) as Arc<dyn Recipe>)
            })
            .collect()
    }

    /// Build a registry holding this pack's content.
    ///
    /// Malformed notation and setup mistakes fail the whole pack. Problems
    /// with individual recipes, such as an unknown category or a ragged
    /// shaped grid, only drop that recipe and show up in the registry's
    /// load report.
    pub fn into_registry(self, settings: Settings) -> Result<RecipeRegistry> {
        let recipes = self.recipe_values()?;

        let mut items = ItemStackHelper::new();
        for (item, metas) in self.subtypes {
            items = items.with_subtypes(item, metas);
        }

        let mut fluid_blocks = FluidBlocks::new();
        for (block, fluid) in self.fluid_blocks {
            fluid_blocks.insert(block, fluid);
        }

        let mut builder = RecipeRegistry::builder(default_ingredient_registry(items))
            .settings(settings)
            .handler(Arc::new(PackRecipeHandler))
            .fluid_blocks(fluid_blocks);

        for category in self.categories {
            let mut registered = RecipeCategory::new(category.uid.clone(), category.title);
            if let Some(mod_name) = category.mod_name {
                registered = registered.with_mod_name(mod_name);
            }
            builder = builder.category(registered);
            for item in &category.crafting_items {
                builder = builder.crafting_item(category.uid.clone(), item.to_ingredient()?);
            }
        }

        for transfer in self.transfers {
            let uid = transfer
                .category
                .unwrap_or_else(|| UNIVERSAL_RECIPE_TRANSFER_UID.to_string());
            let handler = SlotRangeTransfer::new(
                transfer.container,
                (transfer.recipe_slots[0], transfer.recipe_slots[1]),
                (transfer.inventory_slots[0], transfer.inventory_slots[1]),
            );
            builder = builder.transfer_handler(uid, Arc::new(handler));
        }

        for area in self.clickable_areas {
            builder = builder.clickable_area(
                area.container,
                RecipeClickableArea::new(
                    area.top,
                    area.left,
                    area.bottom,
                    area.right,
                    area.categories,
                ),
            );
        }

        builder.recipes(recipes).build()
    }
}

fn groups(slots: &[PackSlot]) -> Result<Vec<IngredientGroup>> {
    slots.iter().map(PackSlot::to_group).collect()
}
