//! Registry construction.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::config::Settings;
use crate::error::{RecipedexError, Result};
use crate::ingredient::{Ingredient, IngredientRegistry};
use crate::plugin::{PluginChain, RegistryPlugin};
use crate::recipe::{HandlerResolver, Recipe, RecipeCategory, RecipeHandler};
use crate::vanilla::FluidBlocks;

use super::{
    LoadReport, RecipeClickableArea, RecipeIndex, RecipeRegistry, RecipeTransferHandler,
    TransferHandlers,
};

/// Collects everything a [`RecipeRegistry`] is built from.
///
/// Categories, handlers, plugins, transfer handlers and clickable areas keep
/// their registration order. Recipes given here are added after everything
/// else is in place, and their [`LoadReport`] is kept on the registry.
pub struct RecipeRegistryBuilder {
    ingredients: IngredientRegistry,
    settings: Settings,
    categories: Vec<RecipeCategory>,
    handlers: Vec<Arc<dyn RecipeHandler>>,
    plugins: Vec<Arc<dyn RegistryPlugin>>,
    crafting_items: Vec<(String, Ingredient)>,
    transfer_handlers: Vec<(String, Arc<dyn RecipeTransferHandler>)>,
    clickable_areas: Vec<(String, RecipeClickableArea)>,
    fluid_blocks: FluidBlocks,
    recipes: Vec<Arc<dyn Recipe>>,
}

impl RecipeRegistryBuilder {
    pub fn new(ingredients: IngredientRegistry) -> Self {
        Self {
            ingredients,
            settings: Settings::default(),
            categories: Vec::new(),
            handlers: Vec::new(),
            plugins: Vec::new(),
            crafting_items: Vec::new(),
            transfer_handlers: Vec::new(),
            clickable_areas: Vec::new(),
            fluid_blocks: FluidBlocks::default(),
            recipes: Vec::new(),
        }
    }

    pub fn settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    pub fn category(mut self, category: RecipeCategory) -> Self {
        self.categories.push(category);
        self
    }

    pub fn categories(mut self, categories: impl IntoIterator<Item = RecipeCategory>) -> Self {
        self.categories.extend(categories);
        self
    }

    pub fn handler(mut self, handler: Arc<dyn RecipeHandler>) -> Self {
        self.handlers.push(handler);
        self
    }

    /// Append a plugin. Plugins are queried after the internal plugin, in
    /// the order they were added.
    pub fn plugin(mut self, plugin: Arc<dyn RegistryPlugin>) -> Self {
        self.plugins.push(plugin);
        self
    }

    /// Link an ingredient to a category as a crafting item.
    pub fn crafting_item(mut self, category_uid: impl Into<String>, item: Ingredient) -> Self {
        self.crafting_items.push((category_uid.into(), item));
        self
    }

    pub fn transfer_handler(
        mut self,
        category_uid: impl Into<String>,
        handler: Arc<dyn RecipeTransferHandler>,
    ) -> Self {
        self.transfer_handlers.push((category_uid.into(), handler));
        self
    }

    pub fn clickable_area(
        mut self,
        container: impl Into<String>,
        area: RecipeClickableArea,
    ) -> Self {
        self.clickable_areas.push((container.into(), area));
        self
    }

    pub fn fluid_blocks(mut self, fluid_blocks: FluidBlocks) -> Self {
        self.fluid_blocks = fluid_blocks;
        self
    }

    pub fn recipe(mut self, recipe: Arc<dyn Recipe>) -> Self {
        self.recipes.push(recipe);
        self
    }

    pub fn recipes(mut self, recipes: impl IntoIterator<Item = Arc<dyn Recipe>>) -> Self {
        self.recipes.extend(recipes);
        self
    }

    /// Build the registry and add the collected recipes.
    ///
    /// # Errors
    ///
    /// Fails on setup mistakes: a duplicate category UID, a crafting item for
    /// an unknown category, or a crafting item of an ingredient type with no
    /// helper. Problems with individual recipes never fail the build.
    pub fn build(self) -> Result<RecipeRegistry> {
        let mut seen = HashSet::new();
        for category in &self.categories {
            if !seen.insert(category.uid()) {
                return Err(RecipedexError::DuplicateCategory {
                    uid: category.uid().to_string(),
                });
            }
        }

        let mut index = RecipeIndex::new(Arc::new(self.ingredients), self.categories);
        for (uid, item) in self.crafting_items {
            index.add_crafting_item(&uid, item)?;
        }

        let mut plugins = PluginChain::new(self.settings.slow_lookup_threshold());
        for plugin in self.plugins {
            plugins.push(plugin);
        }

        let mut transfer_handlers = TransferHandlers::new();
        for (uid, handler) in self.transfer_handlers {
            transfer_handlers.register(&uid, handler);
        }

        let mut clickable_areas: HashMap<String, Vec<RecipeClickableArea>> = HashMap::new();
        for (container, area) in self.clickable_areas {
            clickable_areas.entry(container).or_default().push(area);
        }

        let mut registry = RecipeRegistry {
            settings: self.settings,
            index,
            handlers: HandlerResolver::new(self.handlers),
            plugins,
            recipes: HashMap::new(),
            unhandled_classes: HashSet::new(),
            transfer_handlers,
            clickable_areas,
            fluid_blocks: self.fluid_blocks,
            load_report: LoadReport::new(),
        };
        registry.load_report = registry.add_recipes(self.recipes);
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vanilla::{default_ingredient_registry, ItemStack, ItemStackHelper};

    fn builder() -> RecipeRegistryBuilder {
        RecipeRegistry::builder(default_ingredient_registry(ItemStackHelper::new()))
    }

    #[test]
    fn empty_registry_builds() {
        let registry = builder().build().unwrap();
        assert_eq!(registry.recipe_count(), 0);
        assert!(registry.recipe_categories().is_empty());
        assert_eq!(registry.plugin_names(), vec!["internal"]);
        assert_eq!(registry.load_report().total(), 0);
    }

    #[test]
    fn duplicate_category_uid_fails() {
        let result = builder()
            .category(RecipeCategory::new("smelting", "Smelting"))
            .category(RecipeCategory::new("smelting", "Smelting Again"))
            .build();
        assert!(matches!(
            result,
            Err(RecipedexError::DuplicateCategory { uid }) if uid == "smelting"
        ));
    }

    #[test]
    fn crafting_item_for_unknown_category_fails() {
        let result = builder()
            .crafting_item("smelting", Ingredient::new(ItemStack::new("minecraft:furnace")))
            .build();
        assert!(matches!(result, Err(RecipedexError::UnknownCategory { .. })));
    }

    #[test]
    fn crafting_item_without_helper_fails() {
        let result = builder()
            .category(RecipeCategory::new("smelting", "Smelting"))
            .crafting_item("smelting", Ingredient::new(42u64))
            .build();
        assert!(matches!(
            result,
            Err(RecipedexError::UnknownIngredientType { .. })
        ));
    }

    #[test]
    fn settings_are_kept() {
        let settings = Settings {
            debug_mode: true,
            ..Settings::default()
        };
        let registry = builder().settings(settings.clone()).build().unwrap();
        assert_eq!(registry.settings(), &settings);
    }
}
