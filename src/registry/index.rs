//! The indexed recipe state shared with registry plugins.

use std::collections::HashMap;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::error::{RecipedexError, Result};
use crate::ingredient::{Ingredient, IngredientRegistry};
use crate::recipe::{
    CategoryOrder, Focus, Ingredients, Recipe, RecipeCategory, RecipeMap, WrapperHandle, WrapperId,
};

/// Categories, wrappers and the two ingredient maps.
///
/// Plugins get read-only access to this view. Only the registry mutates it,
/// through [`insert`](Self::insert) and [`remove`](Self::remove).
pub struct RecipeIndex {
    ingredients: Arc<IngredientRegistry>,
    categories: IndexMap<String, RecipeCategory>,
    input_map: RecipeMap,
    output_map: RecipeMap,
    recipes_by_category: HashMap<String, Vec<Arc<dyn Recipe>>>,
    ingredients_by_wrapper: HashMap<WrapperId, Ingredients>,
    crafting_items: HashMap<String, Vec<Ingredient>>,
}

impl RecipeIndex {
    /// Create an empty index over `categories`, which must have unique UIDs.
    pub(crate) fn new(
        ingredients: Arc<IngredientRegistry>,
        categories: Vec<RecipeCategory>,
    ) -> Self {
        let order = Arc::new(CategoryOrder::new(&categories));
        Self {
            input_map: RecipeMap::new(Arc::clone(&ingredients), Arc::clone(&order)),
            output_map: RecipeMap::new(Arc::clone(&ingredients), order),
            ingredients,
            categories: categories
                .into_iter()
                .map(|c| (c.uid().to_string(), c))
                .collect(),
            recipes_by_category: HashMap::new(),
            ingredients_by_wrapper: HashMap::new(),
            crafting_items: HashMap::new(),
        }
    }

    pub fn ingredient_registry(&self) -> &IngredientRegistry {
        &self.ingredients
    }

    pub fn category(&self, uid: &str) -> Option<&RecipeCategory> {
        self.categories.get(uid)
    }

    /// Registered categories, in registration order.
    pub fn categories(&self) -> impl Iterator<Item = &RecipeCategory> {
        self.categories.values()
    }

    /// Map keyed by recipe inputs.
    pub fn input_map(&self) -> &RecipeMap {
        &self.input_map
    }

    /// Map keyed by recipe outputs.
    pub fn output_map(&self) -> &RecipeMap {
        &self.output_map
    }

    /// Wrappers of a category, in add order.
    pub fn wrappers_for_category(&self, category: &RecipeCategory) -> Vec<WrapperHandle> {
        self.input_map.wrappers_for_category(category)
    }

    /// Recipes of a category, in add order.
    pub fn recipes_for_category(&self, uid: &str) -> &[Arc<dyn Recipe>] {
        self.recipes_by_category
            .get(uid)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Ingredients recorded for a wrapper when it was added.
    pub fn ingredients_of(&self, wrapper: &WrapperHandle) -> Option<&Ingredients> {
        self.ingredients_by_wrapper.get(&wrapper.id())
    }

    /// Crafting items registered for a category, in registration order.
    pub fn crafting_items(&self, uid: &str) -> &[Ingredient] {
        self.crafting_items
            .get(uid)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether `ingredient` matches one of the category's crafting items.
    pub fn is_crafting_item(&self, uid: &str, ingredient: &Ingredient) -> bool {
        self.ingredients
            .get_match(self.crafting_items(uid), ingredient)
            .is_some()
    }

    /// Whether the wrapper's ingredient groups on the focus side hold a
    /// match for the focus value.
    pub fn wrapper_matches(&self, wrapper: &WrapperHandle, focus: &Focus) -> bool {
        let Some(ingredients) = self.ingredients_of(wrapper) else {
            return false;
        };
        let candidates: Vec<Ingredient> = ingredients
            .groups(focus.mode())
            .iter()
            .flatten()
            .cloned()
            .collect();
        self.ingredients
            .get_match(&candidates, focus.value())
            .is_some()
    }

    /// Number of recipes indexed, across all categories.
    pub fn recipe_count(&self) -> usize {
        self.ingredients_by_wrapper.len()
    }

    pub(crate) fn add_crafting_item(&mut self, uid: &str, item: Ingredient) -> Result<()> {
        let category = self.require_category(uid)?.clone();
        self.input_map.add_recipe_category(&category, &item)?;
        self.crafting_items
            .entry(uid.to_string())
            .or_default()
            .push(item);
        Ok(())
    }

    /// Index a wrapper under both maps and the category lists.
    ///
    /// Either both maps are written or neither is.
    pub(crate) fn insert(
        &mut self,
        recipe: &Arc<dyn Recipe>,
        wrapper: &WrapperHandle,
        category: &RecipeCategory,
        ingredients: Ingredients,
    ) -> Result<()> {
        self.input_map
            .add_recipe(wrapper, category, ingredients.inputs())?;
        if let Err(err) = self
            .output_map
            .add_recipe(wrapper, category, ingredients.outputs())
        {
            self.input_map
                .remove_recipe(wrapper, category, ingredients.inputs())?;
            return Err(err);
        }

        self.recipes_by_category
            .entry(category.uid().to_string())
            .or_default()
            .push(Arc::clone(recipe));
        self.ingredients_by_wrapper.insert(wrapper.id(), ingredients);
        Ok(())
    }

    /// Inverse of [`insert`](Self::insert), using the ingredients recorded
    /// at insert time.
    pub(crate) fn remove(
        &mut self,
        recipe: &Arc<dyn Recipe>,
        wrapper: &WrapperHandle,
        category: &RecipeCategory,
    ) -> Result<()> {
        let Some(ingredients) = self.ingredients_by_wrapper.remove(&wrapper.id()) else {
            return Ok(());
        };
        self.input_map
            .remove_recipe(wrapper, category, ingredients.inputs())?;
        self.output_map
            .remove_recipe(wrapper, category, ingredients.outputs())?;

        if let Some(recipes) = self.recipes_by_category.get_mut(category.uid()) {
            recipes.retain(|r| !Arc::ptr_eq(r, recipe));
            if recipes.is_empty() {
                self.recipes_by_category.remove(category.uid());
            }
        }
        Ok(())
    }

    fn require_category(&self, uid: &str) -> Result<&RecipeCategory> {
        self.category(uid)
            .ok_or_else(|| RecipedexError::UnknownCategory {
                uid: uid.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::{RecipeClass, RecipeWrapper};
    use crate::vanilla::{default_ingredient_registry, ItemStack, ItemStackHelper};

    const SMELTING: RecipeClass = RecipeClass::new("smelting");

    #[derive(Debug)]
    struct Smelt(&'static str, &'static str);

    impl Recipe for Smelt {
        fn recipe_class(&self) -> RecipeClass {
            SMELTING
        }
    }

    impl RecipeWrapper for Smelt {
        fn ingredients(&self, ingredients: &mut Ingredients) -> anyhow::Result<()> {
            ingredients.set_inputs(vec![ItemStack::new(self.0)]);
            ingredients.set_output(ItemStack::new(self.1));
            Ok(())
        }
    }

    fn index() -> RecipeIndex {
        RecipeIndex::new(
            Arc::new(default_ingredient_registry(ItemStackHelper::new())),
            vec![RecipeCategory::new("smelting", "Smelting")],
        )
    }

    fn insert(
        index: &mut RecipeIndex,
        input: &'static str,
        output: &'static str,
    ) -> (Arc<dyn Recipe>, WrapperHandle) {
        let recipe: Arc<dyn Recipe> = Arc::new(Smelt(input, output));
        let wrapper = WrapperHandle::from_wrapper(Smelt(input, output));
        let mut ingredients = Ingredients::new();
        wrapper.ingredients(&mut ingredients).unwrap();
        let category = index.category("smelting").unwrap().clone();
        index.insert(&recipe, &wrapper, &category, ingredients).unwrap();
        (recipe, wrapper)
    }

    #[test]
    fn insert_writes_both_maps() {
        let mut index = index();
        let (_, wrapper) = insert(&mut index, "minecraft:iron_ore", "minecraft:iron_ingot");

        let ore = Ingredient::new(ItemStack::new("minecraft:iron_ore"));
        let ingot = Ingredient::new(ItemStack::new("minecraft:iron_ingot"));
        assert_eq!(index.input_map().categories_for_ingredient(&ore).unwrap(), vec!["smelting"]);
        assert_eq!(index.output_map().categories_for_ingredient(&ingot).unwrap(), vec!["smelting"]);
        assert!(index.input_map().categories_for_ingredient(&ingot).unwrap().is_empty());
        assert_eq!(index.recipe_count(), 1);
        let iron = Focus::output(ItemStack::new("minecraft:iron_ingot"));
        let gold = Focus::output(ItemStack::new("minecraft:gold_ingot"));
        assert!(index.wrapper_matches(&wrapper, &iron));
        assert!(!index.wrapper_matches(&wrapper, &gold));
    }

    #[test]
    fn remove_clears_everything() {
        let mut index = index();
        let (recipe, wrapper) = insert(&mut index, "minecraft:sand", "minecraft:glass");
        let category = index.category("smelting").unwrap().clone();
        index.remove(&recipe, &wrapper, &category).unwrap();

        assert!(index.input_map().is_empty());
        assert!(index.output_map().is_empty());
        assert!(index.recipes_for_category("smelting").is_empty());
        assert!(index.ingredients_of(&wrapper).is_none());
        assert_eq!(index.recipe_count(), 0);
    }

    #[test]
    fn failed_output_leaves_no_input_entries() {
        let mut index = index();
        let recipe: Arc<dyn Recipe> = Arc::new(Smelt("a", "b"));
        let wrapper = WrapperHandle::from_wrapper(Smelt("a", "b"));
        let mut ingredients = Ingredients::new();
        ingredients.set_inputs(vec![ItemStack::new("minecraft:cobblestone")]);
        ingredients.set_output(7u8);
        let category = index.category("smelting").unwrap().clone();

        assert!(index.insert(&recipe, &wrapper, &category, ingredients).is_err());
        assert!(index.input_map().is_empty());
        assert_eq!(index.input_map().entry_count(), 0);
        assert!(index.recipes_for_category("smelting").is_empty());
    }

    #[test]
    fn crafting_items_need_a_known_category() {
        let mut index = index();
        let furnace = Ingredient::new(ItemStack::new("minecraft:furnace"));
        index.add_crafting_item("smelting", furnace.clone()).unwrap();
        assert!(index.is_crafting_item("smelting", &furnace));
        assert!(index.add_crafting_item("brewing", furnace).is_err());
    }
}
