//! Ingredient helper registry.
//!
//! Maps each ingredient type to the helper that knows how to identify it.

use std::any::TypeId;
use std::collections::HashMap;

use super::helper::{AnyIngredientHelper, IngredientHelper, TypedHelper};
use super::{Ingredient, IngredientValue};
use crate::error::{RecipedexError, Result};

/// Registry of ingredient helpers, keyed by ingredient type.
#[derive(Default)]
pub struct IngredientRegistry {
    helpers: HashMap<TypeId, Box<dyn AnyIngredientHelper>>,
}

impl IngredientRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the helper for ingredient type `V`, replacing any earlier one.
    pub fn register<V, H>(&mut self, helper: H)
    where
        V: IngredientValue + Clone,
        H: IngredientHelper<V> + 'static,
    {
        self.helpers
            .insert(TypeId::of::<V>(), Box::new(TypedHelper::<V, H>::new(helper)));
    }

    /// Builder-style [`register`](Self::register).
    pub fn with<V, H>(mut self, helper: H) -> Self
    where
        V: IngredientValue + Clone,
        H: IngredientHelper<V> + 'static,
    {
        self.register::<V, H>(helper);
        self
    }

    /// Look up the helper for an ingredient type.
    pub fn helper(&self, type_id: TypeId) -> Option<&dyn AnyIngredientHelper> {
        self.helpers.get(&type_id).map(|h| h.as_ref())
    }

    /// Look up the helper for an ingredient value's type.
    pub fn helper_for(&self, ingredient: &Ingredient) -> Result<&dyn AnyIngredientHelper> {
        self.helper(ingredient.type_id())
            .ok_or_else(|| RecipedexError::UnknownIngredientType {
                type_name: ingredient.type_name().to_string(),
            })
    }

    /// Exact identity key for an ingredient.
    pub fn unique_id(&self, ingredient: &Ingredient) -> Result<String> {
        self.helper_for(ingredient)?
            .unique_id(ingredient)
            .ok_or_else(|| mismatched(ingredient))
    }

    /// Wildcard identity key for an ingredient.
    pub fn wildcard_id(&self, ingredient: &Ingredient) -> Result<String> {
        self.helper_for(ingredient)?
            .wildcard_id(ingredient)
            .ok_or_else(|| mismatched(ingredient))
    }

    /// Find the candidate matching `to_match`, using `to_match`'s helper.
    pub fn get_match<'a>(
        &self,
        candidates: &'a [Ingredient],
        to_match: &Ingredient,
    ) -> Option<&'a Ingredient> {
        let helper = self.helper_for(to_match).ok()?;
        helper
            .get_match(candidates, to_match)
            .and_then(|i| candidates.get(i))
    }

    /// Expand wildcard ingredients into their subtypes, type by type.
    ///
    /// Ingredients with no registered helper are passed through unchanged.
    pub fn expand_subtypes(&self, ingredients: Vec<Ingredient>) -> Vec<Ingredient> {
        let mut by_type: Vec<(TypeId, Vec<Ingredient>)> = Vec::new();
        for ingredient in ingredients {
            let type_id = ingredient.type_id();
            match by_type.iter_mut().find(|(t, _)| *t == type_id) {
                Some((_, values)) => values.push(ingredient),
                None => by_type.push((type_id, vec![ingredient])),
            }
        }

        let mut expanded = Vec::new();
        for (type_id, values) in by_type {
            match self.helper(type_id) {
                Some(helper) => expanded.extend(helper.expand_subtypes(values)),
                None => expanded.extend(values),
            }
        }
        expanded
    }

    /// Best-effort description of an ingredient for error reports.
    pub fn error_info(&self, ingredient: &Ingredient) -> String {
        match self.helper(ingredient.type_id()) {
            Some(helper) => helper.error_info(ingredient),
            None => format!("{:?} ({})", ingredient, ingredient.type_name()),
        }
    }

    /// Get the number of registered helpers.
    pub fn len(&self) -> usize {
        self.helpers.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.helpers.is_empty()
    }
}

fn mismatched(ingredient: &Ingredient) -> RecipedexError {
    RecipedexError::UnknownIngredientType {
        type_name: ingredient.type_name().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vanilla::{FluidStack, FluidStackHelper, ItemStack, ItemStackHelper};

    fn registry() -> IngredientRegistry {
        IngredientRegistry::new()
            .with::<ItemStack, _>(ItemStackHelper::default())
            .with::<FluidStack, _>(FluidStackHelper)
    }

    #[test]
    fn registry_new_is_empty() {
        let registry = IngredientRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn unique_id_dispatches_by_type() {
        let registry = registry();
        assert_eq!(registry.len(), 2);
        let ore = Ingredient::new(ItemStack::new("minecraft:iron_ore"));
        let water = Ingredient::new(FluidStack::new("water", 1000));
        assert_eq!(registry.unique_id(&ore).unwrap(), "minecraft:iron_ore:0");
        assert_eq!(registry.unique_id(&water).unwrap(), "fluid:water");
    }

    #[test]
    fn unknown_type_is_an_error() {
        let registry = registry();
        let err = registry.unique_id(&Ingredient::new(3.5f64)).unwrap_err();
        assert!(matches!(err, RecipedexError::UnknownIngredientType { .. }));
        assert!(registry.get_match(&[], &Ingredient::new(1i32)).is_none());
    }

    #[test]
    fn expand_subtypes_passes_unknown_types_through() {
        let registry = registry();
        let expanded = registry.expand_subtypes(vec![
            Ingredient::new(FluidStack::new("lava", 1000)),
            Ingredient::new("loose string"),
        ]);
        assert_eq!(expanded.len(), 2);
    }

    #[test]
    fn get_match_returns_candidate() {
        let registry = registry();
        let candidates = vec![
            Ingredient::new(ItemStack::new("minecraft:furnace")),
            Ingredient::new(ItemStack::new("minecraft:crafting_table")),
        ];
        let found = registry
            .get_match(
                &candidates,
                &Ingredient::new(ItemStack::new("minecraft:crafting_table")),
            )
            .unwrap();
        assert_eq!(
            found.downcast_ref::<ItemStack>().unwrap().item,
            "minecraft:crafting_table"
        );
    }
}
