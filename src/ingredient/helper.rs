//! Ingredient helper capability.
//!
//! An [`IngredientHelper`] is written against one concrete ingredient type.
//! The registry stores helpers behind [`AnyIngredientHelper`], which accepts
//! type-erased [`Ingredient`]s and downcasts them before delegating.

use std::marker::PhantomData;

use super::{Ingredient, IngredientValue};

/// An RGB color sampled from an ingredient's appearance.
pub type Rgb = [u8; 3];

/// Identity and matching rules for one ingredient type.
pub trait IngredientHelper<V: IngredientValue>: Send + Sync {
    /// Stable identifier distinguishing every variant of the ingredient.
    fn unique_id(&self, ingredient: &V) -> String;

    /// Coarser identifier that ignores variant metadata.
    fn wildcard_id(&self, ingredient: &V) -> String;

    /// Index of the best candidate matching `to_match`, if any.
    fn get_match(&self, candidates: &[&V], to_match: &V) -> Option<usize>;

    /// Expand wildcard ingredients into every concrete subtype.
    fn expand_subtypes(&self, ingredients: Vec<V>) -> Vec<V> {
        ingredients
    }

    fn display_name(&self, ingredient: &V) -> String;

    fn mod_id(&self, ingredient: &V) -> String;

    fn colors(&self, _ingredient: &V) -> Vec<Rgb> {
        Vec::new()
    }

    /// Description of the ingredient for error reports.
    fn error_info(&self, ingredient: &V) -> String;
}

/// Type-erased view of an [`IngredientHelper`].
///
/// Every method returns `None` (or passes values through untouched) when
/// handed an ingredient of a different type than the helper was written for.
pub trait AnyIngredientHelper: Send + Sync {
    fn unique_id(&self, ingredient: &Ingredient) -> Option<String>;

    fn wildcard_id(&self, ingredient: &Ingredient) -> Option<String>;

    /// Index into `candidates` of the best match. Candidates of other
    /// ingredient types are never matched.
    fn get_match(&self, candidates: &[Ingredient], to_match: &Ingredient) -> Option<usize>;

    fn expand_subtypes(&self, ingredients: Vec<Ingredient>) -> Vec<Ingredient>;

    fn display_name(&self, ingredient: &Ingredient) -> Option<String>;

    fn mod_id(&self, ingredient: &Ingredient) -> Option<String>;

    fn colors(&self, ingredient: &Ingredient) -> Vec<Rgb>;

    fn error_info(&self, ingredient: &Ingredient) -> String;
}

pub(crate) struct TypedHelper<V, H> {
    helper: H,
    _value: PhantomData<fn() -> V>,
}

impl<V, H> TypedHelper<V, H> {
    pub(crate) fn new(helper: H) -> Self {
        Self {
            helper,
            _value: PhantomData,
        }
    }
}

impl<V, H> AnyIngredientHelper for TypedHelper<V, H>
where
    V: IngredientValue + Clone,
    H: IngredientHelper<V>,
{
    fn unique_id(&self, ingredient: &Ingredient) -> Option<String> {
        ingredient
            .downcast_ref::<V>()
            .map(|value| self.helper.unique_id(value))
    }

    fn wildcard_id(&self, ingredient: &Ingredient) -> Option<String> {
        ingredient
            .downcast_ref::<V>()
            .map(|value| self.helper.wildcard_id(value))
    }

    fn get_match(&self, candidates: &[Ingredient], to_match: &Ingredient) -> Option<usize> {
        let to_match = to_match.downcast_ref::<V>()?;
        let (positions, typed): (Vec<usize>, Vec<&V>) = candidates
            .iter()
            .enumerate()
            .filter_map(|(i, c)| c.downcast_ref::<V>().map(|v| (i, v)))
            .unzip();
        self.helper
            .get_match(&typed, to_match)
            .and_then(|i| positions.get(i).copied())
    }

    fn expand_subtypes(&self, ingredients: Vec<Ingredient>) -> Vec<Ingredient> {
        let mut typed = Vec::with_capacity(ingredients.len());
        let mut others = Vec::new();
        for ingredient in ingredients {
            match ingredient.downcast_ref::<V>() {
                Some(value) => typed.push(value.clone()),
                None => others.push(ingredient),
            }
        }
        let mut expanded: Vec<Ingredient> = self
            .helper
            .expand_subtypes(typed)
            .into_iter()
            .map(Ingredient::new)
            .collect();
        expanded.extend(others);
        expanded
    }

    fn display_name(&self, ingredient: &Ingredient) -> Option<String> {
        ingredient
            .downcast_ref::<V>()
            .map(|value| self.helper.display_name(value))
    }

    fn mod_id(&self, ingredient: &Ingredient) -> Option<String> {
        ingredient
            .downcast_ref::<V>()
            .map(|value| self.helper.mod_id(value))
    }

    fn colors(&self, ingredient: &Ingredient) -> Vec<Rgb> {
        ingredient
            .downcast_ref::<V>()
            .map(|value| self.helper.colors(value))
            .unwrap_or_default()
    }

    fn error_info(&self, ingredient: &Ingredient) -> String {
        match ingredient.downcast_ref::<V>() {
            Some(value) => self.helper.error_info(value),
            None => format!("{:?} ({})", ingredient, ingredient.type_name()),
        }
    }
}
