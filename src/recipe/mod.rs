//! Recipes and the building blocks of the recipe index.
//!
//! Recipes are opaque values supplied by extensions. The index only ever
//! looks at them through a [`RecipeHandler`], which turns each one into a
//! [`RecipeWrapper`] exposing its ingredients.
//!
//! - [`category`] - Recipe categories and their ordering
//! - [`focus`] - Query keys (direction + ingredient)
//! - [`handler`] - Recipe handlers and class-based handler resolution
//! - [`map`] - Ingredient-keyed multi-index of wrappers
//! - [`wrapper`] - Normalized recipe views and their ingredient lists

pub mod category;
pub mod focus;
pub mod handler;
pub mod map;
pub mod wrapper;

use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

pub use category::{CategoryOrder, RecipeCategory};
pub use focus::{Focus, FocusMode};
pub use handler::{HandlerResolver, RecipeHandler};
pub use map::RecipeMap;
pub use wrapper::{Ingredients, RecipeWrapper, WrapperHandle, WrapperId};

/// Runtime type tag of a recipe.
///
/// Classes form an explicit single-inheritance hierarchy through their
/// `parent` link. Handlers registered for a class also accept recipes of any
/// descendant class when no handler is registered for the exact class.
/// Class names must be unique; equality and hashing use the name only.
///
/// ```
/// use recipedex::recipe::RecipeClass;
///
/// const CRAFTING: RecipeClass = RecipeClass::new("crafting");
/// const SHAPED: RecipeClass = RecipeClass::extending("crafting.shaped", &CRAFTING);
///
/// assert!(CRAFTING.is_assignable_from(&SHAPED));
/// assert!(!SHAPED.is_assignable_from(&CRAFTING));
/// ```
#[derive(Clone, Copy)]
pub struct RecipeClass {
    name: &'static str,
    parent: Option<&'static RecipeClass>,
}

impl RecipeClass {
    /// A root class.
    pub const fn new(name: &'static str) -> Self {
        Self { name, parent: None }
    }

    /// A class deriving from `parent`.
    pub const fn extending(name: &'static str, parent: &'static RecipeClass) -> Self {
        Self {
            name,
            parent: Some(parent),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn parent(&self) -> Option<&'static RecipeClass> {
        self.parent
    }

    /// Whether a recipe of class `other` is also a recipe of this class.
    pub fn is_assignable_from(&self, other: &RecipeClass) -> bool {
        let mut current = Some(other);
        while let Some(class) = current {
            if class == self {
                return true;
            }
            current = class.parent;
        }
        false
    }
}

impl PartialEq for RecipeClass {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for RecipeClass {}

impl Hash for RecipeClass {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Debug for RecipeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RecipeClass({})", self.name)
    }
}

impl fmt::Display for RecipeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// A recipe supplied by an extension.
///
/// The `Debug` rendering is used in error reports when a handler fails on
/// this recipe.
pub trait Recipe: Any + fmt::Debug + Send + Sync {
    fn recipe_class(&self) -> RecipeClass;
}

impl dyn Recipe {
    /// Borrow this recipe as its concrete type.
    pub fn downcast_ref<T: Recipe>(&self) -> Option<&T> {
        let any: &dyn Any = self;
        any.downcast_ref::<T>()
    }
}

/// Identity of a registered recipe: the address of its shared allocation.
///
/// Recipes are keyed by identity rather than value because extension types
/// need not implement meaningful equality.
pub(crate) fn recipe_identity(recipe: &Arc<dyn Recipe>) -> usize {
    Arc::as_ptr(recipe) as *const () as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    const CRAFTING: RecipeClass = RecipeClass::new("crafting");
    const SHAPED: RecipeClass = RecipeClass::extending("crafting.shaped", &CRAFTING);
    const MIRRORED: RecipeClass = RecipeClass::extending("crafting.shaped.mirrored", &SHAPED);
    const SMELTING: RecipeClass = RecipeClass::new("smelting");

    #[derive(Debug)]
    struct Shaped;

    impl Recipe for Shaped {
        fn recipe_class(&self) -> RecipeClass {
            SHAPED
        }
    }

    #[test]
    fn class_is_assignable_from_itself() {
        assert!(CRAFTING.is_assignable_from(&CRAFTING));
    }

    #[test]
    fn ancestors_are_assignable_from_descendants() {
        assert!(CRAFTING.is_assignable_from(&MIRRORED));
        assert!(SHAPED.is_assignable_from(&MIRRORED));
        assert!(!MIRRORED.is_assignable_from(&SHAPED));
        assert!(!SMELTING.is_assignable_from(&SHAPED));
    }

    #[test]
    fn equality_uses_name() {
        assert_eq!(SHAPED, RecipeClass::extending("crafting.shaped", &CRAFTING));
        assert_ne!(SHAPED, CRAFTING);
        assert_eq!(SHAPED.parent(), Some(&CRAFTING));
        assert_eq!(SHAPED.to_string(), "crafting.shaped");
    }

    #[test]
    fn downcast_dyn_recipe() {
        let recipe: Arc<dyn Recipe> = Arc::new(Shaped);
        assert!(recipe.downcast_ref::<Shaped>().is_some());
        assert_eq!(recipe.recipe_class(), SHAPED);
    }

    #[test]
    fn identity_distinguishes_allocations() {
        let a: Arc<dyn Recipe> = Arc::new(Shaped);
        let b: Arc<dyn Recipe> = Arc::new(Shaped);
        assert_eq!(recipe_identity(&a), recipe_identity(&a.clone()));
        assert_ne!(recipe_identity(&a), recipe_identity(&b));
    }
}
