//! Ingredient values and the helpers that identify them.
//!
//! The index never inspects ingredient values directly. Every value is
//! wrapped in a type-erased [`Ingredient`], and all identity, matching and
//! subtype questions go through the [`IngredientHelper`] registered for the
//! value's concrete type in an [`IngredientRegistry`].
//!
//! - [`helper`] - The typed helper trait and its type-erased adapter
//! - [`registry`] - Helper lookup by ingredient type

pub mod helper;
pub mod registry;

use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

pub use helper::{AnyIngredientHelper, IngredientHelper, Rgb};
pub use registry::IngredientRegistry;

/// Any value that can take part in a recipe as an ingredient.
pub trait IngredientValue: Any + fmt::Debug + Send + Sync {}

impl<T: Any + fmt::Debug + Send + Sync> IngredientValue for T {}

/// A cloneable, type-erased ingredient value.
#[derive(Clone)]
pub struct Ingredient {
    value: Arc<dyn IngredientValue>,
    type_name: &'static str,
}

impl Ingredient {
    /// Wrap a concrete ingredient value.
    ///
    /// Passing an `Ingredient` returns a clone of it rather than nesting it.
    pub fn new<V: IngredientValue>(value: V) -> Self {
        if let Some(ingredient) = (&value as &dyn Any).downcast_ref::<Ingredient>() {
            return ingredient.clone();
        }
        Self {
            value: Arc::new(value),
            type_name: std::any::type_name::<V>(),
        }
    }

    /// The [`TypeId`] of the wrapped value's concrete type.
    pub fn type_id(&self) -> TypeId {
        self.as_any().type_id()
    }

    /// The Rust type name of the wrapped value, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Check whether the wrapped value is a `V`.
    pub fn is<V: IngredientValue>(&self) -> bool {
        self.as_any().is::<V>()
    }

    /// Borrow the wrapped value as a `V`, if it is one.
    pub fn downcast_ref<V: IngredientValue>(&self) -> Option<&V> {
        self.as_any().downcast_ref::<V>()
    }

    fn as_any(&self) -> &dyn Any {
        let value: &dyn IngredientValue = &*self.value;
        value
    }
}

impl fmt::Debug for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.value, f)
    }
}

/// An OR-set of ingredients filling one recipe slot.
pub type IngredientGroup = Vec<Ingredient>;
