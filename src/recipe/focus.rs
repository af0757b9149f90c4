//! Lookup focus.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ingredient::{Ingredient, IngredientValue};

/// Direction of a focus lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FocusMode {
    /// Recipes that consume the ingredient.
    Input,
    /// Recipes that produce the ingredient.
    Output,
}

impl fmt::Display for FocusMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FocusMode::Input => write!(f, "input"),
            FocusMode::Output => write!(f, "output"),
        }
    }
}

/// An immutable (direction, ingredient) query key.
#[derive(Debug, Clone)]
pub struct Focus {
    mode: FocusMode,
    value: Ingredient,
}

impl Focus {
    pub fn new(mode: FocusMode, value: Ingredient) -> Self {
        Self { mode, value }
    }

    /// Focus on a concrete ingredient value.
    pub fn of<V: IngredientValue>(mode: FocusMode, value: V) -> Self {
        Self::new(mode, Ingredient::new(value))
    }

    pub fn input<V: IngredientValue>(value: V) -> Self {
        Self::of(FocusMode::Input, value)
    }

    pub fn output<V: IngredientValue>(value: V) -> Self {
        Self::of(FocusMode::Output, value)
    }

    pub fn mode(&self) -> FocusMode {
        self.mode
    }

    pub fn value(&self) -> &Ingredient {
        &self.value
    }

    /// The same direction focused on a different ingredient.
    pub fn with_value(&self, value: Ingredient) -> Self {
        Self::new(self.mode, value)
    }
}
