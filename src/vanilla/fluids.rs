//! Fluid stacks and the block-to-fluid table.

use std::collections::HashMap;
use std::fmt;

use crate::ingredient::{Ingredient, IngredientHelper};

use super::{display_name_from_id, namespace_of, ItemStack};

/// Volume of one bucket, in millibuckets.
pub const BUCKET_VOLUME: u32 = 1000;

/// An amount of a named fluid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FluidStack {
    pub fluid: String,
    pub amount: u32,
}

impl FluidStack {
    pub fn new(fluid: impl Into<String>, amount: u32) -> Self {
        Self {
            fluid: fluid.into(),
            amount,
        }
    }

    /// One bucket of `fluid`.
    pub fn bucket(fluid: impl Into<String>) -> Self {
        Self::new(fluid, BUCKET_VOLUME)
    }
}

impl fmt::Display for FluidStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}mB", self.fluid, self.amount)
    }
}

/// Helper for [`FluidStack`] ingredients. Fluids have no variants, so the
/// unique and wildcard ids coincide.
#[derive(Debug, Clone, Copy, Default)]
pub struct FluidStackHelper;

impl IngredientHelper<FluidStack> for FluidStackHelper {
    fn unique_id(&self, stack: &FluidStack) -> String {
        format!("fluid:{}", stack.fluid)
    }

    fn wildcard_id(&self, stack: &FluidStack) -> String {
        self.unique_id(stack)
    }

    fn get_match(&self, candidates: &[&FluidStack], to_match: &FluidStack) -> Option<usize> {
        candidates.iter().position(|c| c.fluid == to_match.fluid)
    }

    fn display_name(&self, stack: &FluidStack) -> String {
        display_name_from_id(&stack.fluid)
    }

    fn mod_id(&self, stack: &FluidStack) -> String {
        namespace_of(&stack.fluid)
    }

    fn error_info(&self, stack: &FluidStack) -> String {
        stack.to_string()
    }
}

/// Which block items place a fluid's block form.
///
/// Nothing crafts those items, so lookups on them are redirected to the
/// fluid itself.
#[derive(Debug, Clone, Default)]
pub struct FluidBlocks {
    fluids_by_item: HashMap<String, String>,
}

impl FluidBlocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `block_item` places the block of `fluid`.
    pub fn insert(&mut self, block_item: impl Into<String>, fluid: impl Into<String>) {
        self.fluids_by_item.insert(block_item.into(), fluid.into());
    }

    pub fn with(mut self, block_item: impl Into<String>, fluid: impl Into<String>) -> Self {
        self.insert(block_item, fluid);
        self
    }

    /// One bucket of the fluid placed by this ingredient, if it is an item
    /// stack of a fluid block.
    pub fn fluid_for(&self, ingredient: &Ingredient) -> Option<FluidStack> {
        let stack = ingredient.downcast_ref::<ItemStack>()?;
        self.fluids_by_item
            .get(&stack.item)
            .map(|fluid| FluidStack::bucket(fluid.clone()))
    }

    pub fn len(&self) -> usize {
        self.fluids_by_item.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fluids_by_item.is_empty()
    }
}
