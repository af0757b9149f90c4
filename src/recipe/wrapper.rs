//! Recipe wrappers and their ingredient lists.

use std::any::Any;
use std::fmt;
use std::ops::Deref;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use super::focus::FocusMode;
use crate::ingredient::{Ingredient, IngredientGroup, IngredientValue};

/// Normalized view of a recipe.
///
/// Implementations report their ingredients by filling an [`Ingredients`]
/// container. Returning an error (or a
/// [`BrokenCraftingRecipe`](crate::error::BrokenCraftingRecipe)) drops the
/// recipe without touching the index.
pub trait RecipeWrapper: Any + fmt::Debug + Send + Sync {
    fn ingredients(&self, ingredients: &mut Ingredients) -> anyhow::Result<()>;
}

impl dyn RecipeWrapper {
    pub fn downcast_ref<T: RecipeWrapper>(&self) -> Option<&T> {
        let any: &dyn Any = self;
        any.downcast_ref::<T>()
    }
}

/// Identity of a wrapper handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WrapperId(u64);

static NEXT_WRAPPER_ID: AtomicU64 = AtomicU64::new(1);

impl WrapperId {
    fn next() -> Self {
        Self(NEXT_WRAPPER_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for WrapperId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A shared wrapper with a stable identity.
///
/// Handles compare equal only to clones of themselves, never by content.
#[derive(Clone)]
pub struct WrapperHandle {
    id: WrapperId,
    wrapper: Arc<dyn RecipeWrapper>,
}

impl WrapperHandle {
    pub fn new(wrapper: Arc<dyn RecipeWrapper>) -> Self {
        Self {
            id: WrapperId::next(),
            wrapper,
        }
    }

    pub fn from_wrapper<W: RecipeWrapper>(wrapper: W) -> Self {
        Self::new(Arc::new(wrapper))
    }

    pub fn id(&self) -> WrapperId {
        self.id
    }

    pub fn wrapper(&self) -> &Arc<dyn RecipeWrapper> {
        &self.wrapper
    }
}

impl Deref for WrapperHandle {
    type Target = dyn RecipeWrapper;

    fn deref(&self) -> &Self::Target {
        &*self.wrapper
    }
}

impl PartialEq for WrapperHandle {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for WrapperHandle {}

impl fmt::Debug for WrapperHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.id, self.wrapper)
    }
}

/// Input and output ingredient groups of a recipe.
///
/// Each group is an OR-set: any one of its ingredients fills that slot.
/// Setting the groups for an ingredient type replaces earlier groups of that
/// type and leaves groups of other types alone.
#[derive(Debug, Clone, Default)]
pub struct Ingredients {
    inputs: Vec<IngredientGroup>,
    outputs: Vec<IngredientGroup>,
}

impl Ingredients {
    pub fn new() -> Self {
        Self::default()
    }

    /// One input slot per value.
    pub fn set_inputs<V: IngredientValue>(&mut self, inputs: Vec<V>) {
        self.set_input_lists(inputs.into_iter().map(|v| vec![v]).collect());
    }

    pub fn set_input_lists<V: IngredientValue>(&mut self, lists: Vec<Vec<V>>) {
        replace_groups(&mut self.inputs, lists);
    }

    pub fn set_output<V: IngredientValue>(&mut self, output: V) {
        self.set_output_lists(vec![vec![output]]);
    }

    pub fn set_outputs<V: IngredientValue>(&mut self, outputs: Vec<V>) {
        self.set_output_lists(outputs.into_iter().map(|v| vec![v]).collect());
    }

    pub fn set_output_lists<V: IngredientValue>(&mut self, lists: Vec<Vec<V>>) {
        replace_groups(&mut self.outputs, lists);
    }

    /// Append an already type-erased input group.
    pub fn add_input_group(&mut self, group: IngredientGroup) {
        self.inputs.push(group);
    }

    /// Append an already type-erased output group.
    pub fn add_output_group(&mut self, group: IngredientGroup) {
        self.outputs.push(group);
    }

    pub fn inputs(&self) -> &[IngredientGroup] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[IngredientGroup] {
        &self.outputs
    }

    /// Input groups for [`FocusMode::Input`], output groups for
    /// [`FocusMode::Output`].
    pub fn groups(&self, mode: FocusMode) -> &[IngredientGroup] {
        match mode {
            FocusMode::Input => &self.inputs,
            FocusMode::Output => &self.outputs,
        }
    }

    /// Every value of type `V` on one side, in slot order.
    pub fn values<V: IngredientValue>(&self, mode: FocusMode) -> Vec<&V> {
        self.groups(mode)
            .iter()
            .flatten()
            .filter_map(|i| i.downcast_ref::<V>())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty() && self.outputs.is_empty()
    }
}

fn replace_groups<V: IngredientValue>(groups: &mut Vec<IngredientGroup>, lists: Vec<Vec<V>>) {
    groups.retain(|group| !group.iter().any(|i| i.is::<V>()));
    groups.extend(
        lists
            .into_iter()
            .map(|list| list.into_iter().map(Ingredient::new).collect::<IngredientGroup>()),
    );
}
