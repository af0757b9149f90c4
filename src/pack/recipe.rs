//! Pack recipes and their handler.

use std::sync::Arc;

use anyhow::anyhow;

use crate::error::BrokenCraftingRecipe;
use crate::ingredient::IngredientGroup;
use crate::recipe::{Ingredients, Recipe, RecipeClass, RecipeHandler, RecipeWrapper};

/// Class of every pack recipe.
pub const PACK_RECIPE: RecipeClass = RecipeClass::new("pack");

/// Class of shaped pack recipes. No handler declares it; shaped recipes
/// resolve to the [`PACK_RECIPE`] handler.
pub const SHAPED_PACK_RECIPE: RecipeClass = RecipeClass::extending("pack.shaped", &PACK_RECIPE);

/// A recipe declared by a content pack.
#[derive(Debug, Clone)]
pub struct PackRecipe {
    pub id: Option<String>,
    pub category: String,
    pub inputs: Vec<IngredientGroup>,
    pub outputs: Vec<IngredientGroup>,
    /// Grid width and height, for shaped recipes.
    pub shape: Option<(usize, usize)>,
}

impl PackRecipe {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            id: None,
            category: category.into(),
            inputs: Vec::new(),
            outputs: Vec::new(),
            shape: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_inputs(mut self, inputs: Vec<IngredientGroup>) -> Self {
        self.inputs = inputs;
        self
    }

    pub fn with_outputs(mut self, outputs: Vec<IngredientGroup>) -> Self {
        self.outputs = outputs;
        self
    }

    pub fn with_shape(mut self, width: usize, height: usize) -> Self {
        self.shape = Some((width, height));
        self
    }
}

impl Recipe for PackRecipe {
    fn recipe_class(&self) -> RecipeClass {
        if self.shape.is_some() {
            SHAPED_PACK_RECIPE
        } else {
            PACK_RECIPE
        }
    }
}

/// Wrapper exposing a pack recipe's slots.
#[derive(Debug, Clone)]
pub struct PackRecipeWrapper {
    inputs: Vec<IngredientGroup>,
    outputs: Vec<IngredientGroup>,
    shape: Option<(usize, usize)>,
}

impl PackRecipeWrapper {
    pub fn shape(&self) -> Option<(usize, usize)> {
        self.shape
    }
}

impl RecipeWrapper for PackRecipeWrapper {
    fn ingredients(&self, ingredients: &mut Ingredients) -> anyhow::Result<()> {
        for group in &self.inputs {
            ingredients.add_input_group(group.clone());
        }
        for group in &self.outputs {
            ingredients.add_output_group(group.clone());
        }
        Ok(())
    }
}

/// Handler for [`PackRecipe`]s.
///
/// A recipe without outputs is invalid. A shaped recipe whose grid size
/// differs from its input count is broken.
#[derive(Debug, Default, Clone, Copy)]
pub struct PackRecipeHandler;

impl PackRecipeHandler {
    fn pack_recipe<'a>(&self, recipe: &'a dyn Recipe) -> anyhow::Result<&'a PackRecipe> {
        recipe
            .downcast_ref::<PackRecipe>()
            .ok_or_else(|| anyhow!("Not a pack recipe: {:?}", recipe))
    }
}

impl RecipeHandler for PackRecipeHandler {
    fn recipe_class(&self) -> anyhow::Result<RecipeClass> {
        Ok(PACK_RECIPE)
    }

    fn category_uid(&self, recipe: &dyn Recipe) -> anyhow::Result<String> {
        Ok(self.pack_recipe(recipe)?.category.clone())
    }

    fn is_valid(&self, recipe: &dyn Recipe) -> anyhow::Result<bool> {
        let recipe = self.pack_recipe(recipe)?;
        Ok(!recipe.outputs.is_empty() && recipe.outputs.iter().all(|g| !g.is_empty()))
    }

    fn wrapper(&self, recipe: &dyn Recipe) -> anyhow::Result<Arc<dyn RecipeWrapper>> {
        let recipe = self.pack_recipe(recipe)?;
        if let Some((width, height)) = recipe.shape {
            if width.checked_mul(height) != Some(recipe.inputs.len()) {
                return Err(BrokenCraftingRecipe::new(format!(
                    "{}x{} grid with {} inputs",
                    width,
                    height,
                    recipe.inputs.len()
                ))
                .into());
            }
        }

        Ok(Arc::new(PackRecipeWrapper {
            inputs: recipe.inputs.clone(),
            outputs: recipe.outputs.clone(),
            shape: recipe.shape,
        }))
    }

    fn name(&self) -> &str {
        "PackRecipeHandler"
    }
}
