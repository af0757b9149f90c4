//! Content pack schema.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::ingredient::{Ingredient, IngredientGroup};
use crate::vanilla::{FluidStack, ItemStack, BUCKET_VOLUME};

use super::notation::parse_ingredient;

/// A declarative bundle of categories and recipes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Pack {
    /// Pack name, for display
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Recipe categories, in display order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<PackCategory>,

    /// Known metadata variants per item, used to expand `item@*`
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub subtypes: IndexMap<String, Vec<u32>>,

    /// Block item id to the fluid it places
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub fluid_blocks: IndexMap<String, String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub recipes: Vec<PackRecipeDef>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub transfers: Vec<PackTransfer>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub clickable_areas: Vec<PackClickableArea>,
}

/// A recipe category declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackCategory {
    pub uid: String,
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mod_name: Option<String>,

    /// Items giving access to this category (machines, workbenches)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub crafting_items: Vec<PackIngredient>,
}

/// A recipe declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackRecipeDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// UID of the category this recipe belongs to
    pub category: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inputs: Vec<PackSlot>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub outputs: Vec<PackSlot>,

    /// Grid width and height of a shaped recipe
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<[usize; 2]>,
}

/// One recipe slot: a single ingredient or a list of alternatives.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PackSlot {
    One(PackIngredient),
    AnyOf(Vec<PackIngredient>),
}

impl PackSlot {
    pub fn to_group(&self) -> Result<IngredientGroup> {
        match self {
            PackSlot::One(ingredient) => Ok(vec![ingredient.to_ingredient()?]),
            PackSlot::AnyOf(ingredients) => ingredients.iter().map(|i| i.to_ingredient()).collect(),
        }
    }
}

/// An ingredient in notation form or spelled out.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PackIngredient {
    Notation(String),
    Fluid {
        fluid: String,
        #[serde(default = "default_fluid_amount")]
        amount: u32,
    },
    Item {
        item: String,
        #[serde(default)]
        meta: u32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        nbt: Option<String>,
        #[serde(default = "default_count")]
        count: u32,
    },
}

impl PackIngredient {
    pub fn to_ingredient(&self) -> Result<Ingredient> {
        match self {
            PackIngredient::Notation(notation) => parse_ingredient(notation),
            PackIngredient::Fluid { fluid, amount } => {
                Ok(Ingredient::new(FluidStack::new(fluid.clone(), *amount)))
            }
            PackIngredient::Item {
                item,
                meta,
                nbt,
                count,
            } => {
                let mut stack = ItemStack::new(item.clone())
                    .with_meta(*meta)
                    .with_count(*count);
                stack.nbt = nbt.clone();
                Ok(Ingredient::new(stack))
            }
        }
    }
}

/// A slot-range transfer handler declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackTransfer {
    pub container: String,
    /// Category UID, or omitted for every category of the container
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// First slot and slot count of the crafting grid
    pub recipe_slots: [usize; 2],
    /// First slot and slot count of the ingredient source
    pub inventory_slots: [usize; 2],
}

/// A clickable area declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackClickableArea {
    pub container: String,
    pub top: i32,
    pub left: i32,
    pub bottom: i32,
    pub right: i32,
    pub categories: Vec<String>,
}

fn default_fluid_amount() -> u32 {
    BUCKET_VOLUME
}

fn default_count() -> u32 {
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_accepts_single_and_list() {
        let recipe: PackRecipeDef = serde_yaml::from_str(
            r#"
category: minecraft.crafting
inputs:
  - minecraft:planks
  - ['minecraft:wool@0', 'minecraft:wool@14']
outputs: ['minecraft:bed']
"#,
        )
        .unwrap();
        assert_eq!(recipe.inputs[0].to_group().unwrap().len(), 1);
        assert_eq!(recipe.inputs[1].to_group().unwrap().len(), 2);
        assert!(recipe.shape.is_none());
    }

    #[test]
    fn spelled_out_ingredients() {
        let slot: PackSlot =
            serde_yaml::from_str("[{fluid: lava, amount: 250}, {item: 'minecraft:dye', meta: 4}]")
                .unwrap();
        let group = slot.to_group().unwrap();
        assert_eq!(group[0].downcast_ref::<FluidStack>().unwrap().amount, 250);
        let dye = group[1].downcast_ref::<ItemStack>().unwrap();
        assert_eq!(dye.meta, 4);
        assert_eq!(dye.count, 1);
    }

    #[test]
    fn fluid_amount_defaults_to_bucket() {
        let ingredient: PackIngredient = serde_json::from_str(r#"{"fluid": "water"}"#).unwrap();
        let fluid = ingredient.to_ingredient().unwrap();
        assert_eq!(fluid.downcast_ref::<FluidStack>().unwrap().amount, BUCKET_VOLUME);
    }

    #[test]
    fn empty_pack_is_valid() {
        let pack: Pack = serde_yaml::from_str("{}").unwrap();
        assert!(pack.categories.is_empty());
        assert!(pack.recipes.is_empty());
    }

    #[test]
    fn bad_notation_surfaces_on_conversion() {
        let slot: PackSlot = serde_yaml::from_str("'fluid:'").unwrap();
        assert!(slot.to_group().is_err());
    }
}
