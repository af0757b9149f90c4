//! Text notation for ingredients.
//!
//! - `minecraft:iron_ore` - an item, metadata 0
//! - `minecraft:wool@14` - an item with metadata
//! - `minecraft:wool@*` - every variant of an item
//! - `fluid:water` - one bucket of a fluid
//! - `fluid:lava*250` - an amount of a fluid, in millibuckets

use crate::error::{RecipedexError, Result};
use crate::ingredient::Ingredient;
use crate::vanilla::{FluidStack, ItemStack};

const FLUID_PREFIX: &str = "fluid:";

/// Parse an ingredient written in pack notation.
pub fn parse_ingredient(s: &str) -> Result<Ingredient> {
    let s = s.trim();
    match s.strip_prefix(FLUID_PREFIX) {
        Some(rest) => parse_fluid(rest, s).map(Ingredient::new),
        None => s.parse::<ItemStack>().map(Ingredient::new),
    }
}

fn parse_fluid(rest: &str, original: &str) -> Result<FluidStack> {
    let (name, amount) = match rest.split_once('*') {
        Some((name, amount)) => {
            let amount = amount
                .parse::<u32>()
                .map_err(|_| RecipedexError::PackValidationError {
                    message: format!("Invalid fluid amount in '{}'", original),
                })?;
            (name, Some(amount))
        }
        None => (rest, None),
    };

    if name.is_empty() {
        return Err(RecipedexError::PackValidationError {
            message: format!("Missing fluid name in '{}'", original),
        });
    }

    Ok(match amount {
        Some(amount) => FluidStack::new(name, amount),
        None => FluidStack::bucket(name),
    })
}

/// Render an ingredient for display.
pub fn format_ingredient(ingredient: &Ingredient) -> String {
    if let Some(stack) = ingredient.downcast_ref::<ItemStack>() {
        stack.to_string()
    } else if let Some(fluid) = ingredient.downcast_ref::<FluidStack>() {
        fluid.to_string()
    } else {
        format!("{:?}", ingredient)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vanilla::{BUCKET_VOLUME, WILDCARD_META};

    #[test]
    fn parses_items() {
        let ingredient = parse_ingredient("minecraft:wool@*").unwrap();
        let stack = ingredient.downcast_ref::<ItemStack>().unwrap();
        assert_eq!(stack.item, "minecraft:wool");
        assert_eq!(stack.meta, WILDCARD_META);
    }

    #[test]
    fn parses_fluid_bucket() {
        let ingredient = parse_ingredient("fluid:water").unwrap();
        let fluid = ingredient.downcast_ref::<FluidStack>().unwrap();
        assert_eq!(fluid.fluid, "water");
        assert_eq!(fluid.amount, BUCKET_VOLUME);
    }

    #[test]
    fn parses_fluid_amount() {
        let ingredient = parse_ingredient("fluid:lava*250").unwrap();
        assert_eq!(ingredient.downcast_ref::<FluidStack>().unwrap().amount, 250);
    }

    #[test]
    fn rejects_bad_fluids() {
        assert!(parse_ingredient("fluid:").is_err());
        assert!(parse_ingredient("fluid:lava*lots").is_err());
    }

    #[test]
    fn rejects_empty_item() {
        assert!(parse_ingredient("").is_err());
        assert!(parse_ingredient("@3").is_err());
    }

    #[test]
    fn format_round_trips_display() {
        assert_eq!(
            format_ingredient(&parse_ingredient("minecraft:wool@14").unwrap()),
            "minecraft:wool@14"
        );
        assert_eq!(
            format_ingredient(&parse_ingredient("fluid:water").unwrap()),
            "water 1000mB"
        );
        assert_eq!(format_ingredient(&Ingredient::new(3u8)), "3");
    }
}
