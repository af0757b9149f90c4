//! Integration tests for content packs on disk.

use std::fs;

use recipedex::config::Settings;
use recipedex::pack::{load_pack, PackRecipeWrapper};
use recipedex::recipe::Focus;
use recipedex::registry::FailureKind;
use recipedex::vanilla::{FluidStack, ItemStack};
use recipedex::RecipedexError;
use tempfile::TempDir;

const PACK: &str = r#"
name: Vanilla sample
categories:
  - uid: minecraft.crafting
    title: Crafting
    crafting_items: ["minecraft:crafting_table"]
  - uid: minecraft.smelting
    title: Smelting
    crafting_items: ["minecraft:furnace"]
  - uid: minecraft.brewing
    title: Brewing
subtypes:
  "minecraft:wool": [0, 1, 14]
fluid_blocks:
  "minecraft:lava": lava
recipes:
  - id: iron_ingot
    category: minecraft.smelting
    inputs: ["minecraft:iron_ore"]
    outputs: ["minecraft:iron_ingot"]
  - id: bed
    category: minecraft.crafting
    shape: [3, 2]
    inputs:
      - "minecraft:wool@*"
      - "minecraft:wool@*"
      - "minecraft:wool@*"
      - ["minecraft:planks", "minecraft:planks@1"]
      - ["minecraft:planks", "minecraft:planks@1"]
      - ["minecraft:planks", "minecraft:planks@1"]
    outputs: ["minecraft:bed"]
  - id: obsidian
    category: minecraft.crafting
    inputs: ["fluid:lava", "fluid:water*250"]
    outputs: ["minecraft:obsidian"]
  - id: ragged
    category: minecraft.crafting
    shape: [2, 2]
    inputs: ["minecraft:stick"]
    outputs: ["minecraft:torch"]
  - id: lost
    category: thaumcraft.infusion
    inputs: ["minecraft:stone"]
    outputs: ["minecraft:stone"]
  - id: empty
    category: minecraft.crafting
    inputs: ["minecraft:dirt"]
transfers:
  - container: crafting_table
    category: minecraft.crafting
    recipe_slots: [1, 9]
    inventory_slots: [10, 36]
  - container: inventory
    recipe_slots: [1, 4]
    inventory_slots: [9, 36]
clickable_areas:
  - container: furnace
    top: 16
    left: 78
    bottom: 32
    right: 100
    categories: [minecraft.smelting]
"#;

fn write_pack(name: &str, content: &str) -> (TempDir, std::path::PathBuf) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(name);
    fs::write(&path, content).unwrap();
    (temp, path)
}

#[test]
fn full_pack_workflow() {
    let (_temp, path) = write_pack("pack.yml", PACK);
    let pack = load_pack(&path).unwrap();
    assert_eq!(pack.name.as_deref(), Some("Vanilla sample"));

    let registry = pack.into_registry(Settings::default()).unwrap();
    let report = registry.load_report();
    assert_eq!(report.added, 3);
    assert_eq!(report.invalid, 1);
    assert_eq!(report.failed(), 2);
    assert_eq!(report.failures_of(FailureKind::BrokenRecipe).count(), 1);
    assert_eq!(report.failures_of(FailureKind::UnregisteredCategory).count(), 1);

    let listed: Vec<&str> = registry.recipe_categories().iter().map(|c| c.uid()).collect();
    assert_eq!(listed, vec!["minecraft.crafting", "minecraft.smelting"]);
}

#[test]
fn oversized_shape_is_reported_broken() {
    let (_temp, path) = write_pack(
        "pack.yml",
        r#"
categories:
  - uid: minecraft.crafting
    title: Crafting
recipes:
  - id: giant
    category: minecraft.crafting
    shape: [4294967296, 4294967296]
    inputs: ["minecraft:stick"]
    outputs: ["minecraft:torch"]
  - id: torch
    category: minecraft.crafting
    inputs: ["minecraft:coal", "minecraft:stick"]
    outputs: ["minecraft:torch"]
"#,
    );
    let registry = load_pack(&path)
        .unwrap()
        .into_registry(Settings::default())
        .unwrap();

    let report = registry.load_report();
    assert_eq!(report.added, 1);
    assert_eq!(report.failures_of(FailureKind::BrokenRecipe).count(), 1);
    assert_eq!(report.failures_of(FailureKind::HandlerCrashed).count(), 0);
}

#[test]
fn shaped_recipes_resolve_to_the_base_handler() {
    let (_temp, path) = write_pack("pack.yml", PACK);
    let registry = load_pack(&path)
        .unwrap()
        .into_registry(Settings::default())
        .unwrap();

    let bed = Focus::output(ItemStack::new("minecraft:bed"));
    let crafting = registry.recipe_category("minecraft.crafting").unwrap();
    let wrappers = registry.recipe_wrappers_for_focus(crafting, &bed);
    assert_eq!(wrappers.len(), 1);
    let wrapper = wrappers[0].downcast_ref::<PackRecipeWrapper>().unwrap();
    assert_eq!(wrapper.shape(), Some((3, 2)));
}

#[test]
fn wool_variant_finds_bed() {
    let (_temp, path) = write_pack("pack.yml", PACK);
    let registry = load_pack(&path)
        .unwrap()
        .into_registry(Settings::default())
        .unwrap();

    let white = Focus::input(ItemStack::new("minecraft:wool"));
    let categories = registry.recipe_categories_for_focus(&white);
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].uid(), "minecraft.crafting");
}

#[test]
fn lava_block_redirects_to_lava() {
    let (_temp, path) = write_pack("pack.yml", PACK);
    let registry = load_pack(&path)
        .unwrap()
        .into_registry(Settings::default())
        .unwrap();

    let block = Focus::input(ItemStack::new("minecraft:lava"));
    let fluid = Focus::input(FluidStack::bucket("lava"));
    let via_block: Vec<&str> = registry
        .recipe_categories_for_focus(&block)
        .iter()
        .map(|c| c.uid())
        .collect();
    let via_fluid: Vec<&str> = registry
        .recipe_categories_for_focus(&fluid)
        .iter()
        .map(|c| c.uid())
        .collect();
    assert_eq!(via_block, vec!["minecraft.crafting"]);
    assert_eq!(via_block, via_fluid);
}

#[test]
fn transfers_and_clickable_areas_are_registered() {
    let (_temp, path) = write_pack("pack.yml", PACK);
    let registry = load_pack(&path)
        .unwrap()
        .into_registry(Settings::default())
        .unwrap();
    let crafting = registry.recipe_category("minecraft.crafting").unwrap();
    let smelting = registry.recipe_category("minecraft.smelting").unwrap();

    assert!(registry.transfer_handler("crafting_table", crafting).is_some());
    assert!(registry.transfer_handler("crafting_table", smelting).is_none());
    assert!(registry.transfer_handler("inventory", smelting).is_some());

    let area = registry.recipe_clickable_area("furnace", 90, 20).unwrap();
    assert_eq!(area.category_uids, vec!["minecraft.smelting"]);
}

#[test]
fn json_pack_loads() {
    let (_temp, path) = write_pack(
        "pack.json",
        r#"{
  "categories": [{"uid": "smelting", "title": "Smelting"}],
  "recipes": [
    {"category": "smelting",
     "inputs": [{"item": "minecraft:log", "meta": 2}],
     "outputs": ["minecraft:charcoal"]}
  ]
}"#,
    );
    let registry = load_pack(&path)
        .unwrap()
        .into_registry(Settings::default())
        .unwrap();

    let birch = Focus::input(ItemStack::new("minecraft:log").with_meta(2));
    assert_eq!(registry.recipe_categories_for_focus(&birch).len(), 1);
    // No recipe uses oak logs exactly, so the item-level key answers.
    let oak = Focus::input(ItemStack::new("minecraft:log"));
    assert_eq!(registry.recipe_categories_for_focus(&oak).len(), 1);
}

#[test]
fn duplicate_category_rejects_pack() {
    let (_temp, path) = write_pack(
        "pack.yml",
        "categories:\n  - {uid: a, title: A}\n  - {uid: a, title: B}\n",
    );
    let err = load_pack(&path)
        .unwrap()
        .into_registry(Settings::default())
        .err()
        .unwrap();
    assert!(matches!(err, RecipedexError::DuplicateCategory { .. }));
}

#[test]
fn malformed_notation_rejects_pack() {
    let (_temp, path) = write_pack(
        "pack.yml",
        "recipes:\n  - {category: a, inputs: ['minecraft:wool@red'], outputs: ['minecraft:bed']}\n",
    );
    let err = load_pack(&path)
        .unwrap()
        .into_registry(Settings::default())
        .err()
        .unwrap();
    assert!(matches!(err, RecipedexError::PackValidationError { .. }));
}
