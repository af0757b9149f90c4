//! Recipedex - Recipe indexing and lookup for game content browsers.
//!
//! Recipedex ingests heterogeneous recipes through pluggable handlers,
//! indexes them by the ingredients they consume and produce, and answers
//! "which categories and recipes involve this ingredient" queries.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Settings loading
//! - [`error`] - Error types and result aliases
//! - [`ingredient`] - Type-erased ingredients and their helpers
//! - [`isolation`] - Panic and error isolation around extension code
//! - [`pack`] - Declarative content packs
//! - [`plugin`] - Registry plugins and the plugin chain
//! - [`recipe`] - Recipes, handlers, wrappers, categories and the recipe map
//! - [`registry`] - The recipe registry and its builder
//! - [`ui`] - Terminal output and progress
//! - [`vanilla`] - Built-in item and fluid ingredients
//!
//! # Example
//!
//! ```
//! use recipedex::config::Settings;
//! use recipedex::pack::Pack;
//! use recipedex::recipe::Focus;
//! use recipedex::vanilla::ItemStack;
//!
//! let pack: Pack = serde_yaml::from_str(r#"
//! categories:
//!   - uid: smelting
//!     title: Smelting
//! recipes:
//!   - category: smelting
//!     inputs: ["minecraft:sand"]
//!     outputs: ["minecraft:glass"]
//! "#).unwrap();
//! let registry = pack.into_registry(Settings::default()).unwrap();
//!
//! let glass = Focus::output(ItemStack::new("minecraft:glass"));
//! let categories = registry.recipe_categories_for_focus(&glass);
//! assert_eq!(categories[0].uid(), "smelting");
//! assert_eq!(registry.recipe_wrappers_for_focus(categories[0], &glass).len(), 1);
//! ```
//!
//! For pack files on disk, see the integration tests.

pub mod cli;
pub mod config;
pub mod error;
pub mod ingredient;
pub mod isolation;
pub mod pack;
pub mod plugin;
pub mod recipe;
pub mod registry;
pub mod ui;
pub mod vanilla;

pub use error::{RecipedexError, Result};
