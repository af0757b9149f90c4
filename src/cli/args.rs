//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Recipedex - Recipe lookup over content packs.
#[derive(Debug, Parser)]
#[command(name = "recipedex")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the content pack (overrides recipedex-pack.yml discovery)
    #[arg(short, long, global = true, env = "RECIPEDEX_PACK")]
    pub pack: Option<PathBuf>,

    /// Path to settings file (overrides recipedex.yml discovery)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Load the pack and report how its recipes were registered
    Check(CheckArgs),

    /// List categories that have recipes
    Categories(CategoriesArgs),

    /// Find the categories and recipes involving an ingredient
    Lookup(LookupArgs),

    /// Show the crafting items of a category
    CraftingItems(CraftingItemsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Exit non-zero when any recipe failed or was unhandled
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the `categories` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CategoriesArgs {
    /// Only show these category UIDs
    pub uids: Vec<String>,
}

/// Arguments for the `lookup` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct LookupArgs {
    /// Recipes consuming this ingredient (item@meta or fluid:name)
    #[arg(
        short,
        long,
        value_name = "INGREDIENT",
        conflicts_with = "output",
        required_unless_present = "output"
    )]
    pub input: Option<String>,

    /// Recipes producing this ingredient (item@meta or fluid:name)
    #[arg(short, long, value_name = "INGREDIENT")]
    pub output: Option<String>,

    /// Only show this category
    #[arg(long, value_name = "UID")]
    pub category: Option<String>,
}

/// Arguments for the `crafting-items` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CraftingItemsArgs {
    /// Category UID
    pub category: String,

    /// Narrow to the crafting item matching this ingredient
    #[arg(short, long, value_name = "INGREDIENT")]
    pub input: Option<String>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn lookup_takes_input_or_output() {
        let cli =
            Cli::try_parse_from(["recipedex", "lookup", "--input", "minecraft:furnace"]).unwrap();
        match cli.command {
            Commands::Lookup(args) => {
                assert_eq!(args.input.as_deref(), Some("minecraft:furnace"));
                assert!(args.output.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn lookup_rejects_both_modes() {
        let result = Cli::try_parse_from(["recipedex", "lookup", "-i", "a", "-o", "b"]);
        assert!(result.is_err());
    }

    #[test]
    fn lookup_requires_a_mode() {
        assert!(Cli::try_parse_from(["recipedex", "lookup"]).is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["recipedex", "check", "--pack", "p.yml", "--debug"]).unwrap();
        assert_eq!(cli.pack, Some(PathBuf::from("p.yml")));
        assert!(cli.debug);
    }

    #[test]
    fn categories_collects_uids() {
        let cli = Cli::try_parse_from(["recipedex", "categories", "a", "b", "a"]).unwrap();
        match cli.command {
            Commands::Categories(args) => assert_eq!(args.uids, vec!["a", "b", "a"]),
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
