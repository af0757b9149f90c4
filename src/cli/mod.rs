//! Command-line interface for recipedex.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{
    CategoriesArgs, CheckArgs, Cli, Commands, CompletionsArgs, CraftingItemsArgs, LookupArgs,
};
pub use commands::{Command, CommandDispatcher, CommandResult, RegistrySource};
