//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Every command except
//! `completions` loads its registry through a shared [`RegistrySource`],
//! so pack discovery and settings resolution behave the same everywhere.

pub mod categories;
pub mod check;
pub mod completions;
pub mod crafting_items;
pub mod dispatcher;
pub mod lookup;
pub mod render;
pub mod source;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use source::RegistrySource;
