//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::ui::UserInterface;

use super::source::RegistrySource;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    source: RegistrySource,
}

impl CommandDispatcher {
    /// Create a new dispatcher loading registries from `source`.
    pub fn new(source: RegistrySource) -> Self {
        Self { source }
    }

    /// Where commands load their registry from.
    pub fn source(&self) -> &RegistrySource {
        &self.source
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Commands::Check(args) => {
                let cmd = super::check::CheckCommand::new(self.source.clone(), args.clone());
                cmd.execute(ui)
            }
            Commands::Categories(args) => {
                let cmd =
                    super::categories::CategoriesCommand::new(self.source.clone(), args.clone());
                cmd.execute(ui)
            }
            Commands::Lookup(args) => {
                let cmd = super::lookup::LookupCommand::new(self.source.clone(), args.clone());
                cmd.execute(ui)
            }
            Commands::CraftingItems(args) => {
                let cmd = super::crafting_items::CraftingItemsCommand::new(
                    self.source.clone(),
                    args.clone(),
                );
                cmd.execute(ui)
            }
            Commands::Completions(args) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
        }
    }
}
