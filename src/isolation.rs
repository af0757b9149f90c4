//! Failure isolation for extension code.
//!
//! Handlers, wrappers and plugins come from third-party extensions. Each
//! call into them goes through [`isolate`], which turns both returned errors
//! and panics into a [`Fault`] so one misbehaving extension only loses its
//! own contribution.

use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::error::BrokenCraftingRecipe;

/// Why a call into extension code did not produce a value.
#[derive(Debug)]
pub enum Fault {
    /// The extension returned an error.
    Error(anyhow::Error),
    /// The extension panicked; holds the panic message when it had one.
    Panic(String),
}

impl Fault {
    /// Whether the extension reported a malformed recipe structure.
    pub fn is_broken_recipe(&self) -> bool {
        match self {
            Fault::Error(err) => err.downcast_ref::<BrokenCraftingRecipe>().is_some(),
            Fault::Panic(_) => false,
        }
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fault::Error(err) => write!(f, "{:#}", err),
            Fault::Panic(message) => write!(f, "panicked: {}", message),
        }
    }
}

/// Run extension code, catching errors and panics.
///
/// The closure must not leave shared state half-updated when it panics;
/// callers only pass closures that build fresh values.
pub fn isolate<T>(f: impl FnOnce() -> anyhow::Result<T>) -> Result<T, Fault> {
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(err)) => Err(Fault::Error(err)),
        Err(payload) => Err(Fault::Panic(panic_message(payload.as_ref()))),
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
