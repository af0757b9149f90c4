//! Per-recipe outcomes and bulk-load reports.

use std::fmt;
use std::time::Duration;

use crate::recipe::{RecipeClass, WrapperHandle};
use crate::ui::format_duration;

/// What happened to one recipe handed to the registry.
#[derive(Debug, Clone)]
pub enum AddOutcome {
    /// Indexed under a fresh wrapper.
    Added(WrapperHandle),
    /// The same recipe instance is already indexed; nothing changed.
    AlreadyRegistered,
    /// No handler accepts the recipe's class.
    Unhandled(RecipeClass),
    /// The handler rejected the recipe.
    Invalid,
    /// The recipe was dropped because of a failure.
    Failed(RecipeFailure),
}

impl AddOutcome {
    pub fn is_added(&self) -> bool {
        matches!(self, AddOutcome::Added(_))
    }

    pub fn wrapper(&self) -> Option<&WrapperHandle> {
        match self {
            AddOutcome::Added(wrapper) => Some(wrapper),
            _ => None,
        }
    }
}

/// Why a recipe failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The handler named a category UID nobody registered.
    UnregisteredCategory,
    /// Handler or wrapper code returned an error or panicked.
    HandlerCrashed,
    /// Handler or wrapper code reported a malformed recipe structure.
    BrokenRecipe,
    /// The wrapper reported an ingredient the index cannot key.
    Unindexable,
    /// The recipe's own code panicked before a handler was chosen.
    RecipeCrashed,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FailureKind::UnregisteredCategory => "unregistered category",
            FailureKind::HandlerCrashed => "handler crashed",
            FailureKind::BrokenRecipe => "broken recipe",
            FailureKind::Unindexable => "unindexable ingredient",
            FailureKind::RecipeCrashed => "recipe crashed",
        };
        f.write_str(label)
    }
}

/// Diagnostic context for a dropped recipe.
#[derive(Debug, Clone)]
pub struct RecipeFailure {
    pub kind: FailureKind,
    /// Category UID, when the handler got far enough to name one.
    pub category_uid: Option<String>,
    /// Name of the handler that processed the recipe.
    pub handler: String,
    /// Debug rendering of the recipe.
    pub recipe_info: String,
    pub message: String,
}

impl fmt::Display for RecipeFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)?;
        if let Some(uid) = &self.category_uid {
            write!(f, "\n  Recipe Category: {}", uid)?;
        }
        write!(f, "\n  Recipe Handler: {}", self.handler)?;
        write!(f, "\n  Recipe: {}", self.recipe_info)
    }
}

/// Accumulated outcomes of a bulk load.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub added: usize,
    pub already_registered: usize,
    pub unhandled: usize,
    pub invalid: usize,
    /// Distinct unhandled classes, in first-seen order.
    pub unhandled_classes: Vec<RecipeClass>,
    pub failures: Vec<RecipeFailure>,
    pub elapsed: Duration,
}

impl LoadReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one outcome.
    pub fn record(&mut self, outcome: &AddOutcome) {
        match outcome {
            AddOutcome::Added(_) => self.added += 1,
            AddOutcome::AlreadyRegistered => self.already_registered += 1,
            AddOutcome::Unhandled(class) => {
                self.unhandled += 1;
                if !self.unhandled_classes.contains(class) {
                    self.unhandled_classes.push(*class);
                }
            }
            AddOutcome::Invalid => self.invalid += 1,
            AddOutcome::Failed(failure) => self.failures.push(failure.clone()),
        }
    }

    /// Fold another report into this one.
    pub fn merge(&mut self, other: LoadReport) {
        self.added += other.added;
        self.already_registered += other.already_registered;
        self.unhandled += other.unhandled;
        self.invalid += other.invalid;
        for class in other.unhandled_classes {
            if !self.unhandled_classes.contains(&class) {
                self.unhandled_classes.push(class);
            }
        }
        self.failures.extend(other.failures);
        self.elapsed += other.elapsed;
    }

    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    /// Recipes seen, whatever their outcome.
    pub fn total(&self) -> usize {
        self.added + self.already_registered + self.unhandled + self.invalid + self.failed()
    }

    /// Whether no recipe failed.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Failures of one kind.
    pub fn failures_of(&self, kind: FailureKind) -> impl Iterator<Item = &RecipeFailure> {
        self.failures.iter().filter(move |f| f.kind == kind)
    }
}

impl fmt::Display for LoadReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Added {} recipes ({} unhandled, {} invalid, {} failed) in {}",
            self.added,
            self.unhandled,
            self.invalid,
            self.failed(),
            format_duration(self.elapsed)
        )
    }
}
