//! Recipe handlers and handler resolution.
//!
//! Each handler declares the [`RecipeClass`] it accepts. Resolution prefers a
//! handler declared for the exact class and falls back to the first handler,
//! in registration order, declared for an ancestor class.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::error;

use super::wrapper::RecipeWrapper;
use super::{Recipe, RecipeClass};
use crate::isolation::isolate;

/// Turns recipes of one class into wrappers.
///
/// Every method may fail; failures drop the recipe being processed and are
/// logged, but never abort the surrounding batch.
pub trait RecipeHandler: Send + Sync {
    /// The class of recipe this handler accepts.
    fn recipe_class(&self) -> anyhow::Result<RecipeClass>;

    /// UID of the category the recipe belongs to.
    fn category_uid(&self, recipe: &dyn Recipe) -> anyhow::Result<String>;

    /// Whether the recipe should be indexed at all.
    fn is_valid(&self, recipe: &dyn Recipe) -> anyhow::Result<bool>;

    fn wrapper(&self, recipe: &dyn Recipe) -> anyhow::Result<Arc<dyn RecipeWrapper>>;

    /// Name used in diagnostics.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

struct RegisteredHandler {
    class: RecipeClass,
    handler: Arc<dyn RecipeHandler>,
}

/// Registered handlers in registration order, at most one per exact class.
#[derive(Default)]
pub struct HandlerResolver {
    handlers: Vec<RegisteredHandler>,
}

impl HandlerResolver {
    /// Build the handler list.
    ///
    /// Each handler's declared class is read once, here. Handlers whose
    /// class accessor fails are dropped; a second handler for an already
    /// claimed class is dropped in favor of the first.
    pub fn new(handlers: impl IntoIterator<Item = Arc<dyn RecipeHandler>>) -> Self {
        let mut registered = Vec::new();
        let mut classes = HashSet::new();

        for handler in handlers {
            let class = match isolate(|| handler.recipe_class()) {
                Ok(class) => class,
                Err(fault) => {
                    error!("Recipe handler crashed: {}. {}", handler.name(), fault);
                    continue;
                }
            };

            if !classes.insert(class) {
                error!(
                    "A recipe handler has already been registered for this recipe class: {}",
                    class
                );
                continue;
            }

            registered.push(RegisteredHandler { class, handler });
        }

        Self {
            handlers: registered,
        }
    }

    /// Find the handler for a recipe class.
    pub fn resolve(&self, class: &RecipeClass) -> Option<&Arc<dyn RecipeHandler>> {
        self.handlers
            .iter()
            .find(|h| h.class == *class)
            .or_else(|| {
                self.handlers
                    .iter()
                    .find(|h| h.class.is_assignable_from(class))
            })
            .map(|h| &h.handler)
    }

    /// Declared classes, in registration order.
    pub fn classes(&self) -> impl Iterator<Item = RecipeClass> + '_ {
        self.handlers.iter().map(|h| h.class)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
