//! The recipe registry.
//!
//! [`RecipeRegistry`] owns the category catalog, the handler list, the
//! plugin chain and the recipe index. Recipes go in through
//! [`RecipeRegistry::add_recipe`]; queries fan out across the plugin chain
//! and come back merged in plugin registration order.
//!
//! Construction goes through [`RecipeRegistryBuilder`]. Categories, handlers
//! and plugins are fixed once built; recipes may be added and removed at any
//! time afterwards.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use recipedex::ingredient::Ingredient;
//! use recipedex::pack::{PackRecipe, PackRecipeHandler};
//! use recipedex::recipe::{Focus, RecipeCategory};
//! use recipedex::registry::RecipeRegistry;
//! use recipedex::vanilla::{default_ingredient_registry, ItemStack, ItemStackHelper};
//!
//! let smelt = PackRecipe::new("smelting")
//!     .with_inputs(vec![vec![Ingredient::new(ItemStack::new("minecraft:iron_ore"))]])
//!     .with_outputs(vec![vec![Ingredient::new(ItemStack::new("minecraft:iron_ingot"))]]);
//!
//! let registry = RecipeRegistry::builder(default_ingredient_registry(ItemStackHelper::new()))
//!     .category(RecipeCategory::new("smelting", "Smelting"))
//!     .handler(Arc::new(PackRecipeHandler))
//!     .recipe(Arc::new(smelt))
//!     .build()
//!     .unwrap();
//!
//! let focus = Focus::output(ItemStack::new("minecraft:iron_ingot"));
//! let categories = registry.recipe_categories_for_focus(&focus);
//! assert_eq!(categories[0].uid(), "smelting");
//! assert_eq!(registry.recipe_wrappers_for_focus(categories[0], &focus).len(), 1);
//! ```

pub mod builder;
pub mod clickable;
pub mod index;
pub mod outcome;
pub mod transfer;

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use indexmap::IndexSet;
use tracing::{debug, error, info};

use crate::config::Settings;
use crate::ingredient::{Ingredient, IngredientRegistry};
use crate::isolation::{isolate, Fault};
use crate::plugin::PluginChain;
use crate::recipe::{
    recipe_identity, Focus, FocusMode, HandlerResolver, Ingredients, Recipe, RecipeCategory,
    RecipeClass, RecipeHandler, WrapperHandle,
};
use crate::ui::LoadProgress;
use crate::vanilla::FluidBlocks;

pub use builder::RecipeRegistryBuilder;
pub use clickable::RecipeClickableArea;
pub use index::RecipeIndex;
pub use outcome::{AddOutcome, FailureKind, LoadReport, RecipeFailure};
pub use transfer::{
    RecipeTransferHandler, SlotRangeTransfer, TransferHandlers, UNIVERSAL_RECIPE_TRANSFER_UID,
};

struct RecipeRecord {
    recipe: Arc<dyn Recipe>,
    wrapper: WrapperHandle,
    category_uid: String,
}

/// Recipe indexing and lookup.
pub struct RecipeRegistry {
    settings: Settings,
    index: RecipeIndex,
    handlers: HandlerResolver,
    plugins: PluginChain,
    recipes: HashMap<usize, RecipeRecord>,
    unhandled_classes: HashSet<RecipeClass>,
    transfer_handlers: TransferHandlers,
    clickable_areas: HashMap<String, Vec<RecipeClickableArea>>,
    fluid_blocks: FluidBlocks,
    load_report: LoadReport,
}

impl RecipeRegistry {
    /// Start building a registry over the given ingredient helpers.
    pub fn builder(ingredients: IngredientRegistry) -> RecipeRegistryBuilder {
        RecipeRegistryBuilder::new(ingredients)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Read-only view of the index, as plugins see it.
    pub fn index(&self) -> &RecipeIndex {
        &self.index
    }

    pub fn ingredient_registry(&self) -> &IngredientRegistry {
        self.index.ingredient_registry()
    }

    /// Report of the recipes added while building.
    pub fn load_report(&self) -> &LoadReport {
        &self.load_report
    }

    /// Plugin names, in query order.
    pub fn plugin_names(&self) -> Vec<&str> {
        self.plugins.names()
    }

    pub fn create_focus(&self, mode: FocusMode, value: Ingredient) -> Focus {
        Focus::new(mode, value)
    }

    /// Add one recipe.
    ///
    /// Never fails as a whole: every problem with the recipe, including
    /// handler errors and panics, is logged and reported in the outcome, and
    /// the index is left as it was.
    pub fn add_recipe(&mut self, recipe: Arc<dyn Recipe>) -> AddOutcome {
        let identity = recipe_identity(&recipe);
        if self.recipes.contains_key(&identity) {
            return AddOutcome::AlreadyRegistered;
        }

        let class = match isolate(|| Ok(recipe.recipe_class())) {
            Ok(class) => class,
            Err(fault) => {
                return fail(failure(
                    FailureKind::RecipeCrashed,
                    None,
                    NO_HANDLER,
                    &recipe,
                    fault.to_string(),
                ));
            }
        };
        let Some(handler) = self.handlers.resolve(&class).cloned() else {
            self.note_unhandled(class);
            return AddOutcome::Unhandled(class);
        };

        let uid = match isolate(|| handler.category_uid(recipe.as_ref())) {
            Ok(uid) => uid,
            Err(fault) => return fail(from_fault(fault, None, handler.name(), &recipe)),
        };

        let Some(category) = self.index.category(&uid).cloned() else {
            error!("No recipe category registered for recipeCategoryUid: {}", uid);
            return AddOutcome::Failed(failure(
                FailureKind::UnregisteredCategory,
                Some(&uid),
                handler.name(),
                &recipe,
                format!("No recipe category registered for uid {}", uid),
            ));
        };

        match isolate(|| handler.is_valid(recipe.as_ref())) {
            Ok(true) => {}
            Ok(false) => return AddOutcome::Invalid,
            Err(fault) => return fail(from_fault(fault, Some(&uid), handler.name(), &recipe)),
        }

        let extracted = isolate(|| {
            let wrapper = handler.wrapper(recipe.as_ref())?;
            let mut ingredients = Ingredients::new();
            wrapper.ingredients(&mut ingredients)?;
            Ok((wrapper, ingredients))
        });
        let (wrapper, ingredients) = match extracted {
            Ok(extracted) => extracted,
            Err(fault) => return fail(from_fault(fault, Some(&uid), handler.name(), &recipe)),
        };

        let wrapper = WrapperHandle::new(wrapper);
        if let Err(err) = self
            .index
            .insert(&recipe, &wrapper, &category, ingredients)
        {
            return fail(failure(
                FailureKind::Unindexable,
                Some(&uid),
                handler.name(),
                &recipe,
                err.to_string(),
            ));
        }

        self.recipes.insert(
            identity,
            RecipeRecord {
                recipe,
                wrapper: wrapper.clone(),
                category_uid: uid,
            },
        );
        AddOutcome::Added(wrapper)
    }

    /// Add recipes one at a time, in order, inside a progress scope.
    pub fn add_recipes(
        &mut self,
        recipes: impl IntoIterator<Item = Arc<dyn Recipe>>,
    ) -> LoadReport {
        let recipes: Vec<Arc<dyn Recipe>> = recipes.into_iter().collect();
        let progress = LoadProgress::start(
            "Adding recipes",
            recipes.len() as u64,
            self.settings.show_progress,
        );

        let mut report = LoadReport::new();
        for recipe in recipes {
            let outcome = self.add_recipe(recipe);
            report.record(&outcome);
            progress.step();
        }
        report.elapsed = progress.elapsed();

        info!("{}", report);
        report
    }

    /// Remove a recipe added earlier.
    ///
    /// Returns whether anything was removed. Removing a recipe that was never
    /// added, or was already removed, does nothing.
    pub fn remove_recipe(&mut self, recipe: &Arc<dyn Recipe>) -> bool {
        let class = match isolate(|| Ok(recipe.recipe_class())) {
            Ok(class) => class,
            Err(fault) => {
                error!("Failed to remove recipe {}: {}", recipe_info(recipe), fault);
                return false;
            }
        };
        if self.handlers.resolve(&class).is_none() {
            self.note_unhandled(class);
            return false;
        }

        let Some(record) = self.recipes.remove(&recipe_identity(recipe)) else {
            return false;
        };
        let Some(category) = self.index.category(&record.category_uid).cloned() else {
            error!(
                "No recipe category registered for recipeCategoryUid: {}",
                record.category_uid
            );
            return false;
        };

        if let Err(err) = self
            .index
            .remove(&record.recipe, &record.wrapper, &category)
        {
            error!("Failed to remove recipe {}: {}", recipe_info(&record.recipe), err);
        }
        true
    }

    /// Whether this recipe instance is currently indexed.
    pub fn contains_recipe(&self, recipe: &Arc<dyn Recipe>) -> bool {
        self.recipes.contains_key(&recipe_identity(recipe))
    }

    /// The wrapper created for a recipe when it was added.
    pub fn wrapper_for(&self, recipe: &Arc<dyn Recipe>) -> Option<&WrapperHandle> {
        self.recipes
            .get(&recipe_identity(recipe))
            .map(|record| &record.wrapper)
    }

    /// Number of recipes currently indexed.
    pub fn recipe_count(&self) -> usize {
        self.recipes.len()
    }

    pub fn recipe_category(&self, uid: &str) -> Option<&RecipeCategory> {
        self.index.category(uid)
    }

    /// Every category with at least one wrapper, in registration order.
    pub fn recipe_categories(&self) -> Vec<&RecipeCategory> {
        self.index
            .categories()
            .filter(|category| !self.recipe_wrappers(category).is_empty())
            .collect()
    }

    /// The categories named by `uids`, de-duplicated in first-occurrence
    /// order. Unknown UIDs and categories without wrappers are left out.
    pub fn recipe_categories_for_uids<S: AsRef<str>>(&self, uids: &[S]) -> Vec<&RecipeCategory> {
        let unique: IndexSet<&str> = uids.iter().map(AsRef::as_ref).collect();
        unique
            .into_iter()
            .filter_map(|uid| self.index.category(uid))
            .filter(|category| !self.recipe_wrappers(category).is_empty())
            .collect()
    }

    /// Categories relevant to a focus, merged across plugins.
    pub fn recipe_categories_for_focus(&self, focus: &Focus) -> Vec<&RecipeCategory> {
        let focus = self.redirect_fluid_block(focus);
        let uids = self.plugins.category_uids(&self.index, &focus);
        self.recipe_categories_for_uids(&uids)
    }

    /// Every wrapper of a category, concatenated across plugins.
    pub fn recipe_wrappers(&self, category: &RecipeCategory) -> Vec<WrapperHandle> {
        self.plugins.wrappers(&self.index, category)
    }

    /// Wrappers of a category involving the focus, concatenated across
    /// plugins without de-duplication.
    pub fn recipe_wrappers_for_focus(
        &self,
        category: &RecipeCategory,
        focus: &Focus,
    ) -> Vec<WrapperHandle> {
        let focus = self.redirect_fluid_block(focus);
        self.plugins.wrappers_for_focus(&self.index, category, &focus)
    }

    /// Crafting items of a category.
    ///
    /// With an input focus matching one of them, only the matching item is
    /// returned.
    pub fn crafting_items(
        &self,
        category: &RecipeCategory,
        focus: Option<&Focus>,
    ) -> Vec<Ingredient> {
        let items = self.index.crafting_items(category.uid());
        if let Some(focus) = focus.filter(|f| f.mode() == FocusMode::Input) {
            if let Some(found) = self
                .index
                .ingredient_registry()
                .get_match(items, focus.value())
            {
                return vec![found.clone()];
            }
        }
        items.to_vec()
    }

    /// The handler recipes of `class` resolve to.
    pub fn recipe_handler(&self, class: &RecipeClass) -> Option<&Arc<dyn RecipeHandler>> {
        self.handlers.resolve(class)
    }

    /// The transfer handler for a container and category, falling back to the
    /// container's universal handler.
    pub fn transfer_handler(
        &self,
        container: &str,
        category: &RecipeCategory,
    ) -> Option<&Arc<dyn RecipeTransferHandler>> {
        self.transfer_handlers.get(container, category.uid())
    }

    /// The first clickable area of a container under the point.
    pub fn recipe_clickable_area(
        &self,
        container: &str,
        x: i32,
        y: i32,
    ) -> Option<&RecipeClickableArea> {
        self.clickable_areas
            .get(container)?
            .iter()
            .find(|area| area.check_hover(x, y))
    }

    /// Fluid block items stand for their fluid in lookups.
    fn redirect_fluid_block(&self, focus: &Focus) -> Focus {
        match self.fluid_blocks.fluid_for(focus.value()) {
            Some(fluid) => focus.with_value(Ingredient::new(fluid)),
            None => focus.clone(),
        }
    }

    fn note_unhandled(&mut self, class: RecipeClass) {
        if self.unhandled_classes.insert(class) && self.settings.debug_mode {
            debug!("Can't handle recipe: {}", class);
        }
    }
}

/// Handler name reported when the recipe failed before one was resolved.
const NO_HANDLER: &str = "none";

/// Debug rendering of a recipe, or a placeholder when its `Debug` panics.
fn recipe_info(recipe: &Arc<dyn Recipe>) -> String {
    isolate(|| Ok(format!("{:?}", recipe))).unwrap_or_else(|_| "<unprintable recipe>".to_string())
}

fn failure(
    kind: FailureKind,
    category_uid: Option<&str>,
    handler: &str,
    recipe: &Arc<dyn Recipe>,
    message: String,
) -> RecipeFailure {
    RecipeFailure {
        kind,
        category_uid: category_uid.map(str::to_string),
        handler: handler.to_string(),
        recipe_info: recipe_info(recipe),
        message,
    }
}

fn from_fault(
    fault: Fault,
    category_uid: Option<&str>,
    handler: &str,
    recipe: &Arc<dyn Recipe>,
) -> RecipeFailure {
    let kind = if fault.is_broken_recipe() {
        FailureKind::BrokenRecipe
    } else {
        FailureKind::HandlerCrashed
    };
    failure(kind, category_uid, handler, recipe, fault.to_string())
}

fn fail(failure: RecipeFailure) -> AddOutcome {
    match failure.kind {
        FailureKind::BrokenRecipe => error!("Found a broken crafting recipe. {}", failure),
        _ => error!("Found a broken recipe. {}", failure),
    }
    AddOutcome::Failed(failure)
}
