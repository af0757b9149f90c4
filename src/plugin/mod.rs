//! Registry plugins.
//!
//! A [`RegistryPlugin`] answers focus and category lookups. The registry
//! queries every plugin in registration order through a [`PluginChain`] and
//! merges their answers. The chain always starts with the
//! [`InternalRecipePlugin`], which answers from the registry's own index.

pub mod internal;

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{error, warn};

use crate::isolation::isolate;
use crate::recipe::{Focus, RecipeCategory, WrapperHandle};
use crate::registry::RecipeIndex;

pub use internal::InternalRecipePlugin;

/// A lookup provider contributing to registry queries.
///
/// Implementations may fail or panic; a failing plugin only loses its own
/// contribution to that one query.
pub trait RegistryPlugin: Send + Sync {
    /// UIDs of the categories relevant to `focus`.
    fn category_uids(&self, index: &RecipeIndex, focus: &Focus) -> anyhow::Result<Vec<String>>;

    /// Every wrapper this plugin provides for `category`.
    fn wrappers(
        &self,
        index: &RecipeIndex,
        category: &RecipeCategory,
    ) -> anyhow::Result<Vec<WrapperHandle>>;

    /// Wrappers this plugin provides for `category` that involve `focus`.
    fn wrappers_for_focus(
        &self,
        index: &RecipeIndex,
        category: &RecipeCategory,
        focus: &Focus,
    ) -> anyhow::Result<Vec<WrapperHandle>>;

    /// Name used in diagnostics.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Plugins in registration order, starting with the internal plugin.
pub struct PluginChain {
    plugins: Vec<Arc<dyn RegistryPlugin>>,
    slow_threshold: Duration,
}

impl PluginChain {
    /// A chain holding only the internal plugin.
    pub fn new(slow_threshold: Duration) -> Self {
        Self {
            plugins: vec![Arc::new(InternalRecipePlugin)],
            slow_threshold,
        }
    }

    /// Append a plugin after every plugin already in the chain.
    pub fn push(&mut self, plugin: Arc<dyn RegistryPlugin>) {
        self.plugins.push(plugin);
    }

    /// Plugin names, in query order.
    pub fn names(&self) -> Vec<&str> {
        self.plugins.iter().map(|p| p.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// Category UIDs from every plugin, concatenated. Not de-duplicated.
    pub fn category_uids(&self, index: &RecipeIndex, focus: &Focus) -> Vec<String> {
        self.collect("category UIDs", |plugin| plugin.category_uids(index, focus))
    }

    /// Wrappers for a category from every plugin, concatenated.
    pub fn wrappers(&self, index: &RecipeIndex, category: &RecipeCategory) -> Vec<WrapperHandle> {
        self.collect("recipe wrappers", |plugin| plugin.wrappers(index, category))
    }

    /// Wrappers for a category and focus from every plugin, concatenated.
    pub fn wrappers_for_focus(
        &self,
        index: &RecipeIndex,
        category: &RecipeCategory,
        focus: &Focus,
    ) -> Vec<WrapperHandle> {
        self.collect("recipe wrappers for focus", |plugin| {
            plugin.wrappers_for_focus(index, category, focus)
        })
    }

    fn collect<T>(
        &self,
        lookup: &str,
        call: impl Fn(&dyn RegistryPlugin) -> anyhow::Result<Vec<T>>,
    ) -> Vec<T> {
        let mut merged = Vec::new();
        for plugin in &self.plugins {
            let start = Instant::now();
            let result = isolate(|| call(plugin.as_ref()));
            let elapsed = start.elapsed();

            if elapsed > self.slow_threshold {
                warn!(
                    "Recipe registry plugin is slow, {} took {} ms. {}",
                    lookup,
                    elapsed.as_millis(),
                    plugin.name()
                );
            }

            match result {
                Ok(values) => merged.extend(values),
                Err(fault) => error!(
                    "Recipe registry plugin crashed while looking up {}: {}. {}",
                    lookup,
                    plugin.name(),
                    fault
                ),
            }
        }
        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vanilla::ItemStack;

    struct Fixed(Vec<&'static str>);

    impl RegistryPlugin for Fixed {
        fn category_uids(
            &self,
            _index: &RecipeIndex,
            _focus: &Focus,
        ) -> anyhow::Result<Vec<String>> {
            Ok(self.0.iter().map(|s| s.to_string()).collect())
        }
        fn wrappers(
            &self,
            _index: &RecipeIndex,
            _category: &RecipeCategory,
        ) -> anyhow::Result<Vec<WrapperHandle>> {
            Ok(Vec::new())
        }
        fn wrappers_for_focus(
            &self,
            _index: &RecipeIndex,
            _category: &RecipeCategory,
            _focus: &Focus,
        ) -> anyhow::Result<Vec<WrapperHandle>> {
            Ok(Vec::new())
        }
        fn name(&self) -> &str {
            "fixed"
        }
    }

    struct Exploding;

    impl RegistryPlugin for Exploding {
        fn category_uids(
            &self,
            _index: &RecipeIndex,
            _focus: &Focus,
        ) -> anyhow::Result<Vec<String>> {
            panic!("lookup table missing")
        }
        fn wrappers(
            &self,
            _index: &RecipeIndex,
            _category: &RecipeCategory,
        ) -> anyhow::Result<Vec<WrapperHandle>> {
            anyhow::bail!("no wrappers today")
        }
        fn wrappers_for_focus(
            &self,
            _index: &RecipeIndex,
            _category: &RecipeCategory,
            _focus: &Focus,
        ) -> anyhow::Result<Vec<WrapperHandle>> {
            anyhow::bail!("no wrappers today")
        }
    }

    fn empty_index() -> RecipeIndex {
        RecipeIndex::new(
            Arc::new(crate::vanilla::default_ingredient_registry(Default::default())),
            vec![RecipeCategory::new("x", "X")],
        )
    }

    #[test]
    fn chain_starts_with_internal_plugin() {
        let chain = PluginChain::new(Duration::from_millis(10));
        assert_eq!(chain.len(), 1);
        assert_eq!(chain.names(), vec!["internal"]);
    }

    #[test]
    fn results_concatenate_in_registration_order() {
        let mut chain = PluginChain::new(Duration::from_millis(10));
        chain.push(Arc::new(Fixed(vec!["b", "x"])));
        chain.push(Arc::new(Fixed(vec!["x", "a"])));

        let uids = chain.category_uids(&empty_index(), &Focus::input(ItemStack::new("stone")));
        assert_eq!(uids, vec!["b", "x", "x", "a"]);
    }

    #[test]
    fn failing_plugin_loses_only_its_own_contribution() {
        let mut chain = PluginChain::new(Duration::from_millis(10));
        chain.push(Arc::new(Exploding));
        chain.push(Arc::new(Fixed(vec!["x"])));

        let index = empty_index();
        let uids = chain.category_uids(&index, &Focus::input(ItemStack::new("stone")));
        assert_eq!(uids, vec!["x"]);

        let category = index.category("x").unwrap();
        assert!(chain.wrappers(&index, category).is_empty());
    }

    #[test]
    fn slow_plugins_still_contribute() {
        let mut chain = PluginChain::new(Duration::ZERO);
        chain.push(Arc::new(Fixed(vec!["x"])));
        let uids = chain.category_uids(&empty_index(), &Focus::output(ItemStack::new("stone")));
        assert_eq!(uids, vec!["x"]);
    }
}
