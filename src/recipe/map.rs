//! Ingredient-keyed recipe index.
//!
//! A [`RecipeMap`] maps ingredient identity keys to the (category, wrapper)
//! pairs whose ingredients include them. Every ingredient is stored under
//! its exact key and its wildcard key; lookups consult the exact keys first
//! and only fall back to wildcard keys when the exact lookup finds nothing.
//!
//! The registry keeps two instances, one keyed by recipe inputs and one by
//! recipe outputs.

use std::collections::HashMap;
use std::sync::Arc;

use indexmap::{IndexMap, IndexSet};

use super::category::{CategoryOrder, RecipeCategory};
use super::wrapper::{WrapperHandle, WrapperId};
use crate::error::Result;
use crate::ingredient::{Ingredient, IngredientGroup, IngredientRegistry};

/// A (category, wrapper) pair stored in a key bucket.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Entry {
    category: String,
    wrapper: WrapperId,
}

impl Entry {
    fn new(category: &str, wrapper: WrapperId) -> Self {
        Self {
            category: category.to_string(),
            wrapper,
        }
    }
}

type Buckets = HashMap<String, IndexSet<Entry>>;

/// Exact and wildcard keys of one distinct ingredient.
#[derive(Debug, Clone, PartialEq, Eq)]
struct IngredientKeys {
    exact: String,
    wildcard: String,
}

/// Bidirectional multi-index from ingredient keys to categorized wrappers.
pub struct RecipeMap {
    ingredients: Arc<IngredientRegistry>,
    order: Arc<CategoryOrder>,
    exact: Buckets,
    wildcard: Buckets,
    /// Exact keys used by each category, with the number of wrappers using them.
    keys_by_category: HashMap<String, IndexMap<String, usize>>,
    wrappers_by_category: HashMap<String, IndexMap<WrapperId, WrapperHandle>>,
    /// Categories reachable from an ingredient without it being a recipe
    /// ingredient (crafting items), by exact and by wildcard key.
    exact_links: HashMap<String, IndexSet<String>>,
    wildcard_links: HashMap<String, IndexSet<String>>,
}

impl RecipeMap {
    pub fn new(ingredients: Arc<IngredientRegistry>, order: Arc<CategoryOrder>) -> Self {
        Self {
            ingredients,
            order,
            exact: HashMap::new(),
            wildcard: HashMap::new(),
            keys_by_category: HashMap::new(),
            wrappers_by_category: HashMap::new(),
            exact_links: HashMap::new(),
            wildcard_links: HashMap::new(),
        }
    }

    /// Index `wrapper` under every ingredient in `groups`.
    ///
    /// Wildcard ingredients are expanded into their subtypes first. All keys
    /// are computed before anything is written, so a failure leaves the map
    /// untouched.
    pub fn add_recipe(
        &mut self,
        wrapper: &WrapperHandle,
        category: &RecipeCategory,
        groups: &[IngredientGroup],
    ) -> Result<()> {
        let keys = self.keys_for(groups)?;
        let uid = category.uid();
        let id = wrapper.id();

        for key in keys {
            self.wildcard
                .entry(key.wildcard)
                .or_default()
                .insert(Entry::new(uid, id));
            let fresh = self
                .exact
                .entry(key.exact.clone())
                .or_default()
                .insert(Entry::new(uid, id));
            if fresh {
                *self
                    .keys_by_category
                    .entry(uid.to_string())
                    .or_default()
                    .entry(key.exact)
                    .or_insert(0) += 1;
            }
        }

        self.wrappers_by_category
            .entry(uid.to_string())
            .or_default()
            .entry(id)
            .or_insert_with(|| wrapper.clone());
        Ok(())
    }

    /// Inverse of [`add_recipe`](Self::add_recipe). Buckets and key sets left
    /// empty are pruned.
    pub fn remove_recipe(
        &mut self,
        wrapper: &WrapperHandle,
        category: &RecipeCategory,
        groups: &[IngredientGroup],
    ) -> Result<()> {
        let keys = self.keys_for(groups)?;
        let uid = category.uid();
        let id = wrapper.id();
        let entry = Entry::new(uid, id);

        for key in keys {
            remove_entry(&mut self.exact, &key.exact, &entry);
            remove_entry(&mut self.wildcard, &key.wildcard, &entry);

            if let Some(counts) = self.keys_by_category.get_mut(uid) {
                if let Some(count) = counts.get_mut(&key.exact) {
                    *count -= 1;
                    if *count == 0 {
                        counts.shift_remove(&key.exact);
                    }
                }
                if counts.is_empty() {
                    self.keys_by_category.remove(uid);
                }
            }
        }

        if let Some(wrappers) = self.wrappers_by_category.get_mut(uid) {
            wrappers.shift_remove(&id);
            if wrappers.is_empty() {
                self.wrappers_by_category.remove(uid);
            }
        }
        Ok(())
    }

    /// Make `category` reachable from `ingredient` even though no recipe
    /// lists it, as for a furnace giving access to smelting.
    pub fn add_recipe_category(
        &mut self,
        category: &RecipeCategory,
        ingredient: &Ingredient,
    ) -> Result<()> {
        let exact = self.ingredients.unique_id(ingredient)?;
        let wildcard = self.ingredients.wildcard_id(ingredient)?;
        let uid = category.uid().to_string();
        self.exact_links.entry(exact).or_default().insert(uid.clone());
        self.wildcard_links.entry(wildcard).or_default().insert(uid);
        Ok(())
    }

    /// Categories with a recipe involving `ingredient`, or linked to it as a
    /// crafting item, in category registration order.
    pub fn categories_for_ingredient(&self, ingredient: &Ingredient) -> Result<Vec<String>> {
        let exact = self.ingredients.unique_id(ingredient)?;
        let wildcard = self.ingredients.wildcard_id(ingredient)?;

        let mut uids: IndexSet<String> = categories_in(self.exact.get(&exact));
        if uids.is_empty() {
            uids = categories_in(self.wildcard.get(&wildcard));
        }
        uids.extend(self.links(&exact, &wildcard).iter().cloned());

        let mut uids: Vec<String> = uids.into_iter().collect();
        self.order.sort(&mut uids);
        Ok(uids)
    }

    /// Categories linked to `ingredient` as a crafting item.
    pub fn linked_categories(&self, ingredient: &Ingredient) -> Result<Vec<String>> {
        let exact = self.ingredients.unique_id(ingredient)?;
        let wildcard = self.ingredients.wildcard_id(ingredient)?;
        Ok(self.links(&exact, &wildcard).iter().cloned().collect())
    }

    /// Wrappers indexed under `category`, in add order.
    pub fn wrappers_for_category(&self, category: &RecipeCategory) -> Vec<WrapperHandle> {
        self.wrappers_by_category
            .get(category.uid())
            .map(|wrappers| wrappers.values().cloned().collect())
            .unwrap_or_default()
    }

    /// Exact ingredient keys used by a category's recipes, in first-use order.
    pub fn keys_for_category(&self, uid: &str) -> Vec<&str> {
        self.keys_by_category
            .get(uid)
            .map(|keys| keys.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Number of non-empty exact-key buckets.
    pub fn exact_key_count(&self) -> usize {
        self.exact.len()
    }

    /// Number of non-empty wildcard-key buckets.
    pub fn wildcard_key_count(&self) -> usize {
        self.wildcard.len()
    }

    /// Total (category, wrapper) entries across exact and wildcard buckets.
    pub fn entry_count(&self) -> usize {
        self.exact.values().map(IndexSet::len).sum::<usize>()
            + self.wildcard.values().map(IndexSet::len).sum::<usize>()
    }

    /// Whether no recipe is indexed. Crafting-item links do not count.
    pub fn is_empty(&self) -> bool {
        self.exact.is_empty() && self.wrappers_by_category.is_empty()
    }

    fn links(&self, exact: &str, wildcard: &str) -> IndexSet<String> {
        match self.exact_links.get(exact) {
            Some(uids) if !uids.is_empty() => uids.clone(),
            _ => self.wildcard_links.get(wildcard).cloned().unwrap_or_default(),
        }
    }

    fn keys_for(&self, groups: &[IngredientGroup]) -> Result<Vec<IngredientKeys>> {
        let all: Vec<Ingredient> = groups.iter().flatten().cloned().collect();
        let expanded = self.ingredients.expand_subtypes(all);

        let mut seen = IndexSet::new();
        let mut keys = Vec::new();
        for ingredient in &expanded {
            let exact = self.ingredients.unique_id(ingredient)?;
            if seen.insert(exact.clone()) {
                keys.push(IngredientKeys {
                    exact,
                    wildcard: self.ingredients.wildcard_id(ingredient)?,
                });
            }
        }
        Ok(keys)
    }
}

fn remove_entry(buckets: &mut Buckets, key: &str, entry: &Entry) {
    if let Some(bucket) = buckets.get_mut(key) {
        bucket.swap_remove(entry);
        if bucket.is_empty() {
            buckets.remove(key);
        }
    }
}

fn categories_in(bucket: Option<&IndexSet<Entry>>) -> IndexSet<String> {
    bucket
        .map(|entries| entries.iter().map(|e| e.category.clone()).collect())
        .unwrap_or_default()
}
