//! Recipe categories.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A named group of recipes sharing a layout and behavior.
///
/// Identified by a globally unique UID; immutable once registered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecipeCategory {
    uid: String,
    title: String,
    mod_name: String,
}

impl RecipeCategory {
    pub fn new(uid: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            title: title.into(),
            mod_name: "minecraft".to_string(),
        }
    }

    pub fn with_mod_name(mut self, mod_name: impl Into<String>) -> Self {
        self.mod_name = mod_name.into();
        self
    }

    pub fn uid(&self) -> &str {
        &self.uid
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn mod_name(&self) -> &str {
        &self.mod_name
    }
}

/// Orders category UIDs by the order their categories were registered.
///
/// Unknown UIDs sort after every registered one.
#[derive(Debug, Clone, Default)]
pub struct CategoryOrder {
    positions: HashMap<String, usize>,
}

impl CategoryOrder {
    pub fn new<'a>(categories: impl IntoIterator<Item = &'a RecipeCategory>) -> Self {
        let positions = categories
            .into_iter()
            .enumerate()
            .map(|(i, category)| (category.uid().to_string(), i))
            .collect();
        Self { positions }
    }

    pub fn position(&self, uid: &str) -> usize {
        self.positions.get(uid).copied().unwrap_or(usize::MAX)
    }

    /// Stable sort of `uids` into registration order.
    pub fn sort(&self, uids: &mut [String]) {
        uids.sort_by_key(|uid| self.position(uid));
    }
}
