//! Item stacks.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::RecipedexError;
use crate::ingredient::IngredientHelper;

use super::{display_name_from_id, namespace_of};

/// Metadata value meaning "any variant of this item".
pub const WILDCARD_META: u32 = 32767;

/// A stack of items: an item id, a variant (metadata), optional tag data
/// and a count.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemStack {
    pub item: String,
    pub meta: u32,
    pub nbt: Option<String>,
    pub count: u32,
}

impl ItemStack {
    /// A single item with metadata 0.
    pub fn new(item: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            meta: 0,
            nbt: None,
            count: 1,
        }
    }

    /// A stack matching every variant of `item`.
    pub fn wildcard(item: impl Into<String>) -> Self {
        Self::new(item).with_meta(WILDCARD_META)
    }

    pub fn with_meta(mut self, meta: u32) -> Self {
        self.meta = meta;
        self
    }

    pub fn with_nbt(mut self, nbt: impl Into<String>) -> Self {
        self.nbt = Some(nbt.into());
        self
    }

    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    pub fn is_wildcard(&self) -> bool {
        self.meta == WILDCARD_META
    }
}

impl fmt::Display for ItemStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.item)?;
        if self.is_wildcard() {
            write!(f, "@*")?;
        } else if self.meta != 0 {
            write!(f, "@{}", self.meta)?;
        }
        if self.count != 1 {
            write!(f, " x{}", self.count)?;
        }
        Ok(())
    }
}

/// Parses `item`, `item@meta` and `item@*`.
impl FromStr for ItemStack {
    type Err = RecipedexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (item, meta) = match s.rsplit_once('@') {
            Some((item, "*")) => (item, WILDCARD_META),
            Some((item, meta)) => {
                let meta = meta
                    .parse::<u32>()
                    .map_err(|_| RecipedexError::PackValidationError {
                        message: format!("Invalid item metadata in '{}'", s),
                    })?;
                (item, meta)
            }
            None => (s, 0),
        };

        if item.is_empty() {
            return Err(RecipedexError::PackValidationError {
                message: format!("Missing item id in '{}'", s),
            });
        }

        Ok(Self::new(item).with_meta(meta))
    }
}

/// Helper for [`ItemStack`] ingredients.
///
/// Holds the known subtypes (metadata values) of each item so wildcard
/// stacks can be expanded into the concrete variants they stand for.
#[derive(Debug, Clone, Default)]
pub struct ItemStackHelper {
    subtypes: HashMap<String, Vec<u32>>,
}

impl ItemStackHelper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare the metadata variants of an item.
    pub fn with_subtypes(mut self, item: impl Into<String>, metas: Vec<u32>) -> Self {
        self.subtypes.insert(item.into(), metas);
        self
    }

    pub fn subtypes(&self, item: &str) -> &[u32] {
        self.subtypes.get(item).map(Vec::as_slice).unwrap_or(&[])
    }

    fn meta_matches(candidate: &ItemStack, to_match: &ItemStack) -> bool {
        candidate.is_wildcard() || to_match.is_wildcard() || candidate.meta == to_match.meta
    }
}

impl IngredientHelper<ItemStack> for ItemStackHelper {
    fn unique_id(&self, stack: &ItemStack) -> String {
        let mut id = if stack.is_wildcard() {
            format!("{}:*", stack.item)
        } else {
            format!("{}:{}", stack.item, stack.meta)
        };
        if let Some(nbt) = &stack.nbt {
            id.push(':');
            id.push_str(nbt);
        }
        id
    }

    fn wildcard_id(&self, stack: &ItemStack) -> String {
        stack.item.clone()
    }

    fn get_match(&self, candidates: &[&ItemStack], to_match: &ItemStack) -> Option<usize> {
        candidates.iter().position(|candidate| {
            candidate.item == to_match.item
                && Self::meta_matches(candidate, to_match)
                && (candidate.nbt.is_none() || candidate.nbt == to_match.nbt)
        })
    }

    fn expand_subtypes(&self, stacks: Vec<ItemStack>) -> Vec<ItemStack> {
        let mut expanded = Vec::with_capacity(stacks.len());
        for stack in stacks {
            let metas = self.subtypes(&stack.item);
            if stack.is_wildcard() && !metas.is_empty() {
                expanded.extend(metas.iter().map(|&meta| stack.clone().with_meta(meta)));
            } else {
                expanded.push(stack);
            }
        }
        expanded
    }

    fn display_name(&self, stack: &ItemStack) -> String {
        display_name_from_id(&stack.item)
    }

    fn mod_id(&self, stack: &ItemStack) -> String {
        namespace_of(&stack.item)
    }

    fn error_info(&self, stack: &ItemStack) -> String {
        match &stack.nbt {
            Some(nbt) => format!("{} {}", stack, nbt),
            None => stack.to_string(),
        }
    }
}
