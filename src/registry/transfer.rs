//! Recipe transfer handler table.
//!
//! Transfer handlers move a recipe's ingredients into a container's crafting
//! slots. Only their lookup lives here; the transfer itself belongs to the
//! handler.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::error;

/// Category UID under which a handler serves every category of its container.
pub const UNIVERSAL_RECIPE_TRANSFER_UID: &str = "universal recipe transfer handler";

/// Moves recipes into one container type.
pub trait RecipeTransferHandler: Send + Sync {
    /// The container type this handler fills.
    fn container(&self) -> &str;

    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// A transfer handler described by slot ranges.
///
/// `recipe_slots` are the container's crafting grid slots and
/// `inventory_slots` the slots ingredients may be taken from, each as
/// `(first slot, slot count)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotRangeTransfer {
    pub container: String,
    pub recipe_slots: (usize, usize),
    pub inventory_slots: (usize, usize),
}

impl SlotRangeTransfer {
    pub fn new(
        container: impl Into<String>,
        recipe_slots: (usize, usize),
        inventory_slots: (usize, usize),
    ) -> Self {
        Self {
            container: container.into(),
            recipe_slots,
            inventory_slots,
        }
    }

    /// Slot indices of the crafting grid.
    pub fn recipe_slot_indices(&self) -> std::ops::Range<usize> {
        self.recipe_slots.0..self.recipe_slots.0 + self.recipe_slots.1
    }

    /// Slot indices ingredients are drawn from.
    pub fn inventory_slot_indices(&self) -> std::ops::Range<usize> {
        self.inventory_slots.0..self.inventory_slots.0 + self.inventory_slots.1
    }
}

impl RecipeTransferHandler for SlotRangeTransfer {
    fn container(&self) -> &str {
        &self.container
    }

    fn name(&self) -> &str {
        "slot range transfer"
    }
}

/// Transfer handlers keyed by (container type, category UID).
#[derive(Default)]
pub struct TransferHandlers {
    handlers: HashMap<(String, String), Arc<dyn RecipeTransferHandler>>,
}

impl TransferHandlers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for a category, or for every category of its
    /// container when `category_uid` is [`UNIVERSAL_RECIPE_TRANSFER_UID`].
    ///
    /// The first handler registered for a key wins.
    pub fn register(&mut self, category_uid: &str, handler: Arc<dyn RecipeTransferHandler>) {
        let key = (handler.container().to_string(), category_uid.to_string());
        if self.handlers.contains_key(&key) {
            error!(
                "A Recipe Transfer Handler has already been registered for '{}': {}",
                key.1,
                key.0
            );
            return;
        }
        self.handlers.insert(key, handler);
    }

    /// The handler for a container and category, falling back to the
    /// container's universal handler.
    pub fn get(
        &self,
        container: &str,
        category_uid: &str,
    ) -> Option<&Arc<dyn RecipeTransferHandler>> {
        self.handlers
            .get(&(container.to_string(), category_uid.to_string()))
            .or_else(|| {
                self.handlers.get(&(
                    container.to_string(),
                    UNIVERSAL_RECIPE_TRANSFER_UID.to_string(),
                ))
            })
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> TransferHandlers {
        let mut table = TransferHandlers::new();
        table.register(
            "minecraft.crafting",
            Arc::new(SlotRangeTransfer::new("crafting_table", (1, 9), (10, 36))),
        );
        table.register(
            UNIVERSAL_RECIPE_TRANSFER_UID,
            Arc::new(SlotRangeTransfer::new("crafting_table", (0, 1), (1, 45))),
        );
        table
    }

    #[test]
    fn exact_key_wins() {
        let table = table();
        let handler = table.get("crafting_table", "minecraft.crafting").unwrap();
        assert_eq!(handler.container(), "crafting_table");
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn falls_back_to_universal() {
        let table = table();
        assert!(table.get("crafting_table", "minecraft.smelting").is_some());
        assert!(table.get("furnace", "minecraft.smelting").is_none());
    }

    #[test]
    fn first_registration_wins() {
        let mut table = TransferHandlers::new();
        table.register(
            "minecraft.smelting",
            Arc::new(SlotRangeTransfer::new("furnace", (0, 1), (3, 36))),
        );
        table.register(
            "minecraft.smelting",
            Arc::new(SlotRangeTransfer::new("furnace", (0, 2), (3, 36))),
        );
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn slot_ranges() {
        let transfer = SlotRangeTransfer::new("crafting_table", (1, 9), (10, 36));
        assert_eq!(transfer.recipe_slot_indices(), 1..10);
        assert_eq!(transfer.inventory_slot_indices().len(), 36);
    }
}
