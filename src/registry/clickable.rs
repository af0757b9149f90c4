//! Clickable screen areas that open recipe categories.

use serde::{Deserialize, Serialize};

/// A rectangle on a container screen that shows recipes of some categories
/// when clicked.
///
/// The rectangle is half-open: `left <= x < right` and `top <= y < bottom`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeClickableArea {
    pub top: i32,
    pub left: i32,
    pub bottom: i32,
    pub right: i32,
    pub category_uids: Vec<String>,
}

impl RecipeClickableArea {
    pub fn new(top: i32, left: i32, bottom: i32, right: i32, category_uids: Vec<String>) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
            category_uids,
        }
    }

    /// Whether the point lies inside the area.
    pub fn check_hover(&self, x: i32, y: i32) -> bool {
        self.left <= x && x < self.right && self.top <= y && y < self.bottom
    }
}
