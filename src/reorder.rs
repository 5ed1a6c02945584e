//! Reorder Command
//!
//! Turns the selection plus a right-clicked target into an
//! `/update-order` request.

use thiserror::Error;

use crate::models::{Item, ItemId, UpdateOrderRequest};
use crate::selection::Selection;

/// Where the selected items go relative to the target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertPlacement {
    Before,
    After,
}

impl InsertPlacement {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsertPlacement::Before => "before",
            InsertPlacement::After => "after",
        }
    }

    pub fn insertion_index(&self, target_position: i64) -> i64 {
        match self {
            InsertPlacement::Before => target_position,
            InsertPlacement::After => target_position.saturating_add(1),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReorderError {
    #[error("no items selected")]
    NothingSelected,
    #[error("no target item specified")]
    NoTarget,
    #[error("target item {0} has no known position")]
    TargetUnresolved(ItemId),
}

impl ReorderError {
    /// Guarded no-ops are logged only; anything else is shown to the user
    pub fn is_silent(&self) -> bool {
        matches!(self, ReorderError::NothingSelected | ReorderError::NoTarget)
    }
}

/// Build the update request. The target is looked up among all loaded
/// items, whether or not the search currently hides it.
pub fn build_request(
    selection: &Selection,
    target: Option<&ItemId>,
    items: &[Item],
    placement: InsertPlacement,
) -> Result<UpdateOrderRequest, ReorderError> {
    if selection.is_empty() {
        return Err(ReorderError::NothingSelected);
    }
    let target = target.ok_or(ReorderError::NoTarget)?;
    let target_position = items
        .iter()
        .find(|item| &item.id == target)
        .map(|item| item.current_position)
        .ok_or_else(|| ReorderError::TargetUnresolved(target.clone()))?;

    Ok(UpdateOrderRequest {
        moving_ids: selection.ids(),
        target_position: placement.insertion_index(target_position),
    })
}
