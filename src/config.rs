//! Configuration
//!
//! Endpoint URLs and UI constants. Nothing here is read at runtime.

/// Server endpoints used by the commands layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiConfig {
    pub load_fields_url: &'static str,
    pub update_order_url: &'static str,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            load_fields_url: "/load-fields",
            update_order_url: "/update-order",
        }
    }
}

/// Appended to the label of deleted items
pub const DELETED_MARKER: &str = " (deleted)";

/// Cells per row in the group tables
pub const GROUP_COLUMNS: usize = 2;

/// DOM id of the context menu overlay
pub const CONTEXT_MENU_ID: &str = "context-menu";
pub const CONTEXT_MENU_SELECTOR: &str = "#context-menu";

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load fields. Please try again.";
pub const UPDATE_FAILED_MESSAGE: &str = "An error occurred while updating the order.";
pub const TARGET_UNRESOLVED_MESSAGE: &str = "Target item position is undefined.";
