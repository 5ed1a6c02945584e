//! UI Components
//!
//! Leptos components for the reorder page.

mod group_tables;
mod item_list;
mod search_box;
mod counts_bar;
mod scroll_buttons;
mod context_menu;

pub use group_tables::ItemGroupTables;
pub use item_list::ItemList;
pub use search_box::SearchBox;
pub use counts_bar::CountsBar;
pub use scroll_buttons::ScrollButtons;
pub use context_menu::ReorderMenu;
