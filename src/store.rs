//! Global Application State Store
//!
//! `UiState` owns everything the page shows: loaded data, selection,
//! search term and reorder target. Components render from it and
//! change it only through the methods below.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::commands::ApiError;
use crate::config::LOAD_FAILED_MESSAGE;
use crate::filter::{self, SearchTerm};
use crate::models::{Item, ItemGroup, ItemId, LoadFieldsResponse, UpdateOrderRequest};
use crate::reorder::{self, InsertPlacement, ReorderError};
use crate::selection::{Modifiers, Selection};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded,
    Failed,
}

/// Numbers shown in the counts bar
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Counts {
    pub visible: usize,
    pub selected: usize,
}

impl Counts {
    pub fn matches_text(&self) -> String {
        format!("Matches: {}", self.visible)
    }

    pub fn selected_text(&self) -> String {
        format!("Selected: {}", self.selected)
    }
}

/// Page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    /// All items, in server order
    pub items: Vec<Item>,
    pub item_groups: Vec<ItemGroup>,
    pub selection: Selection,
    pub search: SearchTerm,
    /// Last right-clicked item; survives the menu closing
    pub target: Option<ItemId>,
    pub load_state: LoadState,
}

impl UiState {
    pub fn apply_loaded(&mut self, data: LoadFieldsResponse) {
        self.items = data.items;
        self.item_groups = data.item_sets;
        self.selection.clear();
        self.target = None;
        self.load_state = LoadState::Loaded;
    }

    /// Nothing is rendered after a failed load
    pub fn mark_load_failed(&mut self) {
        self.items.clear();
        self.item_groups.clear();
        self.load_state = LoadState::Failed;
    }

    /// Settle the initial load. Returns the alert to show, if any.
    pub fn apply_load_result(&mut self, result: Result<LoadFieldsResponse, ApiError>) -> Option<&'static str> {
        match result {
            Ok(data) => {
                self.apply_loaded(data);
                None
            }
            Err(_) => {
                self.mark_load_failed();
                Some(LOAD_FAILED_MESSAGE)
            }
        }
    }

    pub fn visible_items(&self) -> Vec<&Item> {
        filter::visible_items(&self.items, &self.search)
    }

    pub fn is_visible(&self, id: &ItemId) -> bool {
        self.items
            .iter()
            .find(|item| &item.id == id)
            .is_some_and(|item| self.search.matches(item))
    }

    pub fn is_selected(&self, id: &ItemId) -> bool {
        self.selection.contains(id)
    }

    /// Click on a visible item. Clicks on hidden or unknown items are ignored.
    pub fn click_item(&mut self, id: &ItemId, modifiers: Modifiers) {
        let visible = filter::visible_items(&self.items, &self.search);
        let Some(index) = visible.iter().position(|item| &item.id == id) else {
            return;
        };
        self.selection.click(&visible, index, modifiers, self.search.is_active());
    }

    /// Escape: drop the whole selection, hidden items included
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Hidden items keep their selected state
    pub fn set_search(&mut self, raw: &str) {
        self.search = SearchTerm::new(raw);
    }

    pub fn set_target(&mut self, id: ItemId) {
        self.target = Some(id);
    }

    pub fn counts(&self) -> Counts {
        Counts {
            visible: self.visible_items().len(),
            selected: self.selection.len(),
        }
    }

    pub fn prepare_reorder(&self, placement: InsertPlacement) -> Result<UpdateOrderRequest, ReorderError> {
        reorder::build_request(&self.selection, self.target.as_ref(), &self.items, placement)
    }
}

/// Type alias for the store
pub type AppStore = Store<UiState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_click_item(store: &AppStore, id: &ItemId, modifiers: Modifiers) {
    store.write().click_item(id, modifiers);
}

pub fn store_clear_selection(store: &AppStore) {
    store.write().clear_selection();
}

pub fn store_set_search(store: &AppStore, raw: &str) {
    store.write().set_search(raw);
}

pub fn store_set_target(store: &AppStore, id: ItemId) {
    store.write().set_target(id);
}
