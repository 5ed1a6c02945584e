//! Search Box Component

use leptos::prelude::*;

use crate::store::{store_set_search, use_app_store, UiStateStoreFields};

/// Label filter input. Every keystroke re-filters the list.
#[component]
pub fn SearchBox() -> impl IntoView {
    let store = use_app_store();

    view! {
        <input
            id="item-search"
            type="text"
            placeholder="Search..."
            on:input=move |ev| {
                let raw = event_target_value(&ev);
                store_set_search(&store, &raw);
                web_sys::console::log_1(&format!(
                    "[SEARCH] Term {:?}", store.search().read_untracked().as_str()
                ).into());
            }
        />
    }
}
