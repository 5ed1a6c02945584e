//! Field Order Frontend App
//!
//! Group tables on the left, searchable item list on the right,
//! context menu overlay on top.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_contextmenu::{bind_global_keydown, create_menu_signals};
use reactive_stores::Store;

use crate::browser;
use crate::commands;
use crate::components::{CountsBar, ItemGroupTables, ItemList, ReorderMenu, ScrollButtons, SearchBox};
use crate::config::ApiConfig;
use crate::context::AppContext;
use crate::store::{store_clear_selection, AppStore, LoadState, UiState, UiStateStoreFields};

/// Fetch items and groups once. No retry on failure.
async fn load_page(api: ApiConfig, store: AppStore) {
    web_sys::console::log_1(&format!("[LOAD] Loading fields from {}", api.load_fields_url).into());
    let result = commands::load_fields(&api).await;
    match &result {
        Ok(data) => web_sys::console::log_1(&format!(
            "[LOAD] Loaded {} items, {} groups", data.items.len(), data.item_sets.len()
        ).into()),
        Err(e) => web_sys::console::error_1(&format!("[LOAD] Failed: {}", e).into()),
    }

    let alert = store.write().apply_load_result(result);
    if let Some(message) = alert {
        browser::alert(message);
    }
}

#[component]
pub fn App() -> impl IntoView {
    let store: AppStore = Store::new(UiState::default());
    let ctx = AppContext::new(ApiConfig::default(), create_menu_signals());

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Escape drops the whole selection
    bind_global_keydown("Escape", move || {
        web_sys::console::log_1(&"[SELECT] Escape, clearing selection".into());
        store_clear_selection(&store);
    });

    // Load on mount; a successful reorder reloads the whole page
    Effect::new(move |_| {
        spawn_local(load_page(ctx.api, store));
    });

    let loaded = move || store.load_state().get() == LoadState::Loaded;
    let list_container = NodeRef::<html::Div>::new();

    view! {
        <div class="app-layout">
            <section class="item-sets">
                <Show when=loaded>
                    <ItemGroupTables />
                </Show>
            </section>

            <main class="main-content">
                <SearchBox />
                <CountsBar />
                <ScrollButtons container=list_container />
                <div id="item-list-container" node_ref=list_container>
                    <Show when=loaded>
                        <ItemList />
                    </Show>
                </div>
            </main>

            <ReorderMenu />
        </div>
    }
}
