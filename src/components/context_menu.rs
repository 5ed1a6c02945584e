//! Reorder Context Menu Component
//!
//! Overlay opened by right-clicking an item. Its two actions move the
//! selected items before or after that item on the server, then reload.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_contextmenu::{bind_global_click_dismiss, close_menu, make_overlay_style};

use crate::browser;
use crate::commands;
use crate::config::{
    ApiConfig, CONTEXT_MENU_ID, CONTEXT_MENU_SELECTOR, TARGET_UNRESOLVED_MESSAGE, UPDATE_FAILED_MESSAGE,
};
use crate::context::AppContext;
use crate::reorder::InsertPlacement;
use crate::store::{use_app_store, AppStore};

/// Validate, submit and reload. Local state is never patched.
fn submit_reorder(api: ApiConfig, store: AppStore, placement: InsertPlacement) {
    let prepared = store.read_untracked().prepare_reorder(placement);
    let request = match prepared {
        Ok(request) => request,
        Err(e) if e.is_silent() => {
            web_sys::console::log_1(
                &format!("[REORDER] No items selected or target item not specified ({})", e).into(),
            );
            return;
        }
        Err(e) => {
            web_sys::console::error_1(&format!("[REORDER] {}", e).into());
            browser::alert(TARGET_UNRESOLVED_MESSAGE);
            return;
        }
    };

    let (target, selected) = {
        let state = store.read_untracked();
        (state.target.clone(), state.selection.entries().to_vec())
    };
    web_sys::console::log_1(&format!(
        "[REORDER] Action={}, selected={:?}, target={:?}, insert position={}",
        placement.as_str(), selected, target, request.target_position
    ).into());

    spawn_local(async move {
        match commands::update_order(&api, &request).await {
            Ok(()) => {
                web_sys::console::log_1(&"[REORDER] Update successful. Reloading page.".into());
                browser::reload_page();
            }
            Err(e) => {
                web_sys::console::error_1(&format!("[REORDER] Update failed: {}", e).into());
                browser::alert(UPDATE_FAILED_MESSAGE);
            }
        }
    });
}

#[component]
pub fn ReorderMenu() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let menu = ctx.menu;

    bind_global_click_dismiss(menu, CONTEXT_MENU_SELECTOR);

    let insert = move |placement: InsertPlacement| {
        close_menu(&menu);
        submit_reorder(ctx.api, store, placement);
    };

    view! {
        <div id=CONTEXT_MENU_ID class="context-menu" style=make_overlay_style(menu)>
            <button id="insert-before" on:click=move |_| insert(InsertPlacement::Before)>
                "Insert before"
            </button>
            <button id="insert-after" on:click=move |_| insert(InsertPlacement::After)>
                "Insert after"
            </button>
        </div>
    }
}
