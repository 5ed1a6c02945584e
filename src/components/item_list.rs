//! Item List Component
//!
//! Flat selectable list of every item. Rows filtered out by the search
//! stay mounted but hidden, so their selection is kept.

use leptos::prelude::*;
use leptos_contextmenu::{make_on_contextmenu, make_on_shift_mousedown};

use crate::context::AppContext;
use crate::models::Item;
use crate::selection::Modifiers;
use crate::store::{store_click_item, store_set_target, use_app_store, UiStateStoreFields};

/// A single item row
#[component]
fn ItemRow(item: Item) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let id = item.id.clone();
    let label = item.display_label();
    let current = item.current_position;
    let starting = item.starting_position;

    let is_visible = {
        let id = id.clone();
        move || store.read().is_visible(&id)
    };
    let is_selected = {
        let id = id.clone();
        move || store.read().is_selected(&id)
    };

    let on_click = {
        let id = id.clone();
        move |ev: web_sys::MouseEvent| {
            let modifiers = Modifiers::from_event(&ev);
            store_click_item(&store, &id, modifiers);
            web_sys::console::log_1(&format!(
                "[SELECT] Click on {} (shift={}, toggle={}), {} selected",
                id, modifiers.shift, modifiers.toggle, store.selection().read_untracked().len()
            ).into());
        }
    };

    let on_contextmenu = {
        let id = id.clone();
        make_on_contextmenu(ctx.menu, move || {
            web_sys::console::log_1(&format!("[MENU] Target set to {}", id).into());
            store_set_target(&store, id.clone());
        })
    };

    view! {
        <div
            class="item"
            class:selected=is_selected
            style:display=move || if is_visible() { "" } else { "none" }
            data-id=id.to_string()
            data-current-position=current.to_string()
            on:mousedown=make_on_shift_mousedown()
            on:click=on_click
            on:contextmenu=on_contextmenu
        >
            <div class="item-left">
                <span class="item-label">{label}</span>
            </div>
            <div class="item-right">
                <span class="position-info">{format!("Current: {}", current)}</span>
                <span class="position-info">{format!("Starting: {}", starting)}</span>
            </div>
        </div>
    }
}

/// Item list
#[component]
pub fn ItemList() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div id="item-list">
            <For
                each=move || store.items().get()
                key=|item| item.id.clone()
                children=move |item| view! { <ItemRow item=item /> }
            />
        </div>
    }
}
