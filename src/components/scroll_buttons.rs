//! Scroll Buttons Component
//!
//! Page the item list up or down by one container height.

use leptos::html;
use leptos::prelude::*;

use crate::browser::{scroll_by_page, ScrollDirection};

#[component]
pub fn ScrollButtons(container: NodeRef<html::Div>) -> impl IntoView {
    let scroll = move |direction: ScrollDirection| {
        if let Some(el) = container.get_untracked() {
            scroll_by_page(&el, direction);
        }
    };

    view! {
        <div class="scroll-buttons">
            <button id="scroll-up" on:click=move |_| scroll(ScrollDirection::Up)>"▲"</button>
            <button id="scroll-down" on:click=move |_| scroll(ScrollDirection::Down)>"▼"</button>
        </div>
    }
}
