//! Counts Bar Component

use leptos::prelude::*;

use crate::store::use_app_store;

/// "Matches: n" and "Selected: n", derived from the store
#[component]
pub fn CountsBar() -> impl IntoView {
    let store = use_app_store();
    let counts = Memo::new(move |_| store.read().counts());

    view! {
        <div class="counts">
            <span id="match-count">{move || counts.get().matches_text()}</span>
            <span id="selected-count">{move || counts.get().selected_text()}</span>
        </div>
    }
}
