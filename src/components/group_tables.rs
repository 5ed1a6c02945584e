//! Item Group Tables Component
//!
//! Collapsible two-per-row tables, one per item group.

use leptos::prelude::*;

use crate::config::GROUP_COLUMNS;
use crate::groups::{cell_text, chunk_rows};
use crate::models::ItemGroup;
use crate::store::{use_app_store, UiStateStoreFields};

/// One group: clickable heading plus its table.
/// The open/closed state is local and lost on reload.
#[component]
fn GroupTable(group: ItemGroup) -> impl IntoView {
    let (expanded, set_expanded) = signal(true);
    let rows = chunk_rows(&group.ordered_items, GROUP_COLUMNS);

    view! {
        <div class="item-set-container">
            <h3
                class="item-set-label"
                on:click=move |_| set_expanded.update(|v| *v = !*v)
            >
                {group.label}
            </h3>
            <table
                class="item-set-table"
                style:display=move || if expanded.get() { "" } else { "none" }
            >
                <tbody>
                    {rows.into_iter().map(|row| view! {
                        <tr>
                            {row.iter().map(|slot| view! { <td>{cell_text(slot)}</td> }).collect_view()}
                        </tr>
                    }).collect_view()}
                </tbody>
            </table>
        </div>
    }
}

/// All item groups
#[component]
pub fn ItemGroupTables() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div id="scrollable-tables">
            <For
                each=move || store.item_groups().get().into_iter().enumerate()
                key=|(index, group)| (*index, group.label.clone())
                children=move |(_, group)| view! { <GroupTable group=group /> }
            />
        </div>
    }
}
