//! Ticket List Component
//!
//! Rebuilds the rows from the cached ticket list. Row controls carry their
//! role and ticket id as attributes; clicks are handled by the delegated
//! listener in `App`.

use leptos::prelude::*;

use crate::roles::ElementRole;
use crate::store::{use_client_store, TicketRow};

/// A single ticket row
#[component]
fn TicketRowView(row: TicketRow) -> impl IntoView {
    let id = row.id.clone();

    view! {
        <li class=if row.checked { "ticket-row completed" } else { "ticket-row" }>
            <div class="ticket-row-main">
                <input
                    type="checkbox"
                    data-element=ElementRole::StatusCheckbox.as_attr()
                    data-id=id.clone()
                    prop:checked=row.checked
                />
                <span class="ticket-name" data-element=ElementRole::TicketName.as_attr() data-id=id.clone()>
                    {row.name}
                </span>
                <span class="ticket-created">{row.created}</span>
                <button class="edit-btn" data-element=ElementRole::Edit.as_attr() data-id=id.clone()>
                    "✎"
                </button>
                <button class="delete-btn" data-element=ElementRole::Delete.as_attr() data-id=id>
                    "×"
                </button>
            </div>
            <div
                class="ticket-description"
                data-element=ElementRole::Description.as_attr()
                style:display=if row.expanded { "block" } else { "none" }
            >
                {row.description}
            </div>
        </li>
    }
}

#[component]
pub fn TicketList() -> impl IntoView {
    let store = use_client_store();
    let rows = move || store.with(|state| state.rows());

    view! {
        <ul class="ticket-list" data-element=ElementRole::TicketList.as_attr()>
            <For
                each=rows
                // Every displayed field is in the key so any change rebuilds the row
                key=|row| row.clone()
                children=move |row| view! { <TicketRowView row=row /> }
            />
        </ul>
        <Show when=move || store.with(|state| state.tickets.is_empty())>
            <p class="ticket-empty">"No tickets yet."</p>
        </Show>
        <p class="ticket-count">{move || format!("{} tickets", store.with(|state| state.tickets.len()))}</p>
    }
}
