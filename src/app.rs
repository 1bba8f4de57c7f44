//! Ticket Client App
//!
//! Root component: owns the store, provides context, and hosts the
//! delegated click/change/pointer listeners for the whole widget.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::{TicketFormPanel, TicketList};
use crate::config::ClientConfig;
use crate::context::AppContext;
use crate::roles::{change_event, click_event, role_of, ElementRole};
use crate::store::ClientState;

/// Element an event was fired on
fn event_element(ev: &web_sys::Event) -> Option<web_sys::Element> {
    ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok())
}

fn set_body_cursor(cursor: &str) {
    let body = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body());
    if let Some(body) = body {
        if let Err(e) = body.style().set_property("cursor", cursor) {
            log::debug!("Setting cursor failed: {:?}", e);
        }
    }
}

#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    let store = reactive_stores::Store::new(ClientState::new());
    let ctx = AppContext::new(store, config);

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Load tickets on mount
    Effect::new(move |_| {
        log::info!("Loading tickets");
        ctx.reload();
    });

    let on_click = move |ev: web_sys::MouseEvent| {
        let Some((role, id)) = event_element(&ev).and_then(|el| role_of(&el)) else { return };
        if let Some(event) = click_event(role, id) {
            ctx.dispatch(event);
        }
    };

    let on_change = move |ev: web_sys::Event| {
        let Some(target) = event_element(&ev) else { return };
        let Some((role, id)) = role_of(&target) else { return };
        let checked = target
            .dyn_ref::<web_sys::HtmlInputElement>()
            .map(|input| input.checked())
            .unwrap_or_default();
        if let Some(event) = change_event(role, id, checked) {
            ctx.dispatch(event);
        }
    };

    let on_mousemove = move |ev: web_sys::MouseEvent| {
        let cursor = event_element(&ev)
            .and_then(|el| role_of(&el))
            .and_then(|(role, _)| role.cursor())
            .unwrap_or("");
        set_body_cursor(cursor);
    };

    view! {
        <div class="ticket-client" on:click=on_click on:change=on_change on:mousemove=on_mousemove>
            <header class="ticket-header">
                <h1>"Tickets"</h1>
                <button class="add-ticket-btn" data-element=ElementRole::AddTicket.as_attr()>
                    "+ Add ticket"
                </button>
            </header>

            <TicketFormPanel />

            <TicketList />
        </div>
    }
}
