//! Ticket Form Component
//!
//! Create/edit form. Hidden while closed; its fields mirror the store so the
//! client core can fill and clear them.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::client::UiEvent;
use crate::context::use_app_context;
use crate::error::ClientError;
use crate::roles::ElementRole;
use crate::store::{
    store_set_form_description, store_set_form_name, use_client_store, ClientStateStoreFields,
    TicketFormStoreFields,
};

/// Every named field of `form`, in document order
fn named_fields(form: &web_sys::HtmlFormElement) -> Result<Vec<(String, String)>, ClientError> {
    let data = web_sys::FormData::new_with_form(form).map_err(ClientError::dom)?;
    let entries = js_sys::try_iter(&data)
        .map_err(ClientError::dom)?
        .ok_or_else(|| ClientError::Dom("FormData is not iterable".to_string()))?;

    let mut fields = Vec::new();
    for entry in entries {
        let entry: js_sys::Array = entry.map_err(ClientError::dom)?.unchecked_into();
        let key = entry.get(0).as_string().unwrap_or_default();
        // File inputs have no string value
        if let Some(value) = entry.get(1).as_string() {
            fields.push((key, value));
        }
    }
    Ok(fields)
}

#[component]
pub fn TicketFormPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_client_store();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let fields = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlFormElement>().ok())
            .map(|form| named_fields(&form));
        let fields = match fields {
            Some(Ok(fields)) => fields,
            Some(Err(e)) => {
                log::warn!("Reading form fields failed, using form state: {}", e);
                store.form().read_untracked().fields()
            }
            None => store.form().read_untracked().fields(),
        };
        ctx.dispatch(UiEvent::SubmitForm(fields));
    };

    view! {
        <Show when=move || store.form().open().get()>
            <form class="ticket-form" data-form=ElementRole::Form.as_attr() on:submit=on_submit>
                <button
                    type="button"
                    class="close-form-btn"
                    data-element=ElementRole::CloseForm.as_attr()
                >
                    "×"
                </button>
                <input
                    type="text"
                    name="name"
                    placeholder="Ticket name..."
                    prop:value=move || store.form().name().get()
                    on:input=move |ev| store_set_form_name(&store, event_target_value(&ev))
                />
                <textarea
                    name="description"
                    placeholder="Description..."
                    prop:value=move || store.form().description().get()
                    on:input=move |ev| store_set_form_description(&store, event_target_value(&ev))
                ></textarea>
                <button type="submit">"Save"</button>
            </form>
        </Show>
    }
}
