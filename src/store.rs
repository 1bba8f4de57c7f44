//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use std::collections::HashSet;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::client::Workflow;
use crate::models::Ticket;

/// Contents of the ticket form
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct TicketForm {
    pub open: bool,
    pub name: String,
    pub description: String,
}

impl TicketForm {
    /// Named fields in form order, as they are posted
    pub fn fields(&self) -> Vec<(String, String)> {
        vec![
            ("name".to_string(), self.name.clone()),
            ("description".to_string(), self.description.clone()),
        ]
    }
}

/// Whole client state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct ClientState {
    /// Last full list returned by the backend
    pub tickets: Vec<Ticket>,
    pub form: TicketForm,
    /// Create/edit mode of the form
    pub workflow: Workflow,
    /// Ids of rows whose description is shown
    pub expanded: HashSet<String>,
}

/// One rendered list row
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TicketRow {
    pub id: String,
    pub name: String,
    pub description: String,
    pub created: String,
    pub checked: bool,
    pub expanded: bool,
}

impl ClientState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the cached list wholesale.
    ///
    /// Expanded rows survive a refresh as long as their ticket does.
    pub fn replace_tickets(&mut self, tickets: Vec<Ticket>) {
        self.expanded.retain(|id| tickets.iter().any(|t| &t.id == id));
        self.tickets = tickets;
    }

    pub fn toggle_description(&mut self, id: &str) {
        if !self.expanded.remove(id) {
            self.expanded.insert(id.to_string());
        }
    }

    /// Rows to display, in backend order
    pub fn rows(&self) -> Vec<TicketRow> {
        self.tickets
            .iter()
            .map(|t| TicketRow {
                id: t.id.clone(),
                name: t.name.clone(),
                description: t.description.clone(),
                created: t.created.clone(),
                checked: t.is_checked(),
                expanded: self.expanded.contains(&t.id),
            })
            .collect()
    }

    pub fn open_form(&mut self) {
        self.form.open = true;
    }

    pub fn close_form(&mut self) {
        self.form.open = false;
    }

    pub fn fill_form(&mut self, name: &str, description: &str) {
        self.form.name = name.to_string();
        self.form.description = description.to_string();
    }

    pub fn clear_form(&mut self) {
        self.form.name.clear();
        self.form.description.clear();
    }
}

/// Type alias for the store
pub type ClientStore = Store<ClientState>;

/// Get the client store from context
pub fn use_client_store() -> ClientStore {
    expect_context::<ClientStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Mirror an input's value into the form without touching the rest of the state
pub fn store_set_form_name(store: &ClientStore, name: String) {
    store.form().name().set(name);
}

pub fn store_set_form_description(store: &ClientStore, description: String) {
    store.form().description().set(description);
}
