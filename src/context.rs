//! Application Context
//!
//! Shared handle provided via Leptos Context API. Runs UI events through the
//! client core and executes the requests it asks for.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::client::{BrowserIdentity, Command, UiEvent};
use crate::commands;
use crate::config::ClientConfig;
use crate::store::{ClientState, ClientStore};

#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: ClientStore,
    config: StoredValue<ClientConfig>,
}

impl AppContext {
    pub fn new(store: ClientStore, config: ClientConfig) -> Self {
        Self {
            store,
            config: StoredValue::new(config),
        }
    }

    /// Apply a UI event and send whatever requests it produces
    pub fn dispatch(&self, event: UiEvent) {
        log::debug!("Event {:?}", event);
        let commands = self
            .store
            .try_update(|state| state.handle_event(event, &BrowserIdentity))
            .unwrap_or_default();
        self.run(commands);
    }

    /// Trigger a reload of the ticket list
    pub fn reload(&self) {
        self.run(ClientState::initial_commands());
    }

    pub fn run(&self, commands: Vec<Command>) {
        for command in commands {
            let ctx = *self;
            spawn_local(async move { ctx.execute(command).await });
        }
    }

    async fn execute(self, command: Command) {
        let endpoint = self.config.with_value(|c| c.endpoint.clone());
        let (intent, result) = match &command {
            Command::FetchAll => (None, commands::fetch_all_tickets(&endpoint).await),
            Command::FetchById { id, intent } => {
                (Some(*intent), commands::fetch_ticket_by_id(&endpoint, id).await)
            }
            Command::Submit(fields) => (None, commands::submit_ticket(&endpoint, fields).await),
        };

        match result {
            Ok(response) => {
                log::debug!("{:?} answered {}", command, response.status);
                let follow_up = self
                    .store
                    .try_update(|state| {
                        state.handle_response(intent, response.status, &response.body, &BrowserIdentity)
                    })
                    .unwrap_or_default();
                self.run(follow_up);
            }
            Err(e) => log::warn!("{:?} failed: {}", command, e),
        }
    }
}

/// Get the app context, set up by `App`
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
