//! Ticket Client Core
//!
//! Pure state transitions for the ticket widget. UI events and backend
//! responses go in, the requests to issue come out; the view layer only
//! executes them. Nothing here touches the DOM or the network.

use uuid::Uuid;

use crate::dispatch::ResponseKind;
use crate::error::ClientError;
use crate::models::{PendingStatus, Ticket};
use crate::store::ClientState;

/// What the form is currently doing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Workflow {
    /// Create mode
    #[default]
    Idle,
    /// Edit mode, the loaded ticket supplies `id`/`created`/`status`
    EditingExisting(Ticket),
    /// A list action fetched this ticket and waits to apply the status
    PendingStatusChange(Ticket, PendingStatus),
}

/// Why a single ticket is being fetched; travels with the request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchIntent {
    /// Load into the form for manual editing
    Edit,
    /// Apply a list action as soon as the ticket arrives
    ApplyStatus(PendingStatus),
}

/// Request the view layer must send
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    FetchAll,
    FetchById { id: String, intent: FetchIntent },
    /// Form-encoded POST with these pairs, in order
    Submit(Vec<(String, String)>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    ToggleDescription(String),
    CloseForm,
    AddTicket,
    Edit(String),
    StatusChanged { id: String, checked: bool },
    Delete(String),
    /// Named fields read from the submitted form
    SubmitForm(Vec<(String, String)>),
}

/// Source of client-assigned ticket identity
pub trait IdentitySource {
    fn new_id(&self) -> String;
    /// Locale-formatted current time
    fn now(&self) -> String;
}

/// Random UUID v4 for a new ticket
pub fn new_ticket_id() -> String {
    Uuid::new_v4().to_string()
}

/// `created` value: locale date and locale time joined by one space
pub fn format_created(date: &str, time: &str) -> String {
    format!("{} {}", date, time)
}

/// Identity from the browser clock
pub struct BrowserIdentity;

impl IdentitySource for BrowserIdentity {
    fn new_id(&self) -> String {
        new_ticket_id()
    }

    fn now(&self) -> String {
        let date = js_sys::Date::new_0();
        let day = String::from(date.to_locale_date_string("default", &wasm_bindgen::JsValue::UNDEFINED));
        let time = String::from(date.to_locale_time_string("default"));
        format_created(&day, &time)
    }
}

/// Append `id`, `created` and `status` to the form fields.
///
/// Create mode gets a fresh identity and an empty status. Otherwise identity
/// is carried forward and the status is either the loaded one verbatim or,
/// with `apply_pending`, the pending change.
pub fn build_submission(
    mut fields: Vec<(String, String)>,
    workflow: &Workflow,
    apply_pending: bool,
    ids: &impl IdentitySource,
) -> Vec<(String, String)> {
    let (id, created, status) = match workflow {
        Workflow::Idle => (ids.new_id(), ids.now(), String::new()),
        Workflow::EditingExisting(ticket) => {
            let status = if apply_pending { String::new() } else { ticket.status.clone() };
            (ticket.id.clone(), ticket.created.clone(), status)
        }
        Workflow::PendingStatusChange(ticket, pending) => {
            let status = if apply_pending {
                pending.as_wire().to_string()
            } else {
                ticket.status.clone()
            };
            (ticket.id.clone(), ticket.created.clone(), status)
        }
    };
    fields.push(("id".to_string(), id));
    fields.push(("created".to_string(), created));
    fields.push(("status".to_string(), status));
    fields
}

impl ClientState {
    /// Requests issued on startup
    pub fn initial_commands() -> Vec<Command> {
        vec![Command::FetchAll]
    }

    pub fn handle_event(&mut self, event: UiEvent, ids: &impl IdentitySource) -> Vec<Command> {
        match event {
            UiEvent::ToggleDescription(id) => {
                self.toggle_description(&id);
                vec![]
            }
            UiEvent::CloseForm => {
                self.close_form();
                vec![]
            }
            UiEvent::AddTicket => {
                self.workflow = Workflow::Idle;
                self.clear_form();
                self.open_form();
                vec![]
            }
            UiEvent::Edit(id) => {
                self.open_form();
                vec![Command::FetchById { id, intent: FetchIntent::Edit }]
            }
            UiEvent::StatusChanged { id, checked } => vec![Command::FetchById {
                id,
                intent: FetchIntent::ApplyStatus(PendingStatus::Checked(checked)),
            }],
            UiEvent::Delete(id) => vec![Command::FetchById {
                id,
                intent: FetchIntent::ApplyStatus(PendingStatus::Delete),
            }],
            UiEvent::SubmitForm(fields) => {
                let command = self.submit_current_form(fields, false, ids);
                self.close_form();
                self.clear_form();
                vec![command]
            }
        }
    }

    /// Build the POST for the form and reset it to create mode.
    ///
    /// The reset happens immediately, without waiting for the backend.
    pub fn submit_current_form(
        &mut self,
        fields: Vec<(String, String)>,
        apply_pending: bool,
        ids: &impl IdentitySource,
    ) -> Command {
        let workflow = std::mem::take(&mut self.workflow);
        let body = build_submission(fields, &workflow, apply_pending, ids);
        self.clear_form();
        Command::Submit(body)
    }

    /// Route a response by its status code.
    ///
    /// `intent` is set only for single-ticket fetches. Malformed bodies are
    /// logged and dropped.
    pub fn handle_response(
        &mut self,
        intent: Option<FetchIntent>,
        status: u16,
        body: &str,
        ids: &impl IdentitySource,
    ) -> Vec<Command> {
        match ResponseKind::from_status(status) {
            ResponseKind::TicketList => match serde_json::from_str::<Vec<Ticket>>(body) {
                Ok(tickets) => {
                    log::info!("Loaded {} tickets", tickets.len());
                    self.replace_tickets(tickets);
                    vec![]
                }
                Err(e) => {
                    log::error!("Ticket list: {}", ClientError::from(e));
                    vec![]
                }
            },
            ResponseKind::SingleTicket => match serde_json::from_str::<Ticket>(body) {
                Ok(ticket) => self.receive_ticket(ticket, intent, ids),
                Err(e) => {
                    log::error!("Ticket {:?}: {}", intent, ClientError::from(e));
                    vec![]
                }
            },
            ResponseKind::Refresh => vec![Command::FetchAll],
            ResponseKind::Success => {
                log::debug!("Ignoring status {}", status);
                vec![]
            }
            ResponseKind::Failure => {
                log::warn!("Backend answered {}", status);
                vec![]
            }
        }
    }

    fn receive_ticket(
        &mut self,
        ticket: Ticket,
        intent: Option<FetchIntent>,
        ids: &impl IdentitySource,
    ) -> Vec<Command> {
        match intent {
            Some(FetchIntent::ApplyStatus(pending)) => {
                let fields = vec![
                    ("name".to_string(), ticket.name.clone()),
                    ("description".to_string(), ticket.description.clone()),
                ];
                let workflow = Workflow::PendingStatusChange(ticket, pending);
                let body = build_submission(fields, &workflow, true, ids);
                // An open form belongs to another edit; leave it alone.
                if !self.form.open {
                    self.workflow = Workflow::Idle;
                    self.clear_form();
                }
                vec![Command::Submit(body)]
            }
            Some(FetchIntent::Edit) => {
                self.fill_form(&ticket.name, &ticket.description);
                self.workflow = Workflow::EditingExisting(ticket);
                vec![]
            }
            None if self.form.open => {
                self.fill_form(&ticket.name, &ticket.description);
                self.workflow = Workflow::EditingExisting(ticket);
                vec![]
            }
            None => {
                log::debug!("Dropping unrequested ticket {}", ticket.id);
                vec![]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DELETE_MARKER;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;

    /// Hands out `id-1`, `id-2`, ... and a fixed clock
    struct FixedIdentity {
        next: Cell<u32>,
    }

    impl FixedIdentity {
        fn new() -> Self {
            Self { next: Cell::new(1) }
        }
    }

    impl IdentitySource for FixedIdentity {
        fn new_id(&self) -> String {
            let n = self.next.get();
            self.next.set(n + 1);
            format!("id-{}", n)
        }

        fn now(&self) -> String {
            "10/17/2026 9:30:00 AM".to_string()
        }
    }

    fn ticket(status: &str) -> Ticket {
        Ticket {
            id: "a".to_string(),
            name: "X".to_string(),
            description: "d".to_string(),
            created: "t".to_string(),
            status: status.to_string(),
        }
    }

    fn field<'a>(body: &'a [(String, String)], key: &str) -> &'a str {
        body.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str()).unwrap()
    }

    fn submitted(commands: &[Command]) -> &[(String, String)] {
        match commands {
            [Command::Submit(body)] => body,
            other => panic!("expected a single submit, got {:?}", other),
        }
    }

    fn form_fields(name: &str, description: &str) -> Vec<(String, String)> {
        vec![
            ("name".to_string(), name.to_string()),
            ("description".to_string(), description.to_string()),
        ]
    }

    #[test]
    fn test_create_submit_generates_identity() {
        let ids = FixedIdentity::new();
        let mut state = ClientState::new();
        state.handle_event(UiEvent::AddTicket, &ids);

        let commands = state.handle_event(UiEvent::SubmitForm(form_fields("Printer", "Jammed")), &ids);
        let body = submitted(&commands);
        assert_eq!(
            body.iter().map(|(k, _)| k.as_str()).collect::<Vec<_>>(),
            vec!["name", "description", "id", "created", "status"]
        );
        assert_eq!(field(body, "id"), "id-1");
        assert_eq!(field(body, "created"), "10/17/2026 9:30:00 AM");
        assert_eq!(field(body, "status"), "");

        // Every create gets a fresh id
        let commands = state.handle_event(UiEvent::SubmitForm(form_fields("Desk", "")), &ids);
        assert_eq!(field(submitted(&commands), "id"), "id-2");
    }

    #[test]
    fn test_submit_resets_form_and_workflow() {
        let ids = FixedIdentity::new();
        let mut state = ClientState::new();
        state.handle_event(UiEvent::Edit("a".to_string()), &ids);
        state.handle_response(Some(FetchIntent::Edit), 292, &serde_json::to_string(&ticket("")).unwrap(), &ids);

        state.handle_event(UiEvent::SubmitForm(form_fields("X", "d")), &ids);
        assert!(!state.form.open);
        assert_eq!(state.form.name, "");
        assert_eq!(state.workflow, Workflow::Idle);
    }

    #[test]
    fn test_edit_submit_keeps_original_status() {
        let ids = FixedIdentity::new();
        let workflow = Workflow::EditingExisting(ticket("checked"));
        let body = build_submission(form_fields("X2", "d2"), &workflow, false, &ids);
        assert_eq!(field(&body, "id"), "a");
        assert_eq!(field(&body, "created"), "t");
        assert_eq!(field(&body, "status"), "checked");
        assert_eq!(field(&body, "name"), "X2");
    }

    #[test]
    fn test_apply_pending_status_mapping() {
        let ids = FixedIdentity::new();
        let status_for = |pending| {
            let workflow = Workflow::PendingStatusChange(ticket("checked"), pending);
            let body = build_submission(form_fields("X", "d"), &workflow, true, &ids);
            field(&body, "status").to_string()
        };
        assert_eq!(status_for(PendingStatus::Checked(true)), "checked");
        assert_eq!(status_for(PendingStatus::Delete), DELETE_MARKER);
        assert_eq!(status_for(PendingStatus::Checked(false)), "");

        let body = build_submission(form_fields("X", "d"), &Workflow::EditingExisting(ticket("checked")), true, &ids);
        assert_eq!(field(&body, "status"), "");
    }

    #[test]
    fn test_list_response_replaces_rows() {
        let ids = FixedIdentity::new();
        let mut state = ClientState::new();
        let body = r#"[{"id":"a","name":"X","description":"d","created":"t","status":""}]"#;

        assert!(state.handle_response(None, 291, body, &ids).is_empty());
        let rows = state.rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "X");
        assert!(!rows[0].checked);

        state.handle_response(None, 294, body, &ids);
        assert_eq!(state.rows().len(), 1);
    }

    #[test]
    fn test_checkbox_fetch_auto_submits_with_form_closed() {
        let ids = FixedIdentity::new();
        let mut state = ClientState::new();

        let commands = state.handle_event(UiEvent::StatusChanged { id: "a".to_string(), checked: true }, &ids);
        let intent = match commands.as_slice() {
            [Command::FetchById { id, intent }] if id == "a" => *intent,
            other => panic!("unexpected {:?}", other),
        };
        assert!(!state.form.open);

        let body = serde_json::to_string(&ticket("")).unwrap();
        let commands = state.handle_response(Some(intent), 292, &body, &ids);
        let post = submitted(&commands);
        assert_eq!(field(post, "id"), "a");
        assert_eq!(field(post, "created"), "t");
        assert_eq!(field(post, "name"), "X");
        assert_eq!(field(post, "status"), "checked");
        assert!(!state.form.open);
        assert_eq!(state.form.name, "");
        assert_eq!(state.workflow, Workflow::Idle);
    }

    #[test]
    fn test_delete_fetch_posts_delete_marker() {
        let ids = FixedIdentity::new();
        let mut state = ClientState::new();
        let commands = state.handle_event(UiEvent::Delete("a".to_string()), &ids);
        let Command::FetchById { intent, .. } = &commands[0] else { panic!("expected fetch") };

        let body = serde_json::to_string(&ticket("checked")).unwrap();
        let commands = state.handle_response(Some(*intent), 292, &body, &ids);
        assert_eq!(field(submitted(&commands), "status"), DELETE_MARKER);
    }

    #[test]
    fn test_edit_fetch_fills_open_form_without_post() {
        let ids = FixedIdentity::new();
        let mut state = ClientState::new();
        let commands = state.handle_event(UiEvent::Edit("a".to_string()), &ids);
        assert!(state.form.open);
        assert_eq!(commands, vec![Command::FetchById { id: "a".to_string(), intent: FetchIntent::Edit }]);

        let body = serde_json::to_string(&ticket("checked")).unwrap();
        let commands = state.handle_response(Some(FetchIntent::Edit), 292, &body, &ids);
        assert!(commands.is_empty());
        assert_eq!(state.form.name, "X");
        assert_eq!(state.form.description, "d");
        assert_eq!(state.workflow, Workflow::EditingExisting(ticket("checked")));
    }

    #[test]
    fn test_status_change_leaves_open_edit_alone() {
        let ids = FixedIdentity::new();
        let mut state = ClientState::new();
        state.handle_event(UiEvent::Edit("a".to_string()), &ids);
        state.handle_response(Some(FetchIntent::Edit), 292, &serde_json::to_string(&ticket("")).unwrap(), &ids);

        let other = Ticket { id: "b".to_string(), ..ticket("") };
        let commands = state.handle_response(
            Some(FetchIntent::ApplyStatus(PendingStatus::Checked(true))),
            292,
            &serde_json::to_string(&other).unwrap(),
            &ids,
        );
        assert_eq!(field(submitted(&commands), "id"), "b");
        assert!(state.form.open);
        assert_eq!(state.form.name, "X");
        assert_eq!(state.workflow, Workflow::EditingExisting(ticket("")));
    }

    #[test]
    fn test_refresh_triggers_exactly_one_list_fetch() {
        let ids = FixedIdentity::new();
        let mut state = ClientState::new();
        assert_eq!(state.handle_response(None, 293, "", &ids), vec![Command::FetchAll]);
    }

    #[test]
    fn test_other_codes_and_bad_bodies_are_no_ops() {
        let ids = FixedIdentity::new();
        let mut state = ClientState::new();
        state.replace_tickets(vec![ticket("")]);

        assert!(state.handle_response(None, 200, "[]", &ids).is_empty());
        assert!(state.handle_response(None, 500, "[]", &ids).is_empty());
        assert!(state.handle_response(None, 291, "not json", &ids).is_empty());
        assert!(state.handle_response(Some(FetchIntent::Edit), 292, "{", &ids).is_empty());
        assert_eq!(state.rows().len(), 1);
    }

    #[test]
    fn test_add_ticket_resets_stale_edit() {
        let ids = FixedIdentity::new();
        let mut state = ClientState::new();
        state.handle_event(UiEvent::Edit("a".to_string()), &ids);
        state.handle_response(Some(FetchIntent::Edit), 292, &serde_json::to_string(&ticket("")).unwrap(), &ids);
        state.handle_event(UiEvent::CloseForm, &ids);

        state.handle_event(UiEvent::AddTicket, &ids);
        assert!(state.form.open);
        assert_eq!(state.form.name, "");
        assert_eq!(state.workflow, Workflow::Idle);
    }

    #[test]
    fn test_delete_posts_literal_delete_status() {
        let ids = FixedIdentity::new();
        let mut state = ClientState::new();
        let commands = state.handle_event(UiEvent::Delete("a".to_string()), &ids);
        let Command::FetchById { intent, .. } = &commands[0] else { panic!("expected fetch") };

        let body = serde_json::to_string(&ticket("")).unwrap();
        let commands = state.handle_response(Some(*intent), 292, &body, &ids);
        assert_eq!(field(submitted(&commands), "status"), "delete");
    }

    #[test]
    fn test_new_ticket_id_is_uuid_v4() {
        let id = new_ticket_id();
        let parsed = Uuid::parse_str(&id).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
        assert_eq!(id.len(), 36);
        assert_eq!(id.matches('-').count(), 4);
        assert_ne!(new_ticket_id(), id);
    }

    #[test]
    fn test_created_has_no_comma() {
        assert_eq!(format_created("10/17/2026", "9:30:00 AM"), "10/17/2026 9:30:00 AM");
    }

    #[test]
    fn test_initial_fetch() {
        assert_eq!(ClientState::initial_commands(), vec![Command::FetchAll]);
    }
}
