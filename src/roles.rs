//! Element Roles
//!
//! Every interactive element carries a `data-element` (or `data-form`)
//! attribute naming its role. Delegated listeners read the attribute back
//! into an [`ElementRole`] and look the handler up in one table.

use crate::client::UiEvent;

/// Attribute naming an element's role
pub const ROLE_ATTR: &str = "data-element";
/// Attribute marking the ticket form
pub const FORM_ATTR: &str = "data-form";
/// Attribute holding the ticket id on row controls
pub const ID_ATTR: &str = "data-id";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementRole {
    TicketList,
    TicketName,
    Description,
    StatusCheckbox,
    Edit,
    Delete,
    AddTicket,
    CloseForm,
    Form,
}

const ROLES: &[(ElementRole, &str)] = &[
    (ElementRole::TicketList, "ticket-list"),
    (ElementRole::TicketName, "ticket-name"),
    (ElementRole::Description, "ticket-description"),
    (ElementRole::StatusCheckbox, "ticket-status"),
    (ElementRole::Edit, "ticket-edit"),
    (ElementRole::Delete, "ticket-delete"),
    (ElementRole::AddTicket, "add-ticket"),
    (ElementRole::CloseForm, "close-form"),
    (ElementRole::Form, "ticket"),
];

impl ElementRole {
    pub fn as_attr(self) -> &'static str {
        ROLES
            .iter()
            .find(|(role, _)| *role == self)
            .map(|(_, attr)| *attr)
            .unwrap_or_default()
    }

    pub fn from_attr(value: &str) -> Option<Self> {
        ROLES.iter().find(|(_, attr)| *attr == value).map(|(role, _)| *role)
    }

    /// Cursor shown while the pointer is over this element, if any
    pub fn cursor(self) -> Option<&'static str> {
        match self {
            ElementRole::TicketName | ElementRole::Edit | ElementRole::Delete => Some("pointer"),
            _ => None,
        }
    }
}

/// Event for a click landing on an element with this role
pub fn click_event(role: ElementRole, id: Option<String>) -> Option<UiEvent> {
    match (role, id) {
        (ElementRole::TicketName, Some(id)) => Some(UiEvent::ToggleDescription(id)),
        (ElementRole::Edit, Some(id)) => Some(UiEvent::Edit(id)),
        (ElementRole::Delete, Some(id)) => Some(UiEvent::Delete(id)),
        (ElementRole::CloseForm, _) => Some(UiEvent::CloseForm),
        (ElementRole::AddTicket, _) => Some(UiEvent::AddTicket),
        _ => None,
    }
}

/// Event for a `change` on an element with this role
pub fn change_event(role: ElementRole, id: Option<String>, checked: bool) -> Option<UiEvent> {
    match (role, id) {
        (ElementRole::StatusCheckbox, Some(id)) => Some(UiEvent::StatusChanged { id, checked }),
        _ => None,
    }
}

/// Find the role of the nearest marked ancestor of `target`, plus the ticket
/// id carried by that element if it has one.
pub fn role_of(target: &web_sys::Element) -> Option<(ElementRole, Option<String>)> {
    let selector = format!("[{}], [{}]", ROLE_ATTR, FORM_ATTR);
    let marked = target.closest(&selector).ok().flatten()?;
    let role = marked
        .get_attribute(ROLE_ATTR)
        .or_else(|| marked.get_attribute(FORM_ATTR))
        .and_then(|value| ElementRole::from_attr(&value))?;
    Some((role, marked.get_attribute(ID_ATTR)))
}
