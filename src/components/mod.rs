//! UI Components
//!
//! Leptos components for the ticket widget.

mod ticket_form;
mod ticket_list;

pub use ticket_form::TicketFormPanel;
pub use ticket_list::TicketList;
