//! Frontend Models
//!
//! Data structures matching the backend's ticket shape.

use serde::{Deserialize, Serialize};

/// Status value of a completed ticket
pub const STATUS_CHECKED: &str = "checked";

/// Status value asking the backend to remove the ticket
pub const DELETE_MARKER: &str = "delete";

/// Ticket data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Ticket {
    pub id: String,
    pub name: String,
    pub description: String,
    pub created: String,
    pub status: String,
}

impl Ticket {
    pub fn is_checked(&self) -> bool {
        self.status == STATUS_CHECKED
    }
}

/// A status change chosen in the list, applied once the full ticket is fetched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingStatus {
    /// Checkbox state after the click
    Checked(bool),
    Delete,
}

impl PendingStatus {
    /// Wire value sent in the `status` field
    pub fn as_wire(&self) -> &'static str {
        match self {
            PendingStatus::Checked(true) => STATUS_CHECKED,
            PendingStatus::Delete => DELETE_MARKER,
            PendingStatus::Checked(false) => "",
        }
    }
}
