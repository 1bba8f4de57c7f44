//! Response Dispatch
//!
//! The backend answers with custom 2xx codes that say which kind of payload
//! the body holds. Anything else is tolerated and ignored.

/// What a response status code asks the client to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    /// 291 / 294: body is the full ticket list
    TicketList,
    /// 292: body is a single ticket
    SingleTicket,
    /// 293: a mutation was accepted, the list must be refetched
    Refresh,
    /// Any other 2xx
    Success,
    /// Non-2xx
    Failure,
}

impl ResponseKind {
    pub fn from_status(status: u16) -> Self {
        match status {
            291 | 294 => ResponseKind::TicketList,
            292 => ResponseKind::SingleTicket,
            293 => ResponseKind::Refresh,
            200..=299 => ResponseKind::Success,
            _ => ResponseKind::Failure,
        }
    }
}
