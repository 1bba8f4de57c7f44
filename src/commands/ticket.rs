//! Ticket Commands
//!
//! URL and body encoding for the ticket endpoint, plus the three calls it
//! supports.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use super::{get, post_form, RawResponse};
use crate::error::ClientError;

/// Characters left alone by JavaScript's `encodeURIComponent`
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

fn encode(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// Append a query string to the endpoint, respecting an existing one
fn with_query(endpoint: &str, pairs: &[(&str, &str)]) -> String {
    let separator = if endpoint.contains('?') { '&' } else { '?' };
    let query = pairs
        .iter()
        .map(|(k, v)| format!("{}={}", encode(k), encode(v)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{}{}{}", endpoint, separator, query)
}

// ========================
// Encoding
// ========================

pub fn all_tickets_url(endpoint: &str) -> String {
    with_query(endpoint, &[("method", "allTickets")])
}

pub fn ticket_by_id_url(endpoint: &str, id: &str) -> String {
    with_query(endpoint, &[("method", "ticketById"), ("id", id)])
}

/// `application/x-www-form-urlencoded` body, pairs kept in order
pub fn encode_form(fields: &[(String, String)]) -> String {
    fields
        .iter()
        .map(|(k, v)| format!("{}={}", encode(k), encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

// ========================
// Commands
// ========================

pub async fn fetch_all_tickets(endpoint: &str) -> Result<RawResponse, ClientError> {
    get(&all_tickets_url(endpoint)).await
}

pub async fn fetch_ticket_by_id(endpoint: &str, id: &str) -> Result<RawResponse, ClientError> {
    get(&ticket_by_id_url(endpoint, id)).await
}

/// Create, update or delete, depending on the `id`/`status` fields
pub async fn submit_ticket(endpoint: &str, fields: &[(String, String)]) -> Result<RawResponse, ClientError> {
    post_form(endpoint, encode_form(fields)).await
}
