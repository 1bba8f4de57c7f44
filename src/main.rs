//! Ticket Client Entry Point

mod models;
mod error;
mod config;
mod dispatch;
mod roles;
mod client;
mod commands;
mod store;
mod context;
mod components;
mod app;

use std::sync::atomic::{AtomicBool, Ordering};

use app::App;
use config::ClientConfig;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Host element the widget mounts into, if the page provides one
const MOUNT_ELEMENT_ID: &str = "ticket-client";

static INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Install logging, mount the widget and start the first list fetch.
///
/// Only the first call does anything; listeners are never registered twice.
fn initialize() {
    if INITIALIZED.swap(true, Ordering::SeqCst) {
        log::warn!("Ticket client already initialized");
        return;
    }

    let (config, config_warning) = ClientConfig::load();
    if let Err(e) = console_logger::init(config.level_filter()) {
        web_sys::console::warn_1(&format!("[main] logger not installed: {}", e).into());
    }
    if let Some(warning) = config_warning {
        log::warn!("{}", warning);
    }
    log::info!("Ticket client using {}", config.endpoint);

    let host = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(MOUNT_ELEMENT_ID))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());

    match host {
        Some(host) => leptos::mount::mount_to(host, move || view! { <App config=config /> }).forget(),
        None => mount_to_body(move || view! { <App config=config /> }),
    }
}

fn main() {
    console_error_panic_hook::set_once();
    initialize();
}
