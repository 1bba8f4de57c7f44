//! Client Configuration
//!
//! Read from an optional JSON block in the host page:
//!
//! ```html
//! <script type="application/json" id="ticket-client-config">
//!   { "endpoint": "https://tickets.example.com/api", "log_level": "debug" }
//! </script>
//! ```
//!
//! Missing keys fall back to defaults.

use log::LevelFilter;
use serde::Deserialize;
use wasm_bindgen::JsCast;

/// Element id of the JSON config block
pub const CONFIG_ELEMENT_ID: &str = "ticket-client-config";

const DEFAULT_ENDPOINT: &str = "http://localhost:8080/tickets";

fn default_endpoint() -> String {
    option_env!("TICKET_ENDPOINT").unwrap_or(DEFAULT_ENDPOINT).to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClientConfig {
    /// Backend URL every request goes to
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            log_level: default_log_level(),
        }
    }
}

impl ClientConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Load from the host document, falling back to defaults.
    ///
    /// Runs before the logger is installed, so problems are returned as a
    /// warning for the caller to log afterwards.
    pub fn load() -> (Self, Option<String>) {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.dyn_into::<web_sys::HtmlScriptElement>().ok())
            .and_then(|script| script.text().ok());

        match raw {
            None => (Self::default(), None),
            Some(raw) => match Self::from_json(&raw) {
                Ok(config) => (config, None),
                Err(e) => (
                    Self::default(),
                    Some(format!("Ignoring invalid #{}: {}", CONFIG_ELEMENT_ID, e)),
                ),
            },
        }
    }

    /// Unknown level names fall back to `Info`
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}
