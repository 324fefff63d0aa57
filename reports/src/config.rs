//! Viewer configuration.
//!
//! Every field has a default matching the stock page, so an empty
//! document (`{}` in JSON, nothing in TOML) is a valid configuration.

use serde::Deserialize;

/// Endpoints, thresholds and timings used by the viewer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Search endpoint (`POST`)
    pub report_endpoint: String,
    /// Vetted entities endpoint (`GET`)
    pub recent_endpoint: String,
    /// Prefix of the per-entity report page; the oid is appended
    pub report_page_prefix: String,
    /// Hit counts strictly above this get the warning marker
    pub hits_threshold: u64,
    /// Countdown budget before an automatic reload, in seconds
    pub refresh_seconds: u32,
    /// Class flipped on the collapsible panel
    pub toggle_class: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            report_endpoint: "/report".into(),
            recent_endpoint: "/recent".into(),
            report_page_prefix: "/report/".into(),
            hits_threshold: 20,
            refresh_seconds: 10,
            toggle_class: "show".into(),
        }
    }
}

impl ViewerConfig {
    /// Parse a JSON config blob.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
