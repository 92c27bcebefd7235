//! Data-store availability diagnostics.
//!
//! The generation pipeline keeps no persistent state, but deployments may
//! attach an optional data store. This probe only reports whether one is
//! configured; its absence never affects generation correctness, so the
//! report is purely informational.

use serde::Serialize;

/// A connectivity/configuration report for the optional data store.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostics {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

/// Probe the environment for data-store configuration.
///
/// No connection is attempted; only the presence of `DATABASE_URL` and
/// `DATABASE_NAME` is checked.
pub fn probe() -> Diagnostics {
    let url_set = std::env::var("DATABASE_URL").is_ok_and(|v| !v.is_empty());
    let name_set = std::env::var("DATABASE_NAME").is_ok_and(|v| !v.is_empty());

    Diagnostics {
        backend: "running".to_string(),
        database: if url_set {
            "configured but not probed".to_string()
        } else {
            "not available".to_string()
        },
        database_url: if url_set { "set" } else { "not set" }.to_string(),
        database_name: if name_set { "set" } else { "not set" }.to_string(),
        connection_status: "not connected".to_string(),
        collections: Vec::new(),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn report_serializes_to_json() {
        let report = probe();
        let json = serde_json::to_string_pretty(&report).expect("can serialize diagnostics");
        assert!(json.contains("\"backend\""));
        assert!(json.contains("\"connection_status\""));
    }

    #[test]
    fn backend_is_always_reported_running() {
        assert_eq!(probe().backend, "running");
    }
}
