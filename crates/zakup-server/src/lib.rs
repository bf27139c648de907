//! Process-level glue for the zakup service: configuration and the
//! periodic report scheduler. The HTTP surface itself lives in
//! `zakup-api`; the binary in `main.rs` wires everything together.

pub mod report;

use std::path::PathBuf;

use serde::Deserialize;

fn default_host() -> String {
  "127.0.0.1".to_owned()
}

fn default_port() -> u16 {
  8080
}

fn default_db_path() -> PathBuf {
  PathBuf::from("zakup.db")
}

fn default_report_interval_secs() -> u64 {
  3600
}

/// Runtime server configuration, deserialised from `config.toml` and
/// `ZAKUP_`-prefixed environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host: String,

  #[serde(default = "default_port")]
  pub port: u16,

  #[serde(default = "default_db_path")]
  pub db_path: PathBuf,

  /// How often the report scheduler wakes up to look for due
  /// subscriptions. Delivery cadence itself is per-subscription.
  #[serde(default = "default_report_interval_secs")]
  pub report_interval_secs: u64,
}
