//! Configuration for the retry engine.
//!
//! Loads settings from /etc/bungo/config.toml or uses defaults. These
//! are the only tunables the core consumes; everything else (rule
//! tables, style thresholds) is fixed data.

use crate::error::BungoError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Config file path
pub const CONFIG_PATH: &str = "/etc/bungo/config.toml";

/// Retry engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Maximum generation attempts per logical request
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Minimum candidate length in characters; shorter output counts
    /// as a failed attempt without being scored
    #[serde(default = "default_min_acceptable_length")]
    pub min_acceptable_length: usize,

    /// Human-style score required (together with CLEAN severity) to
    /// accept a candidate early
    #[serde(default = "default_accept_score_threshold")]
    pub accept_score_threshold: u8,

    /// Reject a candidate outright when more machine-response rules
    /// than this matched
    #[serde(default = "default_reject_max_machine_hits")]
    pub reject_max_machine_hits: usize,

    /// Reject a candidate outright when more manipulation rules than
    /// this matched
    #[serde(default = "default_reject_max_manipulation_hits")]
    pub reject_max_manipulation_hits: usize,

    /// Fixed wait after a transient provider error, in milliseconds
    #[serde(default = "default_transient_backoff_ms")]
    pub transient_backoff_ms: u64,
}

fn default_max_retries() -> u32 {
    5
}

fn default_min_acceptable_length() -> usize {
    1000
}

fn default_accept_score_threshold() -> u8 {
    80
}

fn default_reject_max_machine_hits() -> usize {
    2
}

fn default_reject_max_manipulation_hits() -> usize {
    5
}

fn default_transient_backoff_ms() -> u64 {
    30_000
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_retries: default_max_retries(),
            min_acceptable_length: default_min_acceptable_length(),
            accept_score_threshold: default_accept_score_threshold(),
            reject_max_machine_hits: default_reject_max_machine_hits(),
            reject_max_manipulation_hits: default_reject_max_manipulation_hits(),
            transient_backoff_ms: default_transient_backoff_ms(),
        }
    }
}

impl EngineConfig {
    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self, BungoError> {
        let content = fs::read_to_string(path)?;
        let config: EngineConfig =
            toml::from_str(&content).map_err(|e| BungoError::Config(e.to_string()))?;
        info!("Loaded engine config from {}", path.display());
        Ok(config)
    }

    /// Load config from the default path, falling back to defaults if
    /// the file is missing or unreadable
    pub fn load_or_default() -> Self {
        let path = Path::new(CONFIG_PATH);
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("Could not load {}: {}. Using defaults.", CONFIG_PATH, e);
                Self::default()
            }
        }
    }
}
