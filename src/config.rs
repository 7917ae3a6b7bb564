//! Configuration handling for the TUI

use crate::lead::{LeadConfig, DEFAULT_MESSAGING_HOST, DEFAULT_RECIPIENT, DEFAULT_SUBMIT_LATENCY};
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Environment override for the messaging recipient
pub const RECIPIENT_ENV: &str = "CLINIC_TUI_RECIPIENT";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("recipient must be digits in international format without '+' or separators, got {0:?}")]
    InvalidRecipient(String),
    #[error("messaging host must be a bare host name, got {0:?}")]
    InvalidHost(String),
}

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ClinicConfig {
    /// Messaging recipient, e.g. "442071234567"
    pub recipient: Option<String>,
    /// Messaging host for deep links
    pub messaging_host: Option<String>,
    /// Simulated transmission delay in milliseconds
    pub submit_latency_ms: Option<u64>,
    /// Browser command used to open links
    pub browser: Option<String>,
}

impl ClinicConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("uk", "londondental", "clinic-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => {
                let content = fs::read_to_string(&path)?;
                serde_json::from_str(&content)?
            }
            _ => Self::default(),
        };

        if let Ok(recipient) = std::env::var(RECIPIENT_ENV) {
            config.recipient = Some(recipient);
        }

        Ok(config)
    }

    /// Save configuration to file
    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    /// Apply defaults and validate
    pub fn resolve(&self) -> Result<LeadConfig, ConfigError> {
        let recipient = self
            .recipient
            .as_deref()
            .map(str::trim)
            .unwrap_or(DEFAULT_RECIPIENT)
            .to_string();
        if recipient.is_empty() || !recipient.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConfigError::InvalidRecipient(recipient));
        }

        let messaging_host = self
            .messaging_host
            .as_deref()
            .map(str::trim)
            .unwrap_or(DEFAULT_MESSAGING_HOST)
            .to_string();
        if messaging_host.is_empty()
            || messaging_host.contains(['/', '?', '#', ' '])
            || messaging_host.contains("://")
        {
            return Err(ConfigError::InvalidHost(messaging_host));
        }

        let submit_latency = self
            .submit_latency_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_SUBMIT_LATENCY);

        tracing::debug!(%recipient, %messaging_host, ?submit_latency, "Resolved lead config");

        Ok(LeadConfig {
            messaging_host,
            recipient,
            submit_latency,
        })
    }
}
