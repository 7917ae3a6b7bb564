//! Lead hand-off to the clinic's messaging channel
//!
//! A submitted lead becomes a pre-filled messaging deep link which is then
//! opened through a [`LinkOpener`].

mod deep_link;
mod launcher;

use std::time::Duration;

pub use deep_link::{build_deep_link, DeepLink, LeadMessage};
pub use launcher::{LinkOpener, SystemOpener};

#[cfg(test)]
pub use launcher::{MockLinkOpener, OpenError};

/// Default messaging host for deep links
pub const DEFAULT_MESSAGING_HOST: &str = "wa.me";

/// Clinic WhatsApp number, international format without `+`
pub const DEFAULT_RECIPIENT: &str = "442071234567";

/// Simulated transmission delay before the link is opened
pub const DEFAULT_SUBMIT_LATENCY: Duration = Duration::from_millis(1200);

/// Resolved settings for building and dispatching lead links
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadConfig {
    pub messaging_host: String,
    pub recipient: String,
    pub submit_latency: Duration,
}

impl Default for LeadConfig {
    fn default() -> Self {
        Self {
            messaging_host: DEFAULT_MESSAGING_HOST.to_string(),
            recipient: DEFAULT_RECIPIENT.to_string(),
            submit_latency: DEFAULT_SUBMIT_LATENCY,
        }
    }
}
