//! Message templating and deep-link construction

use super::LeadConfig;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::fmt;
use thiserror::Error;
use url::Url;

/// Bytes left unescaped in the `text` parameter: `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
/// Newlines therefore travel as `%0A`.
pub const MESSAGE_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const GREETING: &str = "Hello London Dental! I'd like to request a consultation.";

#[derive(Debug, Error)]
pub enum LinkError {
    #[error("invalid deep link {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

/// Lead details interpolated into the outgoing message
#[derive(Debug, Clone, Copy)]
pub struct LeadMessage<'a> {
    pub name: &'a str,
    pub phone: &'a str,
    pub treatment: &'a str,
    pub email: &'a str,
    pub message: &'a str,
}

impl LeadMessage<'_> {
    /// Render the multi-line message. Optional lines are omitted when empty.
    pub fn render(&self) -> String {
        let mut lines = vec![
            GREETING.to_string(),
            format!("Name: {}", self.name),
            format!("Phone: {}", self.phone),
            format!("Treatment: {}", self.treatment),
        ];
        if !self.email.is_empty() {
            lines.push(format!("Email: {}", self.email));
        }
        if !self.message.is_empty() {
            lines.push(format!("Message: {}", self.message));
        }
        lines.join("\n")
    }
}

/// A fully encoded messaging link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeepLink {
    url: String,
}

impl DeepLink {
    pub fn as_str(&self) -> &str {
        &self.url
    }

    /// Raw (still encoded) value of the `text` query parameter
    pub fn encoded_text(&self) -> &str {
        self.url
            .split_once("?text=")
            .map(|(_, text)| text)
            .unwrap_or("")
    }

    /// Decoded message carried by the link
    pub fn decoded_text(&self) -> String {
        percent_decode_str(self.encoded_text())
            .decode_utf8_lossy()
            .into_owned()
    }
}

impl fmt::Display for DeepLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

/// Build `https://<host>/<recipient>?text=<encoded message>`
pub fn build_deep_link(config: &LeadConfig, message: &LeadMessage) -> Result<DeepLink, LinkError> {
    let text = message.render();
    let url = format!(
        "https://{}/{}?text={}",
        config.messaging_host,
        config.recipient,
        utf8_percent_encode(&text, MESSAGE_ENCODE_SET)
    );

    // Parsed only to reject malformed hosts; the encoded form is kept byte-exact.
    Url::parse(&url).map_err(|source| LinkError::InvalidUrl {
        url: url.clone(),
        source,
    })?;

    Ok(DeepLink { url })
}
