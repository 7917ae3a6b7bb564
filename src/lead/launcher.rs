//! Opening deep links outside the terminal

use std::io;
use std::process::{Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OpenError {
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },
    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    #[error("no browser opener available for this platform")]
    Unsupported,
}

/// Opens a link in a new browsing context, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
pub trait LinkOpener: Send {
    fn open(&self, url: &str) -> Result<(), OpenError>;
}

/// Opens links with the platform browser, or a configured browser command
#[derive(Debug, Clone, Default)]
pub struct SystemOpener {
    browser: Option<String>,
}

impl SystemOpener {
    pub fn new(browser: Option<String>) -> Self {
        Self {
            browser: browser.filter(|b| !b.trim().is_empty()),
        }
    }

    /// Start the opener detached from the terminal.
    ///
    /// The child gets null stdio so it cannot write over the UI, and a
    /// background thread waits on it so it never lingers as a zombie.
    fn spawn(program: &str, args: &[&str]) -> Result<JoinHandle<io::Result<ExitStatus>>, OpenError> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| OpenError::Spawn {
                command: program.to_string(),
                source,
            })?;
        Ok(thread::spawn(move || child.wait()))
    }

    /// Launch the opener for `url`, returning a handle to the reaper thread
    fn launch(&self, url: &str) -> Result<JoinHandle<io::Result<ExitStatus>>, OpenError> {
        if let Some(browser) = &self.browser {
            return Self::spawn(browser, &[url]);
        }

        #[cfg(target_os = "macos")]
        {
            Self::spawn("open", &[url])
        }

        #[cfg(target_os = "linux")]
        {
            Self::spawn("xdg-open", &[url])
        }

        #[cfg(target_os = "windows")]
        {
            Self::spawn("cmd", &["/C", "start", "", url])
        }

        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            Err(OpenError::Unsupported)
        }
    }
}

impl LinkOpener for SystemOpener {
    fn open(&self, url: &str) -> Result<(), OpenError> {
        self.launch(url).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_browser_falls_back_to_platform() {
        let opener = SystemOpener::new(Some("   ".to_string()));
        assert!(opener.browser.is_none());
    }

    #[test]
    fn test_configured_browser_is_kept() {
        let opener = SystemOpener::new(Some("firefox".to_string()));
        assert_eq!(opener.browser.as_deref(), Some("firefox"));
    }

    #[test]
    fn test_missing_browser_binary_reports_spawn_error() {
        let opener = SystemOpener::new(Some("clinic-tui-no-such-browser".to_string()));
        let err = opener.open("https://wa.me/1?text=hi").unwrap_err();
        assert!(
            matches!(&err, OpenError::Spawn { command, .. } if command == "clinic-tui-no-such-browser"),
            "unexpected error: {err:?}"
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_opener_process_is_reaped() {
        // `true` ignores its arguments and exits at once
        let opener = SystemOpener::new(Some("true".to_string()));
        let reaper = opener.launch("https://wa.me/1?text=hi").unwrap();
        let status = reaper.join().unwrap().unwrap();
        assert!(status.success());
    }

    #[test]
    fn test_mock_records_calls() {
        let mut mock = MockLinkOpener::new();
        mock.expect_open()
            .withf(|url| url.starts_with("https://wa.me/"))
            .times(1)
            .returning(|_| Ok(()));
        assert!(mock.open("https://wa.me/1?text=hi").is_ok());
    }
}
