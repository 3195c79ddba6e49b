//! URL reachability checking.
//!
//! A single timed GET per URL, classified into exactly three buckets.
//! Transport failures are caught and reported as lines; nothing in this
//! module propagates an error past the check boundary.

use crate::ui::UserInterface;
use reqwest::blocking::Client;
use std::time::Duration;

/// Default per-URL GET timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Outcome of checking one URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Disposition {
    /// HTTP 200.
    Reachable,
    /// Responded with a non-200 status.
    UnexpectedStatus(u16),
    /// Transport failure: timeout, DNS, connection refused, TLS.
    Failed(String),
}

/// Checks URL reachability with a blocking HTTP client.
pub struct LinkChecker {
    client: Client,
    timeout: Duration,
}

impl LinkChecker {
    /// Create a checker with the default 10-second timeout.
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a checker with a custom timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .user_agent("nbkit")
                .timeout(timeout)
                .build()
                .expect("Failed to build HTTP client"),
            timeout,
        }
    }

    /// Get the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Issue one GET and classify the outcome.
    pub fn check(&self, url: &str) -> Disposition {
        match self.client.get(url).send() {
            Ok(response) => {
                let status = response.status().as_u16();
                if status == 200 {
                    Disposition::Reachable
                } else {
                    Disposition::UnexpectedStatus(status)
                }
            }
            Err(e) => Disposition::Failed(e.to_string()),
        }
    }

    /// Check one URL and stream its disposition line.
    ///
    /// All three lines go through `message` so the report stays a single
    /// ordered stream on stdout.
    pub fn report(&self, url: &str, ui: &mut dyn UserInterface) -> Disposition {
        let disposition = self.check(url);
        match &disposition {
            Disposition::Reachable => {
                ui.message(&format!("    OK: {} is reachable", url));
            }
            Disposition::UnexpectedStatus(status) => {
                ui.message(&format!(
                    "    WARNING: {} is not reachable, status_code: {}",
                    url, status
                ));
            }
            Disposition::Failed(error) => {
                ui.message(&format!("    ERROR: {} {}", url, error));
            }
        }
        disposition
    }
}

impl Default for LinkChecker {
    fn default() -> Self {
        Self::new()
    }
}
