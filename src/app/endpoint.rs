//! Admin API endpoint parsing and validation
//!
//! The admin base URL is validated before any network activity: only http and
//! https schemes are accepted, a host must be present, and the path is
//! normalized to exactly one trailing slash so request URLs can be joined
//! against it.

use url::Url;

use crate::constants::api;
use crate::errors::{EndpointError, EndpointResult};

/// A validated admin API endpoint
///
/// Wraps the parsed base URL and builds the `v2` account and user URLs
/// used by the provisioning workflow.
#[derive(Debug, Clone)]
pub struct EndpointTarget {
    base: Url,
}

impl EndpointTarget {
    /// Parse and validate an admin base URL
    ///
    /// # Errors
    ///
    /// Returns `EndpointError` if the URL cannot be parsed, uses a scheme
    /// other than http/https, or has no host.
    pub fn parse(raw: &str) -> EndpointResult<Self> {
        let mut base = Url::parse(raw)?;

        match base.scheme() {
            "http" | "https" => {}
            other => {
                return Err(EndpointError::UnsupportedScheme {
                    scheme: other.to_string(),
                });
            }
        }

        if base.host_str().is_none() {
            return Err(EndpointError::MissingHost);
        }

        // Joining relative paths requires the base to end in a slash
        if !base.path().ends_with('/') {
            let normalized = format!("{}/", base.path());
            base.set_path(&normalized);
        }

        Ok(Self { base })
    }

    /// URL scheme (http or https)
    pub fn scheme(&self) -> &str {
        self.base.scheme()
    }

    /// Host component of the endpoint
    pub fn host(&self) -> &str {
        self.base.host_str().unwrap_or_default()
    }

    /// Port, falling back to the scheme default
    pub fn port(&self) -> u16 {
        self.base.port_or_known_default().unwrap_or(80)
    }

    /// Normalized base path (always starts and ends with a slash)
    pub fn path(&self) -> &str {
        self.base.path()
    }

    /// URL of the account resource: `{path}v2/{account}`
    pub fn account_url(&self, account: &str) -> Url {
        self.join(&format!("{}/{}", api::ADMIN_API_VERSION, account))
    }

    /// URL of the user resource: `{path}v2/{account}/{user}`
    pub fn user_url(&self, account: &str, user: &str) -> Url {
        self.join(&format!("{}/{}/{}", api::ADMIN_API_VERSION, account, user))
    }

    fn join(&self, relative: &str) -> Url {
        self.base
            .join(relative)
            .expect("relative admin API path is always valid against a normalized base")
    }
}

impl std::fmt::Display for EndpointTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.base)
    }
}
