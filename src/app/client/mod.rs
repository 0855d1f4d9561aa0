//! HTTP client for the swauth admin API
//!
//! This module implements the two-step provisioning workflow: ensure the
//! storage account exists (GET, then PUT on a miss), then create or update
//! the user (PUT) with role and key headers. Every request carries the
//! administrator identity headers; requests are issued once, with no retry.
//!
//! The module is organized into:
//! - `config`: HTTP client configuration and building

use reqwest::header::CONTENT_LENGTH;
use reqwest::{Client, RequestBuilder, StatusCode};

use crate::app::endpoint::EndpointTarget;
use crate::app::models::ProvisionRequest;
use crate::auth::AdminCredentials;
use crate::constants::headers;
use crate::errors::{ProvisionError, ProvisionResult};

pub mod config;

pub use config::ClientConfig;

/// HTTP client for interacting with the admin API
///
/// Owns the built reqwest client, the validated endpoint, and the
/// administrator credentials attached to every request.
#[derive(Debug)]
pub struct AdminClient {
    client: Client,
    endpoint: EndpointTarget,
    credentials: AdminCredentials,
}

impl AdminClient {
    /// Creates a new AdminClient with default configuration
    ///
    /// # Errors
    ///
    /// Returns `ProvisionError` if HTTP client creation fails
    pub fn new(endpoint: EndpointTarget, credentials: AdminCredentials) -> ProvisionResult<Self> {
        Self::with_config(endpoint, credentials, ClientConfig::default())
    }

    /// Creates a new AdminClient with custom configuration
    ///
    /// # Errors
    ///
    /// Returns `ProvisionError` if HTTP client creation fails
    pub fn with_config(
        endpoint: EndpointTarget,
        credentials: AdminCredentials,
        config: ClientConfig,
    ) -> ProvisionResult<Self> {
        let client = config.build_http_client()?;
        Ok(Self {
            client,
            endpoint,
            credentials,
        })
    }

    /// Runs the full provisioning workflow for one request
    ///
    /// The account-ensure step is skipped when the admin identity is the
    /// user being provisioned (self-service password change); the admin API
    /// authenticates that case against the user's current key, so no account
    /// pre-creation can be required.
    ///
    /// # Errors
    ///
    /// Returns `ProvisionError::UserRejected` if the final user PUT is not
    /// 2xx, or `ProvisionError::Http` on a transport failure. A failed
    /// account creation is reported but does not abort the workflow.
    pub async fn provision(&self, request: &ProvisionRequest) -> ProvisionResult<()> {
        if request.is_self_service(&self.credentials.username) {
            tracing::info!(
                identity = %request.identity(),
                "Self-service password change, skipping account check"
            );
        } else {
            self.ensure_account(request).await?;
        }

        self.create_user(request).await
    }

    /// Checks whether the storage account exists
    ///
    /// # Errors
    ///
    /// Returns `ProvisionError::Http` on a transport failure
    pub async fn account_exists(
        &self,
        account: &str,
        suffix: Option<&str>,
    ) -> ProvisionResult<bool> {
        let url = self.endpoint.account_url(account);
        tracing::debug!(%url, "Checking account existence");

        let builder = self.admin_headers(self.client.get(url), suffix);
        let response = builder.send().await?;
        Ok(response.status().is_success())
    }

    /// Creates the storage account
    ///
    /// # Errors
    ///
    /// Returns `ProvisionError::AccountRejected` if the admin API answers
    /// with a non-2xx status, `ProvisionError::Http` on a transport failure
    pub async fn create_account(&self, account: &str, suffix: Option<&str>) -> ProvisionResult<()> {
        let url = self.endpoint.account_url(account);
        tracing::debug!(%url, "Creating account");

        let builder = self
            .admin_headers(self.client.put(url), suffix)
            .header(CONTENT_LENGTH, "0");
        let response = builder.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProvisionError::AccountRejected {
                status: status.as_u16(),
                reason: reason_phrase(status),
            });
        }

        tracing::info!(account, "Account created");
        Ok(())
    }

    /// The conditional account-ensure step
    ///
    /// GET first; on a miss, PUT the account. A rejected PUT is reported to
    /// the user and swallowed so the workflow still attempts user creation.
    ///
    /// # Errors
    ///
    /// Returns `ProvisionError::Http` on a transport failure
    pub async fn ensure_account(&self, request: &ProvisionRequest) -> ProvisionResult<()> {
        let suffix = request.effective_suffix();

        if self.account_exists(&request.account, suffix).await? {
            tracing::debug!(account = %request.account, "Account already exists");
            return Ok(());
        }

        match self.create_account(&request.account, suffix).await {
            Ok(()) => Ok(()),
            Err(ProvisionError::AccountRejected { status, reason }) => {
                tracing::warn!(
                    account = %request.account,
                    status,
                    "Account creation rejected, attempting user creation anyway"
                );
                eprintln!("Account creation failed: {} {}", status, reason);
                Ok(())
            }
            Err(other) => Err(other),
        }
    }

    /// Creates or updates the user
    ///
    /// Sends the admin identity headers, `Content-Length: 0`, the role
    /// headers when the corresponding flags are set, and exactly one of the
    /// key headers depending on whether the key is pre-hashed.
    ///
    /// # Errors
    ///
    /// Returns `ProvisionError::UserRejected` if the admin API answers with
    /// a non-2xx status, `ProvisionError::Http` on a transport failure
    pub async fn create_user(&self, request: &ProvisionRequest) -> ProvisionResult<()> {
        let url = self.endpoint.user_url(&request.account, &request.user);
        tracing::debug!(%url, "Creating user");

        let mut builder = self
            .admin_headers(self.client.put(url), request.effective_suffix())
            .header(CONTENT_LENGTH, "0")
            .header(request.key.header_name(), request.key.header_value());

        if request.admin {
            builder = builder.header(headers::USER_ADMIN, "true");
        }
        if request.reseller_admin {
            builder = builder.header(headers::USER_RESELLER_ADMIN, "true");
        }

        let response = builder.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProvisionError::UserRejected {
                status: status.as_u16(),
                reason: reason_phrase(status),
            });
        }

        tracing::info!(identity = %request.identity(), "User provisioned");
        Ok(())
    }

    /// Get the endpoint this client talks to
    pub fn endpoint(&self) -> &EndpointTarget {
        &self.endpoint
    }

    /// Attaches the administrator identity headers, plus the account suffix
    /// when one was supplied
    fn admin_headers(&self, builder: RequestBuilder, suffix: Option<&str>) -> RequestBuilder {
        let builder = builder
            .header(headers::ADMIN_USER, &self.credentials.username)
            .header(headers::ADMIN_KEY, &self.credentials.key);
        match suffix {
            Some(value) => builder.header(headers::ACCOUNT_SUFFIX, value),
            None => builder,
        }
    }
}

/// Reason phrase for a status code, empty when the code has none
fn reason_phrase(status: StatusCode) -> String {
    status.canonical_reason().unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::UserKey;

    fn endpoint() -> EndpointTarget {
        EndpointTarget::parse("http://127.0.0.1:8080/auth/").unwrap()
    }

    fn credentials() -> AdminCredentials {
        AdminCredentials {
            username: ".super_admin".to_string(),
            key: "swauthkey".to_string(),
        }
    }

    #[test]
    fn test_client_creation() {
        let client = AdminClient::new(endpoint(), credentials());
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_with_custom_config() {
        let config = ClientConfig {
            request_timeout: std::time::Duration::from_secs(5),
            ..Default::default()
        };
        let client = AdminClient::with_config(endpoint(), credentials(), config);
        assert!(client.is_ok());
    }

    #[test]
    fn test_reason_phrase() {
        assert_eq!(reason_phrase(StatusCode::NOT_FOUND), "Not Found");
        assert_eq!(
            reason_phrase(StatusCode::SERVICE_UNAVAILABLE),
            "Service Unavailable"
        );
    }

    #[test]
    fn test_endpoint_accessor() {
        let client = AdminClient::new(endpoint(), credentials()).unwrap();
        assert_eq!(client.endpoint().path(), "/auth/");
    }

    #[test]
    fn test_request_urls_follow_endpoint() {
        let client = AdminClient::new(endpoint(), credentials()).unwrap();
        let request = ProvisionRequest {
            account: "acct1".to_string(),
            user: "alice".to_string(),
            key: UserKey::Plain("secret".to_string()),
            admin: false,
            reseller_admin: false,
            suffix: None,
        };
        let url = client.endpoint().user_url(&request.account, &request.user);
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/auth/v2/acct1/alice");
    }
}
