//! Core application logic for swauth_adduser
//!
//! This module contains the main application components: the validated admin
//! endpoint, the provisioning request model, and the HTTP client that runs
//! the two-step workflow.
//!
//! # Examples
//!
//! ```rust,no_run
//! use swauth_adduser::app::{AdminClient, EndpointTarget, ProvisionRequest, UserKey};
//! use swauth_adduser::auth::AdminCredentials;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let endpoint = EndpointTarget::parse("http://127.0.0.1:8080/auth/")?;
//! let credentials = AdminCredentials {
//!     username: ".super_admin".to_string(),
//!     key: "swauthkey".to_string(),
//! };
//! let client = AdminClient::new(endpoint, credentials)?;
//!
//! let request = ProvisionRequest {
//!     account: "acct1".to_string(),
//!     user: "alice".to_string(),
//!     key: UserKey::Plain("secret".to_string()),
//!     admin: false,
//!     reseller_admin: false,
//!     suffix: None,
//! };
//! client.provision(&request).await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod endpoint;
pub mod models;

// Re-export main public API
pub use client::{AdminClient, ClientConfig};
pub use endpoint::EndpointTarget;
pub use models::{ProvisionRequest, UserKey};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_structure() {
        // Ensure public API is accessible
        let config = ClientConfig::default();
        assert!(config.tcp_nodelay);
    }
}
