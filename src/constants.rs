//! Application constants for swauth_adduser
//!
//! This module centralizes the constants used throughout the application,
//! organized by functional domain for maintainability and clarity.

use std::time::Duration;

/// Admin API defaults and layout
pub mod api {
    /// Default admin API base URL
    pub const DEFAULT_ADMIN_URL: &str = "http://127.0.0.1:8080/auth/";

    /// Default administrator identity
    pub const DEFAULT_ADMIN_USER: &str = ".super_admin";

    /// Version segment of the admin API namespace
    pub const ADMIN_API_VERSION: &str = "v2";
}

/// Wire-protocol header names for the admin API
pub mod headers {
    /// Administrator identity header
    pub const ADMIN_USER: &str = "X-Auth-Admin-User";

    /// Administrator secret header
    pub const ADMIN_KEY: &str = "X-Auth-Admin-Key";

    /// Storage-account name suffix header (optional)
    pub const ACCOUNT_SUFFIX: &str = "X-Account-Suffix";

    /// Plaintext user key header
    pub const USER_KEY: &str = "X-Auth-User-Key";

    /// Pre-hashed user key header
    pub const USER_KEY_HASH: &str = "X-Auth-User-Key-Hash";

    /// Account-admin role header
    pub const USER_ADMIN: &str = "X-Auth-User-Admin";

    /// Reseller-admin role header
    pub const USER_RESELLER_ADMIN: &str = "X-Auth-User-Reseller-Admin";
}

/// Credential format constants
pub mod auth {
    /// Auth types a pre-hashed credential may carry
    pub const KNOWN_AUTH_TYPES: &[&str] = &["plaintext", "sha1", "sha512"];

    /// Separator between auth type and payload in a hashed credential
    pub const AUTH_TYPE_SEPARATOR: char = ':';

    /// Separator framing the salt in a salted credential payload
    pub const SALT_SEPARATOR: char = '$';
}

/// HTTP client configuration constants
pub mod http {
    use super::Duration;

    /// Default user agent for all HTTP requests
    pub const USER_AGENT: &str = "swauth-adduser/0.1.0";

    /// Default HTTP request timeout
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

    /// Connection establishment timeout
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);
}

// Re-export commonly used constants for convenience
pub use api::{ADMIN_API_VERSION, DEFAULT_ADMIN_URL, DEFAULT_ADMIN_USER};
pub use http::{DEFAULT_TIMEOUT as HTTP_TIMEOUT, USER_AGENT};
