//! Error types for swauth_adduser
//!
//! Errors are grouped by the phase of the workflow they belong to: credential
//! handling, endpoint validation, and the provisioning requests themselves.
//! Everything is terminal for this one-shot CLI; nothing is retried.

use thiserror::Error;

/// Credential handling errors
#[derive(Error, Debug)]
pub enum CredentialError {
    /// Interactive prompt for the admin key failed
    #[error("Failed to read admin key from prompt")]
    Prompt(#[from] std::io::Error),

    /// Admin key resolved to an empty string
    #[error("Admin key must not be empty")]
    EmptyAdminKey,

    /// Pre-hashed credential does not match "<auth_type>:<hashed>"
    #[error("Invalid hashed credential: {reason}")]
    InvalidHashedKey { reason: String },
}

/// Admin URL validation errors
#[derive(Error, Debug)]
pub enum EndpointError {
    /// URL could not be parsed at all
    #[error("Invalid admin URL")]
    InvalidUrl(#[from] url::ParseError),

    /// Scheme other than http or https
    #[error("Unsupported admin URL scheme: {scheme} (expected http or https)")]
    UnsupportedScheme { scheme: String },

    /// URL has no host component
    #[error("Admin URL has no host")]
    MissingHost,
}

/// Errors raised while talking to the admin API
#[derive(Error, Debug)]
pub enum ProvisionError {
    /// Transport-level failure (connection refused, DNS, timeout)
    #[error("Admin API request failed")]
    Http(#[from] reqwest::Error),

    /// Account creation PUT was rejected; the workflow downgrades this to a
    /// warning and proceeds to user creation
    #[error("Account creation failed: {status} {reason}")]
    AccountRejected { status: u16, reason: String },

    /// Final user PUT was rejected by the admin API
    #[error("User creation failed: {status} {reason}")]
    UserRejected { status: u16, reason: String },
}

/// Top-level application error that can represent any error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Credential error
    #[error(transparent)]
    Credential(#[from] CredentialError),

    /// Endpoint validation error
    #[error(transparent)]
    Endpoint(#[from] EndpointError),

    /// Provisioning error
    #[error(transparent)]
    Provision(#[from] ProvisionError),

    /// Generic I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Generic application error with context
    #[error("{message}")]
    Generic { message: String },
}

impl AppError {
    /// Create a generic application error with a message
    pub fn generic(message: impl Into<String>) -> Self {
        Self::Generic {
            message: message.into(),
        }
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            AppError::Credential(_) => "credential",
            AppError::Endpoint(_) => "endpoint",
            AppError::Provision(_) => "provision",
            AppError::Io(_) => "io",
            AppError::Generic { .. } => "generic",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AppError>;

/// Credential result type alias
pub type CredentialResult<T> = std::result::Result<T, CredentialError>;

/// Endpoint result type alias
pub type EndpointResult<T> = std::result::Result<T, EndpointError>;

/// Provisioning result type alias
pub type ProvisionResult<T> = std::result::Result<T, ProvisionError>;
