//! Administrator credential management
//!
//! This module resolves the admin identity and secret used to authenticate
//! against the admin API, prompting for the secret when it is not given on
//! the command line.
//!
//! # Examples
//!
//! ```rust,no_run
//! use swauth_adduser::auth::AdminCredentials;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Prompts for the key when none was supplied
//! let creds = AdminCredentials::resolve(".super_admin".to_string(), None)?;
//! # Ok(())
//! # }
//! ```

pub mod credentials;

// Re-export main public API
pub use credentials::{AdminCredentials, prompt_admin_key, validate_hashed_credential};
