//! Administrator credential handling
//!
//! This module resolves the admin identity and secret for a provisioning run
//! and validates pre-hashed user credentials before anything is sent over
//! the wire. The admin key is prompted for (masked, non-echoing) when it was
//! not supplied on the command line.

use crate::constants::auth;
use crate::errors::{CredentialError, CredentialResult};

/// Administrator identity and secret for the admin API
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    /// Administrator identity (e.g. `.super_admin`, or `account:user` for a
    /// self-service password change)
    pub username: String,
    /// Administrator secret
    pub key: String,
}

impl AdminCredentials {
    /// Builds credentials, prompting for the key when it was not supplied
    ///
    /// # Errors
    ///
    /// Returns `CredentialError` if the prompt fails or the key is empty
    pub fn resolve(username: String, key: Option<String>) -> CredentialResult<Self> {
        let key = match key {
            Some(key) => key,
            None => prompt_admin_key()?,
        };

        if key.is_empty() {
            return Err(CredentialError::EmptyAdminKey);
        }

        Ok(Self { username, key })
    }
}

/// Prompt for the admin key with echo disabled
pub fn prompt_admin_key() -> CredentialResult<String> {
    let key = rpassword::prompt_password("Admin key: ")?;
    Ok(key)
}

/// Validate a pre-hashed credential of the form "<auth_type>:<hashed>"
///
/// The admin API stores this value verbatim, so a malformed hash would
/// silently lock the user out. Salted types must carry a `$salt$hash`
/// payload; plaintext only needs a non-empty remainder.
///
/// # Errors
///
/// Returns `CredentialError::InvalidHashedKey` naming what is wrong
pub fn validate_hashed_credential(value: &str) -> CredentialResult<()> {
    let (auth_type, rest) = value
        .split_once(auth::AUTH_TYPE_SEPARATOR)
        .ok_or_else(|| CredentialError::InvalidHashedKey {
            reason: format!("missing '{}' separator", auth::AUTH_TYPE_SEPARATOR),
        })?;

    if !auth::KNOWN_AUTH_TYPES.contains(&auth_type) {
        return Err(CredentialError::InvalidHashedKey {
            reason: format!("unknown auth type: {}", auth_type),
        });
    }

    if rest.is_empty() {
        return Err(CredentialError::InvalidHashedKey {
            reason: "empty credential payload".to_string(),
        });
    }

    // Salted types carry "$salt$hash"
    if auth_type != "plaintext" {
        let mut parts = rest.splitn(3, auth::SALT_SEPARATOR);
        let leading = parts.next().unwrap_or_default();
        let salt = parts.next();
        let hash = parts.next();

        let well_formed = leading.is_empty()
            && salt.is_some_and(|s| !s.is_empty())
            && hash.is_some_and(|h| !h.is_empty());
        if !well_formed {
            return Err(CredentialError::InvalidHashedKey {
                reason: format!("{0} credential must look like {0}:$salt$hash", auth_type),
            });
        }
    }

    Ok(())
}
