//! Data models for swauth_adduser
//!
//! This module defines the transient values of a single provisioning run:
//! the user key in its two wire forms and the provisioning request itself.

use crate::constants::headers;

/// User key in the form it will be sent to the admin API
///
/// Exactly one of the two key headers is ever set; the enum makes the
/// both-headers state unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserKey {
    /// Plaintext secret, sent as `X-Auth-User-Key`
    Plain(String),
    /// Pre-hashed credential ("<auth_type>:<hashed>"), sent as
    /// `X-Auth-User-Key-Hash`
    Hashed(String),
}

impl UserKey {
    /// Header name carrying this key form
    pub fn header_name(&self) -> &'static str {
        match self {
            Self::Plain(_) => headers::USER_KEY,
            Self::Hashed(_) => headers::USER_KEY_HASH,
        }
    }

    /// Header value (the secret or hash itself)
    pub fn header_value(&self) -> &str {
        match self {
            Self::Plain(value) => value,
            Self::Hashed(value) => value,
        }
    }
}

/// A single user-provisioning request
#[derive(Debug, Clone)]
pub struct ProvisionRequest {
    /// Target storage account name
    pub account: String,
    /// Target user name within the account
    pub user: String,
    /// User key, plaintext or pre-hashed
    pub key: UserKey,
    /// Grant the account-admin role
    pub admin: bool,
    /// Grant the reseller-admin role
    pub reseller_admin: bool,
    /// Storage-account name suffix; the server picks a random one when absent
    pub suffix: Option<String>,
}

impl ProvisionRequest {
    /// Identity string of the target user, as the admin API spells it
    pub fn identity(&self) -> String {
        format!("{}:{}", self.account, self.user)
    }

    /// Whether this run is a self-service password change
    ///
    /// True when the admin identity is the very user being provisioned. The
    /// account-ensure step is skipped in that case: requiring account
    /// pre-creation there would be circular.
    pub fn is_self_service(&self, admin_user: &str) -> bool {
        admin_user == self.identity()
    }

    /// Suffix to send, treating an empty string as absent
    pub fn effective_suffix(&self) -> Option<&str> {
        self.suffix.as_deref().filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(key: UserKey) -> ProvisionRequest {
        ProvisionRequest {
            account: "acct1".to_string(),
            user: "alice".to_string(),
            key,
            admin: false,
            reseller_admin: false,
            suffix: None,
        }
    }

    #[test]
    fn test_plain_key_selects_key_header() {
        let key = UserKey::Plain("secret123".to_string());
        assert_eq!(key.header_name(), "X-Auth-User-Key");
        assert_eq!(key.header_value(), "secret123");
    }

    #[test]
    fn test_hashed_key_selects_hash_header() {
        let key = UserKey::Hashed("sha1:$salt$abcdef".to_string());
        assert_eq!(key.header_name(), "X-Auth-User-Key-Hash");
        assert_eq!(key.header_value(), "sha1:$salt$abcdef");
    }

    #[test]
    fn test_identity_format() {
        let req = request(UserKey::Plain("secret".to_string()));
        assert_eq!(req.identity(), "acct1:alice");
    }

    #[test]
    fn test_self_service_detection() {
        let req = request(UserKey::Plain("secret".to_string()));
        assert!(req.is_self_service("acct1:alice"));
        assert!(!req.is_self_service(".super_admin"));
        assert!(!req.is_self_service("acct1:bob"));
        assert!(!req.is_self_service("acct1alice"));
    }

    #[test]
    fn test_empty_suffix_treated_as_absent() {
        let mut req = request(UserKey::Plain("secret".to_string()));
        assert_eq!(req.effective_suffix(), None);

        req.suffix = Some(String::new());
        assert_eq!(req.effective_suffix(), None);

        req.suffix = Some("stor".to_string());
        assert_eq!(req.effective_suffix(), Some("stor"));
    }
}
