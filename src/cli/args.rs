//! Command-line argument parsing for swauth_adduser
//!
//! This module defines the CLI structure using clap derive macros. The tool
//! has a single workflow, so the surface is three required positionals plus
//! option flags rather than subcommands.

use clap::{Args, Parser};

use crate::app::{ProvisionRequest, UserKey};
use crate::auth::validate_hashed_credential;
use crate::constants::api;
use crate::errors::CredentialResult;

/// swauth_adduser - provision storage accounts and users
#[derive(Parser, Debug)]
#[command(
    name = "swauth_adduser",
    version,
    about = "Provision a user against a swauth-compatible admin API",
    long_about = "Creates or updates a user on a swauth-compatible object-storage admin API.
The storage account is created first when it does not exist yet. The admin
key is prompted for (masked) when not supplied with -K."
)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Provisioning arguments
    #[command(flatten)]
    pub provision: ProvisionArgs,
}

/// Global arguments controlling output verbosity
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Very verbose logging (debug level)
    #[arg(long)]
    pub very_verbose: bool,

    /// Quiet mode - errors only
    #[arg(short, long)]
    pub quiet: bool,
}

/// Arguments for the provisioning workflow
#[derive(Args, Debug, Clone)]
pub struct ProvisionArgs {
    /// Storage account to provision the user under
    #[arg(value_name = "ACCOUNT")]
    pub account: String,

    /// User name to create or update
    #[arg(value_name = "USER")]
    pub user: String,

    /// User password, or "<auth_type>:<hashed>" when --hashed is set
    #[arg(value_name = "PASSWORD")]
    pub password: String,

    /// Mark the new user as account admin
    #[arg(short = 'a', long)]
    pub admin: bool,

    /// Mark the new user as reseller admin
    #[arg(short = 'r', long)]
    pub reseller_admin: bool,

    /// Storage-account name suffix (default: random)
    #[arg(short = 's', long, value_name = "SUFFIX")]
    pub suffix: Option<String>,

    /// PASSWORD is already "<auth_type>:<hashed>"
    #[arg(short = 'e', long)]
    pub hashed: bool,

    /// Admin API base URL
    #[arg(
        short = 'A',
        long,
        value_name = "URL",
        default_value = api::DEFAULT_ADMIN_URL
    )]
    pub admin_url: String,

    /// Admin identity
    #[arg(
        short = 'U',
        long,
        value_name = "USER",
        default_value = api::DEFAULT_ADMIN_USER
    )]
    pub admin_user: String,

    /// Admin secret (prompted if omitted)
    #[arg(short = 'K', long, value_name = "KEY")]
    pub admin_key: Option<String>,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the logging level based on global arguments
    pub fn log_level(&self) -> tracing::Level {
        if self.global.quiet {
            tracing::Level::ERROR
        } else if self.global.very_verbose {
            tracing::Level::DEBUG
        } else if self.global.verbose {
            tracing::Level::INFO
        } else {
            tracing::Level::WARN
        }
    }
}

impl ProvisionArgs {
    /// Validate argument combinations before any network activity
    pub fn validate(&self) -> CredentialResult<()> {
        if self.hashed {
            validate_hashed_credential(&self.password)?;
        }
        Ok(())
    }

    /// The user key in the form it will be sent
    pub fn user_key(&self) -> UserKey {
        if self.hashed {
            UserKey::Hashed(self.password.clone())
        } else {
            UserKey::Plain(self.password.clone())
        }
    }

    /// Build the provisioning request from the parsed arguments
    pub fn to_request(&self) -> ProvisionRequest {
        ProvisionRequest {
            account: self.account.clone(),
            user: self.user.clone(),
            key: self.user_key(),
            admin: self.admin,
            reseller_admin: self.reseller_admin,
            suffix: self.suffix.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("swauth_adduser").chain(args.iter().copied()))
    }

    #[test]
    fn test_requires_three_positionals() {
        assert!(parse(&[]).is_err());
        assert!(parse(&["acct1"]).is_err());
        assert!(parse(&["acct1", "alice"]).is_err());
        assert!(parse(&["acct1", "alice", "secret"]).is_ok());
        assert!(parse(&["acct1", "alice", "secret", "extra"]).is_err());
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&["acct1", "alice", "secret"]).unwrap();
        let args = cli.provision;
        assert_eq!(args.admin_url, "http://127.0.0.1:8080/auth/");
        assert_eq!(args.admin_user, ".super_admin");
        assert!(args.admin_key.is_none());
        assert!(!args.admin);
        assert!(!args.reseller_admin);
        assert!(!args.hashed);
        assert!(args.suffix.is_none());
    }

    #[test]
    fn test_flags_and_options() {
        let cli = parse(&[
            "-a",
            "-r",
            "-s",
            "stor",
            "-A",
            "https://auth.example.com/auth/",
            "-U",
            "acct1:alice",
            "-K",
            "swauthkey",
            "acct1",
            "alice",
            "secret",
        ])
        .unwrap();
        let args = cli.provision;
        assert!(args.admin);
        assert!(args.reseller_admin);
        assert_eq!(args.suffix.as_deref(), Some("stor"));
        assert_eq!(args.admin_url, "https://auth.example.com/auth/");
        assert_eq!(args.admin_user, "acct1:alice");
        assert_eq!(args.admin_key.as_deref(), Some("swauthkey"));
    }

    #[test]
    fn test_user_key_selection() {
        let plain = parse(&["acct1", "alice", "secret"]).unwrap();
        assert_eq!(
            plain.provision.user_key(),
            UserKey::Plain("secret".to_string())
        );

        let hashed = parse(&["-e", "acct1", "alice", "plaintext:secret"]).unwrap();
        assert_eq!(
            hashed.provision.user_key(),
            UserKey::Hashed("plaintext:secret".to_string())
        );
    }

    #[test]
    fn test_validate_hashed_password_format() {
        let bad = parse(&["-e", "acct1", "alice", "nocolon"]).unwrap();
        assert!(bad.provision.validate().is_err());

        let good = parse(&["-e", "acct1", "alice", "sha1:$salt$hash"]).unwrap();
        assert!(good.provision.validate().is_ok());

        // Plain passwords are never format-checked
        let plain = parse(&["acct1", "alice", "nocolon"]).unwrap();
        assert!(plain.provision.validate().is_ok());
    }

    #[test]
    fn test_to_request() {
        let cli = parse(&["-a", "-s", "stor", "acct1", "alice", "secret"]).unwrap();
        let request = cli.provision.to_request();
        assert_eq!(request.account, "acct1");
        assert_eq!(request.user, "alice");
        assert!(request.admin);
        assert!(!request.reseller_admin);
        assert_eq!(request.suffix.as_deref(), Some("stor"));
    }

    #[test]
    fn test_log_level() {
        let quiet = parse(&["-q", "acct1", "alice", "secret"]).unwrap();
        assert_eq!(quiet.log_level(), tracing::Level::ERROR);

        let verbose = parse(&["-v", "acct1", "alice", "secret"]).unwrap();
        assert_eq!(verbose.log_level(), tracing::Level::INFO);

        let debug = parse(&["--very-verbose", "acct1", "alice", "secret"]).unwrap();
        assert_eq!(debug.log_level(), tracing::Level::DEBUG);

        let default = parse(&["acct1", "alice", "secret"]).unwrap();
        assert_eq!(default.log_level(), tracing::Level::WARN);
    }
}
