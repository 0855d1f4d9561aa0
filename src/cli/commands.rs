//! Command handler for swauth_adduser
//!
//! Coordinates between the parsed CLI arguments and the provisioning client:
//! validates options, resolves the admin key, parses the endpoint, and runs
//! the two-step workflow.

use tracing::{debug, info};

use crate::app::{AdminClient, EndpointTarget};
use crate::auth::AdminCredentials;
use crate::cli::ProvisionArgs;
use crate::errors::Result;

/// Handle the provisioning command
///
/// All validation happens before any network call: the hashed-credential
/// format, the admin URL scheme, and the admin key (prompted when absent).
pub async fn handle_provision(args: ProvisionArgs) -> Result<()> {
    args.validate()?;

    let endpoint = EndpointTarget::parse(&args.admin_url)?;
    debug!(endpoint = %endpoint, "Validated admin endpoint");

    let credentials = AdminCredentials::resolve(args.admin_user.clone(), args.admin_key.clone())?;
    info!(admin_user = %credentials.username, "Resolved admin credentials");

    let request = args.to_request();
    let client = AdminClient::new(endpoint, credentials)?;
    client.provision(&request).await?;

    println!("User {} created", request.identity());
    Ok(())
}
