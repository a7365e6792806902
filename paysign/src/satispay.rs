//! Satispay business gateway support with convenience APIs.

pub use paysign_satispay::*;

#[cfg(feature = "default-context")]
use crate::{default_context, Result};

/// Create a Satispay client with the default context.
///
/// Config is loaded from `SATISPAY_CONFIG_FILE` and the `SATISPAY_*`
/// environment variables, credentials from the default provider chain.
///
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> paysign::Result<()> {
/// let client = paysign::satispay::default_client().await?;
/// let resp = client.queue(&client.signature_test())?.await?;
/// println!("{:?}", resp.signed_string);
/// # Ok(())
/// # }
/// ```
#[cfg(feature = "default-context")]
pub async fn default_client() -> Result<SatispayClient> {
    let ctx = default_context();
    let config = Config::load(&ctx).await?;
    SatispayClient::from_config(ctx, &config)
}
