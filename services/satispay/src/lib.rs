//! Satispay business gateway signer and client.
//!
//! Every call is signed with the Satispay HTTP Signature scheme: an RSA-SHA256
//! signature over the request target, host, date and body digest, sent in the
//! `Authorization` header together with the key id assigned at registration.
//!
//! ## Example
//!
//! ```no_run
//! use paysign_core::{Context, OsEnv};
//! use paysign_satispay::apis::payment::PaymentFlow;
//! use paysign_satispay::{Config, SatispayClient};
//! use rust_decimal::Decimal;
//!
//! # async fn example(ctx: Context) -> paysign_core::Result<()> {
//! let config = Config::load(&ctx).await?;
//! let client = SatispayClient::from_config(ctx, &config)?;
//!
//! let call = client
//!     .payments()
//!     .create_amount(PaymentFlow::MatchCode, "EUR", Decimal::new(1250, 2))?;
//! let payment = client.queue(&call)?.await?;
//! println!("created payment {}", payment.id);
//! # Ok(())
//! # }
//! ```

mod constants;

mod config;
pub use config::{Config, Environment};

mod credential;
pub use credential::Credential;

mod sign_request;
pub use sign_request::{string_to_sign, RequestSigner};

mod client_info;
pub use client_info::ClientInfo;

mod currency;
pub use currency::CurrencyTable;

mod register;
pub use register::{register_credential, register_with_key, KEY_BITS};

mod provide_credential;
pub use provide_credential::*;

pub mod apis;

mod client;
pub use client::{Authorizations, Consumers, Payments, SatispayClient};
