//! Core components for signed payment gateway calls.
//!
//! This crate provides the foundational types and traits for the paysign ecosystem.
//! It knows nothing about a specific gateway: services plug in how credentials are
//! loaded and how a request is signed, and the core takes care of building, sending
//! and resolving the call.
//!
//! ## Overview
//!
//! The crate is built around several key concepts:
//!
//! - **Context**: A container that holds implementations for file reading, HTTP sending, and environment access
//! - **Traits**: Abstract interfaces for credential loading (`ProvideCredential`) and request signing (`SignRequest`)
//! - **Signer**: Coordinates credential loading and request signing
//! - **CallDescriptor**: A declarative, reusable description of one gateway call
//! - **Client**: Dispatches calls in blocking, future or stream style through one shared send path
//!
//! ## Example
//!
//! ```no_run
//! use async_trait::async_trait;
//! use paysign_core::{
//!     CallDescriptor, Client, Context, Endpoint, HeaderSet, ProvideCredential, Result,
//!     SignRequest, Signer, SigningCredential, SigningRequest,
//! };
//! use serde::Deserialize;
//!
//! #[derive(Clone, Debug)]
//! struct MyCredential {
//!     key_id: String,
//! }
//!
//! impl SigningCredential for MyCredential {
//!     fn is_valid(&self) -> bool {
//!         !self.key_id.is_empty()
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct MyProvider;
//!
//! #[async_trait]
//! impl ProvideCredential for MyProvider {
//!     type Credential = MyCredential;
//!
//!     async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
//!         Ok(Some(MyCredential {
//!             key_id: "my-key".to_string(),
//!         }))
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct MySigner;
//!
//! impl SignRequest for MySigner {
//!     type Credential = MyCredential;
//!
//!     fn sign_request(&self, req: &SigningRequest, cred: &MyCredential) -> Result<HeaderSet> {
//!         let mut headers = HeaderSet::new();
//!         headers.insert_str("Host", &req.host)?;
//!         headers.insert_str("Authorization", &format!("Key {}", cred.key_id))?;
//!         Ok(headers)
//!     }
//! }
//!
//! #[derive(Debug, Deserialize)]
//! struct Payment {
//!     id: String,
//! }
//!
//! # async fn example() -> Result<()> {
//! let ctx = Context::new();
//! let signer = Signer::new(ctx.clone(), MyProvider, MySigner);
//! let client = Client::new(ctx, signer, Endpoint::parse("https://example.com/api")?);
//!
//! let call = CallDescriptor::<Payment>::get("/v1/payments/42");
//! let payment = client.queue(&call)?.await?;
//! println!("{}", payment.id);
//! # Ok(())
//! # }
//! ```
//!
//! ## Traits
//!
//! This crate defines several important traits:
//!
//! - [`FileRead`]: For asynchronous file reading
//! - [`HttpSend`]: For sending HTTP requests
//! - [`Env`]: For environment variable access
//! - [`ProvideCredential`]: For loading credentials from various sources
//! - [`SignRequest`]: For computing gateway specific authentication headers
//! - [`SigningCredential`]: For validating credentials
//!
//! ## Utilities
//!
//! The crate also provides utility modules:
//!
//! - [`hash`]: Digest and encoding utilities
//! - [`time`]: Time formatting utilities
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::{
    Context, Env, FileRead, HttpSend, NoopEnv, NoopFileRead, NoopHttpSend, OsEnv, StaticEnv,
};

mod error;
pub use error::{ApiError, Error, ErrorKind, Result};

mod api;
pub use api::{ProvideCredential, SignRequest, SigningCredential};
mod chain;
pub use chain::ProvideCredentialChain;
mod request;
pub use request::{HeaderSet, SigningRequest};
mod signer;
pub use signer::Signer;

mod call;
pub use call::{method_carries_body, CallDescriptor, PathScope};
mod endpoint;
pub use endpoint::Endpoint;
mod resolve;
pub use resolve::resolve;
mod client;
pub use client::{CallHandle, CallStream, Client};
