use crate::credential::encode_public_key;
use crate::{Credential, Environment};
use bytes::Bytes;
use http::header::CONTENT_TYPE;
use http::{Method, StatusCode};
use log::debug;
use paysign_core::{resolve, Context, Error, PathScope, Result};
use rsa::{RsaPrivateKey, RsaPublicKey};
use serde::{Deserialize, Serialize};

/// Size of the generated RSA keys.
pub const KEY_BITS: usize = 4096;

const AUTHENTICATION_KEYS_PATH: &str = "/v1/authentication_keys";

#[derive(Serialize)]
struct RegisterKey<'a> {
    public_key: &'a str,
    token: &'a str,
}

#[derive(Deserialize)]
struct RegisteredKey {
    key_id: String,
}

/// Generate a fresh key pair and register it with the gateway.
///
/// `activation_code` is the one-time code shown in the merchant dashboard.
/// Key generation is CPU heavy and runs on the calling task.
pub async fn register_credential(
    ctx: &Context,
    environment: &Environment,
    activation_code: &str,
) -> Result<Credential> {
    let private_key = RsaPrivateKey::new(&mut rand::thread_rng(), KEY_BITS)
        .map_err(|e| Error::unexpected("failed to generate rsa key").with_source(e))?;

    register_with_key(ctx, environment, activation_code, private_key).await
}

/// Register an existing private key with the gateway.
pub async fn register_with_key(
    ctx: &Context,
    environment: &Environment,
    activation_code: &str,
    private_key: RsaPrivateKey,
) -> Result<Credential> {
    let endpoint = environment.endpoint()?;
    let path = endpoint.resolve_path(AUTHENTICATION_KEYS_PATH, PathScope::Base)?;

    let public_key = encode_public_key(&RsaPublicKey::from(&private_key))?;
    let body = serde_json::to_vec(&RegisterKey {
        public_key: &public_key,
        token: activation_code,
    })
    .map_err(|e| Error::unexpected("failed to encode registration body").with_source(e))?;

    let req = http::Request::builder()
        .method(Method::POST)
        .uri(endpoint.uri(&path)?)
        .header(CONTENT_TYPE, "application/json")
        .body(Bytes::from(body))?;

    debug!("registering public key at {}", req.uri());
    let resp = ctx.http_send(req).await?;

    let registered: RegisteredKey = match resp.status() {
        StatusCode::BAD_REQUEST => return Err(Error::credential_invalid("invalid RSA key")),
        StatusCode::FORBIDDEN => {
            return Err(Error::credential_denied("activation code already paired"))
        }
        StatusCode::NOT_FOUND => return Err(Error::credential_denied("activation code not found")),
        status => resolve(status, resp.body())?,
    };

    debug!("public key registered with key id {}", registered.key_id);
    Ok(Credential::new(private_key, registered.key_id))
}
