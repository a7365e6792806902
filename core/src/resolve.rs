//! Turn a raw gateway response into a typed result.

use crate::{ApiError, Error, Result};
use http::StatusCode;
use log::{debug, warn};
use serde::de::DeserializeOwned;

/// Resolve a response into `T`.
///
/// Only `200 OK` is a success. Every other status is expected to carry an
/// [`ApiError`] body.
pub fn resolve<T: DeserializeOwned>(status: StatusCode, body: &[u8]) -> Result<T> {
    if status == StatusCode::OK {
        return serde_json::from_slice(body).map_err(|e| {
            Error::decode(format!("failed to decode successful response: {e}")).with_source(e)
        });
    }

    debug!("gateway responded with status {status}");
    match serde_json::from_slice::<ApiError>(body) {
        Ok(err) => Err(Error::api(err)),
        Err(e) => {
            warn!("gateway error body with status {status} is not decodable: {e}");
            Err(Error::decode(format!(
                "failed to decode error response with status {status}: {e}"
            ))
            .with_source(e))
        }
    }
}
