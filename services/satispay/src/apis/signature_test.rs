//! Signature self-check.
//!
//! The gateway echoes back how it parsed and verified the signature of the
//! request. This lives outside the business base path.

use paysign_core::{CallDescriptor, PathScope};
use serde::Deserialize;

const SIGNATURE_TEST_PATH: &str = "/wally-services/protocol/tests/signature";

/// Result of the signature self-check.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SignatureTest {
    #[serde(default)]
    pub authentication_key: Option<AuthenticationKey>,
    #[serde(default)]
    pub signature: Option<Signature>,
    #[serde(default)]
    pub signed_string: Option<String>,
}

/// The key the gateway matched the request to.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthenticationKey {
    #[serde(default)]
    pub access_key: Option<String>,
    #[serde(default)]
    pub customer_uid: Option<String>,
    #[serde(default)]
    pub customer_id: Option<String>,
    #[serde(default)]
    pub provider_id: Option<String>,
    #[serde(default)]
    pub key_type: Option<String>,
    #[serde(default)]
    pub auth_type: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub enable: Option<bool>,
    #[serde(default)]
    pub version: Option<i64>,
    #[serde(default)]
    pub insert_date: Option<String>,
}

/// The signature as parsed by the gateway.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Signature {
    #[serde(default)]
    pub key_id: Option<String>,
    #[serde(default)]
    pub algorithm: Option<String>,
    #[serde(default)]
    pub headers: Option<Vec<String>>,
    #[serde(default)]
    pub signature: Option<String>,
    #[serde(default)]
    pub resign_required: Option<bool>,
    #[serde(default)]
    pub iteration_count: Option<i64>,
    #[serde(default)]
    pub valid: Option<bool>,
}

/// Ask the gateway to verify the signature of this very request.
pub fn test_signature() -> CallDescriptor<SignatureTest> {
    CallDescriptor::get(SIGNATURE_TEST_PATH).with_scope(PathScope::Host)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_descriptor_is_host_scoped() {
        let call = test_signature();
        assert_eq!(call.scope(), PathScope::Host);
        assert_eq!(call.path(), "/wally-services/protocol/tests/signature");
    }

    #[test]
    fn test_decode() {
        let resp: SignatureTest = serde_json::from_str(
            r#"{
                "authentication_key": {"access_key": "test-key-id", "enable": true, "version": 1},
                "signature": {
                    "key_id": "test-key-id",
                    "algorithm": "rsa-sha256",
                    "headers": ["(request-target)", "host", "date", "digest"],
                    "resign_required": false,
                    "iteration_count": 1,
                    "valid": true
                },
                "signed_string": "(request-target): get /wally-services/protocol/tests/signature"
            }"#,
        )
        .unwrap();

        let signature = resp.signature.unwrap();
        assert_eq!(signature.valid, Some(true));
        assert_eq!(signature.headers.unwrap().len(), 4);
        assert_eq!(
            resp.authentication_key.unwrap().access_key.as_deref(),
            Some("test-key-id")
        );
    }
}
