use super::segment;
use http::Method;
use paysign_core::{CallDescriptor, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

const AUTHORIZATIONS_PATH: &str = "/v1/pre_authorized_payment_tokens";

/// Body of a pre-authorization request.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateAuthorization {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, String>>,
}

/// Body of a pre-authorization update.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateAuthorization {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumer_uid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, String>>,
}

/// A pre-authorized payment token.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Authorization {
    pub id: String,
    #[serde(default)]
    pub code_identifier: Option<String>,
    #[serde(default)]
    pub shop_uid: Option<String>,
    #[serde(default)]
    pub consumer_uid: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub callback_url: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub metadata: Option<Map<String, Value>>,
}

/// Request a new pre-authorization.
pub fn create(body: &CreateAuthorization) -> Result<CallDescriptor<Authorization>> {
    CallDescriptor::json(Method::POST, AUTHORIZATIONS_PATH, body)
}

/// Get a pre-authorization by id.
pub fn get(id: &str) -> CallDescriptor<Authorization> {
    CallDescriptor::get(format!("{AUTHORIZATIONS_PATH}/{}", segment(id)))
}

/// Update a pre-authorization.
pub fn update(id: &str, body: &UpdateAuthorization) -> Result<CallDescriptor<Authorization>> {
    CallDescriptor::json(
        Method::PUT,
        format!("{AUTHORIZATIONS_PATH}/{}", segment(id)),
        body,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_create() {
        let call = create(&CreateAuthorization {
            reason: Some("monthly subscription".into()),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(call.method(), Method::POST);
        assert_eq!(call.path(), "/v1/pre_authorized_payment_tokens");
        assert_eq!(
            std::str::from_utf8(call.body()).unwrap(),
            r#"{"reason":"monthly subscription"}"#
        );
    }

    #[test]
    fn test_get_and_update_target_same_resource() {
        let get = get("tok-1");
        let update = update(
            "tok-1",
            &UpdateAuthorization {
                status: Some("CANCELED".into()),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(get.method(), Method::GET);
        assert!(get.body().is_empty());
        assert_eq!(update.method(), Method::PUT);
        assert_eq!(get.path(), update.path());
        assert_eq!(update.path(), "/v1/pre_authorized_payment_tokens/tok-1");
    }

    #[test]
    fn test_decode() {
        let auth: Authorization = serde_json::from_str(
            r#"{"id":"tok-1","code_identifier":"S6Y-PAY--1","status":"PENDING"}"#,
        )
        .unwrap();
        assert_eq!(auth.id, "tok-1");
        assert_eq!(auth.status.as_deref(), Some("PENDING"));
        assert_eq!(auth.consumer_uid, None);
    }
}
