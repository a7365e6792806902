use super::segment;
use paysign_core::CallDescriptor;
use serde::Deserialize;

/// A consumer registered with the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Consumer {
    pub id: String,
}

/// Look up a consumer by phone number, in international format.
pub fn retrieve(phone_number: &str) -> CallDescriptor<Consumer> {
    CallDescriptor::get(format!("/v1/consumers/{}", segment(phone_number)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::Method;

    #[test]
    fn test_retrieve() {
        let call = retrieve("+393331234567");
        assert_eq!(call.method(), Method::GET);
        assert_eq!(call.path(), "/v1/consumers/+393331234567");

        let consumer: Consumer = serde_json::from_str(r#"{"id":"c-1"}"#).unwrap();
        assert_eq!(consumer.id, "c-1");
    }
}
