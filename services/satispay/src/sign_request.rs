use crate::Credential;
use http::Method;
use log::debug;
use paysign_core::hash::{base64_encode, base64_sha256};
use paysign_core::time::format_signature_date;
use paysign_core::{Error, HeaderSet, Result, SignRequest, SigningRequest};
use rsa::pkcs1v15::SigningKey;
use rsa::sha2::Sha256;
use rsa::signature::{SignatureEncoding, Signer};
use std::fmt::Write;

/// Headers covered by the signature, in canonical order.
const SIGNED_HEADERS: &str = "(request-target) host date digest";

/// RequestSigner that implements the Satispay HTTP Signature scheme.
///
/// Every request carries a `Digest` of its body and an `Authorization` header
/// holding an RSA-SHA256 signature over the request target, host, date and
/// digest.
#[derive(Debug, Default)]
pub struct RequestSigner {}

impl RequestSigner {
    /// Create a new request signer.
    pub fn new() -> Self {
        Self {}
    }
}

impl SignRequest for RequestSigner {
    type Credential = Credential;

    fn sign_request(&self, req: &SigningRequest, cred: &Self::Credential) -> Result<HeaderSet> {
        let date = format_signature_date(req.time);
        let digest = format!("SHA-256={}", base64_sha256(&req.body));

        let string_to_sign = string_to_sign(req, &date, &digest)?;
        debug!("string to sign: {}", &string_to_sign);

        let signing_key = SigningKey::<Sha256>::new(cred.private_key().clone());
        let signature = signing_key
            .try_sign(string_to_sign.as_bytes())
            .map_err(|e| Error::signing_failed("failed to sign request").with_source(e))?;
        let encoded_signature = base64_encode(&signature.to_bytes());

        let mut auth_value = String::new();
        write!(auth_value, "Signature keyId=\"{}\", ", cred.key_id())?;
        write!(auth_value, "algorithm=\"rsa-sha256\", ")?;
        write!(auth_value, "headers=\"{SIGNED_HEADERS}\", ")?;
        write!(auth_value, "signature=\"{encoded_signature}\"")?;

        let mut headers = HeaderSet::new();
        headers.insert_str("Host", &req.host)?;
        headers.insert_str("Date", &date)?;
        headers.insert_str("Digest", &digest)?;
        headers.insert_str("Authorization", &auth_value)?;
        Ok(headers)
    }
}

/// Build the canonical string covered by the signature.
///
/// Lines are joined with `\n` with no trailing newline.
pub fn string_to_sign(req: &SigningRequest, date: &str, digest: &str) -> Result<String> {
    if !matches!(
        req.method,
        Method::GET | Method::POST | Method::PUT | Method::PATCH | Method::DELETE
    ) {
        return Err(Error::request_invalid(format!(
            "unsupported http method: {}",
            req.method
        )));
    }

    let mut f = String::new();
    writeln!(
        f,
        "(request-target): {} {}",
        req.method.as_str().to_lowercase(),
        req.path
    )?;
    writeln!(f, "host: {}", req.host)?;
    writeln!(f, "date: {date}")?;
    write!(f, "digest: {digest}")?;
    Ok(f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use chrono::{TimeZone, Utc};
    use paysign_core::hash::base64_decode;
    use paysign_core::ErrorKind;
    use rsa::pkcs1v15::{Signature, VerifyingKey};
    use rsa::signature::Verifier;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    const PRIVATE_KEY: &str = include_str!("../testdata/keys/privKey.pem");
    const BODY: &str = r#"{"flow":"MATCH_CODE","amount_unit":100,"currency":"EUR"}"#;

    fn request(method: Method, body: &'static str) -> SigningRequest {
        SigningRequest::new(
            method,
            "staging.authservices.satispay.com",
            "/g_business/v1/payments",
            Bytes::from_static(body.as_bytes()),
            Utc.with_ymd_and_hms(2026, 10, 16, 9, 30, 0).unwrap(),
        )
    }

    fn credential() -> Credential {
        Credential::from_pem(PRIVATE_KEY, None, "test-key-id").unwrap()
    }

    #[test]
    fn test_string_to_sign() {
        let req = request(Method::POST, BODY);
        let s = string_to_sign(
            &req,
            "Fri, 16 Oct 2026 09:30:00 +0000",
            "SHA-256=jWjmI6cdwHPUs3tNU1lXxaKxar4Kee+elPnr1dj2Pqg=",
        )
        .unwrap();

        assert_eq!(
            s,
            "(request-target): post /g_business/v1/payments\n\
             host: staging.authservices.satispay.com\n\
             date: Fri, 16 Oct 2026 09:30:00 +0000\n\
             digest: SHA-256=jWjmI6cdwHPUs3tNU1lXxaKxar4Kee+elPnr1dj2Pqg="
        );
    }

    #[test]
    fn test_sign_request() {
        let _ = env_logger::builder().is_test(true).try_init();

        let headers = RequestSigner::new()
            .sign_request(&request(Method::POST, BODY), &credential())
            .unwrap();

        assert_eq!(headers.names(), vec!["host", "date", "digest", "authorization"]);
        assert_eq!(
            headers.get("host").unwrap(),
            "staging.authservices.satispay.com"
        );
        assert_eq!(
            headers.get("date").unwrap(),
            "Fri, 16 Oct 2026 09:30:00 +0000"
        );
        assert_eq!(
            headers.get("digest").unwrap(),
            "SHA-256=jWjmI6cdwHPUs3tNU1lXxaKxar4Kee+elPnr1dj2Pqg="
        );
        assert_eq!(
            headers.get("authorization").unwrap(),
            "Signature keyId=\"test-key-id\", algorithm=\"rsa-sha256\", \
             headers=\"(request-target) host date digest\", \
             signature=\"dQxVzWF6REhcRN2E2Lx+Tz0xJHC8ShDUQaqwNimRpfCy03QUY1YbNNfDfYNiptWwuTFiodHzQKrPlVdOaC0g9GNQNHDn5Xhz8r6nrMONA53c9QEVg2jHw8sDiARuLk6xvF8es2KlJrTqYHWBqSn2TnSkLML7gXysamxP9i6GBnFEfW2X1+YwFAv+5ysJyqmbAW5+X2cGd6sRfQJwsoXRn2rgkT2yJW/JYXaXIoxggvXHC28PNlKaEo8YCSRCFKVYs4qv/24p2CwPKiwL/Hx6WNhawxT7yPrjaB/6KOQKepx1JvuPV+xwhkzI1haEbLqiYHisHk5xrzxQDzK75Kea/g==\""
        );
    }

    #[test]
    fn test_sign_request_is_deterministic() {
        let signer = RequestSigner::new();
        let cred = credential();
        let a = signer.sign_request(&request(Method::GET, ""), &cred).unwrap();
        let b = signer.sign_request(&request(Method::GET, ""), &cred).unwrap();
        assert_eq!(a, b);
        assert_eq!(
            a.get("digest").unwrap(),
            "SHA-256=47DEQpj8HBSa+/TImW+5JCeuQeRkm5NMpJWZG3hSuFU="
        );
    }

    #[test_case(Method::GET, ""; "get")]
    #[test_case(Method::POST, BODY; "post")]
    #[test_case(Method::DELETE, ""; "delete")]
    fn test_signature_verifies_with_public_key(method: Method, body: &'static str) {
        let cred = credential();
        let req = request(method, body);
        let headers = RequestSigner::new().sign_request(&req, &cred).unwrap();

        let auth = headers.get("authorization").unwrap().to_str().unwrap();
        let (_, encoded) = auth.rsplit_once("signature=\"").unwrap();
        let signature =
            Signature::try_from(base64_decode(encoded.trim_end_matches('"')).unwrap().as_slice())
                .unwrap();

        let signed = string_to_sign(
            &req,
            headers.get("date").unwrap().to_str().unwrap(),
            headers.get("digest").unwrap().to_str().unwrap(),
        )
        .unwrap();
        VerifyingKey::<Sha256>::new(cred.public_key().clone())
            .verify(signed.as_bytes(), &signature)
            .unwrap();
    }

    #[test_case(Method::HEAD; "head")]
    #[test_case(Method::OPTIONS; "options")]
    #[test_case(Method::CONNECT; "connect")]
    fn test_unsupported_method(method: Method) {
        let err = RequestSigner::new()
            .sign_request(&request(method, ""), &credential())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RequestInvalid);
    }
}
