use crate::call::PathScope;
use crate::{Error, Result};
use http::uri::{Authority, Scheme};
use http::Uri;
use std::fmt;
use std::str::FromStr;

/// Where gateway calls are sent.
///
/// An endpoint is a scheme, an authority and an optional base path such as
/// `/g_business`. Call paths are appended to the base path verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    scheme: Scheme,
    authority: Authority,
    base_path: String,
}

impl Endpoint {
    /// Parse an endpoint from a url like `https://example.com/base`.
    pub fn parse(url: &str) -> Result<Self> {
        let uri: Uri = url
            .parse()
            .map_err(|e| Error::config_invalid(format!("invalid endpoint {url}")).with_source(e))?;

        let parts = uri.into_parts();
        let scheme = parts
            .scheme
            .ok_or_else(|| Error::config_invalid(format!("endpoint {url} has no scheme")))?;
        let authority = parts
            .authority
            .ok_or_else(|| Error::config_invalid(format!("endpoint {url} has no host")))?;

        let base_path = match parts.path_and_query {
            Some(pq) => {
                if pq.query().is_some() {
                    return Err(Error::config_invalid(format!(
                        "endpoint {url} must not carry a query"
                    )));
                }
                pq.path().trim_end_matches('/').to_string()
            }
            None => String::new(),
        };

        Ok(Self {
            scheme,
            authority,
            base_path,
        })
    }

    /// Host sent in the `Host` header and covered by the signature.
    pub fn host(&self) -> &str {
        self.authority.as_str()
    }

    /// Base path without trailing slash, possibly empty.
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Resolve the absolute request path for a call path.
    ///
    /// The returned string is used both on the request line and in the
    /// signature.
    pub fn resolve_path(&self, path: &str, scope: PathScope) -> Result<String> {
        if !path.starts_with('/') {
            return Err(Error::request_invalid(format!(
                "call path {path:?} must start with '/'"
            )));
        }

        Ok(match scope {
            PathScope::Base => format!("{}{}", self.base_path, path),
            PathScope::Host => path.to_string(),
        })
    }

    /// Build the full request uri for an already resolved path.
    pub fn uri(&self, resolved_path: &str) -> Result<Uri> {
        Uri::builder()
            .scheme(self.scheme.clone())
            .authority(self.authority.clone())
            .path_and_query(resolved_path)
            .build()
            .map_err(|e| {
                Error::request_invalid(format!("invalid request path {resolved_path:?}"))
                    .with_source(e)
            })
    }
}

impl FromStr for Endpoint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}{}", self.scheme, self.authority, self.base_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case("https://authservices.satispay.com/g_business", "authservices.satispay.com", "/g_business"; "with base path")]
    #[test_case("https://staging.authservices.satispay.com/g_business/", "staging.authservices.satispay.com", "/g_business"; "trailing slash")]
    #[test_case("http://127.0.0.1:8080", "127.0.0.1:8080", ""; "no base path")]
    fn test_parse(url: &str, host: &str, base: &str) {
        let ep = Endpoint::parse(url).unwrap();
        assert_eq!(ep.host(), host);
        assert_eq!(ep.base_path(), base);
    }

    #[test_case("authservices.satispay.com"; "missing scheme")]
    #[test_case("https://example.com/base?x=1"; "query")]
    #[test_case("not a url"; "garbage")]
    fn test_parse_invalid(url: &str) {
        let err = Endpoint::parse(url).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    }

    #[test]
    fn test_signed_path_matches_uri_path() {
        let ep = Endpoint::parse("https://example.com/v1").unwrap();
        let path = ep.resolve_path("/payments/123", PathScope::Base).unwrap();
        assert_eq!(path, "/v1/payments/123");

        let uri = ep.uri(&path).unwrap();
        assert_eq!(uri.path(), path);
        assert_eq!(uri.to_string(), "https://example.com/v1/payments/123");
    }

    #[test]
    fn test_host_scope_ignores_base_path() {
        let ep = Endpoint::parse("https://example.com/g_business").unwrap();
        let path = ep
            .resolve_path("/wally-services/protocol/tests/signature", PathScope::Host)
            .unwrap();
        assert_eq!(path, "/wally-services/protocol/tests/signature");
    }

    #[test]
    fn test_relative_path_is_rejected() {
        let ep = Endpoint::parse("https://example.com").unwrap();
        let err = ep.resolve_path("payments", PathScope::Base).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RequestInvalid);
    }
}
