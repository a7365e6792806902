use crate::time::DateTime;
use crate::Result;
use bytes::Bytes;
use http::header::HeaderName;
use http::HeaderMap;
use http::HeaderValue;
use http::Method;

/// Everything a signer needs to know about one physical HTTP attempt.
///
/// It is built fresh for every send because the signing time changes.
#[derive(Debug, Clone)]
pub struct SigningRequest {
    /// HTTP method.
    pub method: Method,
    /// Host the request is addressed to, as it will appear in the `Host` header.
    pub host: String,
    /// Absolute request path, exactly as it will appear on the request line.
    pub path: String,
    /// Raw request body, empty for bodiless methods.
    pub body: Bytes,
    /// Signing time.
    pub time: DateTime,
}

impl SigningRequest {
    /// Create a new signing request.
    pub fn new(
        method: Method,
        host: impl Into<String>,
        path: impl Into<String>,
        body: Bytes,
        time: DateTime,
    ) -> Self {
        Self {
            method,
            host: host.into(),
            path: path.into(),
            body,
            time,
        }
    }
}

/// An ordered set of headers.
///
/// Unlike [`HeaderMap`], the insertion order is part of the value so that the
/// wire request stays deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderSet {
    entries: Vec<(HeaderName, HeaderValue)>,
}

impl HeaderSet {
    /// Create an empty header set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a header.
    ///
    /// Re-inserting an existing name replaces its value in place.
    pub fn insert(&mut self, name: HeaderName, value: HeaderValue) {
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some((_, v)) => *v = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Insert a header from string parts.
    pub fn insert_str(&mut self, name: &str, value: &str) -> Result<()> {
        let name = HeaderName::from_bytes(name.as_bytes())?;
        let value = HeaderValue::from_str(value)?;
        self.insert(name, value);
        Ok(())
    }

    /// Get header value by name.
    pub fn get(&self, name: impl AsRef<str>) -> Option<&HeaderValue> {
        let name = name.as_ref();
        self.entries
            .iter()
            .find(|(k, _)| k.as_str().eq_ignore_ascii_case(name))
            .map(|(_, v)| v)
    }

    /// Header names in insertion order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(k, _)| k.as_str()).collect()
    }

    /// Iterate over headers in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&HeaderName, &HeaderValue)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    /// Number of headers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no headers.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write all headers into a header map, keeping their order.
    pub fn apply(&self, headers: &mut HeaderMap) {
        for (k, v) in &self.entries {
            headers.insert(k.clone(), v.clone());
        }
    }
}

impl IntoIterator for HeaderSet {
    type Item = (HeaderName, HeaderValue);
    type IntoIter = std::vec::IntoIter<(HeaderName, HeaderValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_header_set_keeps_order() {
        let mut hs = HeaderSet::new();
        hs.insert_str("Host", "example.com").unwrap();
        hs.insert_str("Date", "Fri, 16 Oct 2026 09:30:00 +0000")
            .unwrap();
        hs.insert_str("Digest", "SHA-256=abc").unwrap();
        hs.insert_str("host", "other.example.com").unwrap();

        assert_eq!(hs.names(), vec!["host", "date", "digest"]);
        assert_eq!(hs.get("HOST").unwrap(), "other.example.com");
        assert_eq!(hs.len(), 3);
    }

    #[test]
    fn test_header_set_apply() {
        let mut hs = HeaderSet::new();
        hs.insert_str("x-satispay-os", "linux").unwrap();
        hs.insert_str("Digest", "SHA-256=abc").unwrap();

        let mut headers = HeaderMap::new();
        hs.apply(&mut headers);

        let names: Vec<&str> = headers.keys().map(|k| k.as_str()).collect();
        assert_eq!(names, vec!["x-satispay-os", "digest"]);
    }

    #[test]
    fn test_header_set_rejects_invalid_value() {
        let mut hs = HeaderSet::new();
        assert!(hs.insert_str("User-Agent", "bad\nvalue").is_err());
        assert!(hs.is_empty());
    }
}
