use crate::{Error, Result};
use bytes::Bytes;
use http::Method;
use serde::Serialize;
use std::fmt;
use std::marker::PhantomData;
use uuid::Uuid;

/// How a call path is joined with the endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PathScope {
    /// Append the path to the endpoint base path.
    #[default]
    Base,
    /// Use the path as is, ignoring the endpoint base path.
    Host,
}

/// Returns true if requests with this method carry a body.
pub fn method_carries_body(method: &Method) -> bool {
    matches!(*method, Method::POST | Method::PUT | Method::PATCH)
}

/// A declarative description of one gateway call.
///
/// `T` is the type the 200 response decodes into. The descriptor is
/// inert until handed to a dispatch strategy, and can be dispatched any
/// number of times. The idempotency key is fixed at construction and is
/// kept by clones, so every dispatch of the same descriptor carries the
/// same key.
pub struct CallDescriptor<T> {
    method: Method,
    path: String,
    body: Bytes,
    idempotency_key: Uuid,
    scope: PathScope,
    _marker: PhantomData<fn() -> T>,
}

impl<T> CallDescriptor<T> {
    /// Create a new call descriptor.
    ///
    /// Only GET, POST, PUT, PATCH and DELETE are accepted, and GET or
    /// DELETE must not carry a body.
    pub fn new(method: Method, path: impl Into<String>, body: impl Into<Bytes>) -> Result<Self> {
        let body = body.into();
        match method {
            Method::GET | Method::DELETE => {
                if !body.is_empty() {
                    return Err(Error::request_invalid(format!(
                        "{method} request must not carry a body"
                    )));
                }
            }
            Method::POST | Method::PUT | Method::PATCH => {}
            _ => {
                return Err(Error::request_invalid(format!(
                    "unsupported http method: {method}"
                )))
            }
        }

        Ok(Self {
            method,
            path: path.into(),
            body,
            idempotency_key: Uuid::new_v4(),
            scope: PathScope::Base,
            _marker: PhantomData,
        })
    }

    /// A GET call.
    pub fn get(path: impl Into<String>) -> Self {
        Self::bodiless(Method::GET, path.into())
    }

    /// A DELETE call.
    pub fn delete(path: impl Into<String>) -> Self {
        Self::bodiless(Method::DELETE, path.into())
    }

    /// A POST call with a raw body.
    pub fn post(path: impl Into<String>, body: impl Into<Bytes>) -> Self {
        Self::bodied(Method::POST, path.into(), body.into())
    }

    /// A PUT call with a raw body.
    pub fn put(path: impl Into<String>, body: impl Into<Bytes>) -> Self {
        Self::bodied(Method::PUT, path.into(), body.into())
    }

    /// A PATCH call with a raw body.
    pub fn patch(path: impl Into<String>, body: impl Into<Bytes>) -> Self {
        Self::bodied(Method::PATCH, path.into(), body.into())
    }

    /// A call whose body is the JSON encoding of `body`.
    pub fn json(method: Method, path: impl Into<String>, body: &impl Serialize) -> Result<Self> {
        let body = serde_json::to_vec(body).map_err(|e| {
            Error::request_invalid("failed to encode request body").with_source(e)
        })?;
        Self::new(method, path, body)
    }

    /// Set the path scope.
    pub fn with_scope(mut self, scope: PathScope) -> Self {
        self.scope = scope;
        self
    }

    fn bodiless(method: Method, path: String) -> Self {
        Self::bodied(method, path, Bytes::new())
    }

    fn bodied(method: Method, path: String, body: Bytes) -> Self {
        Self {
            method,
            path,
            body,
            idempotency_key: Uuid::new_v4(),
            scope: PathScope::Base,
            _marker: PhantomData,
        }
    }

    /// HTTP method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Call path, relative to the endpoint base path unless scoped to host.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Request body, empty for bodiless methods.
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Idempotency key sent with every dispatch of this call.
    pub fn idempotency_key(&self) -> Uuid {
        self.idempotency_key
    }

    /// Path scope.
    pub fn scope(&self) -> PathScope {
        self.scope
    }
}

impl<T> Clone for CallDescriptor<T> {
    fn clone(&self) -> Self {
        Self {
            method: self.method.clone(),
            path: self.path.clone(),
            body: self.body.clone(),
            idempotency_key: self.idempotency_key,
            scope: self.scope,
            _marker: PhantomData,
        }
    }
}

impl<T> fmt::Debug for CallDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallDescriptor")
            .field("method", &self.method)
            .field("path", &self.path)
            .field("body_len", &self.body.len())
            .field("idempotency_key", &self.idempotency_key)
            .field("scope", &self.scope)
            .finish()
    }
}
