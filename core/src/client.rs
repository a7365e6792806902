use crate::call::method_carries_body;
use crate::resolve::resolve;
use crate::time::{self, DateTime};
use crate::{
    CallDescriptor, Context, Endpoint, Error, HeaderSet, Result, Signer, SigningCredential,
    SigningRequest,
};
use bytes::Bytes;
use futures::stream::{self, BoxStream, StreamExt};
use http::header::{HeaderName, HeaderValue, CONTENT_TYPE};
use log::debug;
use serde::de::DeserializeOwned;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context as TaskContext, Poll};
use tokio::runtime::{Builder, Handle};
use tokio::task::JoinHandle;

/// Stream returned by [`Client::stream`].
///
/// It emits exactly one item and then completes.
pub type CallStream<T> = BoxStream<'static, Result<T>>;

/// Client dispatches signed calls to one gateway endpoint.
///
/// Every strategy ([`Client::call`], [`Client::queue`] and [`Client::stream`])
/// goes through the same [`Client::send`], so a given call yields the same
/// request and the same outcome no matter how it is dispatched. Calls are
/// never retried.
#[derive(Clone)]
pub struct Client<K: SigningCredential> {
    ctx: Context,
    signer: Signer<K>,
    endpoint: Endpoint,
    headers: HeaderSet,
    clock: Arc<dyn Fn() -> DateTime + Send + Sync>,
}

impl<K: SigningCredential> fmt::Debug for Client<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("ctx", &self.ctx)
            .field("signer", &self.signer)
            .field("endpoint", &self.endpoint)
            .field("headers", &self.headers)
            .finish_non_exhaustive()
    }
}

impl<K: SigningCredential> Client<K> {
    /// Create a new client.
    pub fn new(ctx: Context, signer: Signer<K>, endpoint: Endpoint) -> Self {
        Self {
            ctx,
            signer,
            endpoint,
            headers: HeaderSet::new(),
            clock: Arc::new(time::now),
        }
    }

    /// Set headers sent ahead of the signed ones on every request.
    pub fn with_default_headers(mut self, headers: HeaderSet) -> Self {
        self.headers = headers;
        self
    }

    /// Replace the clock used for the signing time.
    pub fn with_clock(mut self, clock: impl Fn() -> DateTime + Send + Sync + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Endpoint calls are sent to.
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Signer used by this client.
    pub fn signer(&self) -> &Signer<K> {
        &self.signer
    }

    /// Build the signed wire request for a call without sending it.
    pub async fn build_request<T>(&self, call: &CallDescriptor<T>) -> Result<http::Request<Bytes>> {
        let path = self.endpoint.resolve_path(call.path(), call.scope())?;
        let uri = self.endpoint.uri(&path)?;

        let signing = SigningRequest::new(
            call.method().clone(),
            self.endpoint.host(),
            path,
            call.body().clone(),
            (self.clock)(),
        );
        let signed = self.signer.sign(&signing).await?;

        let mut req = http::Request::builder()
            .method(call.method().clone())
            .uri(uri)
            .body(call.body().clone())?;

        let headers = req.headers_mut();
        self.headers.apply(headers);
        signed.apply(headers);
        headers.insert(
            HeaderName::from_static("idempotency-key"),
            HeaderValue::from_str(&call.idempotency_key().to_string())?,
        );
        if method_carries_body(call.method()) {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }

        Ok(req)
    }

    /// Sign, send and resolve a call once.
    pub async fn send<T: DeserializeOwned>(&self, call: &CallDescriptor<T>) -> Result<T> {
        let req = self.build_request(call).await?;
        debug!("sending {} {}", req.method(), req.uri());

        let resp = self.ctx.http_send(req).await?;
        debug!("received status {} for {} {}", resp.status(), call.method(), call.path());

        resolve(resp.status(), resp.body())
    }

    /// Dispatch a call and block the current thread until it resolves.
    ///
    /// This drives the call on a private runtime, so it must not be used
    /// from inside an async context.
    pub fn call<T: DeserializeOwned>(&self, call: &CallDescriptor<T>) -> Result<T> {
        if Handle::try_current().is_ok() {
            return Err(Error::unexpected(
                "blocking call used inside an async runtime, use queue or stream instead",
            ));
        }

        let rt = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| Error::unexpected("failed to build runtime").with_source(e))?;
        rt.block_on(self.send(call))
    }

    /// Dispatch a call in the background of the current tokio runtime.
    ///
    /// The returned handle resolves to the call result. Dropping it does
    /// not cancel the in-flight call, use [`CallHandle::abort`] for that.
    pub fn queue<T>(&self, call: &CallDescriptor<T>) -> Result<CallHandle<T>>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let handle = Handle::try_current().map_err(|e| {
            Error::unexpected("queued call requires a tokio runtime").with_source(e)
        })?;

        let client = self.clone();
        let call = call.clone();
        let inner = handle.spawn(async move { client.send(&call).await });
        Ok(CallHandle { inner })
    }

    /// Dispatch a call as a single item stream.
    ///
    /// The stream is cold: nothing is sent until it is first polled.
    pub fn stream<T>(&self, call: &CallDescriptor<T>) -> CallStream<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let client = self.clone();
        let call = call.clone();
        stream::once(async move { client.queue(&call)?.await }).boxed()
    }
}

/// Handle to a call dispatched by [`Client::queue`].
#[derive(Debug)]
pub struct CallHandle<T> {
    inner: JoinHandle<Result<T>>,
}

impl<T> CallHandle<T> {
    /// Cancel the call.
    pub fn abort(&self) {
        self.inner.abort();
    }

    /// Returns true if the call has completed.
    pub fn is_finished(&self) -> bool {
        self.inner.is_finished()
    }
}

impl<T> Future for CallHandle<T> {
    type Output = Result<T>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut TaskContext<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.inner).poll(cx).map(|res| match res {
            Ok(v) => v,
            Err(e) if e.is_cancelled() => Err(Error::unexpected("call was cancelled").with_source(e)),
            Err(e) => Err(Error::unexpected("call task failed").with_source(e)),
        })
    }
}
