use crate::{
    Context, Error, HeaderSet, ProvideCredential, Result, SignRequest, SigningCredential,
    SigningRequest,
};
use log::debug;
use std::sync::Arc;
use tokio::sync::OnceCell;

/// Signer is the main struct used to sign the request.
///
/// The credential is loaded lazily on first use and then shared by every
/// clone of the signer.
#[derive(Clone, Debug)]
pub struct Signer<K: SigningCredential> {
    ctx: Context,
    provider: Arc<dyn ProvideCredential<Credential = K>>,
    builder: Arc<dyn SignRequest<Credential = K>>,
    credential: Arc<OnceCell<K>>,
}

impl<K: SigningCredential> Signer<K> {
    /// Create a new signer.
    pub fn new(
        ctx: Context,
        provider: impl ProvideCredential<Credential = K>,
        builder: impl SignRequest<Credential = K>,
    ) -> Self {
        Self {
            ctx,
            provider: Arc::new(provider),
            builder: Arc::new(builder),
            credential: Arc::new(OnceCell::new()),
        }
    }

    /// Get the credential, loading it on first use.
    pub async fn credential(&self) -> Result<&K> {
        self.credential
            .get_or_try_init(|| async {
                debug!("loading signing credential from {:?}", self.provider);
                let cred = self
                    .provider
                    .provide_credential(&self.ctx)
                    .await?
                    .ok_or_else(|| Error::credential_invalid("no signing credential found"))?;
                if !cred.is_valid() {
                    return Err(Error::credential_invalid(
                        "loaded signing credential is not usable",
                    ));
                }
                Ok::<K, Error>(cred)
            })
            .await
    }

    /// Compute the authentication headers for the request.
    pub async fn sign(&self, req: &SigningRequest) -> Result<HeaderSet> {
        let cred = self.credential().await?;
        self.builder.sign_request(req, cred)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use bytes::Bytes;
    use http::Method;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Clone, Debug)]
    struct TestKey(String);

    impl SigningCredential for TestKey {
        fn is_valid(&self) -> bool {
            !self.0.is_empty()
        }
    }

    #[derive(Debug, Default)]
    struct CountingProvider {
        key: &'static str,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl ProvideCredential for CountingProvider {
        type Credential = TestKey;

        async fn provide_credential(&self, _: &Context) -> Result<Option<TestKey>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Some(TestKey(self.key.to_string())))
        }
    }

    #[derive(Debug)]
    struct EchoBuilder;

    impl SignRequest for EchoBuilder {
        type Credential = TestKey;

        fn sign_request(&self, req: &SigningRequest, cred: &TestKey) -> Result<HeaderSet> {
            let mut hs = HeaderSet::new();
            hs.insert_str("x-key", &cred.0)?;
            hs.insert_str("x-path", &req.path)?;
            Ok(hs)
        }
    }

    fn request() -> SigningRequest {
        SigningRequest::new(
            Method::GET,
            "example.com",
            "/v1/payments",
            Bytes::new(),
            crate::time::now(),
        )
    }

    #[tokio::test]
    async fn test_credential_loaded_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let signer = Signer::new(
            Context::new(),
            CountingProvider {
                key: "key-1",
                calls: calls.clone(),
            },
            EchoBuilder,
        );

        let cloned = signer.clone();
        let a = signer.sign(&request()).await.unwrap();
        let b = cloned.sign(&request()).await.unwrap();

        assert_eq!(a, b);
        assert_eq!(a.get("x-key").unwrap(), "key-1");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_invalid_credential_is_rejected() {
        let signer = Signer::new(
            Context::new(),
            CountingProvider {
                key: "",
                calls: Arc::default(),
            },
            EchoBuilder,
        );

        let err = signer.sign(&request()).await.unwrap_err();
        assert!(err.is_credential_error());
    }
}
