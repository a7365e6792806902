use crate::Credential;
use async_trait::async_trait;
use paysign_core::{Context, ProvideCredential, Result};

/// StaticCredentialProvider provides a credential supplied in code.
#[derive(Debug, Clone)]
pub struct StaticCredentialProvider {
    private_key: String,
    public_key: Option<String>,
    key_id: String,
}

impl StaticCredentialProvider {
    /// Create a new StaticCredentialProvider from a PEM private key and a key id.
    pub fn new(private_key: &str, key_id: &str) -> Self {
        Self {
            private_key: private_key.to_string(),
            public_key: None,
            key_id: key_id.to_string(),
        }
    }

    /// Set the PEM public key, checked against the private key on load.
    pub fn with_public_key(mut self, public_key: &str) -> Self {
        self.public_key = Some(public_key.to_string());
        self
    }
}

#[async_trait]
impl ProvideCredential for StaticCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, _ctx: &Context) -> Result<Option<Self::Credential>> {
        Credential::from_pem(&self.private_key, self.public_key.as_deref(), &self.key_id).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paysign_core::ErrorKind;

    const PRIVATE_KEY: &str = include_str!("../../testdata/keys/privKey.pem");
    const PUBLIC_KEY: &str = include_str!("../../testdata/keys/pubKey.pem");

    #[tokio::test]
    async fn test_static_credential_provider() -> anyhow::Result<()> {
        let provider =
            StaticCredentialProvider::new(PRIVATE_KEY, "test-key-id").with_public_key(PUBLIC_KEY);
        let cred = provider.provide_credential(&Context::new()).await?;
        assert_eq!(cred.unwrap().key_id(), "test-key-id");

        Ok(())
    }

    #[tokio::test]
    async fn test_static_credential_provider_bad_key() {
        let provider = StaticCredentialProvider::new("garbage", "test-key-id");
        let err = provider
            .provide_credential(&Context::new())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
    }
}
