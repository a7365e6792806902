use crate::provide_credential::{DirCredentialProvider, EnvCredentialProvider};
use crate::{Config, Credential};
use async_trait::async_trait;
use paysign_core::{Context, ProvideCredential, ProvideCredentialChain, Result};

/// Default credential provider for Satispay.
///
/// This provider will try to load the credential in the following order:
/// 1. From environment variables
/// 2. From the key directory (configured, `SATISPAY_KEY_DIR` or `~/.satispay`)
#[derive(Debug)]
pub struct DefaultCredentialProvider {
    chain: ProvideCredentialChain<Credential>,
}

impl Default for DefaultCredentialProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DefaultCredentialProvider {
    /// Create a new DefaultCredentialProvider.
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    /// Create a DefaultCredentialProvider that honors the key directory in `config`.
    pub fn with_config(config: &Config) -> Self {
        let mut dir = DirCredentialProvider::new();
        if let Some(key_dir) = &config.key_dir {
            dir = dir.with_dir(key_dir.clone());
        }

        let chain = ProvideCredentialChain::new()
            .push(EnvCredentialProvider::new())
            .push(dir);

        Self { chain }
    }
}

#[async_trait]
impl ProvideCredential for DefaultCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        self.chain.provide_credential(ctx).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;
    use paysign_core::StaticEnv;
    use paysign_file_read_tokio::TokioFileRead;
    use std::collections::HashMap;

    const PRIVATE_KEY: &str = include_str!("../../testdata/keys/privKey.pem");

    fn ctx(envs: HashMap<String, String>) -> Context {
        Context::new()
            .with_file_read(TokioFileRead)
            .with_env(StaticEnv {
                home_dir: None,
                envs,
            })
    }

    #[tokio::test]
    async fn test_env_wins_over_dir() -> anyhow::Result<()> {
        let envs = HashMap::from([
            (SATISPAY_KEY_ID.to_string(), "env-key-id".to_string()),
            (SATISPAY_PRIVATE_KEY.to_string(), PRIVATE_KEY.to_string()),
        ]);
        let config = Config {
            key_dir: Some(format!("{}/testdata/keys", env!("CARGO_MANIFEST_DIR"))),
            ..Default::default()
        };

        let cred = DefaultCredentialProvider::with_config(&config)
            .provide_credential(&ctx(envs))
            .await?;
        assert_eq!(cred.unwrap().key_id(), "env-key-id");

        Ok(())
    }

    #[tokio::test]
    async fn test_falls_back_to_dir() -> anyhow::Result<()> {
        let config = Config {
            key_dir: Some(format!("{}/testdata/keys", env!("CARGO_MANIFEST_DIR"))),
            ..Default::default()
        };

        let cred = DefaultCredentialProvider::with_config(&config)
            .provide_credential(&ctx(HashMap::new()))
            .await?;
        assert_eq!(cred.unwrap().key_id(), "test-key-id");

        Ok(())
    }

    #[tokio::test]
    async fn test_nothing_found() -> anyhow::Result<()> {
        let cred = DefaultCredentialProvider::new()
            .provide_credential(&ctx(HashMap::new()))
            .await?;
        assert!(cred.is_none());

        Ok(())
    }
}
