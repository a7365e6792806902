// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use crate::constants::*;
use crate::ClientInfo;
use paysign_core::{Context, Endpoint, Error, Result};
use serde::Deserialize;
use std::fmt::{self, Display};
use std::str::FromStr;

/// Gateway environment calls are sent to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// Live gateway.
    #[default]
    Production,
    /// Sandbox gateway.
    Staging,
    /// Any other deployment, such as a local mock server.
    Custom(Endpoint),
}

impl Environment {
    /// Endpoint of this environment.
    pub fn endpoint(&self) -> Result<Endpoint> {
        match self {
            Environment::Production => Endpoint::parse(PRODUCTION_ENDPOINT),
            Environment::Staging => Endpoint::parse(STAGING_ENDPOINT),
            Environment::Custom(endpoint) => Ok(endpoint.clone()),
        }
    }
}

impl FromStr for Environment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" => Ok(Environment::Production),
            "staging" | "sandbox" => Ok(Environment::Staging),
            _ => Err(Error::config_invalid(format!("unknown environment: {s}"))),
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Production => f.write_str("production"),
            Environment::Staging => f.write_str("staging"),
            Environment::Custom(endpoint) => write!(f, "{endpoint}"),
        }
    }
}

/// Config for Satispay.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Environment calls are sent to.
    pub environment: Environment,
    /// Directory holding `privKey.pem`, `pubKey.pem` and `keyId.txt`.
    pub key_dir: Option<String>,
    /// Client identification headers.
    pub client_info: ClientInfo,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    environment: Option<String>,
    endpoint: Option<String>,
    key_dir: Option<String>,
    client_info: ClientInfo,
}

impl Config {
    /// Load config from environment variables.
    ///
    /// `SATISPAY_ENDPOINT` wins over `SATISPAY_ENVIRONMENT`.
    pub fn from_env(ctx: &Context) -> Result<Self> {
        let environment = resolve_environment(
            ctx.env_var(SATISPAY_ENVIRONMENT).as_deref(),
            ctx.env_var(SATISPAY_ENDPOINT).as_deref(),
        )?;

        Ok(Self {
            environment: environment.unwrap_or_default(),
            key_dir: ctx.env_var(SATISPAY_KEY_DIR),
            client_info: ClientInfo::from_env(ctx),
        })
    }

    /// Parse config from TOML content.
    ///
    /// ```toml
    /// environment = "staging"
    /// key_dir = "~/.satispay"
    ///
    /// [client_info]
    /// app_name = "my-shop"
    /// ```
    pub fn from_toml(content: &str) -> Result<Self> {
        let file: FileConfig = toml::from_str(content).map_err(|e| {
            Error::config_invalid("failed to parse config file").with_source(e)
        })?;

        let environment =
            resolve_environment(file.environment.as_deref(), file.endpoint.as_deref())?;

        Ok(Self {
            environment: environment.unwrap_or_default(),
            key_dir: file.key_dir,
            client_info: file.client_info,
        })
    }

    /// Load config from a TOML file.
    pub async fn from_file(ctx: &Context, path: &str) -> Result<Self> {
        let path = ctx.expand_home_dir(path).unwrap_or_else(|| path.to_string());
        let content = ctx.file_read_as_string(&path).await?;
        Self::from_toml(&content)
    }

    /// Load config from the file named by `SATISPAY_CONFIG_FILE` if set,
    /// then let environment variables override it.
    pub async fn load(ctx: &Context) -> Result<Self> {
        let base = match ctx.env_var(SATISPAY_CONFIG_FILE) {
            Some(path) => Self::from_file(ctx, &path).await?,
            None => Self::default(),
        };
        let env = Self::from_env(ctx)?;

        let env_sets_environment = ctx.env_var(SATISPAY_ENVIRONMENT).is_some()
            || ctx.env_var(SATISPAY_ENDPOINT).is_some();

        Ok(Self {
            environment: if env_sets_environment {
                env.environment
            } else {
                base.environment
            },
            key_dir: env.key_dir.or(base.key_dir),
            client_info: env.client_info.merge(base.client_info),
        })
    }
}

fn resolve_environment(name: Option<&str>, endpoint: Option<&str>) -> Result<Option<Environment>> {
    if let Some(endpoint) = endpoint {
        return Ok(Some(Environment::Custom(Endpoint::parse(endpoint)?)));
    }
    name.map(Environment::from_str).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use paysign_core::{ErrorKind, StaticEnv};
    use paysign_file_read_tokio::TokioFileRead;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use std::io::Write;

    fn ctx(envs: &[(&str, &str)]) -> Context {
        Context::new()
            .with_file_read(TokioFileRead)
            .with_env(StaticEnv {
                home_dir: None,
                envs: envs
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect::<HashMap<_, _>>(),
            })
    }

    #[test]
    fn test_from_env_defaults_to_production() {
        let config = Config::from_env(&ctx(&[])).unwrap();
        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.key_dir, None);
    }

    #[test]
    fn test_from_env() {
        let config = Config::from_env(&ctx(&[
            (SATISPAY_ENVIRONMENT, "Staging"),
            (SATISPAY_KEY_DIR, "/etc/satispay"),
            (SATISPAY_PLATFORM_NAME, "linux"),
        ]))
        .unwrap();

        assert_eq!(config.environment, Environment::Staging);
        assert_eq!(config.key_dir.as_deref(), Some("/etc/satispay"));
        assert_eq!(config.client_info.platform_name.as_deref(), Some("linux"));
    }

    #[test]
    fn test_custom_endpoint_wins() {
        let config = Config::from_env(&ctx(&[
            (SATISPAY_ENVIRONMENT, "staging"),
            (SATISPAY_ENDPOINT, "http://127.0.0.1:8080/g_business"),
        ]))
        .unwrap();

        let endpoint = config.environment.endpoint().unwrap();
        assert_eq!(endpoint.host(), "127.0.0.1:8080");
        assert_eq!(endpoint.base_path(), "/g_business");
    }

    #[test]
    fn test_unknown_environment() {
        let err = Config::from_env(&ctx(&[(SATISPAY_ENVIRONMENT, "moon")])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    }

    #[test]
    fn test_known_endpoints() {
        let prod = Environment::Production.endpoint().unwrap();
        assert_eq!(prod.host(), "authservices.satispay.com");
        assert_eq!(prod.base_path(), "/g_business");

        let staging = Environment::Staging.endpoint().unwrap();
        assert_eq!(staging.host(), "staging.authservices.satispay.com");
    }

    #[tokio::test]
    async fn test_load_merges_file_and_env() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            f,
            r#"
environment = "staging"
key_dir = "/from/file"

[client_info]
app_name = "file-app"
device_type = "POS"
"#
        )
        .unwrap();

        let path = f.path().to_str().unwrap().to_string();
        let config = Config::load(&ctx(&[
            (SATISPAY_CONFIG_FILE, path.as_str()),
            (SATISPAY_APP_NAME, "env-app"),
        ]))
        .await
        .unwrap();

        assert_eq!(config.environment, Environment::Staging);
        assert_eq!(config.key_dir.as_deref(), Some("/from/file"));
        assert_eq!(config.client_info.app_name.as_deref(), Some("env-app"));
        assert_eq!(config.client_info.device_type.as_deref(), Some("POS"));
    }

    #[test]
    fn test_invalid_toml() {
        let err = Config::from_toml("environment = ").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    }
}
