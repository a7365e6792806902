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

use crate::constants::{
    KEY_ID_FILE, PRIVATE_KEY_FILE, PUBLIC_KEY_FILE, SATISPAY_KEY_DIR, SATISPAY_KEY_DIR_DEFAULT,
};
use crate::Credential;
use async_trait::async_trait;
use log::{debug, warn};
use paysign_core::{Context, Error, ProvideCredential, Result};
use std::error::Error as StdError;
use std::io;

/// DirCredentialProvider loads the credential from a key directory.
///
/// The directory holds three files:
/// - `privKey.pem`: the PEM private key
/// - `pubKey.pem`: the PEM public key, optional
/// - `keyId.txt`: the key id assigned by the gateway
///
/// The directory defaults to `SATISPAY_KEY_DIR`, then `~/.satispay`.
/// A missing directory or file yields no credential, while a file that
/// exists but cannot be read or parsed is an error.
#[derive(Debug, Default, Clone)]
pub struct DirCredentialProvider {
    dir: Option<String>,
}

impl DirCredentialProvider {
    /// Create a new DirCredentialProvider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read from `dir` instead of the default location.
    pub fn with_dir(mut self, dir: impl Into<String>) -> Self {
        self.dir = Some(dir.into());
        self
    }
}

#[async_trait]
impl ProvideCredential for DirCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let dir = self
            .dir
            .clone()
            .or_else(|| ctx.env_var(SATISPAY_KEY_DIR))
            .unwrap_or_else(|| SATISPAY_KEY_DIR_DEFAULT.to_string());

        let Some(dir) = ctx.expand_home_dir(&dir) else {
            debug!("cannot expand home directory in {dir}, skipping");
            return Ok(None);
        };
        let dir = dir.trim_end_matches('/');

        let Some(private_key) = read_key_file(ctx, dir, PRIVATE_KEY_FILE).await? else {
            return Ok(None);
        };
        let Some(key_id) = read_key_file(ctx, dir, KEY_ID_FILE).await? else {
            return Ok(None);
        };
        let public_key = read_key_file(ctx, dir, PUBLIC_KEY_FILE).await?;

        debug!("loading credential from key directory {dir}");
        Credential::from_pem(&private_key, public_key.as_deref(), &key_id).map(Some)
    }
}

/// Read a file of the key directory, `None` if it is not available.
async fn read_key_file(ctx: &Context, dir: &str, name: &str) -> Result<Option<String>> {
    let path = format!("{dir}/{name}");
    match ctx.file_read_as_string(&path).await {
        Ok(content) => Ok(Some(content)),
        Err(err) => match io_error_kind(&err) {
            Some(kind) if kind != io::ErrorKind::NotFound => {
                warn!("failed to read {path}: {err}");
                Err(Error::credential_invalid(format!("failed to read {path}")).with_source(err))
            }
            _ => {
                debug!("{path} is not available: {err}");
                Ok(None)
            }
        },
    }
}

/// Kind of the io error behind a file read failure, if any.
fn io_error_kind(err: &Error) -> Option<io::ErrorKind> {
    let mut source = StdError::source(err);
    while let Some(e) = source {
        if let Some(io_err) = e.downcast_ref::<io::Error>() {
            return Some(io_err.kind());
        }
        source = e.source();
    }
    None
}
