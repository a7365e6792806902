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

use crate::{constants::*, Credential};
use async_trait::async_trait;
use log::debug;
use paysign_core::{Context, ProvideCredential, Result};

/// EnvCredentialProvider loads the credential from environment variables.
///
/// This provider looks for the following environment variables:
/// - `SATISPAY_KEY_ID`: The key id assigned by the gateway
/// - `SATISPAY_PRIVATE_KEY`: The PEM private key content
/// - `SATISPAY_PUBLIC_KEY`: The PEM public key content, optional
#[derive(Debug, Default, Clone)]
pub struct EnvCredentialProvider {}

impl EnvCredentialProvider {
    /// Create a new EnvCredentialProvider.
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let key_id = ctx.env_var(SATISPAY_KEY_ID);
        let private_key = ctx.env_var(SATISPAY_PRIVATE_KEY);
        let public_key = ctx.env_var(SATISPAY_PUBLIC_KEY);

        match (key_id, private_key) {
            (Some(key_id), Some(private_key)) => {
                debug!("loading credential from environment variables");
                Credential::from_pem(&private_key, public_key.as_deref(), &key_id).map(Some)
            }
            _ => Ok(None),
        }
    }
}
