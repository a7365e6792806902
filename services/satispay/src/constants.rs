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


/// Default directory holding the key pair and key id.
pub const SATISPAY_KEY_DIR_DEFAULT: &str = "~/.satispay";
/// File name of the PEM encoded private key inside the key directory.
pub const PRIVATE_KEY_FILE: &str = "privKey.pem";
/// File name of the PEM encoded public key inside the key directory.
pub const PUBLIC_KEY_FILE: &str = "pubKey.pem";
/// File name of the key id inside the key directory.
pub const KEY_ID_FILE: &str = "keyId.txt";

/// Production base url.
pub const PRODUCTION_ENDPOINT: &str = "https://authservices.satispay.com/g_business";
/// Staging base url.
pub const STAGING_ENDPOINT: &str = "https://staging.authservices.satispay.com/g_business";

/// Environment variables for Satispay.
pub const SATISPAY_ENVIRONMENT: &str = "SATISPAY_ENVIRONMENT";
pub const SATISPAY_ENDPOINT: &str = "SATISPAY_ENDPOINT";
pub const SATISPAY_CONFIG_FILE: &str = "SATISPAY_CONFIG_FILE";
pub const SATISPAY_KEY_DIR: &str = "SATISPAY_KEY_DIR";
pub const SATISPAY_KEY_ID: &str = "SATISPAY_KEY_ID";
pub const SATISPAY_PRIVATE_KEY: &str = "SATISPAY_PRIVATE_KEY";
pub const SATISPAY_PUBLIC_KEY: &str = "SATISPAY_PUBLIC_KEY";
pub const SATISPAY_USER_AGENT: &str = "SATISPAY_USER_AGENT";
pub const SATISPAY_PLATFORM_NAME: &str = "SATISPAY_PLATFORM_NAME";
pub const SATISPAY_PLATFORM_VERSION: &str = "SATISPAY_PLATFORM_VERSION";
pub const SATISPAY_APP_NAME: &str = "SATISPAY_APP_NAME";
pub const SATISPAY_APP_VERSION: &str = "SATISPAY_APP_VERSION";
pub const SATISPAY_DEVICE_TYPE: &str = "SATISPAY_DEVICE_TYPE";
pub const SATISPAY_TRACKING_CODE: &str = "SATISPAY_TRACKING_CODE";

/// Identification headers, in wire order.
pub const HEADER_PLATFORM_NAME: &str = "x-satispay-os";
pub const HEADER_PLATFORM_VERSION: &str = "x-satispay-osv";
pub const HEADER_APP_NAME: &str = "x-satispay-appn";
pub const HEADER_APP_VERSION: &str = "x-satispay-appv";
pub const HEADER_DEVICE_TYPE: &str = "x-satispay-devicetype";
pub const HEADER_TRACKING_CODE: &str = "x-satispay-tracking-code";

/// User agent sent when none is configured.
pub const DEFAULT_USER_AGENT: &str = concat!("paysign-satispay/", env!("CARGO_PKG_VERSION"));
