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

use crate::constants::AWS4_REQUEST;
use s3sign_core::hash::hmac_sha256;
use s3sign_core::Result;
use std::fmt::{Debug, Formatter};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Key derived from a secret access key for one date, region and service.
///
/// The bytes are wiped from memory on drop and never printed.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SigningKey(Vec<u8>);

impl SigningKey {
    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl Debug for SigningKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("SigningKey(***)")
    }
}

/// Derive the signing key through the HMAC ladder:
///
/// ```text
/// kSecret  = "AWS4" + secret
/// kDate    = HMAC(kSecret, date_stamp)
/// kRegion  = HMAC(kDate, region)
/// kService = HMAC(kRegion, service)
/// kSigning = HMAC(kService, "aws4_request")
/// ```
///
/// `date_stamp` is formatted as `YYYYMMDD`.
pub fn derive_signing_key(
    secret: &str,
    date_stamp: &str,
    region: &str,
    service: &str,
) -> Result<SigningKey> {
    // Sign secret
    let secret = Zeroizing::new(format!("AWS4{secret}"));
    // Sign date
    let sign_date = Zeroizing::new(hmac_sha256(secret.as_bytes(), date_stamp.as_bytes())?);
    // Sign region
    let sign_region = Zeroizing::new(hmac_sha256(&sign_date, region.as_bytes())?);
    // Sign service
    let sign_service = Zeroizing::new(hmac_sha256(&sign_region, service.as_bytes())?);
    // Sign request
    let sign_request = hmac_sha256(&sign_service, AWS4_REQUEST.as_bytes())?;

    Ok(SigningKey(sign_request))
}
