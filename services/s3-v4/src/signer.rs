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

use crate::{canonical_request, derive_signing_key, string_to_sign, SigningContext};
use log::debug;
use s3sign_core::hash::{hex_hmac_sha256, hex_sha256};
use s3sign_core::Result;

/// Signer that implements AWS SigV4 for S3 requests.
///
/// - [Signature Version 4 signing process](https://docs.aws.amazon.com/general/latest/gr/signature-version-4.html)
///
/// The signer holds no state. Every HMAC is computed with a fresh engine, so
/// one signer can be shared by any number of threads.
#[derive(Debug, Default, Clone, Copy)]
pub struct Signer;

impl Signer {
    /// Create a new signer.
    pub fn new() -> Self {
        Self
    }

    /// Calculate the signature of the request in `ctx`.
    ///
    /// Returns 64 lowercase hex characters.
    pub fn sign(&self, ctx: &SigningContext<'_>) -> Result<String> {
        let creq = canonical_request(ctx.request(), ctx.payload_hash());
        debug!("calculated canonical request: {creq}");
        let encoded_req = hex_sha256(creq.as_bytes());

        debug!("calculated scope: {}", ctx.credential_scope());
        let string_to_sign = string_to_sign(ctx, &encoded_req);
        debug!("calculated string to sign: {string_to_sign}");

        let signing_key = derive_signing_key(
            ctx.credential().secret_access_key(),
            &ctx.date_stamp(),
            ctx.region(),
            ctx.service(),
        )?;

        hex_hmac_sha256(signing_key.as_bytes(), string_to_sign.as_bytes())
    }
}
