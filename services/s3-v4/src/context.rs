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
use crate::{Config, Credential, RequestDescriptor};
use s3sign_core::time::{format_date, from_naive, DateTime};
use s3sign_core::{Error, Result};

/// Everything needed to sign one request.
///
/// A context can only be obtained through [`SigningContext::new`], so every
/// value held here has been validated: service, region and time are present,
/// the credential is usable and the payload hash, if any, is well formed.
#[derive(Debug, Clone)]
pub struct SigningContext<'a> {
    request: &'a RequestDescriptor,
    credential: &'a Credential,
    service: String,
    region: String,
    time: DateTime,
    payload_hash: Option<String>,
}

impl<'a> SigningContext<'a> {
    /// Validate `config` and bundle it with the request and credential.
    pub fn new(
        request: &'a RequestDescriptor,
        credential: &'a Credential,
        config: &Config,
    ) -> Result<Self> {
        let service = required(config.service.as_deref(), "service")?;
        let region = required(config.region.as_deref(), "region")?;
        let time = config
            .time
            .map(from_naive)
            .ok_or_else(|| Error::config_invalid("time is required"))?;

        if !credential.is_valid() {
            return Err(Error::credential_invalid(
                "access key id and secret access key must not be empty",
            ));
        }

        if let Some(hash) = config.payload_hash.as_deref() {
            if !is_sha256_hex(hash) {
                return Err(Error::request_invalid(format!(
                    "payload hash must be 64 lowercase hex characters, got {hash:?}"
                )));
            }
        }

        Ok(Self {
            request,
            credential,
            service: service.to_string(),
            region: region.to_string(),
            time,
            payload_hash: config.payload_hash.clone(),
        })
    }

    /// The request to sign.
    pub fn request(&self) -> &RequestDescriptor {
        self.request
    }

    /// The credential used to derive the signing key.
    pub fn credential(&self) -> &Credential {
        self.credential
    }

    /// Service name, e.g. `s3`.
    pub fn service(&self) -> &str {
        &self.service
    }

    /// Region name, e.g. `us-east-1`.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Signing time in UTC.
    pub fn time(&self) -> DateTime {
        self.time
    }

    /// Precomputed payload hash, `None` for unsigned payload.
    pub fn payload_hash(&self) -> Option<&str> {
        self.payload_hash.as_deref()
    }

    /// Signing date: `20130524`
    pub fn date_stamp(&self) -> String {
        format_date(self.time)
    }

    /// Credential scope: `20130524/us-east-1/s3/aws4_request`
    pub fn credential_scope(&self) -> String {
        format!(
            "{}/{}/{}/{AWS4_REQUEST}",
            self.date_stamp(),
            self.region,
            self.service
        )
    }
}

fn required<'c>(value: Option<&'c str>, name: &str) -> Result<&'c str> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        Some(_) => Err(Error::config_invalid(format!("{name} must not be empty"))),
        None => Err(Error::config_invalid(format!("{name} is required"))),
    }
}

fn is_sha256_hex(v: &str) -> bool {
    v.len() == 64 && v.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}
