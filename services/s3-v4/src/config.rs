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

use crate::constants::{AWS_DEFAULT_REGION, AWS_REGION};
use chrono::NaiveDateTime;
use log::debug;
use std::env;

/// Config for signing one request.
///
/// Every field is optional here so that it can be assembled piece by piece;
/// [`SigningContext::new`](crate::SigningContext::new) rejects a config that
/// misses a required value.
#[derive(Clone, Default, Debug)]
pub struct Config {
    /// `service` is the service name used in the credential scope, e.g. `s3`.
    pub service: Option<String>,
    /// `region` is the region used in the credential scope, e.g. `us-east-1`.
    ///
    /// - env value: [`AWS_REGION`], then [`AWS_DEFAULT_REGION`]
    pub region: Option<String>,
    /// `time` is the signing time. It carries no zone and is always
    /// interpreted as UTC.
    pub time: Option<NaiveDateTime>,
    /// `payload_hash` is the lowercase hex SHA-256 of the request body.
    ///
    /// Leave it unset to sign with `UNSIGNED-PAYLOAD`.
    pub payload_hash: Option<String>,
}

impl Config {
    /// Load config from env, keeping values that are already set.
    pub fn from_env(mut self) -> Self {
        if self.region.is_none() {
            self.region = [AWS_REGION, AWS_DEFAULT_REGION]
                .into_iter()
                .find_map(|name| env::var(name).ok().filter(|v| !v.is_empty()));
            debug!("region loaded from env: {:?}", self.region);
        }

        self
    }
}
