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

use crate::constants::ALGORITHM;
use crate::SigningContext;
use s3sign_core::time::format_iso8601;

/// Build the string to sign from the context and the hex SHA-256 of the
/// canonical request.
///
/// ```text
/// AWS4-HMAC-SHA256
/// 20130524T000000Z
/// 20130524/us-east-1/s3/aws4_request
/// <hashed_canonical_request>
/// ```
pub fn string_to_sign(ctx: &SigningContext<'_>, canonical_request_hash: &str) -> String {
    format!(
        "{ALGORITHM}\n{}\n{}\n{canonical_request_hash}",
        format_iso8601(ctx.time()),
        ctx.credential_scope(),
    )
}
