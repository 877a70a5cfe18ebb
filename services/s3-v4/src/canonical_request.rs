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
    AWS_QUERY_ENCODE_SET, AWS_URI_ENCODE_SET, CONTENT_TYPE, HOST, RANGE, UNSIGNED_PAYLOAD,
    X_AMZ_PREFIX,
};
use crate::RequestDescriptor;
use percent_encoding::utf8_percent_encode;

/// Build the canonical request of `req`.
///
/// ```text
/// GET
/// /test.txt
///
/// host:examplebucket.s3.amazonaws.com
/// range:bytes=0-9
///
/// host;range
/// UNSIGNED-PAYLOAD
/// ```
///
/// `payload_hash` is the hex SHA-256 of the body. `None` signs the request
/// with `UNSIGNED-PAYLOAD`.
pub fn canonical_request(req: &RequestDescriptor, payload_hash: Option<&str>) -> String {
    // 256 is specially chosen to avoid reallocation for most requests.
    let mut f = String::with_capacity(256);

    f.push_str(req.method().as_str());
    f.push('\n');

    push_canonical_uri(&mut f, req);
    f.push('\n');

    push_canonical_query(&mut f, req);
    f.push('\n');

    let signed = signed_headers(req);
    if !signed.is_empty() {
        for (name, value) in req.headers().filter(|(k, _)| should_sign_header(k)) {
            f.push_str(name);
            f.push(':');
            f.push_str(&normalize_header_value(value));
            f.push('\n');
        }
        f.push('\n');
        f.push_str(&signed.join(";"));
    }
    f.push('\n');

    f.push_str(payload_hash.unwrap_or(UNSIGNED_PAYLOAD));

    f
}

/// Names of the headers covered by the signature, sorted ascending.
pub fn signed_headers(req: &RequestDescriptor) -> Vec<&str> {
    // Headers are kept sorted by the descriptor already.
    req.headers()
        .map(|(k, _)| k)
        .filter(|k| should_sign_header(k))
        .collect()
}

fn should_sign_header(name: &str) -> bool {
    name == HOST || name == RANGE || name == CONTENT_TYPE || name.starts_with(X_AMZ_PREFIX)
}

/// `/<bucket>/<key>` with every segment URI encoded.
fn push_canonical_uri(f: &mut String, req: &RequestDescriptor) {
    if let Some(bucket) = req.bucket() {
        f.push('/');
        f.extend(utf8_percent_encode(bucket, &AWS_QUERY_ENCODE_SET));
    }
    f.push('/');
    f.extend(utf8_percent_encode(req.key(), &AWS_URI_ENCODE_SET));
}

fn push_canonical_query(f: &mut String, req: &RequestDescriptor) {
    for (idx, (k, v)) in req.sub_resources().enumerate() {
        if idx != 0 {
            f.push('&');
        }
        f.extend(utf8_percent_encode(k, &AWS_QUERY_ENCODE_SET));
        f.push('=');
        f.extend(utf8_percent_encode(v, &AWS_QUERY_ENCODE_SET));
    }
}

/// Trim leading and trailing whitespace and collapse inner runs of spaces
/// and tabs into one space.
fn normalize_header_value(v: &str) -> String {
    v.split([' ', '\t'])
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
