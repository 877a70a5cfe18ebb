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

//! Compare signatures against the `aws-sigv4` crate.

use crate::{sign, EMPTY_SHA256};
use aws_credential_types::Credentials;
use aws_sigv4::http_request::PayloadChecksumKind;
use aws_sigv4::http_request::PercentEncodingMode;
use aws_sigv4::http_request::SignableBody;
use aws_sigv4::http_request::SignableRequest;
use aws_sigv4::http_request::SigningSettings;
use aws_sigv4::sign::v4;
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use s3sign_core::time::{format_iso8601, from_naive};
use s3sign_v4::{Config, Credential, Method, RequestDescriptor};
use std::time::SystemTime;

const REGION: &str = "test";
const SERVICE: &str = "s3";
const ACCESS_KEY_ID: &str = "access_key_id";
const SECRET_ACCESS_KEY: &str = "secret_access_key";

/// A request as seen by both signers.
struct TestCase {
    name: &'static str,
    method: Method,
    /// Percent encoded URL handed to `aws-sigv4`.
    url: &'static str,
    bucket: Option<&'static str>,
    /// Decoded key handed to our signer.
    key: &'static str,
    /// Headers besides `host`, `x-amz-date` and `x-amz-content-sha256`.
    headers: &'static [(&'static str, &'static str)],
    /// Decoded sub-resources handed to our signer.
    sub_resources: &'static [(&'static str, &'static str)],
    payload_hash: Option<&'static str>,
}

fn test_cases() -> Vec<TestCase> {
    vec![
        TestCase {
            name: "get_object",
            method: Method::Get,
            url: "http://127.0.0.1:9000/hello",
            bucket: None,
            key: "hello",
            headers: &[],
            sub_resources: &[],
            payload_hash: None,
        },
        TestCase {
            name: "get_object_with_range",
            method: Method::Get,
            url: "https://examplebucket.s3.amazonaws.com/test.txt",
            bucket: None,
            key: "test.txt",
            headers: &[("range", "bytes=0-9")],
            sub_resources: &[],
            payload_hash: Some(EMPTY_SHA256),
        },
        TestCase {
            name: "head_object_path_style",
            method: Method::Head,
            url: "http://127.0.0.1:9000/examplebucket/photos/2013/May.jpg",
            bucket: Some("examplebucket"),
            key: "photos/2013/May.jpg",
            headers: &[],
            sub_resources: &[],
            payload_hash: None,
        },
        TestCase {
            name: "get_object_with_space",
            method: Method::Get,
            url: "http://127.0.0.1:9000/examplebucket/my%20file.txt",
            bucket: Some("examplebucket"),
            key: "my file.txt",
            headers: &[],
            sub_resources: &[],
            payload_hash: None,
        },
        TestCase {
            name: "list_objects",
            method: Method::Get,
            url: "http://127.0.0.1:9000/examplebucket/?list-type=2&max-keys=3&prefix=CI%2F",
            bucket: Some("examplebucket"),
            key: "",
            headers: &[],
            sub_resources: &[("list-type", "2"), ("max-keys", "3"), ("prefix", "CI/")],
            payload_hash: None,
        },
        TestCase {
            name: "get_object_version",
            method: Method::Get,
            url: "http://127.0.0.1:9000/examplebucket/hello?versionId=abc123",
            bucket: Some("examplebucket"),
            key: "hello",
            headers: &[],
            sub_resources: &[("versionId", "abc123")],
            payload_hash: None,
        },
        TestCase {
            name: "put_object_with_sse",
            method: Method::Put,
            url: "http://127.0.0.1:9000/examplebucket/hello",
            bucket: Some("examplebucket"),
            key: "hello",
            headers: &[
                ("content-type", "text/plain"),
                ("x-amz-server-side-encryption", "AES256"),
                ("x-amz-meta-author", "someone"),
            ],
            sub_resources: &[],
            payload_hash: Some(
                "44ce7dd67c959e0d3524ffac1771dfbba87d2b6b4b4e99e42034a8b803f8b072",
            ),
        },
    ]
}

fn authority(url: &str) -> &str {
    let rest = url.split_once("://").map(|(_, v)| v).unwrap_or(url);
    rest.split(['/', '?']).next().unwrap_or(rest)
}

fn reference_signature(tc: &TestCase, time: SystemTime) -> String {
    let mut ss = SigningSettings::default();
    ss.percent_encoding_mode = PercentEncodingMode::Single;
    ss.payload_checksum_kind = PayloadChecksumKind::XAmzSha256;
    let id = Credentials::new(
        ACCESS_KEY_ID,
        SECRET_ACCESS_KEY,
        None,
        None,
        "hardcoded-credentials",
    )
    .into();
    let sp = v4::SigningParams::builder()
        .identity(&id)
        .region(REGION)
        .name(SERVICE)
        .time(time)
        .settings(ss)
        .build()
        .expect("signing params must be valid");

    let body = match tc.payload_hash {
        Some(hash) => SignableBody::Precomputed(hash.to_string()),
        None => SignableBody::UnsignedPayload,
    };

    let output = aws_sigv4::http_request::sign(
        SignableRequest::new(
            tc.method.as_str(),
            tc.url,
            tc.headers.iter().copied(),
            body,
        )
        .expect("request must be signable"),
        &sp.into(),
    )
    .expect("signing must succeed");

    output.signature().to_string()
}

fn our_signature(tc: &TestCase, cfg: &Config) -> String {
    let time = format_iso8601(from_naive(cfg.time.expect("time must be set")));

    let mut req = RequestDescriptor::new(tc.method, tc.key)
        .with_header("host", authority(tc.url))
        .with_header("x-amz-date", time)
        .with_header(
            "x-amz-content-sha256",
            tc.payload_hash.unwrap_or("UNSIGNED-PAYLOAD"),
        );
    if let Some(bucket) = tc.bucket {
        req = req.with_bucket(bucket);
    }
    for (name, value) in tc.headers {
        req.insert_header(name, *value);
    }
    for (name, value) in tc.sub_resources {
        req.insert_sub_resource(*name, *value);
    }

    let cred = Credential::new(ACCESS_KEY_ID, SECRET_ACCESS_KEY);
    sign(&req, &cred, cfg)
}

#[test]
fn test_matches_aws_sigv4() {
    let time = NaiveDate::from_ymd_opt(2024, 2, 29)
        .and_then(|d| d.and_hms_opt(23, 59, 58))
        .expect("time must be valid");

    for tc in test_cases() {
        let cfg = Config {
            service: Some(SERVICE.to_string()),
            region: Some(REGION.to_string()),
            time: Some(time),
            payload_hash: tc.payload_hash.map(str::to_string),
        };

        assert_eq!(
            our_signature(&tc, &cfg),
            reference_signature(&tc, SystemTime::from(from_naive(time))),
            "{} signature mismatch",
            tc.name
        );
    }
}
