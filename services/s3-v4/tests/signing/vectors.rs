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

//! Examples published in the Amazon S3 API reference, "Signature Calculations
//! for the Authorization Header".

use crate::{example_config, example_credential, sign, EMPTY_SHA256};
use pretty_assertions::assert_eq;
use s3sign_core::hash::hex_sha256;
use s3sign_v4::{
    canonical_request, string_to_sign, Config, Method, RequestDescriptor, SigningContext,
};

fn get_object() -> RequestDescriptor {
    RequestDescriptor::new(Method::Get, "test.txt")
        .with_header("host", "examplebucket.s3.amazonaws.com")
        .with_header("range", "bytes=0-9")
        .with_header("x-amz-content-sha256", EMPTY_SHA256)
        .with_header("x-amz-date", "20130524T000000Z")
}

fn get_object_config() -> Config {
    Config {
        payload_hash: Some(EMPTY_SHA256.to_string()),
        ..example_config()
    }
}

#[test]
fn test_get_object_canonical_request_hash() {
    let creq = canonical_request(&get_object(), Some(EMPTY_SHA256));
    assert_eq!(
        hex_sha256(creq.as_bytes()),
        "7344ae5b7ee6c3e7e6b0fe0640412a37625d1fbfff95c48bbb2dc43964946972"
    );
}

#[test]
fn test_get_object_string_to_sign() {
    let req = get_object();
    let cred = example_credential();
    let cfg = get_object_config();
    let ctx = SigningContext::new(&req, &cred, &cfg).expect("config must be valid");

    let creq = canonical_request(&req, ctx.payload_hash());
    assert_eq!(
        string_to_sign(&ctx, &hex_sha256(creq.as_bytes())),
        "AWS4-HMAC-SHA256
20130524T000000Z
20130524/us-east-1/s3/aws4_request
7344ae5b7ee6c3e7e6b0fe0640412a37625d1fbfff95c48bbb2dc43964946972"
    );
}

#[test]
fn test_get_object_signature() {
    let signature = sign(&get_object(), &example_credential(), &get_object_config());
    assert_eq!(
        signature,
        "f0e8bdb87c964420e857bd35b5d6ed310bd44f0170aba48dd91039c6036bdb41"
    );
}

#[test]
fn test_get_object_signature_ignores_access_key_id() {
    // Only the secret takes part in the signature.
    let cred = s3sign_v4::Credential::new(
        "AKIDEXAMPLE",
        "wJalrXUtnFEMI/K7MDENG/bPxRfiCYEXAMPLEKEY",
    );
    assert_eq!(
        sign(&get_object(), &cred, &get_object_config()),
        "f0e8bdb87c964420e857bd35b5d6ed310bd44f0170aba48dd91039c6036bdb41"
    );
}
