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

use http::HeaderMap;
use s3sign_core::{Error, Result};
use std::collections::BTreeMap;
use std::fmt;

/// HTTP methods that can be signed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// `GET`
    Get,
    /// `HEAD`
    Head,
    /// `PUT`
    Put,
}

impl Method {
    /// The uppercase method name used in the canonical request.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Head => "HEAD",
            Method::Put => "PUT",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&http::Method> for Method {
    type Error = Error;

    fn try_from(value: &http::Method) -> Result<Self> {
        match *value {
            http::Method::GET => Ok(Method::Get),
            http::Method::HEAD => Ok(Method::Head),
            http::Method::PUT => Ok(Method::Put),
            _ => Err(Error::request_invalid(format!(
                "method {value} is not supported for signing"
            ))),
        }
    }
}

impl From<Method> for http::Method {
    fn from(value: Method) -> Self {
        match value {
            Method::Get => http::Method::GET,
            Method::Head => http::Method::HEAD,
            Method::Put => http::Method::PUT,
        }
    }
}

/// Description of the request to sign.
///
/// Header names are stored lowercase. Inserting a header or a sub-resource
/// that already exists replaces its value. Both maps iterate in byte-wise
/// ascending key order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    method: Method,
    bucket: Option<String>,
    key: String,
    headers: BTreeMap<String, String>,
    sub_resources: BTreeMap<String, String>,
}

impl RequestDescriptor {
    /// Create a request for `key` without bucket, headers or sub-resources.
    pub fn new(method: Method, key: impl Into<String>) -> Self {
        Self {
            method,
            bucket: None,
            key: key.into(),
            headers: BTreeMap::new(),
            sub_resources: BTreeMap::new(),
        }
    }

    /// Set the bucket used as the first path segment.
    ///
    /// Path-style addressing only. Leave it unset for virtual-hosted requests
    /// where the bucket lives in the `host` header.
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = Some(bucket.into());
        self
    }

    /// Add a header, see [`RequestDescriptor::insert_header`].
    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.insert_header(name, value);
        self
    }

    /// Add a sub-resource, see [`RequestDescriptor::insert_sub_resource`].
    pub fn with_sub_resource(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert_sub_resource(name, value);
        self
    }

    /// Copy every header of an [`http::HeaderMap`].
    ///
    /// Values must be visible ASCII, otherwise an encoding error is returned.
    /// For repeated header names the last value wins.
    pub fn with_header_map(mut self, headers: &HeaderMap) -> Result<Self> {
        for (name, value) in headers {
            self.insert_header(name.as_str(), value.to_str()?);
        }
        Ok(self)
    }

    /// Insert a header, lowercasing its name and replacing any previous value.
    pub fn insert_header(&mut self, name: &str, value: impl Into<String>) {
        self.headers.insert(name.to_lowercase(), value.into());
    }

    /// Insert a sub-resource (query parameter), replacing any previous value.
    pub fn insert_sub_resource(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.sub_resources.insert(name.into(), value.into());
    }

    /// HTTP method.
    pub fn method(&self) -> Method {
        self.method
    }

    /// Bucket, `None` if absent or empty.
    pub fn bucket(&self) -> Option<&str> {
        self.bucket.as_deref().filter(|v| !v.is_empty())
    }

    /// Object key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Get header value by name, case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_lowercase()).map(String::as_str)
    }

    /// Headers in ascending name order.
    pub fn headers(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Sub-resources in ascending name order.
    pub fn sub_resources(&self) -> impl Iterator<Item = (&str, &str)> {
        self.sub_resources
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
