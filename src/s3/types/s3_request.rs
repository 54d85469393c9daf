// MinIO Rust Library for Amazon S3 Compatible Cloud Storage
// Copyright 2022 MinIO, Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! S3Request struct and implementation for executing HTTP requests.

use crate::s3::client::S3Client;
use crate::s3::error::{Error, ValidationErr};
use crate::s3::multimap_ext::Multimap;
use crate::s3::xml::XmlValue;
use bytes::Bytes;
use http::{HeaderMap, Method, StatusCode};
use typed_builder::TypedBuilder;

/// Entity body of an outgoing request.
#[derive(Debug)]
pub enum RequestBody {
    /// Body held in memory; its length is known up front.
    Full(Bytes),
    /// Body produced while the request is in flight.
    Stream(reqwest::Body),
}

impl From<Bytes> for RequestBody {
    fn from(value: Bytes) -> Self {
        RequestBody::Full(value)
    }
}

impl From<RequestBody> for reqwest::Body {
    fn from(value: RequestBody) -> Self {
        match value {
            RequestBody::Full(b) => reqwest::Body::from(b),
            RequestBody::Stream(s) => s,
        }
    }
}

#[derive(Debug, TypedBuilder)]
/// Generic S3Request
pub struct S3Request {
    #[builder(!default)] // force required
    pub(crate) client: S3Client,

    #[builder(!default)] // force required
    method: Method,

    #[builder(default, setter(into))]
    pub(crate) bucket: Option<String>,

    #[builder(default, setter(into))]
    pub(crate) object: Option<String>,

    #[builder(default)]
    pub(crate) query_params: Multimap,

    /// Per-call headers; after execution also holds `Date` and `Authorization`.
    #[builder(default)]
    headers: Multimap,

    /// Taken by the first execution.
    #[builder(default, setter(into))]
    body: Option<RequestBody>,
}

impl S3Request {
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Headers of the request, including the ones added while signing.
    pub fn headers(&self) -> &Multimap {
        &self.headers
    }

    /// Execute the request, returning the dispatched response. Only used in [`S3Api::send()`](crate::s3::types::S3Api::send)
    pub async fn execute(&mut self) -> Result<DispatchedResponse, Error> {
        self.client
            .dispatch(
                &self.method,
                &mut self.headers,
                &self.query_params,
                self.bucket.as_deref(),
                self.object.as_deref(),
                self.body.take(),
            )
            .await
    }

    /// Execute the request and hand back the raw response once headers have
    /// arrived with a success status, leaving the body unread.
    pub async fn execute_stream(&mut self) -> Result<reqwest::Response, Error> {
        self.client
            .dispatch_stream(
                &self.method,
                &mut self.headers,
                &self.query_params,
                self.bucket.as_deref(),
                self.object.as_deref(),
                self.body.take(),
            )
            .await
    }
}

/// Body of a response as delivered by the dispatcher.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DispatchBody {
    /// HEAD responses and zero-length bodies.
    Empty,
    /// Non-XML body, buffered as received.
    Raw(Bytes),
    /// XML body, normalized.
    Xml(XmlValue),
}

impl DispatchBody {
    pub fn xml(&self) -> Option<&XmlValue> {
        match self {
            DispatchBody::Xml(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_xml(self) -> Result<XmlValue, ValidationErr> {
        match self {
            DispatchBody::Xml(v) => Ok(v),
            _ => Err(ValidationErr::XmlStructure(
                "expected an XML response body".into(),
            )),
        }
    }
}

/// Response of a successfully dispatched request.
#[derive(Clone, Debug)]
pub struct DispatchedResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: DispatchBody,
}
