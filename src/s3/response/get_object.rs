// MinIO Rust Library for Amazon S3 Compatible Cloud Storage
// Copyright 2025 MinIO, Inc.
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

use crate::impl_has_s3fields;
use crate::s3::error::Error;
use crate::s3::response_traits::{HasBucket, HasObject};
use crate::s3::types::S3Request;
use bytes::Bytes;
use futures_util::Stream;
use http::HeaderMap;
use std::pin::Pin;

/// Response of [get_object()](crate::s3::client::S3Client::get_object) API
#[derive(Debug)]
pub struct GetObjectResponse {
    pub(crate) request: S3Request,
    pub(crate) headers: HeaderMap,
    pub(crate) content: Bytes,
}

impl_has_s3fields!(GetObjectResponse);

impl HasBucket for GetObjectResponse {}
impl HasObject for GetObjectResponse {}

impl GetObjectResponse {
    pub fn content(&self) -> &Bytes {
        &self.content
    }

    pub fn into_content(self) -> Bytes {
        self.content
    }
}

/// Byte stream of an object body.
pub type ObjectStream = Pin<Box<dyn Stream<Item = Result<Bytes, Error>> + Send>>;

/// Response of [get_object_stream()](crate::s3::client::S3Client::get_object_stream) API
pub struct GetObjectStreamResponse {
    pub(crate) request: S3Request,
    pub(crate) headers: HeaderMap,
    pub(crate) stream: ObjectStream,
}

impl_has_s3fields!(GetObjectStreamResponse);

impl HasBucket for GetObjectStreamResponse {}
impl HasObject for GetObjectStreamResponse {}

impl GetObjectStreamResponse {
    /// Body chunks in arrival order; a transport failure ends the stream with an error.
    pub fn into_stream(self) -> ObjectStream {
        self.stream
    }
}

impl std::fmt::Debug for GetObjectStreamResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GetObjectStreamResponse")
            .field("request", &self.request)
            .field("headers", &self.headers)
            .finish_non_exhaustive()
    }
}
