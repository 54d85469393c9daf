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
use crate::s3::response_traits::{HasBucket, HasObject};
use crate::s3::types::{ObjectInfo, S3Request};
use http::HeaderMap;

/// Response of [put_object()](crate::s3::client::S3Client::put_object) and
/// [put_object_stream()](crate::s3::client::S3Client::put_object_stream) APIs:
/// metadata of the stored object, read back after the upload.
#[derive(Debug)]
pub struct PutObjectResponse {
    pub(crate) request: S3Request,
    /// Headers of the upload response
    pub(crate) headers: HeaderMap,
    pub(crate) info: ObjectInfo,
}

impl_has_s3fields!(PutObjectResponse);

impl HasBucket for PutObjectResponse {}
impl HasObject for PutObjectResponse {}

impl PutObjectResponse {
    pub fn info(&self) -> &ObjectInfo {
        &self.info
    }
}
