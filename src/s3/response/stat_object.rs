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
use crate::s3::types::{DispatchedResponse, FromS3Response, ObjectInfo, S3Request};
use async_trait::async_trait;
use http::{HeaderMap, StatusCode};

/// Response from the [`stat_object`](crate::s3::client::S3Client::stat_object) API call,
/// providing metadata about an object.
#[derive(Debug)]
pub struct StatObjectResponse {
    request: S3Request,
    headers: HeaderMap,
    info: ObjectInfo,
}

impl_has_s3fields!(StatObjectResponse);

impl HasBucket for StatObjectResponse {}
impl HasObject for StatObjectResponse {}

impl StatObjectResponse {
    pub fn info(&self) -> &ObjectInfo {
        &self.info
    }

    pub fn into_info(self) -> ObjectInfo {
        self.info
    }
}

#[async_trait]
impl FromS3Response for StatObjectResponse {
    async fn from_s3response(
        request: S3Request,
        response: Result<DispatchedResponse, Error>,
    ) -> Result<Self, Error> {
        let resp = response?;
        let bucket = request.bucket.as_deref().unwrap_or_default();
        let object = request.object.as_deref().unwrap_or_default();

        if resp.status != StatusCode::OK {
            return Err(Error::NotFound {
                bucket: bucket.to_string(),
                object: object.to_string(),
                status: resp.status.as_u16(),
            });
        }
        let info = ObjectInfo::from_headers(object, &resp.headers)?;

        Ok(Self {
            request,
            headers: resp.headers,
            info,
        })
    }
}
