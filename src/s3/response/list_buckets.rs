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
use crate::s3::error::{Error, ValidationErr};
use crate::s3::types::{BucketEntry, DispatchedResponse, FromS3Response, S3Request};
use crate::s3::xml::XmlValue;
use async_trait::async_trait;
use http::HeaderMap;

/// Response of [list_buckets()](crate::s3::client::S3Client::list_buckets) API
#[derive(Debug)]
pub struct ListBucketsResponse {
    request: S3Request,
    headers: HeaderMap,
    body: XmlValue,
    buckets: Vec<BucketEntry>,
}

impl_has_s3fields!(ListBucketsResponse);

impl ListBucketsResponse {
    /// Buckets owned by the caller, in the order the service reported them.
    pub fn buckets(&self) -> &[BucketEntry] {
        &self.buckets
    }

    pub fn into_buckets(self) -> Vec<BucketEntry> {
        self.buckets
    }

    /// The normalized response document.
    pub fn body(&self) -> &XmlValue {
        &self.body
    }
}

#[async_trait]
impl FromS3Response for ListBucketsResponse {
    async fn from_s3response(
        request: S3Request,
        response: Result<DispatchedResponse, Error>,
    ) -> Result<Self, Error> {
        let resp = response?;
        let body = resp.body.into_xml()?;

        let buckets = body
            .path(&["listAllMyBucketsResult", "buckets", "bucket"])
            .and_then(XmlValue::as_list)
            .ok_or_else(|| {
                ValidationErr::XmlStructure("<ListAllMyBucketsResult> tag not found".into())
            })?
            .iter()
            .map(BucketEntry::from_xml)
            .collect();

        Ok(Self {
            request,
            headers: resp.headers,
            body,
            buckets,
        })
    }
}
