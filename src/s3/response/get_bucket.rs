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
use crate::s3::response_traits::HasBucket;
use crate::s3::types::{BucketListing, DispatchedResponse, FromS3Response, S3Request};
use crate::s3::xml::XmlValue;
use async_trait::async_trait;
use http::HeaderMap;

/// Response of [get_bucket()](crate::s3::client::S3Client::get_bucket) API
#[derive(Debug)]
pub struct GetBucketResponse {
    request: S3Request,
    headers: HeaderMap,
    body: XmlValue,
    listing: BucketListing,
}

impl_has_s3fields!(GetBucketResponse);

impl HasBucket for GetBucketResponse {}

impl GetBucketResponse {
    pub fn listing(&self) -> &BucketListing {
        &self.listing
    }

    pub fn into_listing(self) -> BucketListing {
        self.listing
    }

    /// The normalized `ListBucketResult` document.
    pub fn body(&self) -> &XmlValue {
        &self.body
    }
}

#[async_trait]
impl FromS3Response for GetBucketResponse {
    async fn from_s3response(
        request: S3Request,
        response: Result<DispatchedResponse, Error>,
    ) -> Result<Self, Error> {
        let resp = response?;
        let body = resp.body.into_xml()?;

        let prefix = request
            .query_params
            .get("prefix")
            .cloned()
            .unwrap_or_default();
        let bucket = request.bucket.as_deref().unwrap_or_default();
        let listing = BucketListing::from_xml(bucket, &prefix, &body)?;

        Ok(Self {
            request,
            headers: resp.headers,
            body,
            listing,
        })
    }
}
