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
use crate::s3::response_traits::HasBucket;
use crate::s3::types::{BucketListing, S3Request};
use http::HeaderMap;

/// Response of [delete_bucket()](crate::s3::client::S3Client::delete_bucket) API:
/// the root listing taken just before the bucket was deleted.
#[derive(Debug)]
pub struct DeleteBucketResponse {
    pub(crate) request: S3Request,
    pub(crate) headers: HeaderMap,
    pub(crate) listing: BucketListing,
}

impl_has_s3fields!(DeleteBucketResponse);

impl HasBucket for DeleteBucketResponse {}

impl DeleteBucketResponse {
    pub fn listing(&self) -> &BucketListing {
        &self.listing
    }

    pub fn into_listing(self) -> BucketListing {
        self.listing
    }
}
