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

use crate::s3::builders::{BucketCommon, BucketCommonBuilder};
use crate::s3::client::S3Client;
use crate::s3::error::{Error, ValidationErr};
use crate::s3::header_constants::X_AMZ_ACL;
use crate::s3::multimap_ext::{Multimap, MultimapExt};
use crate::s3::response::CreateBucketResponse;
use crate::s3::types::{S3Api, S3Request, ToS3Request};
use bytes::Bytes;
use http::Method;

/// Argument builder for the [`CreateBucket`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_CreateBucket.html) S3 API operation.
///
/// This struct constructs the parameters required for the [`S3Client::create_bucket`](crate::s3::client::S3Client::create_bucket) method.
pub type CreateBucket = BucketCommon<CreateBucketPhantomData>;

#[doc(hidden)]
#[derive(Clone, Debug)]
pub struct CreateBucketPhantomData;

pub type CreateBucketBldr =
    BucketCommonBuilder<CreateBucketPhantomData, ((S3Client,), (), (), (String,), ())>;

impl ToS3Request for CreateBucket {
    fn to_s3request(self) -> Result<S3Request, ValidationErr> {
        let mut headers = Multimap::new();
        if !self
            .extra_headers
            .as_ref()
            .is_some_and(|h| h.contains_key_ignore_case(X_AMZ_ACL))
        {
            headers.add(X_AMZ_ACL, "private");
        }
        self.into_s3request(Method::PUT, headers, Some(Bytes::new().into()))
    }
}

impl CreateBucket {
    /// Creates the bucket, then lists its root. The listing is not requested
    /// when the creation fails.
    pub async fn send(self) -> Result<CreateBucketResponse, Error> {
        let client = self.client.clone();
        let bucket = self.bucket.clone();
        let mut request = self.to_s3request()?;

        let resp = request.execute().await?;
        let listing = client.get_bucket(bucket).build().send().await?;

        Ok(CreateBucketResponse {
            request,
            headers: resp.headers,
            listing: listing.into_listing(),
        })
    }
}
