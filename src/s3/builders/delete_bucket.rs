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
use crate::s3::multimap_ext::Multimap;
use crate::s3::response::DeleteBucketResponse;
use crate::s3::types::{S3Api, S3Request, ToS3Request};
use http::Method;

/// Argument builder for the [`DeleteBucket`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_DeleteBucket.html) S3 API operation.
///
/// This struct constructs the parameters required for the [`S3Client::delete_bucket`](crate::s3::client::S3Client::delete_bucket) method.
pub type DeleteBucket = BucketCommon<DeleteBucketPhantomData>;

#[doc(hidden)]
#[derive(Clone, Debug)]
pub struct DeleteBucketPhantomData;

pub type DeleteBucketBldr =
    BucketCommonBuilder<DeleteBucketPhantomData, ((S3Client,), (), (), (String,), ())>;

impl ToS3Request for DeleteBucket {
    fn to_s3request(self) -> Result<S3Request, ValidationErr> {
        self.into_s3request(Method::DELETE, Multimap::new(), None)
    }
}

impl DeleteBucket {
    /// Lists the bucket root, then deletes the bucket. The listing taken
    /// before deletion is returned.
    pub async fn send(self) -> Result<DeleteBucketResponse, Error> {
        let client = self.client.clone();
        let bucket = self.bucket.clone();
        let mut request = self.to_s3request()?;

        let listing = client.get_bucket(bucket).build().send().await?;
        let resp = request.execute().await?;

        Ok(DeleteBucketResponse {
            request,
            headers: resp.headers,
            listing: listing.into_listing(),
        })
    }
}
