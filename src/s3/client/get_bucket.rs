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

use crate::s3::builders::{GetBucket, GetBucketBldr};
use crate::s3::client::S3Client;

impl S3Client {
    /// Creates a [`GetBucket`] request builder listing one directory level of a bucket.
    ///
    /// To execute the request, call [`GetBucket::send()`](crate::s3::types::S3Api::send),
    /// which returns a [`Result`] containing a [`GetBucketResponse`](crate::s3::response::GetBucketResponse).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use simples3::s3::client::{ClientConfig, S3Client};
    /// use simples3::s3::types::S3Api;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let client = S3Client::new(ClientConfig::from_env()).unwrap();
    ///     let resp = client
    ///         .get_bucket("bucket-name")
    ///         .directory("photos")
    ///         .build()
    ///         .send()
    ///         .await
    ///         .unwrap();
    ///     let listing = resp.listing();
    ///     println!("{}: {:?}", listing.path, listing.contents.directories);
    /// }
    /// ```
    pub fn get_bucket<S: Into<String>>(&self, bucket: S) -> GetBucketBldr {
        GetBucket::builder().client(self.clone()).bucket(bucket)
    }
}
