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

use crate::s3::builders::{CreateBucket, CreateBucketBldr};
use crate::s3::client::S3Client;

impl S3Client {
    /// Creates a [`CreateBucket`] request builder. The bucket is created
    /// with a private ACL and then listed.
    ///
    /// To execute the request, call [`CreateBucket::send()`](crate::s3::builders::CreateBucket::send),
    /// which returns a [`Result`] containing a [`CreateBucketResponse`](crate::s3::response::CreateBucketResponse).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use simples3::s3::client::{ClientConfig, S3Client};
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let client = S3Client::new(ClientConfig::from_env()).unwrap();
    ///     let resp = client.create_bucket("bucket-name").build().send().await.unwrap();
    ///     println!("created bucket '{}'", resp.listing().bucket);
    /// }
    /// ```
    pub fn create_bucket<S: Into<String>>(&self, bucket: S) -> CreateBucketBldr {
        CreateBucket::builder().client(self.clone()).bucket(bucket)
    }
}
