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

use crate::s3::builders::{GetObjectUrl, GetObjectUrlBldr};
use crate::s3::client::S3Client;
use crate::s3::utils::UtcTime;

impl S3Client {
    /// Creates a [`GetObjectUrl`] builder for a pre-signed GET URL valid
    /// until `expiration`.
    ///
    /// To generate the URL, call [`GetObjectUrl::send()`](crate::s3::builders::GetObjectUrl::send),
    /// which returns a [`Result`] containing a [`GetObjectUrlResponse`](crate::s3::response::GetObjectUrlResponse).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use chrono::Duration;
    /// use simples3::s3::client::{ClientConfig, S3Client};
    /// use simples3::s3::utils::utc_now;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let client = S3Client::new(ClientConfig::from_env()).unwrap();
    ///     let resp = client
    ///         .get_object_url("bucket-name", "object-name", utc_now() + Duration::hours(1))
    ///         .build()
    ///         .send()
    ///         .await
    ///         .unwrap();
    ///     println!("{}", resp.url);
    /// }
    /// ```
    pub fn get_object_url<S1: Into<String>, S2: Into<String>>(
        &self,
        bucket: S1,
        object: S2,
        expiration: UtcTime,
    ) -> GetObjectUrlBldr {
        GetObjectUrl::builder()
            .client(self.clone())
            .bucket(bucket)
            .object(object)
            .expiration(expiration)
    }
}
