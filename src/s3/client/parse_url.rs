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

use crate::s3::client::S3Client;
use crate::s3::error::Error;
use crate::s3::http::BucketUrl;

impl S3Client {
    /// Splits a URL of this client's host into bucket and object.
    ///
    /// # Examples
    ///
    /// ```
    /// use simples3::s3::client::{ClientConfig, S3Client};
    ///
    /// let client = S3Client::new(ClientConfig::new("ak", "sk")).unwrap();
    /// let parsed = client
    ///     .parse_url("https://mybucket.s3.amazonaws.com/photos/cat.jpg")
    ///     .unwrap();
    /// assert_eq!(parsed.bucket, "mybucket");
    /// assert_eq!(parsed.object, "photos/cat.jpg");
    /// ```
    pub fn parse_url(&self, url: &str) -> Result<BucketUrl, Error> {
        BucketUrl::parse(&self.shared.base_url, url)
    }
}
