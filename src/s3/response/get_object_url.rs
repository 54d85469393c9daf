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

use serde::Serialize;

/// Response of [get_object_url()](crate::s3::client::S3Client::get_object_url) API
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GetObjectUrlResponse {
    pub bucket: String,
    pub object: String,
    /// Expiration in epoch seconds, as signed into the URL
    pub expires: i64,
    pub url: String,
}
