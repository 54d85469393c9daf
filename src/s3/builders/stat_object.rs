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

use crate::s3::builders::{ObjectCommon, ObjectCommonBuilder};
use crate::s3::client::S3Client;
use crate::s3::error::ValidationErr;
use crate::s3::response::StatObjectResponse;
use crate::s3::types::{S3Api, S3Request, ToS3Request};
use http::Method;

/// Argument builder for the [`HeadObject`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_HeadObject.html) S3 API operation.
///
/// This struct constructs the parameters required for the [`S3Client::stat_object`](crate::s3::client::S3Client::stat_object) method.
pub type StatObject = ObjectCommon<StatObjectPhantomData>;

#[doc(hidden)]
#[derive(Clone, Debug)]
pub struct StatObjectPhantomData;

pub type StatObjectBldr =
    ObjectCommonBuilder<StatObjectPhantomData, ((S3Client,), (), (), (String,), (String,), ())>;

impl S3Api for StatObject {
    type S3Response = StatObjectResponse;
}

impl ToS3Request for StatObject {
    fn to_s3request(self) -> Result<S3Request, ValidationErr> {
        self.into_s3request(Method::HEAD)
    }
}
