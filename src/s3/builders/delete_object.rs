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
use crate::s3::error::{Error, ValidationErr};
use crate::s3::response::DeleteObjectResponse;
use crate::s3::types::{S3Api, S3Request, ToS3Request};
use http::Method;

/// Argument builder for the [`DeleteObject`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_DeleteObject.html) S3 API operation.
///
/// This struct constructs the parameters required for the [`S3Client::delete_object`](crate::s3::client::S3Client::delete_object) method.
pub type DeleteObject = ObjectCommon<DeleteObjectPhantomData>;

#[doc(hidden)]
#[derive(Clone, Debug)]
pub struct DeleteObjectPhantomData;

pub type DeleteObjectBldr =
    ObjectCommonBuilder<DeleteObjectPhantomData, ((S3Client,), (), (), (String,), (String,), ())>;

impl ToS3Request for DeleteObject {
    fn to_s3request(self) -> Result<S3Request, ValidationErr> {
        self.into_s3request(Method::DELETE)
    }
}

impl DeleteObject {
    /// Reads the object's metadata, then deletes it. The DELETE is not sent
    /// when the metadata lookup fails.
    pub async fn send(self) -> Result<DeleteObjectResponse, Error> {
        let client = self.client.clone();
        let (bucket, object) = (self.bucket.clone(), self.object.clone());
        let mut request = self.to_s3request()?;

        let stat = client.stat_object(bucket, object).build().send().await?;
        let resp = request.execute().await?;

        Ok(DeleteObjectResponse {
            request,
            headers: resp.headers,
            info: stat.into_info(),
        })
    }
}
