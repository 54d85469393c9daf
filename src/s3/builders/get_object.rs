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
use crate::s3::response::{GetObjectResponse, GetObjectStreamResponse};
use crate::s3::types::{S3Request, ToS3Request};
use futures_util::TryStreamExt;
use http::Method;

/// Argument builder for the [`GetObject`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_GetObject.html) S3 API operation,
/// buffering the whole object.
///
/// This struct constructs the parameters required for the [`S3Client::get_object`](crate::s3::client::S3Client::get_object) method.
pub type GetObject = ObjectCommon<GetObjectPhantomData>;

#[doc(hidden)]
#[derive(Clone, Debug)]
pub struct GetObjectPhantomData;

pub type GetObjectBldr =
    ObjectCommonBuilder<GetObjectPhantomData, ((S3Client,), (), (), (String,), (String,), ())>;

/// Argument builder for the [`GetObject`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_GetObject.html) S3 API operation,
/// handing out the object as a byte stream.
///
/// This struct constructs the parameters required for the [`S3Client::get_object_stream`](crate::s3::client::S3Client::get_object_stream) method.
pub type GetObjectStream = ObjectCommon<GetObjectStreamPhantomData>;

#[doc(hidden)]
#[derive(Clone, Debug)]
pub struct GetObjectStreamPhantomData;

pub type GetObjectStreamBldr = ObjectCommonBuilder<
    GetObjectStreamPhantomData,
    ((S3Client,), (), (), (String,), (String,), ()),
>;

impl ToS3Request for GetObject {
    fn to_s3request(self) -> Result<S3Request, ValidationErr> {
        self.into_s3request(Method::GET)
    }
}

impl ToS3Request for GetObjectStream {
    fn to_s3request(self) -> Result<S3Request, ValidationErr> {
        self.into_s3request(Method::GET)
    }
}

// Object bodies are never run through the XML normalizer, so both forms
// bypass `S3Api::send`.
impl GetObject {
    pub async fn send(self) -> Result<GetObjectResponse, Error> {
        let mut request = self.to_s3request()?;
        let resp = request.execute_stream().await?;
        let headers = resp.headers().clone();
        let content = resp.bytes().await?;
        Ok(GetObjectResponse {
            request,
            headers,
            content,
        })
    }
}

impl GetObjectStream {
    pub async fn send(self) -> Result<GetObjectStreamResponse, Error> {
        let mut request = self.to_s3request()?;
        let resp = request.execute_stream().await?;
        let headers = resp.headers().clone();
        Ok(GetObjectStreamResponse {
            request,
            headers,
            stream: Box::pin(resp.bytes_stream().map_err(Error::from)),
        })
    }
}
