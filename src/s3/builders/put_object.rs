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
use crate::s3::error::{Error, ValidationErr};
use crate::s3::header_constants::{CONTENT_LENGTH, CONTENT_MD5, CONTENT_TYPE};
use crate::s3::multimap_ext::{Multimap, MultimapExt};
use crate::s3::response::PutObjectResponse;
use crate::s3::types::{RequestBody, S3Api, S3Request, ToS3Request};
use crate::s3::utils::{check_bucket_name, check_object_name, md5sum_hash};
use bytes::Bytes;
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for the [`PutObject`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_PutObject.html) S3 API operation
/// with an in-memory body.
///
/// This struct constructs the parameters required for the [`S3Client::put_object`](crate::s3::client::S3Client::put_object) method.
#[derive(Clone, Debug, TypedBuilder)]
pub struct PutObject {
    #[builder(!default)] // force required
    client: S3Client,
    #[builder(default, setter(into))]
    extra_headers: Option<Multimap>,
    #[builder(default, setter(into))]
    extra_query_params: Option<Multimap>,
    #[builder(setter(into))] // force required + accept Into<String>
    bucket: String,
    #[builder(setter(into))] // force required + accept Into<String>
    object: String,
    #[builder(setter(into))] // force required
    data: Bytes,
    #[builder(default, setter(into, strip_option))]
    content_type: Option<String>,
}

pub type PutObjectBldr =
    PutObjectBuilder<((S3Client,), (), (), (String,), (String,), (Bytes,), ())>;

/// Argument builder for the [`PutObject`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_PutObject.html) S3 API operation
/// with a streamed body. The size must be given up front.
///
/// This struct constructs the parameters required for the [`S3Client::put_object_stream`](crate::s3::client::S3Client::put_object_stream) method.
#[derive(Debug, TypedBuilder)]
pub struct PutObjectStream {
    #[builder(!default)] // force required
    client: S3Client,
    #[builder(default, setter(into))]
    extra_headers: Option<Multimap>,
    #[builder(default, setter(into))]
    extra_query_params: Option<Multimap>,
    #[builder(setter(into))] // force required + accept Into<String>
    bucket: String,
    #[builder(setter(into))] // force required + accept Into<String>
    object: String,
    #[builder(setter(into))] // force required
    body: reqwest::Body,
    /// Exact number of bytes `body` yields; sent as `Content-Length`.
    #[builder(default, setter(into, strip_option))]
    size: Option<u64>,
    #[builder(default, setter(into, strip_option))]
    content_type: Option<String>,
}

pub type PutObjectStreamBldr =
    PutObjectStreamBuilder<((S3Client,), (), (), (String,), (String,), (reqwest::Body,), (), ())>;

fn put_headers(extra_headers: Option<Multimap>, content_type: Option<String>, size: u64) -> Multimap {
    let mut headers: Multimap = extra_headers.unwrap_or_default();
    if let Some(v) = content_type {
        headers.remove_ignore_case(CONTENT_TYPE);
        headers.add(CONTENT_TYPE, v);
    }
    headers.remove_ignore_case(CONTENT_LENGTH);
    headers.add(CONTENT_LENGTH, size.to_string());
    headers
}

impl ToS3Request for PutObject {
    fn to_s3request(self) -> Result<S3Request, ValidationErr> {
        check_bucket_name(&self.bucket)?;
        check_object_name(&self.object)?;

        let mut headers = put_headers(
            self.extra_headers,
            self.content_type,
            self.data.len() as u64,
        );
        headers.remove_ignore_case(CONTENT_MD5);
        headers.add(CONTENT_MD5, md5sum_hash(&self.data));

        Ok(S3Request::builder()
            .client(self.client)
            .method(Method::PUT)
            .bucket(self.bucket)
            .object(self.object)
            .query_params(self.extra_query_params.unwrap_or_default())
            .headers(headers)
            .body(RequestBody::Full(self.data))
            .build())
    }
}

impl ToS3Request for PutObjectStream {
    fn to_s3request(self) -> Result<S3Request, ValidationErr> {
        check_bucket_name(&self.bucket)?;
        check_object_name(&self.object)?;
        let size = self.size.ok_or(ValidationErr::MissingObjectSize)?;

        Ok(S3Request::builder()
            .client(self.client)
            .method(Method::PUT)
            .bucket(self.bucket)
            .object(self.object)
            .query_params(self.extra_query_params.unwrap_or_default())
            .headers(put_headers(self.extra_headers, self.content_type, size))
            .body(RequestBody::Stream(self.body))
            .build())
    }
}

/// Uploads, then reads back the stored object's metadata.
async fn upload_then_stat(mut request: S3Request) -> Result<PutObjectResponse, Error> {
    let resp = request.execute().await?;

    let client = request.client.clone();
    let bucket = request.bucket.clone().unwrap_or_default();
    let object = request.object.clone().unwrap_or_default();
    let stat = client.stat_object(bucket, object).build().send().await?;

    Ok(PutObjectResponse {
        request,
        headers: resp.headers,
        info: stat.into_info(),
    })
}

impl PutObject {
    pub async fn send(self) -> Result<PutObjectResponse, Error> {
        upload_then_stat(self.to_s3request()?).await
    }
}

impl PutObjectStream {
    /// Fails with [`ValidationErr::MissingObjectSize`] before any I/O when no
    /// size was set.
    pub async fn send(self) -> Result<PutObjectResponse, Error> {
        upload_then_stat(self.to_s3request()?).await
    }
}
