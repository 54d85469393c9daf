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
use crate::s3::error::ValidationErr;
use crate::s3::multimap_ext::{Multimap, MultimapExt};
use crate::s3::response::GetBucketResponse;
use crate::s3::types::{S3Api, S3Request, ToS3Request};
use crate::s3::utils::check_bucket_name;
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for listing one directory level of a bucket, a
/// [`ListObjects`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_ListObjects.html)
/// request delimited by `/`.
///
/// This struct constructs the parameters required for the [`S3Client::get_bucket`](crate::s3::client::S3Client::get_bucket) method.
#[derive(Clone, Debug, TypedBuilder)]
pub struct GetBucket {
    #[builder(!default)] // force required
    client: S3Client,
    #[builder(default, setter(into))]
    extra_headers: Option<Multimap>,
    #[builder(default, setter(into))]
    extra_query_params: Option<Multimap>,
    #[builder(setter(into))] // force required + accept Into<String>
    bucket: String,
    /// Directory to list; absent or `/` lists the root.
    #[builder(default, setter(into, strip_option))]
    directory: Option<String>,
}

pub type GetBucketBldr = GetBucketBuilder<((S3Client,), (), (), (String,), ())>;

/// Turns a directory into the listing prefix: no leading `/`, one trailing
/// `/`, empty for the root.
pub(crate) fn directory_prefix(directory: Option<&str>) -> String {
    let dir = directory.unwrap_or_default();
    let dir = dir.strip_prefix('/').unwrap_or(dir);
    if dir.is_empty() {
        return String::new();
    }
    if dir.ends_with('/') {
        dir.to_string()
    } else {
        format!("{dir}/")
    }
}

impl S3Api for GetBucket {
    type S3Response = GetBucketResponse;
}

impl ToS3Request for GetBucket {
    fn to_s3request(self) -> Result<S3Request, ValidationErr> {
        check_bucket_name(&self.bucket)?;

        let prefix = directory_prefix(self.directory.as_deref());
        let mut query_params: Multimap = self.extra_query_params.unwrap_or_default();
        query_params.add("delimiter", "/");
        if !prefix.is_empty() {
            query_params.add("prefix", prefix);
        }

        Ok(S3Request::builder()
            .client(self.client)
            .method(Method::GET)
            .bucket(self.bucket)
            .query_params(query_params)
            .headers(self.extra_headers.unwrap_or_default())
            .build())
    }
}
