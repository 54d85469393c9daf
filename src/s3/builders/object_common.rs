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
use crate::s3::multimap_ext::Multimap;
use crate::s3::types::S3Request;
use crate::s3::utils::{check_bucket_name, check_object_name};
use http::Method;
use std::marker::PhantomData;
use typed_builder::TypedBuilder;

/// Common parameters for operations on a single object without a request body.
#[derive(Clone, Debug, TypedBuilder)]
pub struct ObjectCommon<T> {
    #[builder(!default)] // force required
    pub(crate) client: S3Client,

    /// Sent as-is, e.g. `Range` on a download.
    #[builder(default, setter(into))]
    pub(crate) extra_headers: Option<Multimap>,
    #[builder(default, setter(into))]
    pub(crate) extra_query_params: Option<Multimap>,
    #[builder(setter(into))] // force required + accept Into<String>
    pub(crate) bucket: String,
    #[builder(setter(into))] // force required + accept Into<String>
    pub(crate) object: String,

    #[builder(default)]
    _operation: PhantomData<T>,
}

impl<T> ObjectCommon<T> {
    pub(crate) fn into_s3request(self, method: Method) -> Result<S3Request, ValidationErr> {
        check_bucket_name(&self.bucket)?;
        check_object_name(&self.object)?;

        Ok(S3Request::builder()
            .client(self.client)
            .method(method)
            .bucket(self.bucket)
            .object(self.object)
            .query_params(self.extra_query_params.unwrap_or_default())
            .headers(self.extra_headers.unwrap_or_default())
            .build())
    }
}
