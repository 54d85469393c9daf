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
use crate::s3::multimap_ext::Multimap;
use crate::s3::response::GetObjectUrlResponse;
use crate::s3::signer::presign_v2;
use crate::s3::utils::{UtcTime, check_bucket_name, check_object_name, utc_now};
use typed_builder::TypedBuilder;

/// Argument builder for a pre-signed GET URL of an object.
///
/// This struct constructs the parameters required for the [`S3Client::get_object_url`](crate::s3::client::S3Client::get_object_url) method.
#[derive(Clone, Debug, TypedBuilder)]
pub struct GetObjectUrl {
    #[builder(!default)] // force required
    client: S3Client,
    #[builder(setter(into))] // force required + accept Into<String>
    bucket: String,
    #[builder(setter(into))] // force required + accept Into<String>
    object: String,
    /// Moment the URL stops working; must be after the generation time.
    #[builder(!default)] // force required
    expiration: UtcTime,
    /// Generation time, defaults to now.
    #[builder(default, setter(into, strip_option))]
    request_time: Option<UtcTime>,
}

pub type GetObjectUrlBldr =
    GetObjectUrlBuilder<((S3Client,), (String,), (String,), (UtcTime,), ())>;

impl GetObjectUrl {
    pub async fn send(self) -> Result<GetObjectUrlResponse, Error> {
        // NOTE: nothing is sent; async for symmetry with the other builders
        check_bucket_name(&self.bucket)?;
        check_object_name(&self.object)?;

        let now = self.request_time.unwrap_or_else(utc_now);
        if self.expiration <= now {
            return Err(Error::InvalidExpiration {
                expiration: self.expiration.timestamp_millis(),
                now: now.timestamp_millis(),
            });
        }
        let expires = self.expiration.timestamp();

        let url = self.client.shared.base_url.build_url(
            &Multimap::new(),
            Some(&self.bucket),
            Some(&self.object),
        );
        let creds = self.client.shared.provider.fetch();
        let query = presign_v2(&url.path, &creds.access_key, &creds.secret_key, expires);

        Ok(GetObjectUrlResponse {
            bucket: self.bucket,
            object: self.object,
            expires,
            url: format!("{url}?{query}"),
        })
    }
}
