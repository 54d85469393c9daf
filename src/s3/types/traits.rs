// MinIO Rust Library for Amazon S3 Compatible Cloud Storage
// Copyright 2022 MinIO, Inc.
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

//! Core traits for S3 request and response handling.

use super::s3_request::{DispatchedResponse, S3Request};
use crate::s3::error::{Error, ValidationErr};
use async_trait::async_trait;

/// Trait for converting a request builder into a concrete S3 HTTP request.
///
/// Implemented by every request builder. Input validation (bucket and object
/// names, required sizes) happens here, so a builder that fails it never
/// reaches the network.
///
/// # See Also
///
/// * [`S3Api`] - The trait that uses `ToS3Request` as part of its request execution pipeline
/// * [`FromS3Response`] - The counterpart trait for converting HTTP responses into typed responses
pub trait ToS3Request: Sized {
    /// Consumes this request builder and returns a [`S3Request`].
    fn to_s3request(self) -> Result<S3Request, ValidationErr>;
}

/// Trait for converting dispatched responses into strongly typed S3 response objects.
///
/// The dispatcher has already turned XML `<Error>` documents and failed
/// statuses into [`Error::ServiceFault`], so implementations only see bodies
/// of requests that succeeded.
#[async_trait]
pub trait FromS3Response: Sized {
    /// Converts the outcome of executing `request` into a typed response.
    async fn from_s3response(
        request: S3Request,
        response: Result<DispatchedResponse, Error>,
    ) -> Result<Self, Error>;
}

/// Trait that defines a common interface for single-request S3 API builders.
///
/// Composite operations that chain several requests (create a bucket then list
/// it, stat an object then delete it) expose their own `send` instead.
#[async_trait]
pub trait S3Api: ToS3Request {
    /// The response type associated with this request builder.
    type S3Response: FromS3Response;

    /// Sends the S3 API request and returns the corresponding typed response.
    async fn send(self) -> Result<Self::S3Response, Error> {
        let mut req: S3Request = self.to_s3request()?;
        let resp: Result<DispatchedResponse, Error> = req.execute().await;
        Self::S3Response::from_s3response(req, resp).await
    }
}
