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

//! S3 APIs for downloading objects.

use crate::s3::builders::{GetObject, GetObjectBldr, GetObjectStream, GetObjectStreamBldr};
use crate::s3::client::S3Client;

impl S3Client {
    /// Creates a [`GetObject`] request builder that buffers the whole object.
    ///
    /// Extra request headers such as `Range` go through `extra_headers`.
    /// To execute the request, call [`GetObject::send()`](crate::s3::builders::GetObject::send),
    /// which returns a [`Result`] containing a [`GetObjectResponse`](crate::s3::response::GetObjectResponse).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use simples3::s3::client::{ClientConfig, S3Client};
    /// use simples3::s3::multimap_ext::{Multimap, MultimapExt};
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let client = S3Client::new(ClientConfig::from_env()).unwrap();
    ///     let mut headers = Multimap::new();
    ///     headers.add("Range", "bytes=0-99");
    ///     let resp = client
    ///         .get_object("bucket-name", "object-name")
    ///         .extra_headers(headers)
    ///         .build()
    ///         .send()
    ///         .await
    ///         .unwrap();
    ///     println!("retrieved {} bytes", resp.content().len());
    /// }
    /// ```
    pub fn get_object<S1: Into<String>, S2: Into<String>>(
        &self,
        bucket: S1,
        object: S2,
    ) -> GetObjectBldr {
        GetObject::builder()
            .client(self.clone())
            .bucket(bucket)
            .object(object)
    }

    /// Creates a [`GetObjectStream`] request builder that hands out the
    /// object body as a byte stream.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use futures_util::StreamExt;
    /// use simples3::s3::client::{ClientConfig, S3Client};
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let client = S3Client::new(ClientConfig::from_env()).unwrap();
    ///     let resp = client
    ///         .get_object_stream("bucket-name", "object-name")
    ///         .build()
    ///         .send()
    ///         .await
    ///         .unwrap();
    ///     let mut stream = resp.into_stream();
    ///     while let Some(chunk) = stream.next().await {
    ///         println!("chunk of {} bytes", chunk.unwrap().len());
    ///     }
    /// }
    /// ```
    pub fn get_object_stream<S1: Into<String>, S2: Into<String>>(
        &self,
        bucket: S1,
        object: S2,
    ) -> GetObjectStreamBldr {
        GetObjectStream::builder()
            .client(self.clone())
            .bucket(bucket)
            .object(object)
    }
}
