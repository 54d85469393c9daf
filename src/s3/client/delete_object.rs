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

use crate::s3::builders::{DeleteObject, DeleteObjectBldr};
use crate::s3::client::S3Client;

impl S3Client {
    /// Creates a [`DeleteObject`] request builder. The object's metadata is
    /// read before it is deleted, and no DELETE is sent if that fails.
    ///
    /// To execute the request, call [`DeleteObject::send()`](crate::s3::builders::DeleteObject::send),
    /// which returns a [`Result`] containing a [`DeleteObjectResponse`](crate::s3::response::DeleteObjectResponse).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use simples3::s3::client::{ClientConfig, S3Client};
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let client = S3Client::new(ClientConfig::from_env()).unwrap();
    ///     let resp = client
    ///         .delete_object("bucket-name", "object-name")
    ///         .build()
    ///         .send()
    ///         .await
    ///         .unwrap();
    ///     println!("deleted {} bytes", resp.info().size);
    /// }
    /// ```
    pub fn delete_object<S1: Into<String>, S2: Into<String>>(
        &self,
        bucket: S1,
        object: S2,
    ) -> DeleteObjectBldr {
        DeleteObject::builder()
            .client(self.clone())
            .bucket(bucket)
            .object(object)
    }
}
