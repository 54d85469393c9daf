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

//! S3 APIs for uploading objects.

use crate::s3::builders::{PutObject, PutObjectBldr, PutObjectStream, PutObjectStreamBldr};
use crate::s3::client::S3Client;
use bytes::Bytes;

impl S3Client {
    /// Creates a [`PutObject`] request builder uploading `data`.
    ///
    /// `Content-Length` and `Content-MD5` are derived from `data`; the
    /// content type defaults to `application/octet-stream`. After the upload
    /// the object's metadata is read back.
    ///
    /// To execute the request, call [`PutObject::send()`](crate::s3::builders::PutObject::send),
    /// which returns a [`Result`] containing a [`PutObjectResponse`](crate::s3::response::PutObjectResponse).
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
    ///         .put_object("bucket-name", "hello.txt", "hello world")
    ///         .content_type("text/plain")
    ///         .build()
    ///         .send()
    ///         .await
    ///         .unwrap();
    ///     println!("stored {} bytes", resp.info().size);
    /// }
    /// ```
    pub fn put_object<S1: Into<String>, S2: Into<String>, D: Into<Bytes>>(
        &self,
        bucket: S1,
        object: S2,
        data: D,
    ) -> PutObjectBldr {
        PutObject::builder()
            .client(self.clone())
            .bucket(bucket)
            .object(object)
            .data(data)
    }

    /// Same as [`put_object`](S3Client::put_object).
    pub fn create_object<S1: Into<String>, S2: Into<String>, D: Into<Bytes>>(
        &self,
        bucket: S1,
        object: S2,
        data: D,
    ) -> PutObjectBldr {
        self.put_object(bucket, object, data)
    }

    /// Creates a [`PutObjectStream`] request builder uploading a streamed
    /// body. `size` is mandatory; sending without it fails before any I/O.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use simples3::s3::client::{ClientConfig, S3Client};
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let client = S3Client::new(ClientConfig::from_env()).unwrap();
    ///     let file = tokio::fs::File::open("backup.tar").await.unwrap();
    ///     let size = file.metadata().await.unwrap().len();
    ///     let body = reqwest::Body::from(file);
    ///     let resp = client
    ///         .put_object_stream("bucket-name", "backup.tar", body)
    ///         .size(size)
    ///         .build()
    ///         .send()
    ///         .await
    ///         .unwrap();
    ///     println!("stored {} bytes", resp.info().size);
    /// }
    /// ```
    pub fn put_object_stream<S1: Into<String>, S2: Into<String>, B: Into<reqwest::Body>>(
        &self,
        bucket: S1,
        object: S2,
        body: B,
    ) -> PutObjectStreamBldr {
        PutObjectStream::builder()
            .client(self.clone())
            .bucket(bucket)
            .object(object)
            .body(body)
    }
}
