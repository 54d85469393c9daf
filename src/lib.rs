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

//! # simples3
//!
//! A small async client for Amazon S3 style object storage. Requests are
//! authenticated with AWS Signature Version 2 (HMAC-SHA1 over a canonical
//! string), and XML responses are normalized into a predictable tree where
//! keys are camel-cased and repeatable elements are always lists.
//!
//! Each supported operation has a request builder (e.g. [`s3::builders::GetBucket`],
//! [`s3::builders::PutObject`]) returned by a method on [`s3::S3Client`].
//! Call `.build()` on it and then `.send().await` to execute.
//!
//! ## Basic Usage
//!
//! ```no_run
//! use simples3::s3::S3Client;
//! use simples3::s3::client::ClientConfig;
//! use simples3::s3::types::S3Api;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ClientConfig::new("my-access-key", "my-secret-key");
//!     let client = S3Client::new(config).unwrap();
//!
//!     let resp = client
//!         .get_bucket("my-bucket")
//!         .directory("photos")
//!         .build()
//!         .send()
//!         .await
//!         .expect("request failed");
//!
//!     for file in &resp.listing().contents.files {
//!         println!("{} ({} bytes)", file.key, file.size);
//!     }
//! }
//! ```
//!
//! ## Design
//! - Signing ([`s3::signer`]) and normalization ([`s3::xml`]) are pure and synchronous
//! - The client holds only immutable state; every call builds its own request
//! - Faults reported in an XML `<Error>` body win over the HTTP status code

#![allow(clippy::result_large_err)]
#![allow(clippy::too_many_arguments)]
pub mod s3;

#[cfg(test)]
#[macro_use]
extern crate quickcheck;
