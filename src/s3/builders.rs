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

//! Argument builders for [S3Client](crate::s3::client::S3Client) APIs

mod bucket_common;
mod create_bucket;
mod delete_bucket;
mod delete_object;
mod get_bucket;
mod get_object;
mod get_object_url;
mod list_buckets;
mod object_common;
mod put_object;
mod stat_object;

pub use bucket_common::*;
pub use create_bucket::*;
pub use delete_bucket::*;
pub use delete_object::*;
pub use get_bucket::*;
pub use get_object::*;
pub use get_object_url::*;
pub use list_buckets::*;
pub use object_common::*;
pub use put_object::*;
pub use stat_object::*;
