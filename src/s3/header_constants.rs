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

pub const AUTHORIZATION: &str = "Authorization";
pub const DATE: &str = "Date";
pub const CONTENT_MD5: &str = "Content-MD5";
pub const CONTENT_TYPE: &str = "Content-Type";
pub const CONTENT_LENGTH: &str = "Content-Length";
pub const LAST_MODIFIED: &str = "Last-Modified";

/// Vendor header namespace; headers under it participate in signing.
pub const X_AMZ_PREFIX: &str = "x-amz";
pub const X_AMZ_ACL: &str = "x-amz-acl";

/// Scheme name used in the `Authorization` header.
pub const AUTH_SCHEME: &str = "AWS";

pub const AWS_ACCESS_KEY_ID: &str = "AWSAccessKeyId";
pub const EXPIRES: &str = "Expires";
pub const SIGNATURE: &str = "Signature";

pub const APPLICATION_XML: &str = "application/xml";
pub const TEXT_XML: &str = "text/xml";
pub const APPLICATION_OCTET_STREAM: &str = "application/octet-stream";
