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

//! Signature V2 for S3 API
//!
//! ```text
//! StringToSign = HTTP-Verb + "\n" +
//!                Content-MD5 + "\n" +
//!                Content-Type + "\n" +
//!                Date + "\n" +
//!                CanonicalizedAmzHeaders +
//!                CanonicalizedResource
//! ```
//!
//! Everything here is synchronous and free of I/O, so a request signs the
//! same way every time it is built from the same inputs.

use crate::s3::header_constants::*;
use crate::s3::multimap_ext::{Multimap, MultimapExt};
use crate::s3::utils::{b64_encode, url_encode};
use hmac::{Hmac, Mac};
use http::Method;
use sha1::Sha1;
use std::collections::BTreeMap;

type HmacSha1 = Hmac<Sha1>;

/// Query parameters that address a sub-resource and therefore take part in
/// the canonicalized resource. Any other query parameter is sent but not signed.
pub const SUB_RESOURCES: [&str; 16] = [
    "acl",
    "lifecycle",
    "location",
    "logging",
    "notification",
    "partNumber",
    "policy",
    "requestPayment",
    "torrent",
    "uploadId",
    "uploads",
    "versionId",
    "versioning",
    "versions",
    "website",
    "delete",
];

/// Returns HMAC-SHA1 of given data, base64 encoded
pub fn sign(secret_key: &str, string_to_sign: &str) -> String {
    let mut hasher =
        HmacSha1::new_from_slice(secret_key.as_bytes()).expect("HMAC can take key of any size");
    hasher.update(string_to_sign.as_bytes());
    b64_encode(hasher.finalize().into_bytes())
}

/// Returns the canonicalized vendor header block: one `key:value\n` line per
/// `x-amz*` header value, keys lower-cased, newlines in values replaced by a
/// space, lines sorted. Empty when no vendor header is present.
pub fn get_canonical_amz_headers(headers: &Multimap) -> String {
    let mut lines: Vec<String> = Vec::new();
    for (key, values) in headers.iter_all() {
        let key = key.to_lowercase();
        if !key.starts_with(X_AMZ_PREFIX) {
            continue;
        }
        for value in values {
            lines.push(format!("{key}:{}", value.replace('\n', " ")));
        }
    }
    lines.sort();

    let mut block = String::new();
    for line in lines {
        block.push_str(&line);
        block.push('\n');
    }
    block
}

/// Returns the canonicalized resource: the request path followed by the
/// sub-resource query parameters, sorted by key. A sub-resource without a
/// value is emitted bare, e.g. `/bucket?acl`.
pub fn get_canonical_resource(path: &str, query_params: &Multimap) -> String {
    let mut sub_resources: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for (key, values) in query_params.iter_all() {
        if SUB_RESOURCES.contains(&key.as_str()) {
            let entry = sub_resources.entry(key.as_str()).or_default();
            entry.extend(values.iter().map(|v| v.as_str()));
            entry.sort();
        }
    }

    let mut resource = path.to_string();
    let mut delimiter = '?';
    for (key, values) in sub_resources {
        for value in values {
            resource.push(delimiter);
            resource.push_str(key);
            if !value.is_empty() {
                resource.push('=');
                resource.push_str(value);
            }
            delimiter = '&';
        }
    }
    resource
}

/// Returns the string-to-sign for a header-authenticated request.
///
/// `Content-MD5` and `Content-Type` are looked up in `headers` ignoring case;
/// a missing one still contributes an empty line.
pub fn get_string_to_sign(
    method: &Method,
    path: &str,
    headers: &Multimap,
    query_params: &Multimap,
    date: &str,
) -> String {
    format!(
        "{}\n{}\n{}\n{}\n{}{}",
        method.as_str().to_uppercase(),
        headers.get_ignore_case(CONTENT_MD5).unwrap_or_default(),
        headers.get_ignore_case(CONTENT_TYPE).unwrap_or_default(),
        date,
        get_canonical_amz_headers(headers),
        get_canonical_resource(path, query_params),
    )
}

/// Returns authorization value for given access key and signature
pub fn get_authorization(access_key: &str, signature: &str) -> String {
    format!("{AUTH_SCHEME} {access_key}:{signature}")
}

/// Signs and updates headers for given parameters.
///
/// Adds `Date` with exactly the `date` string that was signed, and
/// `Authorization`. Existing headers of either name are replaced.
pub fn sign_v2(
    method: &Method,
    path: &str,
    headers: &mut Multimap,
    query_params: &Multimap,
    access_key: &str,
    secret_key: &str,
    date: &str,
) {
    headers.remove_ignore_case(DATE);
    headers.remove_ignore_case(AUTHORIZATION);

    let string_to_sign = get_string_to_sign(method, path, headers, query_params, date);
    log::trace!("string to sign: {string_to_sign:?}");
    let signature = sign(secret_key, &string_to_sign);

    headers.add(DATE, date);
    headers.add(AUTHORIZATION, get_authorization(access_key, &signature));
}

/// Returns the string-to-sign of a pre-signed GET: the expiration in epoch
/// seconds takes the place of the date and the query is not canonicalized.
pub fn get_presign_string_to_sign(path: &str, expires: i64) -> String {
    format!("GET\n\n\n{expires}\n{path}")
}

/// Returns the query string of a pre-signed GET URL:
/// `AWSAccessKeyId=..&Expires=..&Signature=..`, values URL-encoded.
pub fn presign_v2(path: &str, access_key: &str, secret_key: &str, expires: i64) -> String {
    let signature = sign(secret_key, &get_presign_string_to_sign(path, expires));
    format!(
        "{AWS_ACCESS_KEY_ID}={}&{EXPIRES}={expires}&{SIGNATURE}={}",
        url_encode(access_key),
        url_encode(&signature),
    )
}
