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

//! Various utility and helper functions

use crate::s3::error::ValidationErr;
use base64::engine::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::{DateTime, NaiveDateTime, ParseError, Utc};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

pub use urlencoding::encode as url_encode;

/// Date and time with UTC timezone
pub type UtcTime = DateTime<Utc>;

const HTTP_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

// Parse formats start after the weekday, which is not checked.
const IMF_FIXDATE_FORMAT: &str = "%d %b %Y %H:%M:%S GMT";
const RFC850_DATE_FORMAT: &str = "%d-%b-%y %H:%M:%S GMT";
const ASCTIME_DATE_FORMAT: &str = "%b %e %H:%M:%S %Y";

/// Encodes data using base64 algorithm
pub fn b64_encode<T: AsRef<[u8]>>(input: T) -> String {
    BASE64.encode(input)
}

/// Returns base64 encoded MD5 digest of given data, as sent in `Content-MD5`
pub fn md5sum_hash(data: &[u8]) -> String {
    b64_encode(md5::compute(data).0)
}

/// Gets current UTC time
pub fn utc_now() -> UtcTime {
    Utc::now()
}

/// Gets HTTP header value of given time, e.g. `Thu, 01 Jan 2026 00:00:00 GMT`
pub fn to_http_header_value(time: UtcTime) -> String {
    time.format(HTTP_DATE_FORMAT).to_string()
}

/// Parses HTTP header value to time.
///
/// Accepts the IMF-fixdate form (`Mon, 12 Oct 2009 17:50:00 GMT`) and the
/// obsolete RFC 850 (`Monday, 12-Oct-09 17:50:00 GMT`) and asctime
/// (`Mon Oct 12 17:50:00 2009`) forms. A weekday that does not match the
/// date is ignored.
pub fn from_http_header_value(s: &str) -> Result<UtcTime, ParseError> {
    let s = s.trim();
    let (format, rest) = match s.split_once(',') {
        Some((_, rest)) if rest.contains('-') => (RFC850_DATE_FORMAT, rest),
        Some((_, rest)) => (IMF_FIXDATE_FORMAT, rest),
        None => (
            ASCTIME_DATE_FORMAT,
            s.split_once(' ').map_or(s, |(_, rest)| rest),
        ),
    };
    Ok(NaiveDateTime::parse_from_str(rest.trim(), format)?.and_utc())
}

/// Gets ISO8601 UTC formatted value of given time
pub fn to_iso8601utc(time: UtcTime) -> String {
    time.format("%Y-%m-%dT%H:%M:%S.%3fZ").to_string()
}

const OBJECT_KEY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'/');

/// Percent-encodes an object key for use in a request path; `/` is kept.
pub fn urlencode_object_key(key: &str) -> String {
    utf8_percent_encode(key, OBJECT_KEY_ENCODE_SET).collect()
}

/// Reverses [`urlencode_object_key`]; `None` when the result is not UTF-8.
pub fn urldecode_object_key(key: &str) -> Option<String> {
    percent_decode_str(key)
        .decode_utf8()
        .ok()
        .map(|s| s.into_owned())
}

/// Bucket names go verbatim into the first path segment.
pub fn check_bucket_name(bucket_name: &str) -> Result<(), ValidationErr> {
    if bucket_name.trim().is_empty() {
        return Err(ValidationErr::InvalidBucketName(
            "bucket name cannot be empty".into(),
        ));
    }
    if bucket_name.contains('/') {
        return Err(ValidationErr::InvalidBucketName(format!(
            "bucket name '{bucket_name}' cannot contain '/'"
        )));
    }
    Ok(())
}

pub fn check_object_name(object_name: &str) -> Result<(), ValidationErr> {
    if object_name.is_empty() {
        return Err(ValidationErr::InvalidObjectName(
            "object name cannot be empty".into(),
        ));
    }
    Ok(())
}
