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

//! Value types extracted from normalized responses

use crate::s3::error::ValidationErr;
use crate::s3::header_constants::{CONTENT_LENGTH, CONTENT_TYPE, LAST_MODIFIED};
use crate::s3::utils::{from_http_header_value, to_iso8601utc};
use crate::s3::xml::XmlValue;
use http::HeaderMap;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
/// Bucket as reported by the bucket listing
pub struct BucketEntry {
    pub name: String,
    /// ISO-8601 timestamp exactly as sent by the service
    pub creation_date: String,
}

impl BucketEntry {
    pub(crate) fn from_xml(node: &XmlValue) -> Self {
        Self {
            name: node.text_or_default("name"),
            creation_date: node.text_or_default("creationDate"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
/// Object entry of a bucket listing
pub struct ObjectEntry {
    pub key: String,
    pub last_modified: String,
    pub e_tag: String,
    pub size: u64,
    pub storage_class: Option<String>,
}

impl ObjectEntry {
    pub(crate) fn from_xml(node: &XmlValue) -> Result<Self, ValidationErr> {
        let size = match node.get("size").and_then(XmlValue::as_text) {
            Some(s) if !s.is_empty() => s.parse::<u64>()?,
            _ => 0,
        };
        Ok(Self {
            key: node.text_or_default("key"),
            last_modified: node.text_or_default("lastModified"),
            e_tag: node.text_or_default("eTag"),
            size,
            storage_class: node
                .get("storageClass")
                .and_then(XmlValue::as_text)
                .map(String::from),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct BucketContents {
    /// Objects directly below the listed directory, keys prefixed with `/`
    pub files: Vec<ObjectEntry>,
    /// Sub-directories, each `/` + common prefix
    pub directories: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
/// One directory level of a bucket
pub struct BucketListing {
    pub bucket: String,
    pub contents: BucketContents,
    /// `/` + the listed prefix
    pub path: String,
    pub is_truncated: bool,
}

impl BucketListing {
    /// Builds the listing of `prefix` from a normalized `ListBucketResult`.
    ///
    /// Keys ending in `/` are directory placeholders and are dropped from
    /// `files`.
    pub(crate) fn from_xml(
        bucket: &str,
        prefix: &str,
        root: &XmlValue,
    ) -> Result<Self, ValidationErr> {
        let result = root.get("listBucketResult").ok_or_else(|| {
            ValidationErr::XmlStructure("<ListBucketResult> tag not found".into())
        })?;

        let files = result
            .get("contents")
            .and_then(XmlValue::as_list)
            .unwrap_or_default()
            .iter()
            .map(ObjectEntry::from_xml)
            .filter(|e| !matches!(e, Ok(entry) if entry.key.ends_with('/')))
            .map(|e| {
                e.map(|mut entry| {
                    entry.key.insert(0, '/');
                    entry
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let directories = result
            .get("commonPrefixes")
            .and_then(XmlValue::as_list)
            .unwrap_or_default()
            .iter()
            .map(|p| format!("/{}", p.text_or_default("prefix")))
            .collect();

        Ok(Self {
            bucket: bucket.to_string(),
            contents: BucketContents { files, directories },
            path: format!("/{prefix}"),
            is_truncated: result.text_or_default("isTruncated") == "true",
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
/// Object metadata read from the headers of a HEAD request
pub struct ObjectInfo {
    pub key: String,
    pub size: u64,
    pub mime_type: Option<String>,
    /// ISO-8601 UTC, e.g. `2026-01-01T00:00:00.000Z`
    pub last_modified: String,
}

impl ObjectInfo {
    pub(crate) fn from_headers(key: &str, headers: &HeaderMap) -> Result<Self, ValidationErr> {
        let last_modified = headers
            .get(LAST_MODIFIED)
            .ok_or(ValidationErr::MissingHeader(LAST_MODIFIED))?
            .to_str()?;

        let size: u64 = match headers.get(CONTENT_LENGTH) {
            Some(v) => v.to_str()?.parse::<u64>()?,
            None => 0,
        };

        Ok(Self {
            key: key.to_string(),
            size,
            mime_type: headers
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(String::from),
            last_modified: to_iso8601utc(from_http_header_value(last_modified)?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::s3::xml::normalize;
    use http::HeaderValue;

    const LISTING: &str = r#"<ListBucketResult>
  <Name>mybucket</Name>
  <Prefix>photos/</Prefix>
  <IsTruncated>false</IsTruncated>
  <Contents><Key>photos/</Key><Size>0</Size></Contents>
  <Contents>
    <Key>photos/cat.jpg</Key>
    <LastModified>2026-01-01T00:00:00.000Z</LastModified>
    <ETag>"abc"</ETag>
    <Size>42</Size>
    <StorageClass>STANDARD</StorageClass>
  </Contents>
  <CommonPrefixes><Prefix>photos/2026/</Prefix></CommonPrefixes>
</ListBucketResult>"#;

    #[test]
    fn test_listing_from_xml() {
        let root = normalize(LISTING.as_bytes()).unwrap().value;
        let listing = BucketListing::from_xml("mybucket", "photos/", &root).unwrap();

        assert_eq!(listing.bucket, "mybucket");
        assert_eq!(listing.path, "/photos/");
        assert!(!listing.is_truncated);
        assert_eq!(listing.contents.directories, vec!["/photos/2026/"]);
        assert_eq!(
            listing.contents.files,
            vec![ObjectEntry {
                key: "/photos/cat.jpg".into(),
                last_modified: "2026-01-01T00:00:00.000Z".into(),
                e_tag: "\"abc\"".into(),
                size: 42,
                storage_class: Some("STANDARD".into()),
            }]
        );
    }

    #[test]
    fn test_empty_listing_from_xml() {
        let root = normalize(b"<ListBucketResult><Name>b</Name><IsTruncated>true</IsTruncated></ListBucketResult>")
            .unwrap()
            .value;
        let listing = BucketListing::from_xml("b", "", &root).unwrap();
        assert_eq!(listing.path, "/");
        assert!(listing.is_truncated);
        assert_eq!(listing.contents, BucketContents::default());
    }

    #[test]
    fn test_listing_requires_list_bucket_result() {
        let root = normalize(b"<Other/>").unwrap().value;
        assert!(matches!(
            BucketListing::from_xml("b", "", &root),
            Err(ValidationErr::XmlStructure(_))
        ));
    }

    #[test]
    fn test_object_info_from_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "last-modified",
            HeaderValue::from_static("Thu, 01 Jan 2026 00:00:00 GMT"),
        );
        headers.insert("content-length", HeaderValue::from_static("42"));
        headers.insert("content-type", HeaderValue::from_static("text/plain"));

        let info = ObjectInfo::from_headers("file.txt", &headers).unwrap();
        assert_eq!(info.key, "file.txt");
        assert_eq!(info.size, 42);
        assert_eq!(info.mime_type.as_deref(), Some("text/plain"));
        assert_eq!(info.last_modified, "2026-01-01T00:00:00.000Z");

        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["mimeType"], "text/plain");
    }

    #[test]
    fn test_object_info_requires_last_modified() {
        assert!(matches!(
            ObjectInfo::from_headers("file.txt", &HeaderMap::new()),
            Err(ValidationErr::MissingHeader(LAST_MODIFIED))
        ));
    }
}
