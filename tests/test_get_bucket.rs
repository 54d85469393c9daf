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

mod common;

use common::{CannedResponse, MockServer, list_bucket_xml};
use simples3::s3::response::GetBucketResponse;
use simples3::s3::response_traits::HasBucket;
use simples3::s3::types::S3Api;

#[tokio::test]
async fn get_bucket_root() {
    let server = MockServer::start().await;
    server.enqueue(CannedResponse::xml(
        200,
        &list_bucket_xml("", &[("readme.txt", 12)], &["photos/"]),
    ));

    let resp: GetBucketResponse = server
        .client()
        .get_bucket("bucket")
        .build()
        .send()
        .await
        .unwrap();

    assert_eq!(resp.bucket(), "bucket");
    let listing = resp.listing();
    assert_eq!(listing.path, "/");
    assert!(!listing.is_truncated);
    assert_eq!(listing.contents.files.len(), 1);
    assert_eq!(listing.contents.files[0].key, "/readme.txt");
    assert_eq!(listing.contents.files[0].size, 12);
    assert_eq!(listing.contents.directories, ["/photos/"]);

    let req = &server.requests()[0];
    assert_eq!(req.path, "/bucket");
    assert_eq!(
        req.query_pairs(),
        [("delimiter".to_string(), "/".to_string())]
    );
    req.assert_signed();
}

#[tokio::test]
async fn get_bucket_directory() {
    let server = MockServer::start().await;
    server.enqueue(CannedResponse::xml(
        200,
        &list_bucket_xml(
            "photos/",
            &[("photos/", 0), ("photos/cat.jpg", 2048)],
            &["photos/2024/"],
        ),
    ));

    let resp = server
        .client()
        .get_bucket("bucket")
        .directory("/photos")
        .build()
        .send()
        .await
        .unwrap();

    let listing = resp.into_listing();
    assert_eq!(listing.path, "/photos/");
    // the directory placeholder itself is not a file
    let keys: Vec<&str> = listing.contents.files.iter().map(|f| f.key.as_str()).collect();
    assert_eq!(keys, ["/photos/cat.jpg"]);
    assert_eq!(listing.contents.directories, ["/photos/2024/"]);

    let req = &server.requests()[0];
    assert!(
        req.query_pairs()
            .contains(&("prefix".to_string(), "photos/".to_string()))
    );
}

#[tokio::test]
async fn get_bucket_empty_listing() {
    let server = MockServer::start().await;
    server.enqueue(CannedResponse::xml(200, &list_bucket_xml("", &[], &[])));

    let resp = server
        .client()
        .get_bucket("bucket")
        .build()
        .send()
        .await
        .unwrap();
    assert!(resp.listing().contents.files.is_empty());
    assert!(resp.listing().contents.directories.is_empty());
}

#[tokio::test]
async fn get_bucket_invalid_name_sends_nothing() {
    let server = MockServer::start().await;

    let result = server.client().get_bucket("  ").build().send().await;
    assert!(result.is_err());
    assert!(server.requests().is_empty());
}
