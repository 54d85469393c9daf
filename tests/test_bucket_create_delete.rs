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

use common::{CannedResponse, MockServer, error_xml, list_bucket_xml};
use simples3::s3::multimap_ext::{Multimap, MultimapExt};

#[tokio::test]
async fn create_bucket() {
    let server = MockServer::start().await;
    server
        .enqueue(CannedResponse::status(200))
        .enqueue(CannedResponse::xml(200, &list_bucket_xml("", &[], &[])));

    let resp = server
        .client()
        .create_bucket("fresh")
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.listing().bucket, "fresh");
    assert!(resp.listing().contents.files.is_empty());

    let requests = server.requests();
    assert_eq!(requests.len(), 2);
    let put = &requests[0];
    assert_eq!(put.method, http::Method::PUT);
    assert_eq!(put.path, "/fresh");
    assert_eq!(put.header("x-amz-acl"), Some("private"));
    assert_eq!(put.header("content-type"), Some("application/octet-stream"));
    put.assert_signed();

    assert_eq!(requests[1].method, http::Method::GET);
    assert_eq!(requests[1].path, "/fresh");
}

#[tokio::test]
async fn create_bucket_with_acl() {
    let server = MockServer::start().await;
    server
        .enqueue(CannedResponse::status(200))
        .enqueue(CannedResponse::xml(200, &list_bucket_xml("", &[], &[])));

    let mut headers = Multimap::new();
    headers.add("x-amz-acl", "public-read");
    server
        .client()
        .create_bucket("fresh")
        .extra_headers(headers)
        .build()
        .send()
        .await
        .unwrap();

    let put = &server.requests()[0];
    let acls: Vec<_> = put.headers.get_all("x-amz-acl").iter().collect();
    assert_eq!(acls, ["public-read"]);
    put.assert_signed();
}

#[tokio::test]
async fn create_existing_bucket_skips_listing() {
    let server = MockServer::start().await;
    server.enqueue(CannedResponse::xml(
        409,
        &error_xml("BucketAlreadyExists", "The requested bucket name is not available."),
    ));

    let err = server
        .client()
        .create_bucket("taken")
        .build()
        .send()
        .await
        .unwrap_err();
    let fault = err.service_fault().unwrap();
    assert_eq!(fault.code.as_deref(), Some("BucketAlreadyExists"));
    assert_eq!(fault.status, Some(409));
    assert_eq!(server.requests().len(), 1);
}

#[tokio::test]
async fn delete_bucket() {
    let server = MockServer::start().await;
    server
        .enqueue(CannedResponse::xml(200, &list_bucket_xml("", &[], &[])))
        .enqueue(CannedResponse::status(204));

    let resp = server
        .client()
        .delete_bucket("stale")
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.listing().path, "/");

    let requests = server.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].method, http::Method::GET);
    assert_eq!(requests[1].method, http::Method::DELETE);
    assert_eq!(requests[1].path, "/stale");
    requests[1].assert_signed();
}

#[tokio::test]
async fn delete_missing_bucket_sends_no_delete() {
    let server = MockServer::start().await;
    server.enqueue(CannedResponse::xml(
        404,
        &error_xml("NoSuchBucket", "The specified bucket does not exist"),
    ));

    let err = server
        .client()
        .delete_bucket("gone")
        .build()
        .send()
        .await
        .unwrap_err();
    assert_eq!(err.service_fault().and_then(|f| f.status), Some(404));
    assert_eq!(server.requests().len(), 1);
}
