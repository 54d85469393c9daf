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

use common::{CannedResponse, MockServer};
use simples3::s3::error::Error;

#[tokio::test]
async fn delete_object() {
    let server = MockServer::start().await;
    server
        .enqueue(CannedResponse::object_head(5, "text/plain"))
        .enqueue(CannedResponse::status(204));

    let resp = server
        .client()
        .delete_object("bucket", "old.txt")
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.info().key, "old.txt");
    assert_eq!(resp.info().size, 5);

    let requests = server.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].method, http::Method::HEAD);
    assert_eq!(requests[1].method, http::Method::DELETE);
    assert_eq!(requests[1].path, "/bucket/old.txt");
    requests[1].assert_signed();
}

#[tokio::test]
async fn delete_missing_object_sends_no_delete() {
    let server = MockServer::start().await;
    server.enqueue(CannedResponse::status(404));

    let err = server
        .client()
        .delete_object("bucket", "missing.txt")
        .build()
        .send()
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotFound { status: 404, .. }), "{err:?}");

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, http::Method::HEAD);
}
