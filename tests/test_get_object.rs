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

use bytes::Bytes;
use common::{CannedResponse, MockServer, error_xml};
use futures_util::TryStreamExt;
use simples3::s3::error::Error;
use simples3::s3::multimap_ext::{Multimap, MultimapExt};

#[tokio::test]
async fn get_object() {
    let server = MockServer::start().await;
    server.enqueue(
        CannedResponse::status(200)
            .header("Content-Type", "text/plain")
            .body("hello world"),
    );

    let resp = server
        .client()
        .get_object("bucket", "hello.txt")
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.content(), &Bytes::from_static(b"hello world"));

    let req = &server.requests()[0];
    assert_eq!(req.method, http::Method::GET);
    assert_eq!(req.path, "/bucket/hello.txt");
    req.assert_signed();
}

#[tokio::test]
async fn get_object_xml_content_is_not_parsed() {
    let server = MockServer::start().await;
    let document = "<Error><Code>NotReally</Code></Error>";
    server.enqueue(CannedResponse::xml(200, document));

    let resp = server
        .client()
        .get_object("bucket", "stored.xml")
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.into_content(), Bytes::from(document));
}

#[tokio::test]
async fn get_object_with_range() {
    let server = MockServer::start().await;
    server.enqueue(CannedResponse::status(206).body("hello"));

    let mut headers = Multimap::new();
    headers.add("Range", "bytes=0-4");
    let resp = server
        .client()
        .get_object("bucket", "hello.txt")
        .extra_headers(headers)
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.content().as_ref(), b"hello");
    assert_eq!(server.requests()[0].header("range"), Some("bytes=0-4"));
}

#[tokio::test]
async fn get_object_stream() {
    let server = MockServer::start().await;
    let payload = vec![7u8; 64 * 1024];
    server.enqueue(CannedResponse::status(200).body(payload.clone()));

    let resp = server
        .client()
        .get_object_stream("bucket", "blob.bin")
        .build()
        .send()
        .await
        .unwrap();
    let chunks: Vec<Bytes> = resp.into_stream().try_collect().await.unwrap();
    assert_eq!(chunks.concat(), payload);
}

#[tokio::test]
async fn get_missing_object() {
    let server = MockServer::start().await;
    server.enqueue(CannedResponse::xml(
        404,
        &error_xml("NoSuchKey", "The specified key does not exist."),
    ));

    let err = server
        .client()
        .get_object("bucket", "missing.txt")
        .build()
        .send()
        .await
        .unwrap_err();
    let fault = err.service_fault().unwrap();
    assert_eq!(fault.status, Some(404));
    assert_eq!(fault.code.as_deref(), Some("NoSuchKey"));
}

#[tokio::test]
async fn get_object_empty_name_sends_nothing() {
    let server = MockServer::start().await;

    let err = server
        .client()
        .get_object("bucket", "")
        .build()
        .send()
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validation(_)), "{err:?}");
    assert!(server.requests().is_empty());
}
