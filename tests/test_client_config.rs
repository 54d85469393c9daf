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
use simples3::s3::client::{ClientConfig, S3Client, S3ClientBuilder};
use simples3::s3::error::{ConfigErr, Error};
use simples3::s3::multimap_ext::{Multimap, MultimapExt};
use simples3::s3::types::S3Api;

#[tokio::test]
async fn default_headers_are_sent_and_overridable() {
    let server = MockServer::start().await;
    server
        .enqueue(CannedResponse::xml(200, &list_bucket_xml("", &[], &[])))
        .enqueue(CannedResponse::status(200).body("x"));

    let mut defaults = Multimap::new();
    defaults.add("x-amz-meta-team", "storage");
    defaults.add("Range", "bytes=0-0");
    let client = server.client_builder().default_headers(defaults).build().unwrap();

    client.get_bucket("bucket").build().send().await.unwrap();

    let mut headers = Multimap::new();
    headers.add("range", "bytes=5-9");
    client
        .get_object("bucket", "a.txt")
        .extra_headers(headers)
        .build()
        .send()
        .await
        .unwrap();

    let requests = server.requests();
    assert_eq!(requests[0].header("x-amz-meta-team"), Some("storage"));
    assert_eq!(requests[0].header("range"), Some("bytes=0-0"));
    requests[0].assert_signed();

    let ranges: Vec<_> = requests[1].headers.get_all("range").iter().collect();
    assert_eq!(ranges, ["bytes=5-9"]);
    requests[1].assert_signed();
}

#[tokio::test]
async fn user_agent_carries_app_info() {
    let server = MockServer::start().await;
    server.enqueue(CannedResponse::xml(200, &list_bucket_xml("", &[], &[])));

    let client = server
        .client_builder()
        .app_info(Some(("uploader".into(), "1.2".into())))
        .build()
        .unwrap();
    client.get_bucket("bucket").build().send().await.unwrap();

    let agent = server.requests()[0].header("user-agent").unwrap().to_string();
    assert!(agent.starts_with("simples3 ("), "{agent}");
    assert!(agent.ends_with(" uploader/1.2"), "{agent}");
}

#[test]
fn missing_credentials_are_rejected() {
    let base_url = "http://localhost:9000".parse().unwrap();
    let err = S3ClientBuilder::new(base_url).build().unwrap_err();
    assert!(matches!(err, Error::Config(ConfigErr::MissingAccessKey)));

    let err = S3Client::new(ClientConfig {
        host: "http://localhost:9000".into(),
        key: "ak".into(),
        secret: String::new(),
    })
    .unwrap_err();
    assert!(matches!(err, Error::Config(ConfigErr::MissingSecretKey)));
}

#[test]
fn invalid_host_is_rejected() {
    let err = S3Client::new(ClientConfig {
        host: "ftp://example.com".into(),
        key: "ak".into(),
        secret: "sk".into(),
    })
    .unwrap_err();
    assert!(matches!(err, Error::Config(ConfigErr::InvalidHost { .. })));
}

#[test]
fn parse_url() {
    let client = S3Client::new(ClientConfig::new("ak", "sk")).unwrap();

    let virtual_hosted = client
        .parse_url("https://photos.s3.amazonaws.com/2024/cat%20one.jpg")
        .unwrap();
    assert_eq!(virtual_hosted.bucket, "photos");
    assert_eq!(virtual_hosted.object, "2024/cat one.jpg");

    let path_style = client
        .parse_url("https://s3.amazonaws.com/photos/2024/cat.jpg")
        .unwrap();
    assert_eq!(path_style.bucket, "photos");
    assert_eq!(path_style.object, "2024/cat.jpg");

    assert!(matches!(
        client.parse_url("https://example.com/photos/cat.jpg"),
        Err(Error::InvalidUrl(_))
    ));
}
