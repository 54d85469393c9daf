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

//! Uploads a local file and prints a one-hour download link for it.
//!
//! Usage: `S3_ACCESS_KEY=.. S3_SECRET_KEY=.. cargo run --example file_uploader -- <bucket> <file>`

use chrono::Duration;
use simples3::s3::S3Client;
use simples3::s3::client::ClientConfig;
use simples3::s3::types::S3Api;
use simples3::s3::utils::utc_now;
use std::path::Path;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    env_logger::init(); // Note: set environment variable RUST_LOG="INFO" to log info and higher
    let client = S3Client::new(ClientConfig::from_env())?;

    let mut args = std::env::args().skip(1);
    let (Some(bucket_name), Some(file)) = (args.next(), args.next()) else {
        eprintln!("usage: file_uploader <bucket> <file>");
        return Ok(());
    };

    let filename = Path::new(&file);
    let Some(object_name) = filename.file_name().and_then(|n| n.to_str()) else {
        log::error!("'{}' is not a file name", filename.display());
        return Ok(());
    };

    let buckets = client.list_buckets().build().send().await?;
    if !buckets.buckets().iter().any(|b| b.name == bucket_name) {
        client.create_bucket(&bucket_name).build().send().await?;
        log::info!("created bucket '{bucket_name}'");
    }

    let data = tokio::fs::read(filename).await?;
    log::info!("uploading '{}' ({} bytes)", filename.display(), data.len());

    let resp = client
        .put_object(&bucket_name, object_name, data)
        .build()
        .send()
        .await?;

    log::info!(
        "file '{}' is successfully uploaded as object '{object_name}' to bucket '{bucket_name}' at {}.",
        filename.display(),
        resp.info().last_modified,
    );

    let link = client
        .get_object_url(&bucket_name, object_name, utc_now() + Duration::hours(1))
        .build()
        .send()
        .await?;
    println!("{}", link.url);
    Ok(())
}
