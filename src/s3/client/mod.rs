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

//! S3 client to perform bucket and object operations.
//!
//! Every request is signed with AWS Signature Version 2. XML responses are
//! normalized while they stream in (see [`crate::s3::xml`]); an `<Error>`
//! document is reported as [`Error::ServiceFault`] whatever the HTTP status.

use crate::s3::creds::{Provider, StaticProvider};
use crate::s3::error::{ConfigErr, Error, ServiceFault};
use crate::s3::header_constants::*;
use crate::s3::http::{BaseUrl, DEFAULT_HOST};
use crate::s3::multimap_ext::{Multimap, MultimapExt};
use crate::s3::signer::sign_v2;
use crate::s3::types::{DispatchBody, DispatchedResponse, RequestBody};
use crate::s3::utils::{to_http_header_value, utc_now};
use crate::s3::xml::{NormalizedResponse, normalize_stream};
use http::{HeaderMap, Method};
use serde::Deserialize;
use std::mem;
use std::sync::Arc;

mod create_bucket;
mod delete_bucket;
mod delete_object;
mod get_bucket;
mod get_object;
mod get_object_url;
mod list_buckets;
mod parse_url;
mod put_object;
pub mod request_options;
mod stat_object;

pub use request_options::{RequestDefaults, RequestOverrides, ResolvedRequest};

/// Construction settings of a client.
///
/// # Examples
///
/// ```
/// use simples3::s3::client::ClientConfig;
///
/// let config: ClientConfig = serde_json::from_str(r#"{"key": "ak", "secret": "sk"}"#).unwrap();
/// assert_eq!(config.host, "https://s3.amazonaws.com");
/// ```
#[derive(Clone, Debug, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub secret: String,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

impl ClientConfig {
    /// Config for the public endpoint with the given credentials.
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            host: default_host(),
            key: key.into(),
            secret: secret.into(),
        }
    }

    /// Reads `S3_HOST`, `S3_ACCESS_KEY` and `S3_SECRET_KEY`. Unset credentials
    /// are left empty and rejected when the client is built.
    pub fn from_env() -> Self {
        let var = |name: &str| std::env::var(name).unwrap_or_default();
        Self {
            host: std::env::var("S3_HOST").unwrap_or_else(|_| default_host()),
            key: var("S3_ACCESS_KEY"),
            secret: var("S3_SECRET_KEY"),
        }
    }
}

/// Client Builder manufactures a Client using given parameters.
#[derive(Debug)]
pub struct S3ClientBuilder {
    base_url: BaseUrl,
    provider: Option<Arc<dyn Provider + Send + Sync + 'static>>,
    app_info: Option<(String, String)>,
    default_headers: Multimap,
}

impl S3ClientBuilder {
    /// Creates a builder given a base URL of the storage service.
    pub fn new(base_url: BaseUrl) -> Self {
        Self {
            base_url,
            provider: None,
            app_info: None,
            default_headers: Multimap::new(),
        }
    }

    /// Set the credential provider. Credentials are mandatory.
    pub fn provider<P: Provider + Send + Sync + 'static>(mut self, provider: P) -> Self {
        self.provider = Some(Arc::new(provider));
        self
    }

    /// Shorthand for a [`StaticProvider`] with the given key pair.
    pub fn credentials(self, access_key: &str, secret_key: &str) -> Self {
        self.provider(StaticProvider::new(access_key, secret_key))
    }

    /// Set the app info as an Option of (app_name, app_version) pair. This will
    /// show up in the client's user-agent.
    pub fn app_info(mut self, app_info: Option<(String, String)>) -> Self {
        self.app_info = app_info;
        self
    }

    /// Headers sent with every request unless a call sets the same header.
    pub fn default_headers(mut self, headers: Multimap) -> Self {
        self.default_headers = headers;
        self
    }

    /// Build the Client.
    pub fn build(self) -> Result<S3Client, Error> {
        let provider = self.provider.ok_or(ConfigErr::MissingAccessKey)?;
        provider.fetch().validate()?;

        let mut user_agent = String::from("simples3 (")
            + std::env::consts::OS
            + "; "
            + std::env::consts::ARCH
            + ") simples3-rs/"
            + env!("CARGO_PKG_VERSION");

        if let Some((app_name, app_version)) = self.app_info {
            user_agent.push_str(format!(" {app_name}/{app_version}").as_str());
        }

        let http_client = reqwest::Client::builder()
            .no_gzip()
            .user_agent(user_agent)
            .build()
            .map_err(ConfigErr::HttpClient)?;

        let defaults = RequestDefaults {
            path: self.base_url.build_path(None, None),
            headers: self.default_headers,
            ..Default::default()
        };

        Ok(S3Client {
            http_client,
            shared: Arc::new(SharedClientItems {
                base_url: self.base_url,
                provider,
                defaults,
            }),
        })
    }
}

/// Simple Storage Service (aka S3) client to perform bucket and object operations.
///
/// Cloning is cheap; clones share the connection pool and the immutable
/// configuration.
#[derive(Clone, Debug)]
pub struct S3Client {
    http_client: reqwest::Client,
    pub(crate) shared: Arc<SharedClientItems>,
}

#[derive(Debug)]
pub(crate) struct SharedClientItems {
    pub(crate) base_url: BaseUrl,
    pub(crate) provider: Arc<dyn Provider + Send + Sync + 'static>,
    defaults: RequestDefaults,
}

impl S3Client {
    /// Returns a client built from `config`.
    ///
    /// # Examples
    ///
    /// ```
    /// use simples3::s3::client::{ClientConfig, S3Client};
    ///
    /// let client = S3Client::new(ClientConfig::new("ak", "sk")).unwrap();
    /// assert_eq!(client.base_url().host, "s3.amazonaws.com");
    ///
    /// assert!(S3Client::new(ClientConfig::new("", "sk")).is_err());
    /// ```
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let base_url: BaseUrl = config.host.parse()?;
        S3ClientBuilder::new(base_url)
            .credentials(&config.key, &config.secret)
            .build()
    }

    pub fn base_url(&self) -> &BaseUrl {
        &self.shared.base_url
    }

    /// Returns whether this client is configured to use HTTPS.
    pub fn is_secure(&self) -> bool {
        self.shared.base_url.https
    }

    /// Merges, signs and sends one request. The signed headers are written
    /// back to `headers`.
    async fn send_request(
        &self,
        method: &Method,
        headers: &mut Multimap,
        query_params: &Multimap,
        bucket_name: Option<&str>,
        object_name: Option<&str>,
        body: Option<RequestBody>,
    ) -> Result<reqwest::Response, Error> {
        let resolved = self.shared.defaults.merge(RequestOverrides {
            method: Some(method.clone()),
            path: bucket_name.map(|b| self.shared.base_url.build_path(Some(b), object_name)),
            headers: mem::take(headers),
        });
        *headers = resolved.headers;

        if resolved.method == Method::PUT && !headers.contains_key_ignore_case(CONTENT_TYPE) {
            headers.add(CONTENT_TYPE, APPLICATION_OCTET_STREAM);
        }

        let creds = self.shared.provider.fetch();
        let date = to_http_header_value(utc_now());
        sign_v2(
            &resolved.method,
            &resolved.path,
            headers,
            query_params,
            &creds.access_key,
            &creds.secret_key,
            &date,
        );

        let mut url = self.shared.base_url.build_url(query_params, None, None);
        url.path = resolved.path;

        let mut req = self
            .http_client
            .request(resolved.method.clone(), url.to_string());
        for (key, values) in headers.iter_all() {
            for value in values {
                req = req.header(key, value);
            }
        }
        if let Some(b) = body {
            req = req.body(reqwest::Body::from(b));
        }

        let resp = req.send().await?;
        log::debug!(
            "{} {} -> {}",
            resolved.method,
            url.path,
            resp.status().as_u16()
        );
        Ok(resp)
    }

    /// Sends a request and delivers its body.
    ///
    /// HEAD completes as soon as headers arrive, whatever the status. An XML
    /// body is normalized while streaming; an `<Error>` document in it is a
    /// fault even under a success status. Any other body is buffered.
    pub(crate) async fn dispatch(
        &self,
        method: &Method,
        headers: &mut Multimap,
        query_params: &Multimap,
        bucket_name: Option<&str>,
        object_name: Option<&str>,
        body: Option<RequestBody>,
    ) -> Result<DispatchedResponse, Error> {
        let resp = self
            .send_request(method, headers, query_params, bucket_name, object_name, body)
            .await?;
        let status = resp.status();
        let resp_headers = resp.headers().clone();

        if *method == Method::HEAD {
            return Ok(DispatchedResponse {
                status,
                headers: resp_headers,
                body: DispatchBody::Empty,
            });
        }

        if is_xml(&resp_headers) && resp.content_length() != Some(0) {
            let value = match normalize_stream(Box::pin(resp.bytes_stream())).await {
                Ok(NormalizedResponse {
                    fault: Some(fault), ..
                }) => return Err(fault.with_status(status).into()),
                Ok(normalized) => normalized.value,
                Err(Error::Validation(_)) if !status.is_success() => {
                    return Err(ServiceFault::from_status(status).into());
                }
                Err(e) => return Err(e),
            };
            if !status.is_success() {
                return Err(ServiceFault::from_status(status).into());
            }
            return Ok(DispatchedResponse {
                status,
                headers: resp_headers,
                body: DispatchBody::Xml(value),
            });
        }

        let bytes = resp.bytes().await?;
        if !status.is_success() {
            return Err(ServiceFault::from_status(status).into());
        }
        Ok(DispatchedResponse {
            status,
            headers: resp_headers,
            body: if bytes.is_empty() {
                DispatchBody::Empty
            } else {
                DispatchBody::Raw(bytes)
            },
        })
    }

    /// Sends a request and returns the response with its body unread when the
    /// status is a success. A failed response is read for an `<Error>`
    /// document.
    pub(crate) async fn dispatch_stream(
        &self,
        method: &Method,
        headers: &mut Multimap,
        query_params: &Multimap,
        bucket_name: Option<&str>,
        object_name: Option<&str>,
        body: Option<RequestBody>,
    ) -> Result<reqwest::Response, Error> {
        let resp = self
            .send_request(method, headers, query_params, bucket_name, object_name, body)
            .await?;
        if resp.status().is_success() {
            return Ok(resp);
        }
        Err(read_fault(resp).await)
    }
}

fn is_xml(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| {
            v.split(';')
                .next()
                .unwrap_or_default()
                .trim()
                .to_ascii_lowercase()
        })
        .is_some_and(|essence| essence == APPLICATION_XML || essence == TEXT_XML)
}

async fn read_fault(resp: reqwest::Response) -> Error {
    let status = resp.status();
    if is_xml(resp.headers()) {
        match normalize_stream(Box::pin(resp.bytes_stream())).await {
            Ok(NormalizedResponse {
                fault: Some(fault), ..
            }) => return fault.with_status(status).into(),
            Err(e @ Error::Transport(_)) => return e,
            _ => {}
        }
    }
    ServiceFault::from_status(status).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_xml_checks_essence() {
        let mut headers = HeaderMap::new();
        assert!(!is_xml(&headers));
        headers.insert(
            "content-type",
            "application/xml; charset=utf-8".parse().unwrap(),
        );
        assert!(is_xml(&headers));
        headers.insert("content-type", "Text/XML".parse().unwrap());
        assert!(is_xml(&headers));
        headers.insert("content-type", "application/json".parse().unwrap());
        assert!(!is_xml(&headers));
    }

    #[test]
    fn test_build_requires_credentials() {
        let base_url = BaseUrl::default();
        assert!(matches!(
            S3ClientBuilder::new(base_url.clone()).build(),
            Err(Error::Config(ConfigErr::MissingAccessKey))
        ));
        assert!(matches!(
            S3ClientBuilder::new(base_url).credentials("ak", "").build(),
            Err(Error::Config(ConfigErr::MissingSecretKey))
        ));
    }

    #[test]
    fn test_new_rejects_invalid_host() {
        let config = ClientConfig {
            host: "ftp://example.com".into(),
            key: "ak".into(),
            secret: "sk".into(),
        };
        assert!(matches!(
            S3Client::new(config),
            Err(Error::Config(ConfigErr::InvalidHost { .. }))
        ));
    }

    #[test]
    fn test_defaults_use_base_path() {
        let client = S3ClientBuilder::new("http://localhost:9000/storage".parse().unwrap())
            .credentials("ak", "sk")
            .build()
            .unwrap();
        assert_eq!(client.shared.defaults.path, "/storage/");
        assert!(!client.is_secure());
    }
}
