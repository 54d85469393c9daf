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

//! HTTP URL definitions

use crate::s3::error::{ConfigErr, Error};
use crate::s3::multimap_ext::{Multimap, MultimapExt};
use crate::s3::utils::{urldecode_object_key, urlencode_object_key};
use http::Uri;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Public endpoint used when no host is configured
pub const DEFAULT_HOST: &str = "https://s3.amazonaws.com";

#[derive(Clone, Debug)]
/// Represents HTTP URL
pub struct Url {
    pub https: bool,
    pub host: String,
    pub port: u16,
    pub path: String,
    pub query: Multimap,
}

impl Url {
    pub fn host_header_value(&self) -> String {
        if self.port > 0 {
            return format!("{}:{}", self.host, self.port);
        }
        self.host.clone()
    }
}

impl Default for Url {
    fn default() -> Self {
        Self {
            https: true,
            host: String::default(),
            port: u16::default(),
            path: String::default(),
            query: Multimap::default(),
        }
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.host.is_empty() {
            return Err(std::fmt::Error);
        }

        if self.https {
            f.write_str("https://")?;
        } else {
            f.write_str("http://")?;
        }
        f.write_str(&self.host_header_value())?;

        if !self.path.starts_with('/') {
            f.write_str("/")?;
        }
        f.write_str(&self.path)?;

        if !self.query.is_empty() {
            f.write_str("?")?;
            f.write_str(&self.query.to_query_string())?;
        }

        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Base URL of the storage service, all requests are path-style below it
pub struct BaseUrl {
    pub https: bool,
    pub host: String,
    /// zero when the scheme's default port is used
    pub port: u16,
    /// path prefix without trailing slash, usually empty
    pub base_path: String,
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self {
            https: true,
            host: "s3.amazonaws.com".to_string(),
            port: 0,
            base_path: String::new(),
        }
    }
}

impl FromStr for BaseUrl {
    type Err = ConfigErr;

    /// Convert a string to a BaseUrl.
    ///
    /// # Examples
    ///
    /// ```
    /// use simples3::s3::http::BaseUrl;
    ///
    /// let base_url: BaseUrl = "https://s3.amazonaws.com".parse().unwrap();
    /// assert_eq!(base_url.port, 0);
    /// // scheme defaults to https
    /// let base_url: BaseUrl = "localhost:9000".parse().unwrap();
    /// assert!(base_url.https);
    /// ```
    fn from_str(s: &str) -> Result<Self, ConfigErr> {
        let invalid = |reason: &str| ConfigErr::InvalidHost {
            host: s.to_string(),
            reason: reason.to_string(),
        };

        let url = s.parse::<Uri>().map_err(|e| invalid(&e.to_string()))?;

        let https = match url.scheme_str() {
            None | Some("https") => true,
            Some("http") => false,
            Some(_) => return Err(invalid("scheme must be http or https")),
        };

        let host = match url.host() {
            Some(h) if !h.is_empty() => h.to_string(),
            _ => return Err(invalid("valid host must be provided")),
        };

        let mut port = url.port_u16().unwrap_or(0);
        if (https && port == 443) || (!https && port == 80) {
            port = 0;
        }

        if url.query().is_some() {
            return Err(invalid("query must be none for base URL"));
        }

        Ok(BaseUrl {
            https,
            host,
            port,
            base_path: url.path().trim_end_matches('/').to_string(),
        })
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let scheme = if self.https { "https" } else { "http" };
        write!(f, "{scheme}://{}{}", self.host_header_value(), self.base_path)
    }
}

impl BaseUrl {
    pub fn host_header_value(&self) -> String {
        if self.port > 0 {
            return format!("{}:{}", self.host, self.port);
        }
        self.host.clone()
    }

    /// Returns the request path for a bucket and object:
    /// `/`, `/bucket` or `/bucket/encoded-object`.
    pub fn build_path(&self, bucket_name: Option<&str>, object_name: Option<&str>) -> String {
        let mut path = self.base_path.clone();
        path.push('/');

        let Some(bucket) = bucket_name else {
            return path;
        };
        path.push_str(bucket);

        if let Some(v) = object_name {
            path.push('/');
            path.push_str(&urlencode_object_key(v));
        }
        path
    }

    /// Builds URL from base URL for given parameters
    pub fn build_url(
        &self,
        query: &Multimap,
        bucket_name: Option<&str>,
        object_name: Option<&str>,
    ) -> Url {
        Url {
            https: self.https,
            host: self.host.clone(),
            port: self.port,
            path: self.build_path(bucket_name, object_name),
            query: query.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// Bucket and object addressed by a URL of the storage service
pub struct BucketUrl {
    pub bucket: String,
    pub object: String,
}

impl BucketUrl {
    /// Splits a URL on `base` into bucket and object.
    ///
    /// Virtual-hosted URLs (`https://bucket.host/key`) take the bucket from the
    /// sub-domain, path-style URLs (`https://host/bucket/key`) from the first
    /// path segment. The object is percent-decoded.
    pub fn parse(base: &BaseUrl, url: &str) -> Result<BucketUrl, Error> {
        let invalid = || Error::InvalidUrl(url.to_string());

        let pattern = format!(
            r"^https?://(?:([A-Za-z0-9][A-Za-z0-9.\-_]*)\.)?{}{}/(.*)$",
            regex::escape(&base.host_header_value()),
            regex::escape(&base.base_path),
        );
        let re = Regex::new(&pattern).map_err(|_| invalid())?;
        let caps = re.captures(url).ok_or_else(invalid)?;
        let rest = caps.get(2).map_or("", |m| m.as_str());

        let (bucket, object) = match caps.get(1) {
            Some(b) => (b.as_str(), rest),
            None => rest.split_once('/').unwrap_or((rest, "")),
        };
        if bucket.is_empty() {
            return Err(invalid());
        }

        Ok(BucketUrl {
            bucket: bucket.to_string(),
            object: urldecode_object_key(object).ok_or_else(invalid)?,
        })
    }
}
