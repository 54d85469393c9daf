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

//! Client-wide request defaults and per-call overrides

use crate::s3::multimap_ext::{Multimap, MultimapExt};
use http::Method;

/// Options every request starts from. Owned by the client and never mutated
/// after construction.
#[derive(Clone, Debug)]
pub struct RequestDefaults {
    pub method: Method,
    pub path: String,
    pub headers: Multimap,
}

impl Default for RequestDefaults {
    fn default() -> Self {
        Self {
            method: Method::GET,
            path: "/".to_string(),
            headers: Multimap::new(),
        }
    }
}

/// Options of a single call. Set values win over [`RequestDefaults`].
#[derive(Clone, Debug, Default)]
pub struct RequestOverrides {
    pub method: Option<Method>,
    pub path: Option<String>,
    pub headers: Multimap,
}

/// Outcome of merging overrides into defaults.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedRequest {
    pub method: Method,
    pub path: String,
    pub headers: Multimap,
}

impl RequestDefaults {
    /// Merges `overrides` into a copy of these defaults.
    ///
    /// A header named in `overrides` replaces every default value of that
    /// header, matching names ignoring case.
    pub fn merge(&self, overrides: RequestOverrides) -> ResolvedRequest {
        let mut headers = self.headers.clone();
        for key in overrides.headers.keys() {
            headers.remove_ignore_case(key);
        }
        headers.add_multimap(overrides.headers);

        ResolvedRequest {
            method: overrides.method.unwrap_or_else(|| self.method.clone()),
            path: overrides.path.unwrap_or_else(|| self.path.clone()),
            headers,
        }
    }
}
