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

//! Error definitions for S3 operations

use http::StatusCode;
use thiserror::Error;

/// Errors raised while constructing a client. These are not recoverable by retrying.
#[derive(Debug, Error)]
pub enum ConfigErr {
    #[error("must supply an access key")]
    MissingAccessKey,

    #[error("must supply a secret key")]
    MissingSecretKey,

    #[error("invalid host '{host}': {reason}")]
    InvalidHost { host: String, reason: String },

    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

/// Local failures: bad input, malformed responses, undecodable headers.
#[derive(Debug, Error)]
pub enum ValidationErr {
    #[error("XML parse error: {0}")]
    XmlParse(#[from] xmltree::ParseError),

    #[error("unexpected response structure: {0}")]
    XmlStructure(String),

    #[error("header value is not valid text: {0}")]
    StrError(#[from] reqwest::header::ToStrError),

    #[error("invalid integer: {0}")]
    IntError(#[from] std::num::ParseIntError),

    #[error("invalid date: {0}")]
    TimeParseError(#[from] chrono::ParseError),

    #[error("response is missing the '{0}' header")]
    MissingHeader(&'static str),

    #[error("object size must be specified when uploading from a stream")]
    MissingObjectSize,

    #[error("invalid bucket name: {0}")]
    InvalidBucketName(String),

    #[error("invalid object name: {0}")]
    InvalidObjectName(String),
}

/// Fault reported by the storage service, either as an XML `<Error>` document or
/// as a failed HTTP status without an XML body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Error)]
#[error("{message}{}", self.details())]
pub struct ServiceFault {
    /// HTTP status of the response carrying the fault, if one was received.
    pub status: Option<u16>,
    pub code: Option<String>,
    pub message: String,
    pub resource: Option<String>,
    pub request_id: Option<String>,
    pub host_id: Option<String>,
}

impl ServiceFault {
    /// Fault synthesized from an HTTP status alone; the message is the status text.
    pub fn from_status(status: StatusCode) -> Self {
        Self {
            status: Some(status.as_u16()),
            message: status
                .canonical_reason()
                .unwrap_or("Unknown Status")
                .to_string(),
            ..Default::default()
        }
    }

    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = Some(status.as_u16());
        self
    }

    fn details(&self) -> String {
        match (&self.code, self.status) {
            (Some(code), Some(status)) => format!(" (code: {code}, status: {status})"),
            (Some(code), None) => format!(" (code: {code})"),
            (None, Some(status)) => format!(" (status: {status})"),
            (None, None) => String::new(),
        }
    }
}

/// Error definitions
#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigErr),

    #[error("expiration must be in the future; expiration: {expiration}, now: {now}")]
    InvalidExpiration { expiration: i64, now: i64 },

    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("service fault: {0}")]
    ServiceFault(#[from] ServiceFault),

    #[error("object '{object}' not found in bucket '{bucket}' (status: {status})")]
    NotFound {
        bucket: String,
        object: String,
        status: u16,
    },

    #[error("validation error: {0}")]
    Validation(#[from] ValidationErr),
}

impl Error {
    /// Returns the service fault carried by this error, if any.
    pub fn service_fault(&self) -> Option<&ServiceFault> {
        match self {
            Error::ServiceFault(f) => Some(f),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fault_from_status_uses_status_text() {
        let fault = ServiceFault::from_status(StatusCode::FORBIDDEN);
        assert_eq!(fault.status, Some(403));
        assert_eq!(fault.message, "Forbidden");
        assert_eq!(fault.to_string(), "Forbidden (status: 403)");
    }

    #[test]
    fn test_fault_display_variants() {
        let mut fault = ServiceFault {
            message: "Access Denied".into(),
            ..Default::default()
        };
        assert_eq!(fault.to_string(), "Access Denied");

        fault.code = Some("AccessDenied".into());
        assert_eq!(fault.to_string(), "Access Denied (code: AccessDenied)");

        fault.status = Some(200);
        assert_eq!(
            fault.to_string(),
            "Access Denied (code: AccessDenied, status: 200)"
        );

        let err: &dyn std::error::Error = &fault;
        assert!(err.source().is_none());
    }

    #[test]
    fn test_service_fault_accessor() {
        let err = Error::from(ServiceFault {
            message: "Access Denied".into(),
            code: Some("AccessDenied".into()),
            ..Default::default()
        });
        assert_eq!(err.service_fault().unwrap().message, "Access Denied");
        assert!(Error::InvalidUrl("x".into()).service_fault().is_none());
    }
}
