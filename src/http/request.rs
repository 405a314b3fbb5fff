// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Outbound request representation

use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Method;
use serde::Serialize;
use url::Url;

use crate::error::Result;

/// HTTP request representation
#[derive(Debug, Clone)]
pub struct Request {
    /// Request method
    pub method: Method,
    /// Request URL
    pub url: Url,
    /// Request headers
    pub headers: HeaderMap,
    /// Request body
    pub body: Option<Bytes>,
    /// Credentials mode
    pub credentials: CredentialsMode,
}

/// Whether session cookies go out with a request, as in the Fetch API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CredentialsMode {
    /// Send session cookies, even cross-origin
    #[default]
    Include,
    /// Never send session cookies
    Omit,
}

impl Request {
    /// Create a new request for an already parsed URL
    pub fn from_url(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HeaderMap::new(),
            body: None,
            credentials: CredentialsMode::default(),
        }
    }

    /// Set a header
    pub fn header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Self {
        if let (Ok(name), Ok(value)) = (
            HeaderName::try_from(name.as_ref()),
            HeaderValue::try_from(value.as_ref()),
        ) {
            self.headers.insert(name, value);
        }
        self
    }

    /// Set JSON body
    pub fn json<T: Serialize + ?Sized>(mut self, data: &T) -> Result<Self> {
        let json = serde_json::to_vec(data)?;
        self.body = Some(Bytes::from(json));
        self = self.header("content-type", "application/json");
        Ok(self)
    }

    /// Set credentials mode
    pub fn credentials(mut self, mode: CredentialsMode) -> Self {
        self.credentials = mode;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_request_creation() {
        let req = Request::from_url(Method::GET, url("http://localhost:7779/cars"));
        assert_eq!(req.method, Method::GET);
        assert_eq!(req.url.host_str(), Some("localhost"));
        assert!(req.body.is_none());
        assert_eq!(req.credentials, CredentialsMode::Include);
    }

    #[test]
    fn test_json_body() {
        let req = Request::from_url(Method::POST, url("http://localhost:7771/auth"))
            .json(&serde_json::json!({"login": "alice", "password": "pw"}))
            .unwrap();

        assert_eq!(
            req.headers.get("content-type").map(|v| v.to_str().unwrap()),
            Some("application/json")
        );
        let body: serde_json::Value = serde_json::from_slice(req.body.as_ref().unwrap()).unwrap();
        assert_eq!(body["login"], "alice");
    }

    #[test]
    fn test_invalid_header_is_skipped() {
        let req = Request::from_url(Method::GET, url("http://localhost:7779/cars"))
            .header("bad header", "x");
        assert!(req.headers.is_empty());
    }
}
