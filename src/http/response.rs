// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP response types

use bytes::Bytes;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::{Error, Result};

/// HTTP response representation
#[derive(Debug, Clone)]
pub struct Response {
    /// Response status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Response body
    pub body: Bytes,
    /// Final URL (after redirects)
    pub url: Url,
    /// Response time in milliseconds
    pub response_time_ms: u64,
}

impl Response {
    /// Create a new response
    pub fn new(
        status: StatusCode,
        headers: HeaderMap,
        body: Bytes,
        url: Url,
        response_time_ms: u64,
    ) -> Self {
        Self {
            status,
            headers,
            body,
            url,
            response_time_ms,
        }
    }

    /// Check if status is success (2xx)
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Get status code as u16
    pub fn status_code(&self) -> u16 {
        self.status.as_u16()
    }

    /// Turn a non-2xx response into [`Error::Status`] carrying the raw body
    pub fn error_for_status(self) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(Error::status(
                self.status_code(),
                self.text_lossy(),
                self.url.as_str(),
            ))
        }
    }

    /// Get body as text, lossy conversion
    pub fn text_lossy(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Parse body as JSON
    ///
    /// A body that does not decode is reported like a failed answer: status
    /// and raw body, not the parser message.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(&self.body).map_err(|e| {
            debug!(url = %self.url, error = %e, "response body is not the expected JSON");
            Error::status(self.status_code(), self.text_lossy(), self.url.as_str())
        })
    }

    /// Parse body as JSON, `None` when the body is blank
    pub fn json_or_empty<T: DeserializeOwned>(&self) -> Result<Option<T>> {
        if self.is_empty() {
            return Ok(None);
        }
        self.json().map(Some)
    }

    /// Check whether the body is empty or whitespace only
    pub fn is_empty(&self) -> bool {
        self.body.iter().all(u8::is_ascii_whitespace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: StatusCode, body: &'static str) -> Response {
        Response::new(
            status,
            HeaderMap::new(),
            Bytes::from(body),
            Url::parse("http://localhost:7779/booking").unwrap(),
            12,
        )
    }

    #[test]
    fn test_response_status() {
        let resp = response(StatusCode::OK, "");
        assert!(resp.is_success());
        assert_eq!(resp.status_code(), 200);
        assert!(resp.error_for_status().is_ok());
    }

    #[test]
    fn test_error_for_status_keeps_body() {
        let err = response(StatusCode::BAD_REQUEST, "{\"error\": \"bad body\"}")
            .error_for_status()
            .unwrap_err();
        assert_eq!(err.display_message(), "[400] {\"error\": \"bad body\"}");
        assert_eq!(err.url(), Some("http://localhost:7779/booking"));
    }

    #[test]
    fn test_json_or_empty() {
        let empty = response(StatusCode::OK, "  \n");
        assert!(empty.json_or_empty::<serde_json::Value>().unwrap().is_none());

        let full = response(StatusCode::OK, "{\"id\": 3}");
        let value: serde_json::Value = full.json_or_empty().unwrap().unwrap();
        assert_eq!(value["id"], 3);
    }

    #[test]
    fn test_undecodable_body_keeps_status_and_body() {
        let err = response(StatusCode::OK, "<html>maintenance</html>")
            .json::<serde_json::Value>()
            .unwrap_err();
        assert_eq!(err.status_code(), Some(200));
        assert_eq!(err.display_message(), "[200] <html>maintenance</html>");
    }
}
