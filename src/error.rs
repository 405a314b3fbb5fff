// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Error types for the carrent client
//!
//! Every failed call ends up here. Non-2xx answers keep the raw status and
//! body so the frontend can show them to the user verbatim.

use thiserror::Error;

/// Result type alias for carrent operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the carrent client
#[derive(Error, Debug)]
pub enum Error {
    /// Transport failure (connect, TLS, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Backend answered outside 2xx
    #[error("[{status}] {body}")]
    Status {
        status: u16,
        body: String,
        url: String,
    },

    /// JSON encoding or decoding failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error (session file)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a status error from a finished response
    pub fn status(status: u16, body: impl Into<String>, url: impl Into<String>) -> Self {
        Error::Status {
            status,
            body: body.into(),
            url: url.into(),
        }
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }

    /// Check if this is a transport-level failure
    pub fn is_network(&self) -> bool {
        matches!(self, Error::Http(_))
    }

    /// Check if the backend rejected the session token
    pub fn is_unauthorized(&self) -> bool {
        self.status_code() == Some(401)
    }

    /// Get HTTP status code if available
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Status { status, .. } => Some(*status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Get URL if available
    pub fn url(&self) -> Option<&str> {
        match self {
            Error::Status { url, .. } => Some(url),
            Error::Http(e) => e.url().map(|u| u.as_str()),
            _ => None,
        }
    }

    /// Text shown to the user: `[<status>] <body>`
    ///
    /// Failures without an HTTP answer are reported with status 0, the way a
    /// browser reports an aborted request.
    pub fn display_message(&self) -> String {
        match self {
            Error::Status { status, body, .. } => format!("[{}] {}", status, body),
            other => format!("[0] {}", other),
        }
    }
}
