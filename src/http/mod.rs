// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP layer for the carrent client
//!
//! Provides a lightweight HTTP client that attaches session cookies to
//! credentialed requests and hands back raw responses.

mod client;
mod cookie;
mod request;
mod response;

pub use client::{HttpClient, HttpClientConfig};
pub use cookie::{Cookie, CookieJar};
pub use request::{CredentialsMode, Request};
pub use response::Response;

/// Default user agent string
pub const DEFAULT_USER_AGENT: &str = concat!("carrent/", env!("CARGO_PKG_VERSION"));
