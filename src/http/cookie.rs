// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Cookie jar backing the client session
//!
//! Cookies written by the client carry no domain and match every endpoint,
//! which is how the rental frontend and its gateway share one login.

use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::Result;

/// A single HTTP cookie
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cookie {
    /// Cookie name
    pub name: String,
    /// Cookie value
    pub value: String,
    /// Domain the cookie belongs to (empty = any host)
    #[serde(default)]
    pub domain: String,
    /// Path the cookie is valid for
    #[serde(default = "default_path")]
    pub path: String,
    /// Expiration time (None = session cookie)
    #[serde(default)]
    pub expires: Option<DateTime<Utc>>,
    /// Secure flag (HTTPS only)
    #[serde(default)]
    pub secure: bool,
}

fn default_path() -> String {
    "/".to_string()
}

impl Cookie {
    /// Create a new cookie
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            domain: String::new(),
            path: default_path(),
            expires: None,
            secure: false,
        }
    }

    /// Empty cookie dated Thu, 01 Jan 1970 00:00:00 GMT
    ///
    /// Writing it over an existing cookie of the same name deletes that cookie.
    pub fn expired(name: impl Into<String>) -> Self {
        Self::new(name, "").expires(Utc.timestamp_opt(0, 0).single().unwrap_or_default())
    }

    /// Set expiration time
    pub fn expires(mut self, expires: DateTime<Utc>) -> Self {
        self.expires = Some(expires);
        self
    }

    /// Check if the cookie is expired
    pub fn is_expired(&self) -> bool {
        self.expires.map_or(false, |exp| exp <= Utc::now())
    }

    /// Check if the cookie should be sent to the given URL
    pub fn matches(&self, url: &Url) -> bool {
        let host = url.host_str().unwrap_or("");
        if !self.domain_matches(host) {
            return false;
        }

        if !url.path().starts_with(&self.path) {
            return false;
        }

        if self.secure && url.scheme() != "https" {
            return false;
        }

        !self.is_expired()
    }

    fn domain_matches(&self, host: &str) -> bool {
        if self.domain.is_empty() {
            return true;
        }

        let domain = self.domain.trim_start_matches('.');
        host == domain || host.ends_with(&format!(".{}", domain))
    }

    /// Convert to cookie header format
    pub fn to_header_value(&self) -> String {
        format!("{}={}", self.name, self.value)
    }
}

/// Thread-safe cookie storage
///
/// Clones share the same underlying map. Writes to different cookies are not
/// atomic with respect to each other.
#[derive(Debug, Clone)]
pub struct CookieJar {
    /// Cookies stored by domain
    cookies: Arc<DashMap<String, Vec<Cookie>>>,
}

impl Default for CookieJar {
    fn default() -> Self {
        Self::new()
    }
}

impl CookieJar {
    /// Create a new empty cookie jar
    pub fn new() -> Self {
        Self {
            cookies: Arc::new(DashMap::new()),
        }
    }

    /// Add a cookie, replacing any cookie with the same name and path
    ///
    /// An already expired cookie deletes its namesake and is not stored.
    pub fn add(&self, cookie: Cookie) {
        let mut entry = self.cookies.entry(cookie.domain.clone()).or_default();
        entry.retain(|c| c.name != cookie.name || c.path != cookie.path);
        if !cookie.is_expired() {
            entry.push(cookie);
        }
    }

    /// Find a live cookie by name, regardless of domain
    pub fn find(&self, name: &str) -> Option<Cookie> {
        self.cookies.iter().find_map(|entry| {
            entry
                .value()
                .iter()
                .find(|c| c.name == name && !c.is_expired())
                .cloned()
        })
    }

    /// Get all cookies for a URL
    pub fn get_cookies(&self, url: &Url) -> Vec<Cookie> {
        self.remove_expired();

        let mut result = Vec::new();
        for entry in self.cookies.iter() {
            for cookie in entry.value().iter() {
                if cookie.matches(url) {
                    result.push(cookie.clone());
                }
            }
        }
        result
    }

    /// Get Cookie header value for a URL
    pub fn get_cookie_header(&self, url: &Url) -> Option<String> {
        let cookies = self.get_cookies(url);
        if cookies.is_empty() {
            return None;
        }

        Some(
            cookies
                .iter()
                .map(|c| c.to_header_value())
                .collect::<Vec<_>>()
                .join("; "),
        )
    }

    fn remove_expired(&self) {
        for mut entry in self.cookies.iter_mut() {
            entry.value_mut().retain(|c| !c.is_expired());
        }
    }

    /// Get total cookie count
    pub fn len(&self) -> usize {
        self.cookies.iter().map(|e| e.value().len()).sum()
    }

    /// Check if jar is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Export all live cookies as JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        self.remove_expired();
        let all_cookies: Vec<Cookie> = self
            .cookies
            .iter()
            .flat_map(|e| e.value().clone())
            .collect();
        serde_json::to_string_pretty(&all_cookies)
    }

    /// Import cookies from JSON
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let cookies: Vec<Cookie> = serde_json::from_str(json)?;
        let jar = CookieJar::new();
        for cookie in cookies {
            jar.add(cookie);
        }
        Ok(jar)
    }

    /// Load a jar saved with [`CookieJar::save`]; a missing file yields an empty jar
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::new());
        }
        let json = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&json)?)
    }

    /// Write all live cookies to a file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
