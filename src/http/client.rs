// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP client implementation

use std::sync::Arc;
use std::time::{Duration, Instant};

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::Client;
use tracing::debug;

use super::cookie::CookieJar;
use super::request::{CredentialsMode, Request};
use super::response::Response;
use super::DEFAULT_USER_AGENT;
use crate::error::{Error, Result};
use crate::session::SessionStore;

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// User agent string
    pub user_agent: String,
    /// Default timeout (None = no timeout)
    pub timeout: Option<Duration>,
    /// Accept invalid certificates (dangerous!)
    pub accept_invalid_certs: bool,
    /// Default headers
    pub default_headers: HeaderMap,
    /// Proxy URL
    pub proxy: Option<String>,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(
            "accept",
            HeaderValue::from_static("application/json, text/plain, */*"),
        );

        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
            accept_invalid_certs: false,
            default_headers,
            proxy: None,
        }
    }
}

impl HttpClientConfig {
    /// Create a new client config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set user agent
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set proxy
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }
}

/// HTTP client attaching session cookies from a [`SessionStore`]
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
    store: Arc<dyn SessionStore>,
}

impl HttpClient {
    /// Create a new HTTP client with default configuration and an empty jar
    pub fn new() -> Result<Self> {
        Self::with_config(HttpClientConfig::default())
    }

    /// Create a new HTTP client with custom configuration and an empty jar
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        Self::with_store(config, Arc::new(CookieJar::new()))
    }

    /// Create a new HTTP client reading cookies from the given store
    pub fn with_store(config: HttpClientConfig, store: Arc<dyn SessionStore>) -> Result<Self> {
        let mut builder = Client::builder()
            .user_agent(&config.user_agent)
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .default_headers(config.default_headers.clone());

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        if let Some(ref proxy_url) = config.proxy {
            builder = builder.proxy(
                reqwest::Proxy::all(proxy_url)
                    .map_err(|e| Error::Config(format!("Invalid proxy URL: {}", e)))?,
            );
        }

        let client = builder.build()?;

        Ok(Self {
            client,
            config,
            store,
        })
    }

    /// Get the session store
    pub fn store(&self) -> &Arc<dyn SessionStore> {
        &self.store
    }

    /// Get client configuration
    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    /// Execute a request
    ///
    /// Any status is returned as a [`Response`]; only transport failures are errors.
    pub async fn execute(&self, request: Request) -> Result<Response> {
        let start = Instant::now();

        let mut builder = self
            .client
            .request(request.method.clone(), request.url.clone());

        for (name, value) in request.headers.iter() {
            builder = builder.header(name, value);
        }

        // Cookies come from the session store only; reqwest keeps none of its own
        if request.credentials == CredentialsMode::Include {
            if let Some(cookie_header) = self.store.cookie_header(&request.url) {
                builder = builder.header("cookie", cookie_header);
            }
        }

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let response_time = start.elapsed().as_millis() as u64;

        let final_url = response.url().clone();
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?;

        debug!(
            method = %request.method,
            url = %request.url,
            status = status.as_u16(),
            elapsed_ms = response_time,
            "request finished"
        );

        Ok(Response::new(status, headers, body, final_url, response_time))
    }
}
