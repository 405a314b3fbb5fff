// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Client session persisted as cookies
//!
//! A session is three cookies: `token`, `user` and `is_admin`. The store is a
//! trait so callers can back it with anything; [`CookieJar`] is the in-memory
//! implementation used by the client and by tests.

use serde::{Deserialize, Serialize};
use tracing::debug;
use url::{form_urlencoded, Url};

use crate::http::{Cookie, CookieJar};

/// Cookie carrying the auth token
pub const TOKEN_COOKIE: &str = "token";
/// Cookie carrying the login name
pub const USER_COOKIE: &str = "user";
/// Cookie carrying the admin flag
pub const IS_ADMIN_COOKIE: &str = "is_admin";

/// All cookies that make up a session
pub const SESSION_COOKIES: [&str; 3] = [TOKEN_COOKIE, USER_COOKIE, IS_ADMIN_COOKIE];

/// Key/value store holding the session cookies
pub trait SessionStore: Send + Sync {
    /// Get a live cookie value
    fn get(&self, name: &str) -> Option<String>;

    /// Write a cookie value; the value is stored as given, encoding is up to the store
    fn set(&self, name: &str, value: &str);

    /// Reset a cookie to an empty value dated in the past
    fn expire(&self, name: &str);

    /// `Cookie` header for a credentialed request to `url`
    fn cookie_header(&self, url: &Url) -> Option<String>;
}

/// Cookie values are percent-encoded so `;`, `,` and spaces cannot end the pair
fn encode_value(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

fn decode_value(raw: &str) -> String {
    form_urlencoded::parse(raw.as_bytes())
        .next()
        .map(|(value, _)| value.into_owned())
        .unwrap_or_default()
}

impl SessionStore for CookieJar {
    fn get(&self, name: &str) -> Option<String> {
        self.find(name).map(|c| decode_value(&c.value))
    }

    fn set(&self, name: &str, value: &str) {
        self.add(Cookie::new(name, encode_value(value)));
    }

    fn expire(&self, name: &str) {
        self.add(Cookie::expired(name));
    }

    fn cookie_header(&self, url: &Url) -> Option<String> {
        self.get_cookie_header(url)
    }
}

/// Authenticated session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Auth token issued by the session service
    pub token: String,
    /// Login name
    pub user: String,
    /// Admin flag
    pub is_admin: bool,
}

impl Session {
    /// Create a new session
    pub fn new(token: impl Into<String>, user: impl Into<String>, is_admin: bool) -> Self {
        Self {
            token: token.into(),
            user: user.into(),
            is_admin,
        }
    }

    /// Read the session back from a store; `None` without a token cookie
    pub fn load(store: &dyn SessionStore) -> Option<Self> {
        let token = store.get(TOKEN_COOKIE).filter(|t| !t.is_empty())?;
        let user = store.get(USER_COOKIE).unwrap_or_default();
        let is_admin = store
            .get(IS_ADMIN_COOKIE)
            .map(|v| matches!(v.trim(), "1" | "true"))
            .unwrap_or(false);

        Some(Self {
            token,
            user,
            is_admin,
        })
    }

    /// Write the three session cookies
    ///
    /// The admin flag is written as `1`/`0`, the form the backend issues it in.
    pub fn store(&self, store: &dyn SessionStore) {
        store.set(TOKEN_COOKIE, &self.token);
        store.set(USER_COOKIE, &self.user);
        store.set(IS_ADMIN_COOKIE, if self.is_admin { "1" } else { "0" });
        debug!(user = %self.user, is_admin = self.is_admin, "session cookies written");
    }

    /// Expire the three session cookies, whatever their current state
    pub fn clear(store: &dyn SessionStore) {
        for name in SESSION_COOKIES {
            store.expire(name);
        }
        debug!("session cookies cleared");
    }
}
