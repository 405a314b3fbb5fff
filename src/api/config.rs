// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Backend endpoint configuration

use url::Url;

use crate::error::{Error, Result};

/// Environment variable overriding the sign-in endpoint
pub const SIGN_IN_ENV: &str = "CARRENT_SIGN_IN_ENDPOINT";
/// Environment variable overriding the register endpoint
pub const REGISTER_ENV: &str = "CARRENT_REGISTER_ENDPOINT";
/// Environment variable overriding the cars endpoint
pub const CARS_ENV: &str = "CARRENT_CARS_ENDPOINT";
/// Environment variable overriding the booking endpoint
pub const BOOKING_ENV: &str = "CARRENT_BOOKING_ENDPOINT";
/// Environment variable overriding the offices endpoint
pub const OFFICES_ENV: &str = "CARRENT_OFFICES_ENDPOINT";

const DEFAULT_SESSION_HOST: &str = "http://localhost:7771";
const DEFAULT_GATEWAY_HOST: &str = "http://localhost:7779";

/// Backend resource collection an operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Session service token issue
    SignIn,
    /// Session service user registration
    Register,
    /// Car catalogue
    Cars,
    /// Bookings
    Booking,
    /// Offices and car placement
    Offices,
}

/// Base URLs of the backend endpoints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub sign_in: Url,
    pub register: Url,
    pub cars: Url,
    pub booking: Url,
    pub offices: Url,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::with_hosts(DEFAULT_SESSION_HOST, DEFAULT_GATEWAY_HOST)
            .expect("default endpoint hosts are valid URLs")
    }
}

impl Endpoints {
    /// Endpoints laid out as the session service and gateway expose them
    pub fn with_hosts(session: &str, gateway: &str) -> Result<Self> {
        let session = session.trim_end_matches('/');
        let gateway = gateway.trim_end_matches('/');
        Ok(Self {
            sign_in: Url::parse(&format!("{}/auth", session))?,
            register: Url::parse(&format!("{}/register", session))?,
            cars: Url::parse(&format!("{}/cars", gateway))?,
            booking: Url::parse(&format!("{}/booking", gateway))?,
            offices: Url::parse(&format!("{}/offices", gateway))?,
        })
    }

    /// Defaults overridden by `CARRENT_*_ENDPOINT` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut endpoints = Self::default();
        for (key, endpoint) in [
            (SIGN_IN_ENV, Endpoint::SignIn),
            (REGISTER_ENV, Endpoint::Register),
            (CARS_ENV, Endpoint::Cars),
            (BOOKING_ENV, Endpoint::Booking),
            (OFFICES_ENV, Endpoint::Offices),
        ] {
            if let Some(value) = lookup(key).filter(|v| !v.trim().is_empty()) {
                let url = Url::parse(value.trim())
                    .map_err(|e| Error::config(format!("{}: {}", key, e)))?;
                endpoints = endpoints.set(endpoint, url);
            }
        }
        Ok(endpoints)
    }

    /// Replace one endpoint
    pub fn set(mut self, endpoint: Endpoint, url: Url) -> Self {
        match endpoint {
            Endpoint::SignIn => self.sign_in = url,
            Endpoint::Register => self.register = url,
            Endpoint::Cars => self.cars = url,
            Endpoint::Booking => self.booking = url,
            Endpoint::Offices => self.offices = url,
        }
        self
    }

    /// Base URL of an endpoint
    pub fn base(&self, endpoint: Endpoint) -> &Url {
        match endpoint {
            Endpoint::SignIn => &self.sign_in,
            Endpoint::Register => &self.register,
            Endpoint::Cars => &self.cars,
            Endpoint::Booking => &self.booking,
            Endpoint::Offices => &self.offices,
        }
    }

    /// Base URL with path segments appended
    ///
    /// Segments are opaque: each is percent-encoded as a single path segment.
    pub fn resolve(&self, endpoint: Endpoint, segments: &[String]) -> Result<Url> {
        let mut url = self.base(endpoint).clone();
        if segments.is_empty() {
            return Ok(url);
        }
        url.path_segments_mut()
            .map_err(|_| Error::config(format!("{} cannot take a path", self.base(endpoint))))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let endpoints = Endpoints::default();
        assert_eq!(endpoints.sign_in.as_str(), "http://localhost:7771/auth");
        assert_eq!(endpoints.register.as_str(), "http://localhost:7771/register");
        assert_eq!(endpoints.cars.as_str(), "http://localhost:7779/cars");
        assert_eq!(endpoints.booking.as_str(), "http://localhost:7779/booking");
        assert_eq!(endpoints.offices.as_str(), "http://localhost:7779/offices");
    }

    #[test]
    fn test_resolve_segments() {
        let endpoints = Endpoints::default();
        let url = endpoints
            .resolve(Endpoint::Booking, &["abc-123".to_string(), "finish".to_string()])
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:7779/booking/abc-123/finish");
    }

    #[test]
    fn test_resolve_trailing_slash_and_encoding() {
        let endpoints = Endpoints::default()
            .set(Endpoint::Offices, Url::parse("http://gw/offices/").unwrap());
        let url = endpoints
            .resolve(Endpoint::Offices, &["a b/c".to_string()])
            .unwrap();
        assert_eq!(url.as_str(), "http://gw/offices/a%20b%2Fc");
    }

    #[test]
    fn test_from_lookup_overrides() {
        let vars: HashMap<&str, &str> = [(BOOKING_ENV, "http://booking.test/b")].into();
        let endpoints = Endpoints::from_lookup(|k| vars.get(k).map(|v| v.to_string())).unwrap();

        assert_eq!(endpoints.booking.as_str(), "http://booking.test/b");
        assert_eq!(endpoints.cars, Endpoints::default().cars);
    }

    #[test]
    fn test_from_lookup_rejects_bad_url() {
        let err = Endpoints::from_lookup(|k| (k == CARS_ENV).then(|| "not a url".to_string()))
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
