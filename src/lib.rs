// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! # carrent - Car Rental API Client
//!
//! Client for the car rental backend: sign-in and registration against the
//! session service, bookings, offices and cars through the gateway.
//!
//! ## Layers
//!
//! - `http`: request/response types, HTTP client, cookie jar
//! - `session`: the `token` / `user` / `is_admin` cookies behind a [`SessionStore`]
//! - `api`: endpoint configuration, operation table, typed [`ApiClient`]
//! - `front`: page actions turning results into cookie writes, navigation and messages
//!
//! ## Example
//!
//! ```rust,no_run
//! use carrent::{ApiClient, Endpoints, Frontend, ConsoleView};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = ApiClient::new(Endpoints::from_env()?)?;
//!     let front = Frontend::new(api, ConsoleView);
//!
//!     front.sign_in("alice", "secret").await?;
//!     front.cancel_booking("42").await?;
//!     front.sign_out();
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod error;
pub mod front;
pub mod http;
pub mod session;

// API
pub use api::{Ack, ApiClient, BookingRequest, Endpoint, Endpoints, NewCar, Operation};

// Errors
pub use error::{Error, Result};

// Frontend
pub use front::{ConsoleView, Frontend, RecordingView, View, ViewEvent};

// HTTP
pub use http::{Cookie, CookieJar, CredentialsMode, HttpClient, HttpClientConfig, Request, Response};

// Session
pub use session::{Session, SessionStore};

/// carrent version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
