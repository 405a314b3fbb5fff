// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Rental backend API
//!
//! Endpoints come from configuration, operations from a declarative table,
//! and a single [`ApiClient::call`] sends all of them.

mod client;
mod config;
mod models;
mod operation;

pub use client::ApiClient;
pub use config::{
    Endpoint, Endpoints, BOOKING_ENV, CARS_ENV, OFFICES_ENV, REGISTER_ENV, SIGN_IN_ENV,
};
pub use models::{
    Ack, BookingRequest, Car, CarAvailability, CarPlacement, Credentials, LastAvailable,
    NewCar, NewOffice, OfficeStay, PaymentData, SignIn, PLACEHOLDER_USER_ID,
};
pub use operation::Operation;
