// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Declarative table of backend operations
//!
//! Every call the client can make is an [`Operation`]: method, endpoint,
//! path segments below the endpoint, optional JSON body and credentials flag.
//! [`ApiClient::call`](super::ApiClient::call) is the only code that sends them.

use reqwest::Method;
use serde::Serialize;

use super::config::Endpoint;
use super::models::{BookingRequest, CarPlacement, Credentials, NewCar, NewOffice};
use crate::error::Result;

/// One backend call
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    /// Name used in logs
    pub name: &'static str,
    pub method: Method,
    pub endpoint: Endpoint,
    /// Opaque path segments appended to the endpoint
    pub segments: Vec<String>,
    pub body: Option<serde_json::Value>,
    /// Attach session cookies
    pub credentialed: bool,
}

impl Operation {
    fn new(name: &'static str, method: Method, endpoint: Endpoint) -> Self {
        Self {
            name,
            method,
            endpoint,
            segments: Vec::new(),
            body: None,
            credentialed: true,
        }
    }

    fn segment(mut self, segment: impl Into<String>) -> Self {
        self.segments.push(segment.into());
        self
    }

    fn json<T: Serialize>(mut self, body: &T) -> Result<Self> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// POST `<sign_in>` with `{login, password}`
    pub fn sign_in(credentials: &Credentials) -> Result<Self> {
        Self::new("sign_in", Method::POST, Endpoint::SignIn).json(credentials)
    }

    /// POST `<register>` with `{login, password}`
    pub fn register(credentials: &Credentials) -> Result<Self> {
        Self::new("register", Method::POST, Endpoint::Register).json(credentials)
    }

    /// POST `<booking>` with the booking object
    pub fn make_booking(booking: &BookingRequest) -> Result<Self> {
        Self::new("make_booking", Method::POST, Endpoint::Booking).json(booking)
    }

    /// DELETE `<booking>/<id>`
    pub fn cancel_booking(booking_id: &str) -> Self {
        Self::new("cancel_booking", Method::DELETE, Endpoint::Booking).segment(booking_id)
    }

    /// PATCH `<booking>/<id>/finish`
    pub fn end_booking(booking_id: &str) -> Self {
        Self::new("end_booking", Method::PATCH, Endpoint::Booking)
            .segment(booking_id)
            .segment("finish")
    }

    /// DELETE `<offices>/cars/<car_uuid>/completely`
    pub fn delete_car_completely(car_uuid: &str) -> Self {
        Self::new("delete_car_completely", Method::DELETE, Endpoint::Offices)
            .segment("cars")
            .segment(car_uuid)
            .segment("completely")
    }

    /// POST `<offices>` with `{location}`
    pub fn add_office(office: &NewOffice) -> Result<Self> {
        Self::new("add_office", Method::POST, Endpoint::Offices).json(office)
    }

    /// POST `<offices>/<office_id>/cars/<car_uuid>` with `{available_from}`
    pub fn add_car(office_id: &str, car_uuid: &str, placement: &CarPlacement) -> Result<Self> {
        Self::new("add_car", Method::POST, Endpoint::Offices)
            .segment(office_id)
            .segment("cars")
            .segment(car_uuid)
            .json(placement)
    }

    /// POST `<cars>` with `{brand, model, type, power}`
    pub fn create_car(car: &NewCar) -> Result<Self> {
        Self::new("create_car", Method::POST, Endpoint::Cars).json(car)
    }

    /// GET `<cars>`
    pub fn list_cars() -> Self {
        Self::new("list_cars", Method::GET, Endpoint::Cars)
    }

    /// GET `<offices>/cars/<car_uuid>`
    pub fn car_availability(car_uuid: &str) -> Self {
        Self::new("car_availability", Method::GET, Endpoint::Offices)
            .segment("cars")
            .segment(car_uuid)
    }
}
