// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Page-side actions of the rental frontend
//!
//! Each action issues one backend call through [`ApiClient`] and then performs
//! exactly one visible effect on a [`View`]: write the session and go home,
//! go home, show a message, or show the error as `[<status>] <body>`.
//! The typed outcome is returned as well, so callers can branch on it.

mod view;

pub use view::{ConsoleView, RecordingView, View, ViewEvent};

use tracing::{info, warn};

use crate::api::{Ack, ApiClient, BookingRequest, Car, CarAvailability, NewCar};
use crate::error::{Error, Result};
use crate::session::{Session, SessionStore};

/// Landing page
pub const ROOT: &str = "/";
/// Sign-in page, used when the backend rejects the session
pub const AUTH_PAGE: &str = "/auth";

/// Frontend actions over an API client and a view
pub struct Frontend<V: View = ConsoleView> {
    api: ApiClient,
    view: V,
}

impl<V: View> Frontend<V> {
    pub fn new(api: ApiClient, view: V) -> Self {
        Self { api, view }
    }

    /// Get the API client
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Get the view
    pub fn view(&self) -> &V {
        &self.view
    }

    fn store(&self) -> &dyn SessionStore {
        self.api.session().as_ref()
    }

    /// Current session, if a token cookie is present
    pub fn session(&self) -> Option<Session> {
        Session::load(self.store())
    }

    fn fail(&self, err: Error) -> Error {
        warn!(
            error = %err,
            url = err.url().unwrap_or("-"),
            network = err.is_network(),
            "action failed"
        );
        self.view.show_error(&err.display_message());
        err
    }

    fn home(&self, result: Result<Ack>) -> Result<Ack> {
        match result {
            Ok(ack) => {
                self.view.navigate(ROOT);
                Ok(ack)
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    /// Sign in, write the `token`, `user` and `is_admin` cookies, go home
    pub async fn sign_in(&self, login: &str, password: &str) -> Result<Session> {
        match self.api.sign_in(login, password).await {
            Ok(signed) => {
                let session = Session::new(signed.auth_token, login, signed.is_admin);
                session.store(self.store());
                info!(user = login, is_admin = session.is_admin, "signed in");
                self.view.navigate(ROOT);
                Ok(session)
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    /// Expire the session cookies and go home; no backend call is made
    pub fn sign_out(&self) {
        Session::clear(self.store());
        info!("signed out");
        self.view.navigate(ROOT);
    }

    /// Register a user and show the backend's answer as is
    pub async fn register(&self, login: &str, password: &str) -> Result<String> {
        match self.api.register(login, password).await {
            Ok(body) => {
                self.view.show_success(&body);
                Ok(body)
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    /// Book a car; `user_id` is sent as the placeholder `0`
    #[allow(clippy::too_many_arguments)]
    pub async fn make_booking(
        &self,
        start_office: &str,
        end_office: &str,
        car_uuid: &str,
        booking_start: i64,
        booking_end: i64,
        cc_number: &str,
        price: f64,
    ) -> Result<Ack> {
        let booking = BookingRequest::new(
            start_office,
            end_office,
            car_uuid,
            booking_start,
            booking_end,
            cc_number,
            price,
        );
        self.home(self.api.make_booking(&booking).await)
    }

    pub async fn cancel_booking(&self, booking_id: &str) -> Result<Ack> {
        self.home(self.api.cancel_booking(booking_id).await)
    }

    pub async fn end_booking(&self, booking_id: &str) -> Result<Ack> {
        self.home(self.api.end_booking(booking_id).await)
    }

    pub async fn delete_car_completely(&self, car_uuid: &str) -> Result<Ack> {
        self.home(self.api.delete_car_completely(car_uuid).await)
    }

    pub async fn add_office(&self, location: &str) -> Result<Ack> {
        self.home(self.api.add_office(location).await)
    }

    pub async fn add_car(&self, office_id: &str, car_uuid: &str, available_from: i64) -> Result<Ack> {
        self.home(self.api.add_car(office_id, car_uuid, available_from).await)
    }

    pub async fn create_car(&self, brand: &str, model: &str, car_type: &str, power: i64) -> Result<Ack> {
        let car = NewCar {
            brand: brand.to_string(),
            model: model.to_string(),
            car_type: car_type.to_string(),
            power,
        };
        self.home(self.api.create_car(&car).await)
    }

    /// A rejected session sends the user to the sign-in page instead of showing an error
    fn read_failed(&self, err: Error) -> Error {
        if err.is_unauthorized() {
            warn!(error = %err, "session rejected");
            self.view.navigate(AUTH_PAGE);
            err
        } else {
            self.fail(err)
        }
    }

    /// Car catalogue
    pub async fn list_cars(&self) -> Result<Vec<Car>> {
        self.api.list_cars().await.map_err(|e| self.read_failed(e))
    }

    /// Availability of one car
    pub async fn car_availability(&self, car_uuid: &str) -> Result<CarAvailability> {
        self.api
            .car_availability(car_uuid)
            .await
            .map_err(|e| self.read_failed(e))
    }
}
