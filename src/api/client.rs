// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Typed client for the rental backend
//!
//! Methods return the backend answer and perform no UI effect; see
//! [`crate::front::Frontend`] for the cookie and navigation side.

use std::sync::Arc;

use tracing::{debug, warn};

use super::config::Endpoints;
use super::models::{
    Ack, BookingRequest, Car, CarAvailability, CarPlacement, Credentials, NewCar, NewOffice,
    SignIn,
};
use super::operation::Operation;
use crate::error::Result;
use crate::http::{CredentialsMode, HttpClient, Request, Response};
use crate::session::SessionStore;

/// Client for the rental backend
#[derive(Clone)]
pub struct ApiClient {
    http: HttpClient,
    endpoints: Endpoints,
}

impl ApiClient {
    /// Create a client with a default HTTP client and an empty cookie jar
    pub fn new(endpoints: Endpoints) -> Result<Self> {
        Ok(Self::with_http(HttpClient::new()?, endpoints))
    }

    /// Create a client over an existing HTTP client
    pub fn with_http(http: HttpClient, endpoints: Endpoints) -> Self {
        Self { http, endpoints }
    }

    /// Get the endpoint configuration
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Get the session store the HTTP client reads cookies from
    pub fn session(&self) -> &Arc<dyn SessionStore> {
        self.http.store()
    }

    /// Send one operation; non-2xx answers become [`crate::Error::Status`]
    pub async fn call(&self, op: &Operation) -> Result<Response> {
        let url = self.endpoints.resolve(op.endpoint, &op.segments)?;
        let mut request = Request::from_url(op.method.clone(), url).credentials(
            if op.credentialed {
                CredentialsMode::Include
            } else {
                CredentialsMode::Omit
            },
        );
        if let Some(ref body) = op.body {
            request = request.json(body)?;
        }

        debug!(operation = op.name, method = %op.method, url = %request.url, "calling backend");

        let result = self
            .http
            .execute(request)
            .await
            .and_then(Response::error_for_status);
        if let Err(ref e) = result {
            warn!(operation = op.name, error = %e, "backend call failed");
        }
        result
    }

    async fn ack(&self, op: &Operation) -> Result<Ack> {
        let response = self.call(op).await?;
        let body = match response.json_or_empty::<serde_json::Value>() {
            Ok(body) => body,
            Err(_) => Some(serde_json::Value::String(response.text_lossy())),
        };
        Ok(Ack {
            status: response.status_code(),
            body,
        })
    }

    /// Exchange login and password for an auth token
    pub async fn sign_in(&self, login: &str, password: &str) -> Result<SignIn> {
        let op = Operation::sign_in(&Credentials::new(login, password))?;
        self.call(&op).await?.json()
    }

    /// Register a user; returns the raw response body
    pub async fn register(&self, login: &str, password: &str) -> Result<String> {
        let op = Operation::register(&Credentials::new(login, password))?;
        Ok(self.call(&op).await?.text_lossy())
    }

    pub async fn make_booking(&self, booking: &BookingRequest) -> Result<Ack> {
        self.ack(&Operation::make_booking(booking)?).await
    }

    pub async fn cancel_booking(&self, booking_id: &str) -> Result<Ack> {
        self.ack(&Operation::cancel_booking(booking_id)).await
    }

    pub async fn end_booking(&self, booking_id: &str) -> Result<Ack> {
        self.ack(&Operation::end_booking(booking_id)).await
    }

    /// Remove a car from every office
    pub async fn delete_car_completely(&self, car_uuid: &str) -> Result<Ack> {
        self.ack(&Operation::delete_car_completely(car_uuid)).await
    }

    pub async fn add_office(&self, location: &str) -> Result<Ack> {
        let office = NewOffice {
            location: location.to_string(),
        };
        self.ack(&Operation::add_office(&office)?).await
    }

    /// Place a car in an office from `available_from` on
    pub async fn add_car(&self, office_id: &str, car_uuid: &str, available_from: i64) -> Result<Ack> {
        let placement = CarPlacement { available_from };
        self.ack(&Operation::add_car(office_id, car_uuid, &placement)?)
            .await
    }

    pub async fn create_car(&self, car: &NewCar) -> Result<Ack> {
        self.ack(&Operation::create_car(car)?).await
    }

    /// List the car catalogue
    pub async fn list_cars(&self) -> Result<Vec<Car>> {
        self.call(&Operation::list_cars()).await?.json()
    }

    /// Availability history of one car
    pub async fn car_availability(&self, car_uuid: &str) -> Result<CarAvailability> {
        self.call(&Operation::car_availability(car_uuid))
            .await?
            .json()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{CookieJar, HttpClientConfig};
    use crate::session::Session;
    use crate::Error;
    use serde_json::json;
    use tokio_test::{assert_err, assert_ok};
    use wiremock::matchers::{body_json, header, header_regex, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> (ApiClient, Arc<CookieJar>) {
        let jar = Arc::new(CookieJar::new());
        let http = HttpClient::with_store(HttpClientConfig::default(), jar.clone()).unwrap();
        let base = server.uri();
        let endpoints = Endpoints::with_hosts(&base, &base).unwrap();
        (ApiClient::with_http(http, endpoints), jar)
    }

    #[tokio::test]
    async fn test_sign_in_posts_credentials() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({"login": "alice", "password": "secret"})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"auth_token": "tok", "is_admin": 1})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let (client, _) = client_for(&server);
        let signed = assert_ok!(client.sign_in("alice", "secret").await);
        assert_eq!(signed.auth_token, "tok");
        assert!(signed.is_admin);
    }

    #[tokio::test]
    async fn test_sign_in_without_token_is_a_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"is_admin\": 0}"))
            .mount(&server)
            .await;

        let (client, _) = client_for(&server);
        let err = assert_err!(client.sign_in("alice", "secret").await);
        assert_eq!(err.display_message(), "[200] {\"is_admin\": 0}");
        assert!(err.url().unwrap().ends_with("/auth"));
    }

    #[tokio::test]
    async fn test_cancel_booking_sends_delete_without_body() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/booking/abc-123"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let (client, _) = client_for(&server);
        let ack = assert_ok!(client.cancel_booking("abc-123").await);
        assert_eq!(ack.status, 200);
        assert_eq!(ack.body, None);

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].body.is_empty());
    }

    #[tokio::test]
    async fn test_end_booking_sends_patch_to_finish() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/booking/abc-123/finish"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "finished"})))
            .expect(1)
            .mount(&server)
            .await;

        let (client, _) = client_for(&server);
        let ack = assert_ok!(client.end_booking("abc-123").await);
        assert_eq!(ack.body, Some(json!({"status": "finished"})));

        let requests = server.received_requests().await.unwrap();
        assert!(requests[0].body.is_empty());
    }

    #[tokio::test]
    async fn test_make_booking_sends_placeholder_user() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/booking"))
            .and(body_json(json!({
                "car_uuid": "car-1",
                "user_id": 0,
                "payment_data": {"cc_number": "4111111111111111", "price": 120.0},
                "booking_start": 1000,
                "booking_end": 2000,
                "start_office": "1",
                "end_office": "2",
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 7})))
            .expect(1)
            .mount(&server)
            .await;

        let (client, jar) = client_for(&server);
        Session::new("tok", "bob", false).store(jar.as_ref());

        let booking = BookingRequest::new("1", "2", "car-1", 1000, 2000, "4111111111111111", 120.0);
        let ack = assert_ok!(client.make_booking(&booking).await);
        assert_eq!(ack.status, 201);
    }

    #[tokio::test]
    async fn test_session_cookies_are_attached() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/offices"))
            .and(body_json(json!({"location": "Kazan"})))
            .and(header_regex("cookie", "token=tok"))
            .and(header_regex("cookie", "user=alice"))
            .and(header_regex("cookie", "is_admin=1"))
            .respond_with(ResponseTemplate::new(200).set_body_string("created"))
            .expect(1)
            .mount(&server)
            .await;

        let (client, jar) = client_for(&server);
        Session::new("tok", "alice", true).store(jar.as_ref());

        let ack = assert_ok!(client.add_office("Kazan").await);
        assert_eq!(ack.body, Some(json!("created")));
    }

    #[tokio::test]
    async fn test_non_2xx_becomes_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/cars"))
            .respond_with(ResponseTemplate::new(403).set_body_string("You must be admin to do this"))
            .mount(&server)
            .await;

        let (client, _) = client_for(&server);
        let car = NewCar {
            brand: "Lada".into(),
            model: "Vesta".into(),
            car_type: "sedan".into(),
            power: 106,
        };
        let err = assert_err!(client.create_car(&car).await);
        assert_eq!(err.status_code(), Some(403));
        assert_eq!(err.display_message(), "[403] You must be admin to do this");
    }

    #[tokio::test]
    async fn test_add_car_and_delete_car_paths() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/offices/3/cars/car-1"))
            .and(body_json(json!({"available_from": 1700000000})))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/offices/cars/car-1/completely"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let (client, _) = client_for(&server);
        assert_ok!(client.add_car("3", "car-1", 1_700_000_000).await);
        assert_ok!(client.delete_car_completely("car-1").await);
    }

    #[tokio::test]
    async fn test_register_returns_raw_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/register"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"message\": \"registered\"}"))
            .mount(&server)
            .await;

        let (client, _) = client_for(&server);
        let body = assert_ok!(client.register("carol", "pw").await);
        assert_eq!(body, "{\"message\": \"registered\"}");
    }

    #[tokio::test]
    async fn test_list_cars_and_availability() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/cars"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"uuid": "c1", "brand": "Lada", "model": "Niva", "type": "SUV", "power": 83}
            ])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/offices/cars/c1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "car": null,
                "offices": [],
                "last_available": {"office_id": 1, "from": 5}
            })))
            .mount(&server)
            .await;

        let (client, _) = client_for(&server);
        let cars = assert_ok!(client.list_cars().await);
        assert_eq!(cars.len(), 1);
        assert_eq!(cars[0].car_type, "SUV");

        let availability = assert_ok!(client.car_availability("c1").await);
        assert_eq!(availability.last_available.office_id, 1);
    }

    #[tokio::test]
    async fn test_transport_failure() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let base = format!("http://127.0.0.1:{}", port);
        let client = ApiClient::new(Endpoints::with_hosts(&base, &base).unwrap()).unwrap();

        let err = assert_err!(client.cancel_booking("1").await);
        assert!(err.is_network());
        assert!(err.display_message().starts_with("[0] "));
        assert!(matches!(err, Error::Http(_)));
    }
}
