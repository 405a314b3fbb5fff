// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Request and response payloads of the rental backend

use serde::{Deserialize, Deserializer, Serialize};

/// `user_id` sent with every booking; the backend derives the real user from the token
pub const PLACEHOLDER_USER_ID: i64 = 0;

/// Login form body for sign-in and registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub login: String,
    pub password: String,
}

impl Credentials {
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            password: password.into(),
        }
    }
}

/// Sign-in answer of the session service
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SignIn {
    pub auth_token: String,
    /// Issued as `0`/`1`; booleans are accepted too
    #[serde(default, deserialize_with = "flag")]
    pub is_admin: bool,
}

fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<bool, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
        Text(String),
    }

    Ok(match Option::<Flag>::deserialize(deserializer)? {
        Some(Flag::Bool(b)) => b,
        Some(Flag::Int(i)) => i != 0,
        Some(Flag::Text(s)) => matches!(s.trim(), "1" | "true"),
        None => false,
    })
}

/// Card payment attached to a booking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentData {
    pub cc_number: String,
    pub price: f64,
}

/// New booking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub car_uuid: String,
    pub user_id: i64,
    pub payment_data: PaymentData,
    pub booking_start: i64,
    pub booking_end: i64,
    pub start_office: String,
    pub end_office: String,
}

impl BookingRequest {
    /// Booking with `user_id` set to [`PLACEHOLDER_USER_ID`]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        start_office: impl Into<String>,
        end_office: impl Into<String>,
        car_uuid: impl Into<String>,
        booking_start: i64,
        booking_end: i64,
        cc_number: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            car_uuid: car_uuid.into(),
            user_id: PLACEHOLDER_USER_ID,
            payment_data: PaymentData {
                cc_number: cc_number.into(),
                price,
            },
            booking_start,
            booking_end,
            start_office: start_office.into(),
            end_office: end_office.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOffice {
    pub location: String,
}

/// Availability window opened when a car is placed in an office
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarPlacement {
    pub available_from: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCar {
    pub brand: String,
    pub model: String,
    #[serde(rename = "type")]
    pub car_type: String,
    pub power: i64,
}

/// Car as listed by the catalogue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    pub uuid: String,
    pub brand: String,
    pub model: String,
    #[serde(rename = "type")]
    pub car_type: String,
    pub power: i64,
}

/// Where and since when a car can be picked up
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastAvailable {
    pub office_id: i64,
    pub from: i64,
}

/// Past stay of a car in an office
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfficeStay {
    pub office_id: i64,
    pub from: i64,
    pub to: Option<i64>,
}

/// Availability history of one car
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarAvailability {
    #[serde(default)]
    pub car: Option<serde_json::Value>,
    pub last_available: LastAvailable,
    #[serde(default)]
    pub offices: Vec<OfficeStay>,
}

/// Successful answer to a mutating call
#[derive(Debug, Clone, PartialEq)]
pub struct Ack {
    /// HTTP status
    pub status: u16,
    /// Parsed body; plain text bodies are kept as a JSON string, blank ones as `None`
    pub body: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_booking_serialization() {
        let booking = BookingRequest::new("1", "2", "car-9", 100, 200, "4111", 49.5);
        let value = serde_json::to_value(&booking).unwrap();

        assert_eq!(
            value,
            json!({
                "car_uuid": "car-9",
                "user_id": 0,
                "payment_data": {"cc_number": "4111", "price": 49.5},
                "booking_start": 100,
                "booking_end": 200,
                "start_office": "1",
                "end_office": "2",
            })
        );
    }

    #[test]
    fn test_sign_in_flag_forms() {
        let int: SignIn = serde_json::from_value(json!({"auth_token": "t", "is_admin": 1})).unwrap();
        assert!(int.is_admin);

        let boolean: SignIn =
            serde_json::from_value(json!({"auth_token": "t", "is_admin": false})).unwrap();
        assert!(!boolean.is_admin);

        let missing: SignIn = serde_json::from_value(json!({"auth_token": "t"})).unwrap();
        assert!(!missing.is_admin);
    }

    #[test]
    fn test_sign_in_requires_token() {
        let result = serde_json::from_value::<SignIn>(json!({"is_admin": 0}));
        assert!(result.is_err());
    }

    #[test]
    fn test_car_type_field() {
        let car = NewCar {
            brand: "Lada".into(),
            model: "Niva".into(),
            car_type: "SUV".into(),
            power: 83,
        };
        let value = serde_json::to_value(&car).unwrap();
        assert_eq!(value["type"], "SUV");
        assert!(value.get("car_type").is_none());
    }

    #[test]
    fn test_car_availability_shape() {
        let availability: CarAvailability = serde_json::from_value(json!({
            "car": null,
            "offices": [{"office_id": 2, "from": 10, "to": 20}],
            "last_available": {"office_id": 3, "from": 30},
        }))
        .unwrap();

        assert_eq!(availability.last_available.office_id, 3);
        assert_eq!(availability.offices[0].to, Some(20));
    }
}
