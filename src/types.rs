use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ApiError;

pub const STATUS_CONFIRMED: &str = "confirmed";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: Uuid,
    pub barber_id: String,
    pub date: String,
    pub time: String,
    pub service: String,
    pub customer_name: String,
    pub customer_email: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Builds the stored record from validated caller fields. The server-assigned
    /// fields (`id`, `status`, `created_at`) are stamped here and only here.
    pub fn confirmed(details: BookingDetails) -> Self {
        Self {
            id: Uuid::new_v4(),
            barber_id: details.barber_id,
            date: details.date,
            time: details.time,
            service: details.service,
            customer_name: details.customer_name,
            customer_email: details.customer_email,
            status: STATUS_CONFIRMED.into(),
            created_at: Utc::now(),
        }
    }
}

/// Decode target for the create-booking payload. Every field is optional at the
/// serde level so that an absent field reaches the presence check instead of
/// failing deserialization of the whole body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub barber_id: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub service: Option<String>,
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
}

/// Caller fields that passed the presence check. No format validation happens on
/// purpose: any non-empty string is accepted, including free-form dates and emails.
#[derive(Debug, Clone)]
pub struct BookingDetails {
    pub barber_id: String,
    pub date: String,
    pub time: String,
    pub service: String,
    pub customer_name: String,
    pub customer_email: String,
}

impl BookingRequest {
    pub fn into_details(self) -> Result<BookingDetails, ApiError> {
        Ok(BookingDetails {
            barber_id: required(self.barber_id)?,
            date: required(self.date)?,
            time: required(self.time)?,
            service: required(self.service)?,
            customer_name: required(self.customer_name)?,
            customer_email: required(self.customer_email)?,
        })
    }
}

fn required(field: Option<String>) -> Result<String, ApiError> {
    match field {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ApiError::Validation("Missing required fields")),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub time: String,
    pub available: bool,
}

#[cfg(test)]
mod test {
    use super::*;

    fn full_request() -> BookingRequest {
        BookingRequest {
            barber_id: Some("1".into()),
            date: Some("2024-06-01".into()),
            time: Some("10:00".into()),
            service: Some("Classic Haircut".into()),
            customer_name: Some("Jane Doe".into()),
            customer_email: Some("jane@example.com".into()),
        }
    }

    #[test]
    fn test_complete_request_passes_validation() {
        let details = full_request().into_details().unwrap();
        assert_eq!(details.barber_id, "1");
        assert_eq!(details.customer_email, "jane@example.com");
    }

    #[test]
    fn test_absent_field_fails_validation() {
        let mut request = full_request();
        request.customer_name = None;
        request.into_details().unwrap_err();
    }

    #[test]
    fn test_empty_field_fails_validation() {
        let mut request = full_request();
        request.service = Some(String::new());
        request.into_details().unwrap_err();
    }

    #[test]
    fn test_free_form_strings_are_accepted() {
        let mut request = full_request();
        request.date = Some("not a date".into());
        request.customer_email = Some("not an email".into());
        request.into_details().unwrap();
    }

    #[test]
    fn test_booking_serializes_with_camel_case_keys() {
        let booking = Booking::confirmed(full_request().into_details().unwrap());
        let value = serde_json::to_value(&booking).unwrap();
        assert_eq!(value["barberId"], "1");
        assert_eq!(value["customerName"], "Jane Doe");
        assert_eq!(value["status"], STATUS_CONFIRMED);
        assert!(value["createdAt"].is_string());
    }

    #[test]
    fn test_caller_supplied_server_fields_are_discarded() {
        let payload = serde_json::json!({
            "barberId": "1",
            "date": "2024-06-01",
            "time": "10:00",
            "service": "Classic Haircut",
            "customerName": "Jane Doe",
            "customerEmail": "jane@example.com",
            "id": "hijacked",
            "status": "pending",
            "createdAt": "1970-01-01T00:00:00Z",
        });
        let request: BookingRequest = serde_json::from_value(payload).unwrap();
        let booking = Booking::confirmed(request.into_details().unwrap());
        assert_eq!(booking.status, STATUS_CONFIRMED);
        assert_ne!(booking.id.to_string(), "hijacked");
        assert_ne!(booking.created_at.to_rfc3339(), "1970-01-01T00:00:00+00:00");
    }
}
