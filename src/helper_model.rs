use chrono::{NaiveDate, NaiveTime};
use serde_derive::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model;

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ErrorResponse {
    pub title: String,
    pub message: String,
}

/// One failing form field, keyed so the UI can render the message inline.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: &str) -> FieldError {
        FieldError {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

/// Error taxonomy of the booking core. Store failures are fail-closed:
/// no caller may read them as "available" or "created".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    /// Field-level rejection, raised before any store traffic.
    Validation(Vec<FieldError>),
    /// The requested window is already blocked; pick another date.
    AvailabilityConflict,
    /// The data store misbehaved (connection, constraint, unexpected state).
    Store(String),
    /// The data store did not answer within the configured deadline.
    StoreTimeout,
    /// A single requested row does not exist. Empty listings are values,
    /// not errors.
    NotFound,
}

impl From<diesel::result::Error> for BookingError {
    fn from(e: diesel::result::Error) -> BookingError {
        match e {
            diesel::result::Error::NotFound => BookingError::NotFound,
            other => BookingError::Store(other.to_string()),
        }
    }
}

/// Guest booking submission. Typed once at the boundary; the date fields
/// stay optional so an absent value produces a field-keyed error instead
/// of a body-level deserialization failure.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct BookingForm {
    pub vehicle_id: Uuid,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub notes: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ConsultationForm {
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: String,
    pub subject: String,
    pub content: String,
    pub rental_start_date: Option<NaiveDate>,
    pub rental_end_date: Option<NaiveDate>,
    pub preferred_vehicle: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct SupportPostForm {
    pub title: String,
    pub content: String,
    #[serde(rename = "type")]
    pub post_type: model::PostType,
    pub author_name: String,
    pub author_password: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
}

/// Vehicle fields the booking screens display next to a reservation.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct VehicleSummary {
    pub id: Uuid,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub brand_name: Option<String>,
}

impl VehicleSummary {
    pub fn from_joined(
        vehicle: &model::Vehicle,
        brand_row: Option<&model::VehicleBrand>,
    ) -> VehicleSummary {
        VehicleSummary {
            id: vehicle.id,
            brand: vehicle.brand.clone(),
            model: vehicle.model.clone(),
            year: vehicle.year,
            brand_name: brand_row.map(|b| b.name.clone()),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct BookingHistoryEntry {
    pub reservation: model::Reservation,
    pub vehicle: VehicleSummary,
}

/// A vehicle joined with its catalog rows, as the inventory pages consume it.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct VehicleDetail {
    pub vehicle: model::Vehicle,
    pub brand: Option<model::VehicleBrand>,
    pub category: Option<model::VehicleCategory>,
    pub location: Option<model::VehicleLocation>,
}
