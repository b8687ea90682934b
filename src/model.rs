use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Diesel requires us to define a custom mapping between the Rust enum
// and the database type, if we are not using string.
use crate::schema::*;
use diesel::deserialize::{self, FromSql};
use diesel::pg::{Pg, PgValue};
use diesel::serialize::{self, Output, ToSql};
use diesel::{AsExpression, FromSqlRow};
use std::io::Write;

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, AsExpression, FromSqlRow)]
#[diesel(sql_type = sql_types::ReservationStatusEnum)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl ReservationStatus {
    /// Whether a reservation in this state counts against vehicle
    /// availability. Cancelled and completed bookings free the window.
    pub fn is_blocking(&self) -> bool {
        matches!(self, ReservationStatus::Pending | ReservationStatus::Confirmed)
    }

    /// Legal admin moves: pending -> confirmed/cancelled,
    /// confirmed -> completed/cancelled. Terminal states are frozen.
    pub fn can_transition_to(&self, next: ReservationStatus) -> bool {
        matches!(
            (self, next),
            (ReservationStatus::Pending, ReservationStatus::Confirmed)
                | (ReservationStatus::Pending, ReservationStatus::Cancelled)
                | (ReservationStatus::Confirmed, ReservationStatus::Completed)
                | (ReservationStatus::Confirmed, ReservationStatus::Cancelled)
        )
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, AsExpression, FromSqlRow)]
#[diesel(sql_type = sql_types::PaymentStatusEnum)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Refunded,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, AsExpression, FromSqlRow)]
#[diesel(sql_type = sql_types::VehicleStatusEnum)]
#[serde(rename_all = "snake_case")]
pub enum VehicleStatus {
    Available,
    Rented,
    Unavailable,
}

impl VehicleStatus {
    pub fn from_param(raw: &str) -> Option<VehicleStatus> {
        match raw {
            "available" => Some(VehicleStatus::Available),
            "rented" => Some(VehicleStatus::Rented),
            "unavailable" => Some(VehicleStatus::Unavailable),
            _ => None,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, AsExpression, FromSqlRow)]
#[diesel(sql_type = sql_types::PostTypeEnum)]
#[serde(rename_all = "snake_case")]
pub enum PostType {
    Notice,
    Community,
}

impl PostType {
    pub fn from_param(raw: &str) -> Option<PostType> {
        match raw {
            "notice" => Some(PostType::Notice),
            "community" => Some(PostType::Community),
            _ => None,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, AsExpression, FromSqlRow)]
#[diesel(sql_type = sql_types::PostStatusEnum)]
#[serde(rename_all = "snake_case")]
pub enum PostStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, AsExpression, FromSqlRow)]
#[diesel(sql_type = sql_types::ConsultationStatusEnum)]
#[serde(rename_all = "snake_case")]
pub enum ConsultationStatus {
    Pending,
    InProgress,
    Resolved,
    Closed,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, AsExpression, FromSqlRow)]
#[diesel(sql_type = sql_types::ConsultationPriorityEnum)]
#[serde(rename_all = "snake_case")]
pub enum ConsultationPriority {
    Low,
    Normal,
    High,
    Urgent,
}

//This is for postgres. For other databases the type might be different.
impl ToSql<sql_types::ReservationStatusEnum, Pg> for ReservationStatus {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        match *self {
            ReservationStatus::Pending => out.write_all(b"pending")?,
            ReservationStatus::Confirmed => out.write_all(b"confirmed")?,
            ReservationStatus::Cancelled => out.write_all(b"cancelled")?,
            ReservationStatus::Completed => out.write_all(b"completed")?,
        }
        Ok(serialize::IsNull::No)
    }
}

impl FromSql<sql_types::ReservationStatusEnum, Pg> for ReservationStatus {
    fn from_sql(bytes: PgValue<'_>) -> deserialize::Result<Self> {
        match bytes.as_bytes() {
            b"pending" => Ok(ReservationStatus::Pending),
            b"confirmed" => Ok(ReservationStatus::Confirmed),
            b"cancelled" => Ok(ReservationStatus::Cancelled),
            b"completed" => Ok(ReservationStatus::Completed),
            _ => Err("Unrecognized enum variant".into()),
        }
    }
}
// The following is the traits implementation for the other Enums.
impl ToSql<sql_types::PaymentStatusEnum, Pg> for PaymentStatus {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        match *self {
            PaymentStatus::Pending => out.write_all(b"pending")?,
            PaymentStatus::Paid => out.write_all(b"paid")?,
            PaymentStatus::Refunded => out.write_all(b"refunded")?,
        }
        Ok(serialize::IsNull::No)
    }
}

impl FromSql<sql_types::PaymentStatusEnum, Pg> for PaymentStatus {
    fn from_sql(bytes: PgValue<'_>) -> deserialize::Result<Self> {
        match bytes.as_bytes() {
            b"pending" => Ok(PaymentStatus::Pending),
            b"paid" => Ok(PaymentStatus::Paid),
            b"refunded" => Ok(PaymentStatus::Refunded),
            _ => Err("Unrecognized enum variant".into()),
        }
    }
}

impl ToSql<sql_types::VehicleStatusEnum, Pg> for VehicleStatus {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        match *self {
            VehicleStatus::Available => out.write_all(b"available")?,
            VehicleStatus::Rented => out.write_all(b"rented")?,
            VehicleStatus::Unavailable => out.write_all(b"unavailable")?,
        }
        Ok(serialize::IsNull::No)
    }
}

impl FromSql<sql_types::VehicleStatusEnum, Pg> for VehicleStatus {
    fn from_sql(bytes: PgValue<'_>) -> deserialize::Result<Self> {
        match bytes.as_bytes() {
            b"available" => Ok(VehicleStatus::Available),
            b"rented" => Ok(VehicleStatus::Rented),
            b"unavailable" => Ok(VehicleStatus::Unavailable),
            _ => Err("Unrecognized enum variant".into()),
        }
    }
}

impl ToSql<sql_types::PostTypeEnum, Pg> for PostType {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        match *self {
            PostType::Notice => out.write_all(b"notice")?,
            PostType::Community => out.write_all(b"community")?,
        }
        Ok(serialize::IsNull::No)
    }
}

impl FromSql<sql_types::PostTypeEnum, Pg> for PostType {
    fn from_sql(bytes: PgValue<'_>) -> deserialize::Result<Self> {
        match bytes.as_bytes() {
            b"notice" => Ok(PostType::Notice),
            b"community" => Ok(PostType::Community),
            _ => Err("Unrecognized enum variant".into()),
        }
    }
}

impl ToSql<sql_types::PostStatusEnum, Pg> for PostStatus {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        match *self {
            PostStatus::Pending => out.write_all(b"pending")?,
            PostStatus::Approved => out.write_all(b"approved")?,
            PostStatus::Rejected => out.write_all(b"rejected")?,
        }
        Ok(serialize::IsNull::No)
    }
}

impl FromSql<sql_types::PostStatusEnum, Pg> for PostStatus {
    fn from_sql(bytes: PgValue<'_>) -> deserialize::Result<Self> {
        match bytes.as_bytes() {
            b"pending" => Ok(PostStatus::Pending),
            b"approved" => Ok(PostStatus::Approved),
            b"rejected" => Ok(PostStatus::Rejected),
            _ => Err("Unrecognized enum variant".into()),
        }
    }
}

impl ToSql<sql_types::ConsultationStatusEnum, Pg> for ConsultationStatus {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        match *self {
            ConsultationStatus::Pending => out.write_all(b"pending")?,
            ConsultationStatus::InProgress => out.write_all(b"in_progress")?,
            ConsultationStatus::Resolved => out.write_all(b"resolved")?,
            ConsultationStatus::Closed => out.write_all(b"closed")?,
        }
        Ok(serialize::IsNull::No)
    }
}

impl FromSql<sql_types::ConsultationStatusEnum, Pg> for ConsultationStatus {
    fn from_sql(bytes: PgValue<'_>) -> deserialize::Result<Self> {
        match bytes.as_bytes() {
            b"pending" => Ok(ConsultationStatus::Pending),
            b"in_progress" => Ok(ConsultationStatus::InProgress),
            b"resolved" => Ok(ConsultationStatus::Resolved),
            b"closed" => Ok(ConsultationStatus::Closed),
            _ => Err("Unrecognized enum variant".into()),
        }
    }
}

impl ToSql<sql_types::ConsultationPriorityEnum, Pg> for ConsultationPriority {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        match *self {
            ConsultationPriority::Low => out.write_all(b"low")?,
            ConsultationPriority::Normal => out.write_all(b"normal")?,
            ConsultationPriority::High => out.write_all(b"high")?,
            ConsultationPriority::Urgent => out.write_all(b"urgent")?,
        }
        Ok(serialize::IsNull::No)
    }
}

impl FromSql<sql_types::ConsultationPriorityEnum, Pg> for ConsultationPriority {
    fn from_sql(bytes: PgValue<'_>) -> deserialize::Result<Self> {
        match bytes.as_bytes() {
            b"low" => Ok(ConsultationPriority::Low),
            b"normal" => Ok(ConsultationPriority::Normal),
            b"high" => Ok(ConsultationPriority::High),
            b"urgent" => Ok(ConsultationPriority::Urgent),
            _ => Err("Unrecognized enum variant".into()),
        }
    }
}

/// Who a reservation belongs to. The site is guest-only today; the
/// registered variant exists so a future account flow does not degenerate
/// into nullable-column guessing.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BookingParty {
    Guest {
        name: String,
        phone: String,
        email: String,
    },
    Registered {
        customer_id: Uuid,
    },
}

impl BookingParty {
    pub fn into_reservation_fields(
        self,
    ) -> (Option<String>, Option<String>, Option<String>, Option<Uuid>) {
        match self {
            BookingParty::Guest { name, phone, email } => {
                (Some(name), Some(phone), Some(email), None)
            }
            BookingParty::Registered { customer_id } => (None, None, None, Some(customer_id)),
        }
    }
}

#[derive(Queryable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = vehicles)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Vehicle {
    pub id: Uuid,
    pub vehicle_number: String,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub color: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub daily_rate: i64,
    pub status: VehicleStatus,
    pub passengers: Option<i32>,
    pub fuel_type: Option<String>,
    pub transmission: Option<String>,
    pub mileage: Option<i32>,
    pub features: Option<serde_json::Value>,
    pub images: Option<serde_json::Value>,
    pub brand_id: Option<Uuid>,
    pub category_id: Option<Uuid>,
    pub location_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Queryable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = vehicle_brands)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct VehicleBrand {
    pub id: Uuid,
    pub name: String,
    pub name_en: Option<String>,
    pub country: Option<String>,
    pub logo_url: Option<String>,
    pub description: Option<String>,
    pub display_order: Option<i32>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Queryable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = vehicle_categories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct VehicleCategory {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub base_daily_rate: i64,
    pub price_multiplier: Option<f64>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Queryable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = vehicle_locations)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct VehicleLocation {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub phone: Option<String>,
    pub manager_name: Option<String>,
    pub manager_phone: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(
    Queryable, Identifiable, Associations, Debug, Clone, PartialEq, Serialize, Deserialize,
)]
#[diesel(belongs_to(Vehicle))]
#[diesel(table_name = reservations)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Reservation {
    pub id: Uuid,
    pub reservation_number: String,
    pub vehicle_id: Uuid,
    pub customer_id: Option<Uuid>,
    pub guest_name: Option<String>,
    pub guest_phone: Option<String>,
    pub guest_email: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub pickup_location: String,
    pub return_location: String,
    pub total_amount: i64,
    pub status: ReservationStatus,
    pub payment_status: PaymentStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = reservations)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewReservation {
    pub reservation_number: String,
    pub vehicle_id: Uuid,
    pub customer_id: Option<Uuid>,
    pub guest_name: Option<String>,
    pub guest_phone: Option<String>,
    pub guest_email: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub pickup_location: String,
    pub return_location: String,
    pub total_amount: i64,
    pub status: ReservationStatus,
    pub payment_status: PaymentStatus,
    pub notes: Option<String>,
}

#[derive(Queryable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = consultations)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Consultation {
    pub id: Uuid,
    pub consultation_number: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: String,
    #[serde(rename = "type")]
    pub consultation_type: Option<String>,
    pub subject: String,
    pub content: String,
    pub status: ConsultationStatus,
    pub priority: ConsultationPriority,
    pub rental_start_date: Option<NaiveDate>,
    pub rental_end_date: Option<NaiveDate>,
    pub preferred_vehicle: Option<String>,
    pub admin_memo: Option<String>,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = consultations)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewConsultation {
    pub consultation_number: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: String,
    #[serde(rename = "type")]
    pub consultation_type: Option<String>,
    pub subject: String,
    pub content: String,
    pub status: ConsultationStatus,
    pub priority: ConsultationPriority,
    pub rental_start_date: Option<NaiveDate>,
    pub rental_end_date: Option<NaiveDate>,
    pub preferred_vehicle: Option<String>,
    pub is_read: bool,
}

#[derive(Queryable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = support_posts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct SupportPost {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    #[serde(rename = "type")]
    pub post_type: PostType,
    pub author_name: String,
    pub author_password: Option<String>, // bcrypt hash, never published
    pub is_admin: bool,
    pub status: PostStatus,
    pub views: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SupportPost {
    pub fn to_publish_post(&self) -> PublishSupportPost {
        PublishSupportPost {
            id: self.id,
            title: self.title.clone(),
            content: self.content.clone(),
            post_type: self.post_type,
            author_name: self.author_name.clone(),
            is_admin: self.is_admin,
            status: self.status,
            views: self.views,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublishSupportPost {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    #[serde(rename = "type")]
    pub post_type: PostType,
    pub author_name: String,
    pub is_admin: bool,
    pub status: PostStatus,
    pub views: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = support_posts)]
pub struct NewSupportPost {
    pub title: String,
    pub content: String,
    #[serde(rename = "type")]
    pub post_type: PostType,
    pub author_name: String,
    pub author_password: Option<String>, // hash this before inserting!
    pub is_admin: bool,
    pub status: PostStatus,
}
