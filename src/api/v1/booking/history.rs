use diesel::prelude::*;
use serde_derive::{Deserialize, Serialize};
use warp::http::StatusCode;
use warp::{Filter, Reply};

use crate::config::CONFIG;
use crate::{db, helper_model, methods, model};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
struct HistoryQuery {
    email: String,
    limit: Option<i64>,
}

/// Self-service booking lookup for guests, keyed by the email they booked
/// with. No bookings is an empty list, not an error.
pub fn main() -> impl Filter<Extract = (impl Reply,), Error = warp::Rejection> + Clone {
    warp::path("history")
        .and(warp::path::end())
        .and(warp::get())
        .and(warp::query::<HistoryQuery>())
        .and_then(move |query: HistoryQuery| async move {
            let page_size = query
                .limit
                .unwrap_or(CONFIG.history_page_size)
                .clamp(1, CONFIG.history_page_size);
            let result = db::with_store(move |conn| {
                use crate::schema::{reservations, vehicle_brands, vehicles};

                let rows = reservations::table
                    .inner_join(vehicles::table.left_join(vehicle_brands::table))
                    .filter(reservations::guest_email.eq(query.email))
                    .order(reservations::created_at.desc())
                    .limit(page_size)
                    .load::<(
                        model::Reservation,
                        (model::Vehicle, Option<model::VehicleBrand>),
                    )>(conn)?;
                Ok(rows
                    .into_iter()
                    .map(|(reservation, (vehicle, brand))| helper_model::BookingHistoryEntry {
                        vehicle: helper_model::VehicleSummary::from_joined(&vehicle, brand.as_ref()),
                        reservation,
                    })
                    .collect::<Vec<_>>())
            })
            .await;
            match result {
                Ok(entries) => {
                    methods::standard_replies::response_with_obj(entries, StatusCode::OK)
                }
                Err(e) => methods::standard_replies::booking_error_response(e),
            }
        })
}
