use chrono::NaiveDate;
use serde_derive::{Deserialize, Serialize};
use uuid::Uuid;
use warp::http::StatusCode;
use warp::{Filter, Reply};

use crate::config::CONFIG;
use crate::helper_model::BookingError;
use crate::{db, methods};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
struct AvailabilityQuery {
    vehicle_id: Uuid,
    start_date: NaiveDate,
    end_date: NaiveDate,
}

pub fn main() -> impl Filter<Extract = (impl Reply,), Error = warp::Rejection> + Clone {
    warp::path("availability")
        .and(warp::path::end())
        .and(warp::get())
        .and(warp::query::<AvailabilityQuery>())
        .and_then(move |query: AvailabilityQuery| async move {
            if query.start_date > query.end_date {
                return methods::standard_replies::bad_request(
                    "start_date must be on or before end_date",
                );
            }
            let result = db::with_store(move |conn| {
                methods::booking::vehicle_is_available(
                    conn,
                    query.vehicle_id,
                    query.start_date,
                    query.end_date,
                    CONFIG.same_day_turnover,
                )
                .map_err(BookingError::from)
            })
            .await;
            match result {
                Ok(available) => methods::standard_replies::response_with_obj(
                    serde_json::json!({
                        "vehicle_id": query.vehicle_id,
                        "start_date": query.start_date,
                        "end_date": query.end_date,
                        "available": available,
                    }),
                    StatusCode::OK,
                ),
                // Fail closed: an errored check never reads as "available".
                Err(e) => methods::standard_replies::booking_error_response(e),
            }
        })
}
