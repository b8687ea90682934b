use chrono::{Duration, Utc};
use serde_derive::{Deserialize, Serialize};
use uuid::Uuid;
use warp::http::StatusCode;
use warp::{Filter, Reply};

use crate::config::CONFIG;
use crate::helper_model::BookingError;
use crate::{db, methods};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
struct BookedDatesQuery {
    vehicle_id: Uuid,
}

/// Calendar feed: every individual day inside the configured horizon that a
/// blocking reservation covers, for rendering disabled dates.
pub fn main() -> impl Filter<Extract = (impl Reply,), Error = warp::Rejection> + Clone {
    warp::path("booked-dates")
        .and(warp::path::end())
        .and(warp::get())
        .and(warp::query::<BookedDatesQuery>())
        .and_then(move |query: BookedDatesQuery| async move {
            let today = Utc::now().date_naive();
            let until = today + Duration::days(CONFIG.booked_dates_horizon_days);
            let result = db::with_store(move |conn| {
                methods::booking::blocking_ranges(conn, query.vehicle_id, today, until)
                    .map_err(BookingError::from)
            })
            .await;
            match result {
                Ok(ranges) => {
                    let days = methods::booking::booked_dates(&ranges, today, until);
                    methods::standard_replies::response_with_obj(
                        serde_json::json!({
                            "vehicle_id": query.vehicle_id,
                            "booked_dates": days,
                        }),
                        StatusCode::OK,
                    )
                }
                Err(e) => methods::standard_replies::booking_error_response(e),
            }
        })
}
