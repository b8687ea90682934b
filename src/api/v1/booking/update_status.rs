use chrono::Utc;
use diesel::prelude::*;
use serde_derive::{Deserialize, Serialize};
use uuid::Uuid;
use warp::http::StatusCode;
use warp::{Filter, Reply};

use crate::helper_model::{BookingError, FieldError};
use crate::{db, methods, model};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
struct UpdateStatusData {
    id: Uuid,
    status: model::ReservationStatus,
}

/// Admin moderation of a reservation. Only lifecycle-legal moves touch the
/// row; anything else is rejected with the attempted transition spelled out.
pub fn main() -> impl Filter<Extract = (impl Reply,), Error = warp::Rejection> + Clone {
    warp::path("update-status")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json())
        .and_then(move |body: UpdateStatusData| async move {
            let result = db::with_store(move |conn| {
                use crate::schema::reservations::dsl::*;

                let current = reservations
                    .filter(id.eq(body.id))
                    .get_result::<model::Reservation>(conn)?;
                if !current.status.can_transition_to(body.status) {
                    return Err(BookingError::Validation(vec![FieldError::new(
                        "status",
                        &format!(
                            "A {:?} reservation cannot become {:?}",
                            current.status, body.status
                        ),
                    )]));
                }
                Ok(diesel::update(reservations.find(body.id))
                    .set((status.eq(body.status), updated_at.eq(Utc::now())))
                    .get_result::<model::Reservation>(conn)?)
            })
            .await;
            match result {
                Ok(updated) => {
                    methods::standard_replies::response_with_obj(updated, StatusCode::OK)
                }
                Err(e) => methods::standard_replies::booking_error_response(e),
            }
        })
}
