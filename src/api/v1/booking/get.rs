use diesel::prelude::*;
use serde_derive::{Deserialize, Serialize};
use uuid::Uuid;
use warp::http::StatusCode;
use warp::{Filter, Reply};

use crate::{db, helper_model, methods, model};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
struct BookingGetQuery {
    id: Uuid,
}

pub fn main() -> impl Filter<Extract = (impl Reply,), Error = warp::Rejection> + Clone {
    warp::path("get")
        .and(warp::path::end())
        .and(warp::get())
        .and(warp::query::<BookingGetQuery>())
        .and_then(move |query: BookingGetQuery| async move {
            let result = db::with_store(move |conn| {
                use crate::schema::{reservations, vehicle_brands, vehicles};

                let (reservation, (vehicle, brand)) = reservations::table
                    .inner_join(vehicles::table.left_join(vehicle_brands::table))
                    .filter(reservations::id.eq(query.id))
                    .first::<(
                        model::Reservation,
                        (model::Vehicle, Option<model::VehicleBrand>),
                    )>(conn)?;
                Ok(helper_model::BookingHistoryEntry {
                    vehicle: helper_model::VehicleSummary::from_joined(&vehicle, brand.as_ref()),
                    reservation,
                })
            })
            .await;
            match result {
                Ok(entry) => methods::standard_replies::response_with_obj(entry, StatusCode::OK),
                Err(e) => methods::standard_replies::booking_error_response(e),
            }
        })
}
