use diesel::prelude::*;
use warp::http::StatusCode;
use warp::{Filter, Reply};

use crate::{db, methods, model};

pub fn main() -> impl Filter<Extract = (impl Reply,), Error = warp::Rejection> + Clone {
    warp::path("locations")
        .and(warp::path::end())
        .and(warp::get())
        .and_then(move || async move {
            let result = db::with_store(move |conn| {
                use crate::schema::vehicle_locations::dsl::*;
                Ok(vehicle_locations
                    .filter(is_active.eq(true))
                    .order(name.asc())
                    .load::<model::VehicleLocation>(conn)?)
            })
            .await;
            match result {
                Ok(locations) => {
                    methods::standard_replies::response_with_obj(locations, StatusCode::OK)
                }
                Err(e) => methods::standard_replies::booking_error_response(e),
            }
        })
}
