use diesel::prelude::*;
use warp::http::StatusCode;
use warp::{Filter, Reply};

use crate::{db, methods, model};

pub fn main() -> impl Filter<Extract = (impl Reply,), Error = warp::Rejection> + Clone {
    warp::path("brands")
        .and(warp::path::end())
        .and(warp::get())
        .and_then(move || async move {
            let result = db::with_store(move |conn| {
                use crate::schema::vehicle_brands::dsl::*;
                Ok(vehicle_brands
                    .order(name.asc())
                    .load::<model::VehicleBrand>(conn)?)
            })
            .await;
            match result {
                Ok(brands) => methods::standard_replies::response_with_obj(brands, StatusCode::OK),
                Err(e) => methods::standard_replies::booking_error_response(e),
            }
        })
}
