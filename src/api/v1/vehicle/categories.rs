use diesel::prelude::*;
use warp::http::StatusCode;
use warp::{Filter, Reply};

use crate::{db, methods, model};

pub fn main() -> impl Filter<Extract = (impl Reply,), Error = warp::Rejection> + Clone {
    warp::path("categories")
        .and(warp::path::end())
        .and(warp::get())
        .and_then(move || async move {
            let result = db::with_store(move |conn| {
                use crate::schema::vehicle_categories::dsl::*;
                Ok(vehicle_categories
                    .filter(is_active.eq(true))
                    .order(name.asc())
                    .load::<model::VehicleCategory>(conn)?)
            })
            .await;
            match result {
                Ok(categories) => {
                    methods::standard_replies::response_with_obj(categories, StatusCode::OK)
                }
                Err(e) => methods::standard_replies::booking_error_response(e),
            }
        })
}
