use diesel::prelude::*;
use serde_derive::{Deserialize, Serialize};
use uuid::Uuid;
use warp::http::StatusCode;
use warp::{Filter, Reply};

use crate::{db, helper_model, methods, model};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
struct VehicleGetQuery {
    id: Uuid,
}

pub fn main() -> impl Filter<Extract = (impl Reply,), Error = warp::Rejection> + Clone {
    warp::path("get")
        .and(warp::path::end())
        .and(warp::get())
        .and(warp::query::<VehicleGetQuery>())
        .and_then(move |query: VehicleGetQuery| async move {
            let result = db::with_store(move |conn| {
                use crate::schema::{vehicle_brands, vehicle_categories, vehicle_locations, vehicles};

                let (vehicle, brand, category, location) = vehicles::table
                    .left_join(vehicle_brands::table)
                    .left_join(vehicle_categories::table)
                    .left_join(vehicle_locations::table)
                    .filter(vehicles::id.eq(query.id))
                    .first::<(
                        model::Vehicle,
                        Option<model::VehicleBrand>,
                        Option<model::VehicleCategory>,
                        Option<model::VehicleLocation>,
                    )>(conn)?;
                Ok(helper_model::VehicleDetail {
                    vehicle,
                    brand,
                    category,
                    location,
                })
            })
            .await;
            match result {
                Ok(detail) => methods::standard_replies::response_with_obj(detail, StatusCode::OK),
                Err(e) => methods::standard_replies::booking_error_response(e),
            }
        })
}
