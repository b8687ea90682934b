use diesel::prelude::*;
use serde_derive::{Deserialize, Serialize};
use warp::http::StatusCode;
use warp::{Filter, Reply};

use crate::{db, helper_model, methods, model};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
struct VehicleFilterQuery {
    status: Option<String>,
    category: Option<String>,
    location: Option<String>,
    search: Option<String>,
}

pub fn main() -> impl Filter<Extract = (impl Reply,), Error = warp::Rejection> + Clone {
    warp::path("get-all")
        .and(warp::path::end())
        .and(warp::get())
        .and(warp::query::<VehicleFilterQuery>())
        .and_then(move |filter: VehicleFilterQuery| async move {
            // A bad status value is a caller mistake, not an empty inventory.
            let status_filter = match filter.status.as_deref() {
                None => None,
                Some(raw) => match model::VehicleStatus::from_param(raw) {
                    Some(parsed) => Some(parsed),
                    None => {
                        return methods::standard_replies::bad_request(
                            "Unknown vehicle status filter",
                        );
                    }
                },
            };
            let result = db::with_store(move |conn| {
                use crate::schema::{vehicle_brands, vehicle_categories, vehicle_locations, vehicles};

                let mut query = vehicles::table
                    .left_join(vehicle_brands::table)
                    .left_join(vehicle_categories::table)
                    .left_join(vehicle_locations::table)
                    .order(vehicles::created_at.desc())
                    .into_boxed();
                if let Some(parsed) = status_filter {
                    query = query.filter(vehicles::status.eq(parsed));
                }
                if let Some(category) = filter.category {
                    query = query.filter(vehicle_categories::name.eq(category));
                }
                if let Some(location) = filter.location {
                    query = query.filter(vehicle_locations::name.eq(location));
                }
                if let Some(term) = filter.search {
                    let pattern = format!("%{term}%");
                    query = query.filter(
                        vehicles::model
                            .ilike(pattern.clone())
                            .or(vehicles::brand.ilike(pattern)),
                    );
                }

                let rows = query.load::<(
                    model::Vehicle,
                    Option<model::VehicleBrand>,
                    Option<model::VehicleCategory>,
                    Option<model::VehicleLocation>,
                )>(conn)?;
                Ok(rows
                    .into_iter()
                    .map(|(vehicle, brand, category, location)| helper_model::VehicleDetail {
                        vehicle,
                        brand,
                        category,
                        location,
                    })
                    .collect::<Vec<_>>())
            })
            .await;
            match result {
                Ok(details) => {
                    methods::standard_replies::response_with_obj(details, StatusCode::OK)
                }
                Err(e) => methods::standard_replies::booking_error_response(e),
            }
        })
}
