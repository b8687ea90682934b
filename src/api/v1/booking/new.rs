use diesel::prelude::*;
use warp::http::StatusCode;
use warp::{Filter, Reply};

use crate::config::CONFIG;
use crate::helper_model::{BookingError, BookingForm};
use crate::{db, methods, model};

/// Guest reservation submission. Validation runs before any store traffic;
/// the availability re-check and insert share one serializable transaction
/// inside `methods::booking::create_reservation`.
pub fn main() -> impl Filter<Extract = (impl Reply,), Error = warp::Rejection> + Clone {
    warp::path("new")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json())
        .and_then(move |form: BookingForm| async move {
            let errors = methods::validation::validate_booking_form(&form);
            if !errors.is_empty() {
                return methods::standard_replies::validation_failed_response(errors);
            }
            // validation guarantees both dates are present
            let (Some(rental_start), Some(rental_end)) = (form.start_date, form.end_date) else {
                return methods::standard_replies::bad_request("Missing rental dates");
            };

            let wanted_vehicle = form.vehicle_id;
            let vehicle_result = db::with_store(move |conn| {
                use crate::schema::vehicles::dsl::*;
                Ok(vehicles
                    .filter(id.eq(wanted_vehicle))
                    .get_result::<crate::model::Vehicle>(conn)?)
            })
            .await;
            let vehicle = match vehicle_result {
                Ok(vehicle) => vehicle,
                Err(BookingError::NotFound) => {
                    return methods::standard_replies::bad_request("Vehicle invalid");
                }
                Err(e) => return methods::standard_replies::booking_error_response(e),
            };
            if vehicle.status != model::VehicleStatus::Available {
                return methods::standard_replies::vehicle_unavailable_response();
            }

            let result = db::with_store(move |conn| {
                methods::booking::create_reservation(
                    conn,
                    &form,
                    rental_start,
                    rental_end,
                    &vehicle,
                    &CONFIG,
                )
            })
            .await;
            match result {
                Ok(reservation) => {
                    methods::standard_replies::response_with_obj(reservation, StatusCode::CREATED)
                }
                Err(e) => methods::standard_replies::booking_error_response(e),
            }
        })
}
