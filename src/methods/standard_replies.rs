use crate::helper_model::{BookingError, ErrorResponse, FieldError};
use warp::http::StatusCode;
use warp::{Rejection, Reply};

pub fn response_with_obj<T>(
    obj: T,
    status_code: StatusCode,
) -> Result<(warp::reply::Response,), Rejection>
where
    T: serde::Serialize,
{
    Ok((warp::reply::with_status(warp::reply::json(&obj), status_code).into_response(),))
}

pub fn bad_request(err_msg: &str) -> Result<(warp::reply::Response,), Rejection> {
    let msg: ErrorResponse = ErrorResponse {
        title: String::from("Bad Request"),
        message: err_msg.to_string(),
    };
    Ok::<_, Rejection>((warp::reply::with_status(
        warp::reply::json(&msg),
        StatusCode::BAD_REQUEST,
    )
    .into_response(),))
}

pub fn not_found_response(what: &str) -> Result<(warp::reply::Response,), Rejection> {
    let msg: ErrorResponse = ErrorResponse {
        title: String::from("Not Found"),
        message: what.to_owned() + " could not be found.",
    };
    Ok((warp::reply::with_status(warp::reply::json(&msg), StatusCode::NOT_FOUND).into_response(),))
}

/// Field-keyed rejection for a form the guest can fix inline.
pub fn validation_failed_response(
    errors: Vec<FieldError>,
) -> Result<(warp::reply::Response,), Rejection> {
    let msg = serde_json::json!({
        "title": "Validation Failed",
        "message": "Please correct the highlighted fields and try again.",
        "errors": errors,
    });
    Ok((warp::reply::with_status(
        warp::reply::json(&msg),
        StatusCode::UNPROCESSABLE_ENTITY,
    )
    .into_response(),))
}

pub fn booking_conflict_response() -> Result<(warp::reply::Response,), Rejection> {
    let msg: ErrorResponse = ErrorResponse {
        title: String::from("Booking Not Allowed"),
        message: String::from(
            "This vehicle is already booked for the selected dates. Please pick another date.",
        ),
    };
    Ok((warp::reply::with_status(warp::reply::json(&msg), StatusCode::CONFLICT).into_response(),))
}

pub fn vehicle_unavailable_response() -> Result<(warp::reply::Response,), Rejection> {
    let msg: ErrorResponse = ErrorResponse {
        title: String::from("Booking Not Allowed"),
        message: String::from("This vehicle is not currently available for booking."),
    };
    Ok((warp::reply::with_status(warp::reply::json(&msg), StatusCode::CONFLICT).into_response(),))
}

pub fn internal_server_error_response(msg: String) -> Result<(warp::reply::Response,), Rejection> {
    log::error!("{msg}");
    let msg: ErrorResponse = ErrorResponse {
        title: String::from("Internal Server Error"),
        message: String::from("Please try again later."),
    };
    Ok::<_, Rejection>((warp::reply::with_status(
        warp::reply::json(&msg),
        StatusCode::INTERNAL_SERVER_ERROR,
    )
    .into_response(),))
}

pub fn store_timeout_response() -> Result<(warp::reply::Response,), Rejection> {
    log::error!("data store call exceeded the configured deadline");
    let msg: ErrorResponse = ErrorResponse {
        title: String::from("Store Timeout"),
        message: String::from("The reservation system is slow right now. Please try again later."),
    };
    Ok((warp::reply::with_status(
        warp::reply::json(&msg),
        StatusCode::GATEWAY_TIMEOUT,
    )
    .into_response(),))
}

/// One exit for every `BookingError` an endpoint bubbles up. Store failures
/// stay generic toward the guest and loud in the log.
pub fn booking_error_response(err: BookingError) -> Result<(warp::reply::Response,), Rejection> {
    match err {
        BookingError::Validation(errors) => validation_failed_response(errors),
        BookingError::AvailabilityConflict => booking_conflict_response(),
        BookingError::Store(detail) => internal_server_error_response(detail),
        BookingError::StoreTimeout => store_timeout_response(),
        BookingError::NotFound => not_found_response("The requested record"),
    }
}
