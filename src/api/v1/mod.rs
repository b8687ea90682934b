mod booking;
mod consultation;
mod support;
mod vehicle;

use warp::Filter;

pub fn api_v1() -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    warp::path("v1")
        .and(
            vehicle::api_v1_vehicle()
                .or(booking::api_v1_booking())
                .or(consultation::api_v1_consultation())
                .or(support::api_v1_support()),
        )
        .and(warp::path::end())
}
