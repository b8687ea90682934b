mod availability;
mod booked_dates;
mod brands;
mod categories;
mod get;
mod get_all;
mod locations;

use warp::Filter;

pub fn api_v1_vehicle()
-> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    warp::path("vehicle")
        .and(
            availability::main()
                .or(booked_dates::main())
                .or(get_all::main())
                .or(get::main())
                .or(brands::main())
                .or(categories::main())
                .or(locations::main()),
        )
        .and(warp::path::end())
}
