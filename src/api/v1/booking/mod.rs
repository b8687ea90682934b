mod get;
mod history;
mod new;
mod update_status;

use warp::Filter;

pub fn api_v1_booking()
-> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    warp::path("booking")
        .and(
            new::main()
                .or(history::main())
                .or(get::main())
                .or(update_status::main()),
        )
        .and(warp::path::end())
}
