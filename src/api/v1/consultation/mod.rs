mod get_all;
mod mark_read;
mod new;
mod update_status;

use warp::Filter;

pub fn api_v1_consultation()
-> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    warp::path("consultation")
        .and(
            new::main()
                .or(get_all::main())
                .or(mark_read::main())
                .or(update_status::main()),
        )
        .and(warp::path::end())
}
