mod all;
mod delete;
mod get;
mod new;
mod posts;
mod update_status;
mod verify_password;

use warp::Filter;

pub fn api_v1_support()
-> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    warp::path("support")
        .and(
            posts::main()
                .or(new::main())
                .or(get::main())
                .or(verify_password::main())
                .or(all::main())
                .or(update_status::main())
                .or(delete::main()),
        )
        .and(warp::path::end())
}
