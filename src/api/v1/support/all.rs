use diesel::prelude::*;
use warp::http::StatusCode;
use warp::{Filter, Reply};

use crate::{db, methods, model};

/// Admin listing: every post regardless of moderation state.
pub fn main() -> impl Filter<Extract = (impl Reply,), Error = warp::Rejection> + Clone {
    warp::path("all")
        .and(warp::path::end())
        .and(warp::get())
        .and_then(move || async move {
            let result = db::with_store(move |conn| {
                use crate::schema::support_posts::dsl::*;
                Ok(support_posts
                    .order(created_at.desc())
                    .load::<model::SupportPost>(conn)?)
            })
            .await;
            match result {
                Ok(rows) => {
                    let posts: Vec<model::PublishSupportPost> =
                        rows.iter().map(|p| p.to_publish_post()).collect();
                    methods::standard_replies::response_with_obj(posts, StatusCode::OK)
                }
                Err(e) => methods::standard_replies::booking_error_response(e),
            }
        })
}
