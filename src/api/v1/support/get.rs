use diesel::prelude::*;
use serde_derive::{Deserialize, Serialize};
use uuid::Uuid;
use warp::http::StatusCode;
use warp::{Filter, Reply};

use crate::{db, methods, model};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
struct PostGetQuery {
    id: Uuid,
}

/// Read one approved post and bump its view counter.
pub fn main() -> impl Filter<Extract = (impl Reply,), Error = warp::Rejection> + Clone {
    warp::path("get")
        .and(warp::path::end())
        .and(warp::get())
        .and(warp::query::<PostGetQuery>())
        .and_then(move |query: PostGetQuery| async move {
            let result = db::with_store(move |conn| {
                use crate::schema::support_posts::dsl::*;

                // only approved posts are readable, so the counter never
                // moves for hidden ones
                let post = support_posts
                    .filter(id.eq(query.id))
                    .filter(status.eq(model::PostStatus::Approved))
                    .get_result::<model::SupportPost>(conn)?;
                Ok(diesel::update(support_posts.find(post.id))
                    .set(views.eq(views + 1))
                    .get_result::<model::SupportPost>(conn)?)
            })
            .await;
            match result {
                Ok(post) => methods::standard_replies::response_with_obj(
                    post.to_publish_post(),
                    StatusCode::OK,
                ),
                Err(e) => methods::standard_replies::booking_error_response(e),
            }
        })
}
