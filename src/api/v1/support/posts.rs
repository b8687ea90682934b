use diesel::prelude::*;
use serde_derive::{Deserialize, Serialize};
use warp::http::StatusCode;
use warp::{Filter, Reply};

use crate::{db, methods, model};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
struct PostListQuery {
    #[serde(rename = "type")]
    post_type: Option<String>,
}

/// Public board listing: approved posts only, newest first.
pub fn main() -> impl Filter<Extract = (impl Reply,), Error = warp::Rejection> + Clone {
    warp::path("posts")
        .and(warp::path::end())
        .and(warp::get())
        .and(warp::query::<PostListQuery>())
        .and_then(move |query: PostListQuery| async move {
            let type_filter = match query.post_type.as_deref() {
                None => None,
                Some(raw) => match model::PostType::from_param(raw) {
                    Some(parsed) => Some(parsed),
                    None => {
                        return methods::standard_replies::bad_request("Unknown post type filter");
                    }
                },
            };
            let result = db::with_store(move |conn| {
                use crate::schema::support_posts::dsl::*;

                let mut listing = support_posts
                    .filter(status.eq(model::PostStatus::Approved))
                    .order(created_at.desc())
                    .into_boxed();
                if let Some(parsed) = type_filter {
                    listing = listing.filter(post_type.eq(parsed));
                }
                Ok(listing.load::<model::SupportPost>(conn)?)
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
