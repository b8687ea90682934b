use chrono::Utc;
use diesel::prelude::*;
use serde_derive::{Deserialize, Serialize};
use uuid::Uuid;
use warp::http::StatusCode;
use warp::{Filter, Reply};

use crate::{db, methods, model};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
struct UpdateStatusData {
    id: Uuid,
    status: model::PostStatus,
}

/// Admin moderation: approve or reject a pending guest post.
pub fn main() -> impl Filter<Extract = (impl Reply,), Error = warp::Rejection> + Clone {
    warp::path("update-status")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json())
        .and_then(move |body: UpdateStatusData| async move {
            let result = db::with_store(move |conn| {
                use crate::schema::support_posts::dsl::*;
                Ok(diesel::update(support_posts.find(body.id))
                    .set((status.eq(body.status), updated_at.eq(Utc::now())))
                    .get_result::<model::SupportPost>(conn)?)
            })
            .await;
            match result {
                Ok(updated) => methods::standard_replies::response_with_obj(
                    updated.to_publish_post(),
                    StatusCode::OK,
                ),
                Err(e) => methods::standard_replies::booking_error_response(e),
            }
        })
}
