use diesel::prelude::*;
use serde_derive::{Deserialize, Serialize};
use uuid::Uuid;
use warp::http::StatusCode;
use warp::{Filter, Reply};

use crate::helper_model::BookingError;
use crate::{db, methods};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
struct DeletePostData {
    id: Uuid,
}

pub fn main() -> impl Filter<Extract = (impl Reply,), Error = warp::Rejection> + Clone {
    warp::path("delete")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json())
        .and_then(move |body: DeletePostData| async move {
            let result = db::with_store(move |conn| {
                use crate::schema::support_posts::dsl::*;
                let removed = diesel::delete(support_posts.find(body.id)).execute(conn)?;
                if removed == 0 {
                    return Err(BookingError::NotFound);
                }
                Ok(())
            })
            .await;
            match result {
                Ok(()) => methods::standard_replies::response_with_obj(
                    serde_json::json!({ "deleted": true }),
                    StatusCode::OK,
                ),
                Err(e) => methods::standard_replies::booking_error_response(e),
            }
        })
}
