use bcrypt::verify;
use diesel::prelude::*;
use serde_derive::{Deserialize, Serialize};
use uuid::Uuid;
use warp::http::StatusCode;
use warp::{Filter, Reply};

use crate::helper_model::BookingError;
use crate::{db, methods};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
struct VerifyPasswordData {
    id: Uuid,
    password: String,
}

/// Ownership check for guest posts before an edit or delete from the UI.
/// Admin posts have no password and always verify false here.
pub fn main() -> impl Filter<Extract = (impl Reply,), Error = warp::Rejection> + Clone {
    warp::path("verify-password")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json())
        .and_then(move |body: VerifyPasswordData| async move {
            let result = db::with_store(move |conn| {
                use crate::schema::support_posts::dsl::*;

                let stored_hash = support_posts
                    .filter(id.eq(body.id))
                    .select(author_password)
                    .get_result::<Option<String>>(conn)?;
                match stored_hash {
                    Some(hashed) => verify(&body.password, &hashed)
                        .map_err(|e| BookingError::Store(e.to_string())),
                    None => Ok(false),
                }
            })
            .await;
            match result {
                Ok(valid) => methods::standard_replies::response_with_obj(
                    serde_json::json!({ "valid": valid }),
                    StatusCode::OK,
                ),
                Err(e) => methods::standard_replies::booking_error_response(e),
            }
        })
}
