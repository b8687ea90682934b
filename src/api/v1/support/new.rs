use bcrypt::{DEFAULT_COST, hash};
use diesel::prelude::*;
use warp::http::StatusCode;
use warp::{Filter, Reply};

use crate::helper_model::{BookingError, SupportPostForm};
use crate::{db, methods, model};

/// New board post. Guest posts carry a bcrypt-hashed password and await
/// moderation; admin posts go live immediately.
pub fn main() -> impl Filter<Extract = (impl Reply,), Error = warp::Rejection> + Clone {
    warp::path("new")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json())
        .and_then(move |form: SupportPostForm| async move {
            let errors = methods::validation::validate_post_form(&form);
            if !errors.is_empty() {
                return methods::standard_replies::validation_failed_response(errors);
            }
            let result = db::with_store(move |conn| {
                use crate::schema::support_posts::dsl::*;

                let hashed_password = match form.author_password {
                    Some(plain) => Some(
                        hash(&plain, DEFAULT_COST)
                            .map_err(|e| BookingError::Store(e.to_string()))?,
                    ),
                    None => None,
                };
                let to_be_inserted = model::NewSupportPost {
                    title: form.title.trim().to_string(),
                    content: form.content,
                    post_type: form.post_type,
                    author_name: form.author_name.trim().to_string(),
                    author_password: hashed_password,
                    is_admin: form.is_admin,
                    status: if form.is_admin {
                        model::PostStatus::Approved
                    } else {
                        model::PostStatus::Pending
                    },
                };
                Ok(diesel::insert_into(support_posts)
                    .values(&to_be_inserted)
                    .get_result::<model::SupportPost>(conn)?)
            })
            .await;
            match result {
                Ok(post) => methods::standard_replies::response_with_obj(
                    post.to_publish_post(),
                    StatusCode::CREATED,
                ),
                Err(e) => methods::standard_replies::booking_error_response(e),
            }
        })
}
