use chrono::Utc;
use diesel::prelude::*;
use serde_derive::{Deserialize, Serialize};
use uuid::Uuid;
use warp::http::StatusCode;
use warp::{Filter, Reply};

use crate::{db, methods, model};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
struct MarkReadData {
    id: Uuid,
}

pub fn main() -> impl Filter<Extract = (impl Reply,), Error = warp::Rejection> + Clone {
    warp::path("mark-read")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json())
        .and_then(move |body: MarkReadData| async move {
            let result = db::with_store(move |conn| {
                use crate::schema::consultations::dsl::*;
                Ok(diesel::update(consultations.find(body.id))
                    .set((is_read.eq(true), updated_at.eq(Utc::now())))
                    .get_result::<model::Consultation>(conn)?)
            })
            .await;
            match result {
                Ok(updated) => {
                    methods::standard_replies::response_with_obj(updated, StatusCode::OK)
                }
                Err(e) => methods::standard_replies::booking_error_response(e),
            }
        })
}
