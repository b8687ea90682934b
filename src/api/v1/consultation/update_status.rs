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
    status: model::ConsultationStatus,
    admin_memo: Option<String>,
}

pub fn main() -> impl Filter<Extract = (impl Reply,), Error = warp::Rejection> + Clone {
    warp::path("update-status")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json())
        .and_then(move |body: UpdateStatusData| async move {
            let result = db::with_store(move |conn| {
                use crate::schema::consultations::dsl::*;

                let updated = match body.admin_memo {
                    Some(memo) => diesel::update(consultations.find(body.id))
                        .set((
                            status.eq(body.status),
                            admin_memo.eq(memo),
                            updated_at.eq(Utc::now()),
                        ))
                        .get_result::<model::Consultation>(conn)?,
                    None => diesel::update(consultations.find(body.id))
                        .set((status.eq(body.status), updated_at.eq(Utc::now())))
                        .get_result::<model::Consultation>(conn)?,
                };
                Ok(updated)
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
