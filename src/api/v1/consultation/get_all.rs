use diesel::prelude::*;
use serde_derive::{Deserialize, Serialize};
use warp::http::StatusCode;
use warp::{Filter, Reply};

use crate::{db, methods, model};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
struct ConsultationListQuery {
    unread: Option<bool>,
}

pub fn main() -> impl Filter<Extract = (impl Reply,), Error = warp::Rejection> + Clone {
    warp::path("get-all")
        .and(warp::path::end())
        .and(warp::get())
        .and(warp::query::<ConsultationListQuery>())
        .and_then(move |query: ConsultationListQuery| async move {
            let result = db::with_store(move |conn| {
                use crate::schema::consultations::dsl::*;

                let mut listing = consultations.order(created_at.desc()).into_boxed();
                if query.unread == Some(true) {
                    listing = listing.filter(is_read.eq(false));
                }
                Ok(listing.load::<model::Consultation>(conn)?)
            })
            .await;
            match result {
                Ok(rows) => methods::standard_replies::response_with_obj(rows, StatusCode::OK),
                Err(e) => methods::standard_replies::booking_error_response(e),
            }
        })
}
