use diesel::prelude::*;
use warp::http::StatusCode;
use warp::{Filter, Reply};

use crate::helper_model::ConsultationForm;
use crate::{db, methods, model};

/// Guest rental inquiry. Validated like the booking form; lands as an
/// unread, pending, normal-priority consultation for the admin desk.
pub fn main() -> impl Filter<Extract = (impl Reply,), Error = warp::Rejection> + Clone {
    warp::path("new")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json())
        .and_then(move |form: ConsultationForm| async move {
            let errors = methods::validation::validate_consultation_form(&form);
            if !errors.is_empty() {
                return methods::standard_replies::validation_failed_response(errors);
            }
            let result = db::with_store(move |conn| {
                use crate::schema::consultations::dsl::*;

                let to_be_inserted = model::NewConsultation {
                    consultation_number: methods::consultation::generate_consultation_number(),
                    customer_name: form.customer_name.trim().to_string(),
                    customer_phone: form.customer_phone.trim().to_string(),
                    customer_email: form.customer_email.trim().to_string(),
                    consultation_type: None,
                    subject: form.subject.trim().to_string(),
                    content: form.content,
                    status: model::ConsultationStatus::Pending,
                    priority: model::ConsultationPriority::Normal,
                    rental_start_date: form.rental_start_date,
                    rental_end_date: form.rental_end_date,
                    preferred_vehicle: form.preferred_vehicle,
                    is_read: false,
                };
                Ok(diesel::insert_into(consultations)
                    .values(&to_be_inserted)
                    .get_result::<model::Consultation>(conn)?)
            })
            .await;
            match result {
                Ok(consultation) => {
                    methods::standard_replies::response_with_obj(consultation, StatusCode::CREATED)
                }
                Err(e) => methods::standard_replies::booking_error_response(e),
            }
        })
}
