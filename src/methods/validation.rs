use regex::Regex;

use crate::helper_model::{BookingForm, ConsultationForm, FieldError, SupportPostForm};

fn is_valid_email(email: &str) -> bool {
    lazy_static::lazy_static! {
        static ref EMAIL_REGEX: Regex = Regex::new(
            r"^[^\s@]+@[^\s@]+\.[^\s@]+$"
        ).expect("Invalid email regex");
    }
    // RFC 5321 length limit
    if email.len() > 254 {
        return false;
    }
    EMAIL_REGEX.is_match(email)
}

fn is_valid_phone_number(phone: &str) -> bool {
    lazy_static::lazy_static! {
        static ref PHONE_REGEX: Regex = Regex::new(
            r"^[0-9\-\+\s\(\)]+$"  // digits plus common separators
        ).expect("Invalid phone number regex");
    }
    PHONE_REGEX.is_match(phone)
}

/// Check a booking form before anything touches the store. Every failing
/// field is reported; an empty result means the form may be submitted.
pub fn validate_booking_form(form: &BookingForm) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if form.customer_name.trim().is_empty() {
        errors.push(FieldError::new("customer_name", "Please enter your name"));
    }

    let phone = form.customer_phone.trim();
    if phone.is_empty() {
        errors.push(FieldError::new(
            "customer_phone",
            "Please enter a contact number",
        ));
    } else if !is_valid_phone_number(phone) {
        errors.push(FieldError::new(
            "customer_phone",
            "Not a valid contact number format",
        ));
    }

    let email = form.customer_email.trim();
    if email.is_empty() {
        errors.push(FieldError::new(
            "customer_email",
            "Please enter an email address",
        ));
    } else if !is_valid_email(email) {
        errors.push(FieldError::new(
            "customer_email",
            "Not a valid email format",
        ));
    }

    if form.start_date.is_none() {
        errors.push(FieldError::new("start_date", "Please pick a pickup date"));
    }

    match (form.start_date, form.end_date) {
        (_, None) => {
            errors.push(FieldError::new("end_date", "Please pick a return date"));
        }
        (Some(start), Some(end)) if end < start => {
            errors.push(FieldError::new(
                "end_date",
                "The return date must be on or after the pickup date",
            ));
        }
        _ => {}
    }

    errors
}

pub fn validate_consultation_form(form: &ConsultationForm) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if form.customer_name.trim().is_empty() {
        errors.push(FieldError::new("customer_name", "Please enter your name"));
    }
    if !is_valid_phone_number(form.customer_phone.trim()) {
        errors.push(FieldError::new(
            "customer_phone",
            "Not a valid contact number format",
        ));
    }
    if !is_valid_email(form.customer_email.trim()) {
        errors.push(FieldError::new(
            "customer_email",
            "Not a valid email format",
        ));
    }
    if form.subject.trim().is_empty() {
        errors.push(FieldError::new("subject", "Please enter a subject"));
    }
    if form.content.trim().is_empty() {
        errors.push(FieldError::new("content", "Please enter your inquiry"));
    }
    if let (Some(start), Some(end)) = (form.rental_start_date, form.rental_end_date) {
        if end < start {
            errors.push(FieldError::new(
                "rental_end_date",
                "The rental period is reversed",
            ));
        }
    }

    errors
}

pub fn validate_post_form(form: &SupportPostForm) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if form.title.trim().is_empty() {
        errors.push(FieldError::new("title", "Please enter a title"));
    }
    if form.content.trim().is_empty() {
        errors.push(FieldError::new("content", "Please enter the post body"));
    }
    if form.author_name.trim().is_empty() {
        errors.push(FieldError::new("author_name", "Please enter your name"));
    }
    if !form.is_admin && form.author_password.as_deref().is_none_or(str::is_empty) {
        errors.push(FieldError::new(
            "author_password",
            "Guest posts need a password for later edits",
        ));
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn valid_form() -> BookingForm {
        BookingForm {
            vehicle_id: Uuid::nil(),
            customer_name: String::from("김렌트"),
            customer_phone: String::from("010-1234-5678"),
            customer_email: String::from("a@b.com"),
            start_date: NaiveDate::from_ymd_opt(2024, 7, 1),
            end_date: NaiveDate::from_ymd_opt(2024, 7, 3),
            start_time: None,
            end_time: None,
            notes: None,
        }
    }

    fn fields(errors: &[FieldError]) -> Vec<&str> {
        errors.iter().map(|e| e.field.as_str()).collect()
    }

    #[test]
    fn a_fully_valid_form_passes() {
        assert!(validate_booking_form(&valid_form()).is_empty());
    }

    #[test]
    fn empty_name_is_rejected() {
        let mut form = valid_form();
        form.customer_name = String::from("   ");
        assert_eq!(fields(&validate_booking_form(&form)), vec!["customer_name"]);
    }

    #[test]
    fn malformed_phone_is_rejected() {
        let mut form = valid_form();
        form.customer_phone = String::from("abc");
        assert_eq!(fields(&validate_booking_form(&form)), vec!["customer_phone"]);
    }

    #[test]
    fn malformed_email_is_rejected() {
        let mut form = valid_form();
        form.customer_email = String::from("not-an-email");
        assert_eq!(fields(&validate_booking_form(&form)), vec!["customer_email"]);
    }

    #[test]
    fn end_before_start_is_rejected() {
        let mut form = valid_form();
        form.end_date = NaiveDate::from_ymd_opt(2024, 6, 30);
        assert_eq!(fields(&validate_booking_form(&form)), vec!["end_date"]);
    }

    #[test]
    fn missing_dates_are_reported_per_field() {
        let mut form = valid_form();
        form.start_date = None;
        form.end_date = None;
        assert_eq!(
            fields(&validate_booking_form(&form)),
            vec!["start_date", "end_date"]
        );
    }

    #[test]
    fn every_failing_field_is_reported_at_once() {
        let form = BookingForm {
            vehicle_id: Uuid::nil(),
            customer_name: String::new(),
            customer_phone: String::from("abc"),
            customer_email: String::from("not-an-email"),
            start_date: None,
            end_date: None,
            start_time: None,
            end_time: None,
            notes: None,
        };
        assert_eq!(
            fields(&validate_booking_form(&form)),
            vec![
                "customer_name",
                "customer_phone",
                "customer_email",
                "start_date",
                "end_date"
            ]
        );
    }

    #[test]
    fn consultation_requires_subject_and_content() {
        let form = ConsultationForm {
            customer_name: String::from("김렌트"),
            customer_phone: String::from("010-1234-5678"),
            customer_email: String::from("a@b.com"),
            subject: String::new(),
            content: String::new(),
            rental_start_date: None,
            rental_end_date: None,
            preferred_vehicle: None,
        };
        assert_eq!(
            fields(&validate_consultation_form(&form)),
            vec!["subject", "content"]
        );
    }

    #[test]
    fn guest_post_requires_a_password() {
        let form = SupportPostForm {
            title: String::from("문의합니다"),
            content: String::from("장기 렌트 문의"),
            post_type: crate::model::PostType::Community,
            author_name: String::from("김렌트"),
            author_password: None,
            is_admin: false,
        };
        assert_eq!(fields(&validate_post_form(&form)), vec!["author_password"]);

        let admin = SupportPostForm {
            author_password: None,
            is_admin: true,
            ..form
        };
        assert!(validate_post_form(&admin).is_empty());
    }
}
