use chrono::Utc;

/// Consultation numbers are millisecond timestamps behind a literal prefix,
/// e.g. `CONS1754550000000`. Unlike reservation numbers they are not
/// guest-facing lookup keys, so no collision handling is attempted.
pub fn generate_consultation_number() -> String {
    format!("CONS{}", Utc::now().timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_has_prefix_and_digits() {
        let number = generate_consultation_number();
        assert!(number.starts_with("CONS"));
        assert!(number.len() > 4);
        assert!(number[4..].bytes().all(|b| b.is_ascii_digit()));
    }
}
