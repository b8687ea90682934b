use chrono::{NaiveDate, NaiveTime, Utc};
use diesel::prelude::*;
use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind};
use rand::Rng;
use uuid::Uuid;

use crate::config::BookingConfig;
use crate::helper_model::{BookingError, BookingForm};
use crate::model::{
    BookingParty, NewReservation, PaymentStatus, Reservation, ReservationStatus, Vehicle,
};

/// Guest-facing reservation numbers look like `RENT-20240610-0482`.
pub const RESERVATION_NUMBER_PREFIX: &str = "RENT";

// Suffixes are random in 0000..=9999; the store enforces uniqueness and a
// collision regenerates, bounded by this attempt count.
const RESERVATION_NUMBER_ATTEMPTS: usize = 5;

const UNIQUE_RESERVATION_NUMBER_CONSTRAINT: &str = "reservations_reservation_number_key";

/// Interval-intersection test between a stored booking and a queried window.
/// With `same_day_turnover` the shared boundary day (return day == pickup
/// day) stops counting as a conflict.
pub fn ranges_overlap(
    booked_start: NaiveDate,
    booked_end: NaiveDate,
    query_start: NaiveDate,
    query_end: NaiveDate,
    same_day_turnover: bool,
) -> bool {
    if same_day_turnover {
        booked_start < query_end && booked_end > query_start
    } else {
        booked_start <= query_end && booked_end >= query_start
    }
}

/// Rental duration in whole days, inclusive of both pickup and return day,
/// never less than one.
pub fn rental_days(start: NaiveDate, end: NaiveDate) -> i64 {
    let days = (end - start).num_days() + 1;
    if days > 0 { days } else { 1 }
}

/// Daily rate times inclusive days, minus the promotional discount
/// (round-half-up on the discount amount). Amounts are whole won.
pub fn quote_total(daily_rate: i64, days: i64, discount_pct: i64) -> i64 {
    let subtotal = daily_rate * days;
    let discount = (subtotal * discount_pct + 50) / 100;
    subtotal - discount
}

pub fn generate_reservation_number(date: NaiveDate) -> String {
    let mut rng = rand::rng();
    let suffix: u32 = rng.random_range(0..10_000);
    format!(
        "{}-{}-{:04}",
        RESERVATION_NUMBER_PREFIX,
        date.format("%Y%m%d"),
        suffix
    )
}

/// Expand one booked range into its individual days, clamped to a horizon.
/// The iterator is restartable; callers may re-run it freely.
pub fn expand_range(
    booked_start: NaiveDate,
    booked_end: NaiveDate,
    from: NaiveDate,
    until: NaiveDate,
) -> impl Iterator<Item = NaiveDate> {
    let lo = booked_start.max(from);
    let hi = booked_end.min(until);
    lo.iter_days().take_while(move |day| *day <= hi)
}

/// The sorted, de-duplicated set of calendar days covered by blocking
/// reservations, for the disabled-date calendar feed.
pub fn booked_dates(
    ranges: &[(NaiveDate, NaiveDate)],
    from: NaiveDate,
    until: NaiveDate,
) -> Vec<NaiveDate> {
    let mut days: Vec<NaiveDate> = ranges
        .iter()
        .flat_map(|&(booked_start, booked_end)| expand_range(booked_start, booked_end, from, until))
        .collect();
    days.sort_unstable();
    days.dedup();
    days
}

/// Date ranges of reservations that block `v_id` somewhere inside
/// `[from, until]`. The SQL prefilter is the inclusive overlap test; the
/// exact (policy-aware) comparison happens on the loaded rows.
pub fn blocking_ranges(
    conn: &mut PgConnection,
    v_id: Uuid,
    from: NaiveDate,
    until: NaiveDate,
) -> QueryResult<Vec<(NaiveDate, NaiveDate)>> {
    use crate::schema::reservations::dsl::*;
    reservations
        .filter(vehicle_id.eq(v_id))
        .filter(status.eq_any(vec![
            ReservationStatus::Pending,
            ReservationStatus::Confirmed,
        ]))
        .filter(start_date.le(until))
        .filter(end_date.ge(from))
        .select((start_date, end_date))
        .load::<(NaiveDate, NaiveDate)>(conn)
}

/// Read-only availability check. Callers must treat an `Err` as
/// unavailable, never as free.
pub fn vehicle_is_available(
    conn: &mut PgConnection,
    v_id: Uuid,
    query_start: NaiveDate,
    query_end: NaiveDate,
    same_day_turnover: bool,
) -> QueryResult<bool> {
    let booked = blocking_ranges(conn, v_id, query_start, query_end)?;
    let conflict = booked.iter().any(|&(booked_start, booked_end)| {
        ranges_overlap(
            booked_start,
            booked_end,
            query_start,
            query_end,
            same_day_turnover,
        )
    });
    Ok(!conflict)
}

enum TxnError {
    Conflict,
    Db(diesel::result::Error),
}

impl From<diesel::result::Error> for TxnError {
    fn from(e: diesel::result::Error) -> TxnError {
        TxnError::Db(e)
    }
}

/// Insert a pending reservation for an already-validated form.
///
/// The availability re-check and the insert share one serializable
/// transaction, so two guests racing for the same window get one row and
/// one deterministic conflict instead of a double booking. A reservation
/// number collision regenerates and retries.
pub fn create_reservation(
    conn: &mut PgConnection,
    form: &BookingForm,
    query_start: NaiveDate,
    query_end: NaiveDate,
    vehicle: &Vehicle,
    cfg: &BookingConfig,
) -> Result<Reservation, BookingError> {
    let party = BookingParty::Guest {
        name: form.customer_name.trim().to_string(),
        phone: form.customer_phone.trim().to_string(),
        email: form.customer_email.trim().to_string(),
    };
    let (g_name, g_phone, g_email, cust_id) = party.into_reservation_fields();

    let days = rental_days(query_start, query_end);
    let total = quote_total(vehicle.daily_rate, days, cfg.launch_discount_pct);

    let pickup_time = form
        .start_time
        .unwrap_or_else(|| NaiveTime::from_hms_opt(9, 0, 0).expect("09:00 is a valid time"));
    let return_time = form
        .end_time
        .unwrap_or_else(|| NaiveTime::from_hms_opt(18, 0, 0).expect("18:00 is a valid time"));

    for _ in 0..RESERVATION_NUMBER_ATTEMPTS {
        let candidate = NewReservation {
            reservation_number: generate_reservation_number(Utc::now().date_naive()),
            vehicle_id: vehicle.id,
            customer_id: cust_id,
            guest_name: g_name.clone(),
            guest_phone: g_phone.clone(),
            guest_email: g_email.clone(),
            start_date: query_start,
            end_date: query_end,
            start_time: pickup_time,
            end_time: return_time,
            pickup_location: cfg.default_location.clone(),
            return_location: cfg.default_location.clone(),
            total_amount: total,
            status: ReservationStatus::Pending,
            payment_status: PaymentStatus::Pending,
            notes: form.notes.clone(),
        };

        let attempt = conn.build_transaction().serializable().run(|conn| {
            let booked = blocking_ranges(conn, vehicle.id, query_start, query_end)?;
            let conflict = booked.iter().any(|&(booked_start, booked_end)| {
                ranges_overlap(
                    booked_start,
                    booked_end,
                    query_start,
                    query_end,
                    cfg.same_day_turnover,
                )
            });
            if conflict {
                return Err(TxnError::Conflict);
            }
            use crate::schema::reservations::dsl::*;
            Ok(diesel::insert_into(reservations)
                .values(&candidate)
                .get_result::<Reservation>(conn)?)
        });

        match attempt {
            Ok(created) => return Ok(created),
            Err(TxnError::Conflict) => return Err(BookingError::AvailabilityConflict),
            Err(TxnError::Db(diesel::result::Error::DatabaseError(
                DatabaseErrorKind::UniqueViolation,
                info,
            ))) if info.constraint_name() == Some(UNIQUE_RESERVATION_NUMBER_CONSTRAINT) => {
                // Suffix collision for today; roll a new number.
                continue;
            }
            Err(TxnError::Db(diesel::result::Error::DatabaseError(
                DatabaseErrorKind::SerializationFailure,
                _,
            ))) => {
                // A racing booking won the window between our check and
                // commit; surface it as the same deterministic conflict.
                return Err(BookingError::AvailabilityConflict);
            }
            Err(TxnError::Db(other)) => return Err(BookingError::Store(other.to_string())),
        }
    }

    Err(BookingError::Store(String::from(
        "could not allocate a unique reservation number",
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn shared_boundary_day_conflicts() {
        // existing [06-10, 06-15] confirmed; query [06-15, 06-20]
        assert!(ranges_overlap(
            d(2024, 6, 10),
            d(2024, 6, 15),
            d(2024, 6, 15),
            d(2024, 6, 20),
            false,
        ));
    }

    #[test]
    fn disjoint_ranges_do_not_conflict() {
        assert!(!ranges_overlap(
            d(2024, 6, 10),
            d(2024, 6, 15),
            d(2024, 6, 16),
            d(2024, 6, 20),
            false,
        ));
    }

    #[test]
    fn contained_range_conflicts() {
        assert!(ranges_overlap(
            d(2024, 6, 1),
            d(2024, 6, 30),
            d(2024, 6, 10),
            d(2024, 6, 12),
            false,
        ));
    }

    #[test]
    fn same_day_turnover_frees_the_boundary_day() {
        assert!(!ranges_overlap(
            d(2024, 6, 10),
            d(2024, 6, 15),
            d(2024, 6, 15),
            d(2024, 6, 20),
            true,
        ));
        // a one-day-deep overlap still conflicts under either policy
        assert!(ranges_overlap(
            d(2024, 6, 10),
            d(2024, 6, 16),
            d(2024, 6, 15),
            d(2024, 6, 20),
            true,
        ));
    }

    #[test]
    fn only_pending_and_confirmed_block() {
        assert!(ReservationStatus::Pending.is_blocking());
        assert!(ReservationStatus::Confirmed.is_blocking());
        assert!(!ReservationStatus::Cancelled.is_blocking());
        assert!(!ReservationStatus::Completed.is_blocking());
    }

    #[test]
    fn status_transitions_follow_the_lifecycle() {
        let pending = ReservationStatus::Pending;
        let confirmed = ReservationStatus::Confirmed;
        assert!(pending.can_transition_to(ReservationStatus::Confirmed));
        assert!(pending.can_transition_to(ReservationStatus::Cancelled));
        assert!(confirmed.can_transition_to(ReservationStatus::Completed));
        assert!(confirmed.can_transition_to(ReservationStatus::Cancelled));

        assert!(!pending.can_transition_to(ReservationStatus::Completed));
        assert!(!confirmed.can_transition_to(ReservationStatus::Pending));
        assert!(!ReservationStatus::Cancelled.can_transition_to(ReservationStatus::Confirmed));
        assert!(!ReservationStatus::Completed.can_transition_to(ReservationStatus::Pending));
    }

    #[test]
    fn pricing_is_deterministic() {
        // 70000/day, 2024-06-10..2024-06-12 inclusive
        let days = rental_days(d(2024, 6, 10), d(2024, 6, 12));
        assert_eq!(days, 3);
        assert_eq!(quote_total(70_000, days, 5), 199_500);
    }

    #[test]
    fn single_day_rental_counts_one_day() {
        assert_eq!(rental_days(d(2024, 7, 1), d(2024, 7, 1)), 1);
        assert_eq!(quote_total(50_000, 1, 5), 47_500);
    }

    #[test]
    fn zero_discount_charges_the_subtotal() {
        assert_eq!(quote_total(70_000, 2, 0), 140_000);
    }

    #[test]
    fn reservation_number_format() {
        let number = generate_reservation_number(d(2024, 6, 10));
        assert!(number.starts_with("RENT-20240610-"));
        assert_eq!(number.len(), "RENT-20240610-0000".len());
        let suffix: u32 = number["RENT-20240610-".len()..].parse().unwrap();
        assert!(suffix < 10_000);
    }

    #[test]
    fn booked_dates_expand_clamp_and_dedup() {
        let ranges = vec![
            (d(2024, 6, 10), d(2024, 6, 12)),
            (d(2024, 6, 12), d(2024, 6, 13)), // overlaps the 12th
            (d(2024, 5, 1), d(2024, 5, 3)),   // before the horizon
        ];
        let days = booked_dates(&ranges, d(2024, 6, 1), d(2024, 8, 31));
        assert_eq!(
            days,
            vec![d(2024, 6, 10), d(2024, 6, 11), d(2024, 6, 12), d(2024, 6, 13)]
        );
    }

    #[test]
    fn booked_dates_clamp_to_the_horizon_edges() {
        let ranges = vec![(d(2024, 6, 28), d(2024, 7, 5))];
        let days = booked_dates(&ranges, d(2024, 6, 30), d(2024, 7, 2));
        assert_eq!(days, vec![d(2024, 6, 30), d(2024, 7, 1), d(2024, 7, 2)]);
    }

    #[test]
    fn booked_dates_expansion_is_restartable() {
        let ranges = vec![(d(2024, 6, 10), d(2024, 6, 12))];
        let first = booked_dates(&ranges, d(2024, 6, 1), d(2024, 6, 30));
        let second = booked_dates(&ranges, d(2024, 6, 1), d(2024, 6, 30));
        assert_eq!(first, second);
    }
}
