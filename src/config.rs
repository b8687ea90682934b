use anyhow::Context;
use dotenv::dotenv;
use once_cell::sync::Lazy;
use std::env;
use std::str::FromStr;
use std::time::Duration;

pub static CONFIG: Lazy<BookingConfig> =
    Lazy::new(|| BookingConfig::from_env().expect("invalid booking configuration"));

/// Runtime knobs for the booking core, environment-backed with the launch
/// values as defaults.
#[derive(Debug, Clone)]
pub struct BookingConfig {
    /// Pickup/return branch recorded on every reservation.
    pub default_location: String,
    /// First-launch promotional discount, whole percent.
    pub launch_discount_pct: i64,
    /// When true, the return day of one booking may be the pickup day of the
    /// next. When false (default), adjacent ranges conflict.
    pub same_day_turnover: bool,
    /// Upper bound on any single data-store call.
    pub store_timeout: Duration,
    /// Maximum rows returned by the booking-history lookup.
    pub history_page_size: i64,
    /// How far ahead the booked-date calendar feed looks.
    pub booked_dates_horizon_days: i64,
}

impl BookingConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv().ok();
        Ok(BookingConfig {
            default_location: env::var("DEFAULT_PICKUP_LOCATION")
                .unwrap_or_else(|_| String::from("본점")),
            launch_discount_pct: parse_or("LAUNCH_DISCOUNT_PCT", 5)?,
            same_day_turnover: parse_or("ALLOW_SAME_DAY_TURNOVER", false)?,
            store_timeout: Duration::from_secs(parse_or("STORE_TIMEOUT_SECS", 10u64)?),
            history_page_size: parse_or("HISTORY_PAGE_SIZE", 50)?,
            booked_dates_horizon_days: parse_or("BOOKED_DATES_HORIZON_DAYS", 90)?,
        })
    }
}

fn parse_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .with_context(|| format!("{key} has an invalid value")),
        Err(_) => Ok(default),
    }
}
