use diesel::prelude::*;
use diesel::r2d2::ConnectionManager;
use diesel::r2d2::Pool;
use dotenv::dotenv;
use std::env;
use tokio::task;
use tokio::time;

use crate::config::CONFIG;
use crate::helper_model::BookingError;

pub type PgPool = Pool<ConnectionManager<PgConnection>>;

pub fn get_connection_pool() -> PgPool {
    dotenv().ok();
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    Pool::builder()
        .build(manager)
        .expect("Could not build connection pool")
}

/// Run a blocking diesel job on the blocking thread pool, bounded by the
/// configured store timeout. A timed-out call surfaces as `StoreTimeout`,
/// never as a successful (or "available") result.
pub async fn with_store<T, F>(job: F) -> Result<T, BookingError>
where
    T: Send + 'static,
    F: FnOnce(&mut PgConnection) -> Result<T, BookingError> + Send + 'static,
{
    let work = task::spawn_blocking(move || {
        let mut conn = crate::POOL
            .get()
            .map_err(|e| BookingError::Store(e.to_string()))?;
        job(&mut conn)
    });
    match time::timeout(CONFIG.store_timeout, work).await {
        Err(_) => Err(BookingError::StoreTimeout),
        Ok(Err(join_error)) => Err(BookingError::Store(join_error.to_string())),
        Ok(Ok(outcome)) => outcome,
    }
}
