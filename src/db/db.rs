// db/db.rs
use sqlx::{Pool, Postgres};

/// Bounded lock wait for every row-locking statement; a timeout surfaces
/// as SQLSTATE 55P03 and is mapped to a conflict upstream.
pub(crate) const LOCK_TIMEOUT: &str = "SET LOCAL lock_timeout = '5s'";

#[derive(Debug, Clone)]
pub struct DBClient {
    pub pool: Pool<Postgres>,
}

impl DBClient {
    pub fn new(pool: Pool<Postgres>) -> Self {
        DBClient { pool }
    }
}
