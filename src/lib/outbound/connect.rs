use anyhow::Result;
use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::outbound::params::ConnectionParams;

const MAX_POOL_CONNECTIONS: u32 = 5;

/// Pooled connection to the Postgres instance backing the wishlist document
/// store.
#[derive(Debug, Clone)]
pub struct PostgresClient {
    pool: PgPool,
}

impl PostgresClient {
    pub async fn new(params: &ConnectionParams) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(MAX_POOL_CONNECTIONS)
            .connect(params.connect_string().as_str())
            .await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
