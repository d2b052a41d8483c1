//! Store availability.
//!
//! Connection failure at startup is a degraded mode, not a fatal error:
//! tutorial generation keeps working, history does not. Every call site
//! that touches persistence must match on [`Store`] and handle the
//! `Disconnected` branch explicitly.

use crate::DbPool;

/// Persistent store handle, or the explicit absence of one.
#[derive(Clone)]
pub enum Store {
    Connected(DbPool),
    Disconnected,
}

impl Store {
    /// Connect to the database, verify it answers, and run migrations.
    ///
    /// Any failure (unreachable server, bad credentials, failed
    /// migration) logs a warning and yields `Disconnected`.
    pub async fn connect(database_url: &str) -> Self {
        let pool = match crate::create_pool(database_url).await {
            Ok(pool) => pool,
            Err(e) => {
                tracing::warn!(error = %e, "Could not connect to database");
                tracing::warn!("Running without a store - tutorial history will not be saved");
                return Self::Disconnected;
            }
        };

        if let Err(e) = crate::health_check(&pool).await {
            tracing::warn!(error = %e, "Database health check failed, running without a store");
            return Self::Disconnected;
        }

        if let Err(e) = crate::run_migrations(&pool).await {
            tracing::warn!(error = %e, "Database migration failed, running without a store");
            return Self::Disconnected;
        }

        tracing::info!("Connected to database");
        Self::Connected(pool)
    }

    /// The connection pool, when connected.
    pub fn pool(&self) -> Option<&DbPool> {
        match self {
            Self::Connected(pool) => Some(pool),
            Self::Disconnected => None,
        }
    }

    pub fn is_connected(&self) -> bool {
        matches!(self, Self::Connected(_))
    }
}
