//! Connection factory

use crate::DbResult;
use roster_config::DbConfig;
use sqlx::postgres::{PgConnectOptions, PgConnection};
use sqlx::{ConnectOptions, Connection};
use tracing::{debug, instrument, warn};

/// Opens one PostgreSQL connection per call from a fixed configuration.
///
/// There is no pooling: callers own the returned connection and close it
/// once their single statement has run.
#[derive(Clone)]
pub struct Connector {
    config: DbConfig,
    options: PgConnectOptions,
}

impl Connector {
    pub fn new(config: DbConfig) -> Self {
        let options = connect_options(&config);
        Self { config, options }
    }

    pub fn config(&self) -> &DbConfig {
        &self.config
    }

    /// Open a connection, or log one diagnostic and return `None`.
    ///
    /// The diagnostic names host, port and user, never the password.
    #[instrument(skip(self))]
    pub async fn connect(&self) -> Option<PgConnection> {
        match self.options.connect().await {
            Ok(conn) => {
                debug!(
                    "Connected to {}:{}/{}",
                    self.config.host,
                    self.config.port,
                    self.config.database.as_deref().unwrap_or_default()
                );
                Some(conn)
            }
            Err(e) => {
                warn!(
                    "Error connecting to the database ({}:{} as {}): {}",
                    self.config.host,
                    self.config.port,
                    self.config.user.as_deref().unwrap_or("<default user>"),
                    e
                );
                None
            }
        }
    }

    /// Check that the database is reachable and answers `SELECT 1`
    #[instrument(skip(self))]
    pub async fn ping(&self) -> DbResult<bool> {
        let Some(mut conn) = self.connect().await else {
            return Ok(false);
        };
        let result = sqlx::query("SELECT 1").execute(&mut conn).await;
        close(conn).await;
        result?;
        Ok(true)
    }
}

/// Close a connection, logging instead of failing.
///
/// The statement result has already been captured by the time this runs.
pub(crate) async fn close(conn: PgConnection) {
    if let Err(e) = conn.close().await {
        debug!("Error closing connection: {}", e);
    }
}

/// PostgreSQL connection options for `config`.
///
/// Unset user, database or password are left to the driver's own
/// defaults (PGUSER / PGDATABASE / PGPASSWORD, then the OS user).
pub fn connect_options(config: &DbConfig) -> PgConnectOptions {
    let mut opts = PgConnectOptions::new()
        .host(&config.host)
        .port(config.port);

    if let Some(user) = &config.user {
        opts = opts.username(user);
    }
    if let Some(database) = &config.database {
        opts = opts.database(database);
    }
    if let Some(password) = &config.password {
        opts = opts.password(password);
    }

    opts
}
