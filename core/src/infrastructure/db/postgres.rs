use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct PostgresConfig {
    pub database_url: String,
}

#[derive(Debug, Clone)]
pub struct Postgres {
    db: DatabaseConnection,
}

impl Postgres {
    pub async fn new(config: PostgresConfig) -> Result<Self, anyhow::Error> {
        let mut options = ConnectOptions::new(config.database_url);
        options
            .max_connections(20)
            .connect_timeout(Duration::from_secs(10))
            .sqlx_logging(false);

        let db = Database::connect(options).await?;

        Ok(Self { db })
    }

    pub fn get_db(&self) -> DatabaseConnection {
        self.db.clone()
    }

    /// Apply the versioned migrations. With `reset`, every table is dropped first.
    pub async fn migrate(&self, reset: bool) -> Result<(), anyhow::Error> {
        let pool = self.db.get_postgres_connection_pool();

        if reset {
            warn!("Resetting database before applying migrations");
            sqlx::query("DROP TABLE IF EXISTS courses, authors, _sqlx_migrations")
                .execute(pool)
                .await?;
        }

        sqlx::migrate!("./migrations").run(pool).await?;
        info!("Database migrations applied");

        Ok(())
    }
}
