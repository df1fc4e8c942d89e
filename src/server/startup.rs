//! Process startup: tracing, database, seed data and sessions.

use sea_orm::DatabaseConnection;
use tower_sessions::{MemoryStore, SessionManagerLayer};
use tower_sessions_redis_store::RedisStore;
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::Error,
    model::session::store::SessionBackend,
    service::seed::{SeedEmployee, SeedService},
};

/// Install the global tracing subscriber, filtered by `RUST_LOG` (default `info`)
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Create the default employee and example records if they are missing
pub async fn seed_database(db: &DatabaseConnection, config: &Config) -> Result<(), Error> {
    if config.uses_default_credentials() {
        tracing::warn!(
            functional_code = %config.seed_employee_code,
            "Seeded employee uses the well-known default password, set SEED_EMPLOYEE_PASSWORD outside of demos"
        );
    }

    let report = SeedService::new(db)
        .run(&SeedEmployee {
            functional_code: config.seed_employee_code.clone(),
            password: config.seed_employee_password.clone(),
        })
        .await?;

    if report.employee_created {
        tracing::info!(
            functional_code = %config.seed_employee_code,
            "Created default employee"
        );
    }
    if report.records_inserted > 0 {
        tracing::info!("Inserted {} example loading records", report.records_inserted);
    }

    Ok(())
}

/// Configure session management, backed by Valkey/Redis when configured and memory otherwise
pub async fn connect_to_session(config: &Config) -> Result<SessionManagerLayer<SessionBackend>, Error> {
    use time::Duration;
    use tower_sessions::{cookie::SameSite, Expiry};
    use tower_sessions_redis_store::fred::prelude::{ClientLike, Config as RedisConfig, Pool};

    let store = match &config.valkey_url {
        Some(valkey_url) => {
            let redis_config = RedisConfig::from_url(valkey_url)?;
            let pool = Pool::new(redis_config, None, None, None, 6)?;

            pool.connect();
            pool.wait_for_connect().await?;

            tracing::info!("Storing sessions in Valkey");

            SessionBackend::Redis(RedisStore::new(pool))
        }
        None => {
            tracing::info!("Storing sessions in memory, they will not survive a restart");

            SessionBackend::Memory(MemoryStore::default())
        }
    };

    // Set secure based on build mode: in development (debug) use false, otherwise true.
    let development_mode = cfg!(debug_assertions);
    let secure_cookies = !development_mode;

    let session = SessionManagerLayer::new(store)
        .with_secure(secure_cookies)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::minutes(
            config.session_inactivity_minutes,
        )));

    Ok(session)
}
