use std::sync::Arc;

use sqlx::PgPool;
use taskify::{
    app_state::AppState,
    get_postgres_pool, get_redis_client,
    services::data_stores::{
        PostgresProjectStore, PostgresTaskStore, PostgresUserStore,
        RedisBannedTokenStore,
    },
    utils::{
        constants::{
            prod, StoreBackend, ADMIN_SEED, DATABASE_URL, REDIS_HOST_NAME,
            STORE_BACKEND,
        },
        seed::{ensure_admin, seed_sample_data},
        tracing::init_tracing,
    },
    Application,
};
use tokio::sync::RwLock;

#[tokio::main]
async fn main() {
    color_eyre::install().expect("Failed to install color_eyre");
    init_tracing().expect("Failed to initialize tracing");

    let app_state = match *STORE_BACKEND {
        StoreBackend::Postgres => {
            let pg_pool = configure_postgresql().await;
            let redis_connection = Arc::new(RwLock::new(configure_redis()));

            AppState::new(
                Arc::new(RwLock::new(PostgresUserStore::new(pg_pool.clone()))),
                Arc::new(RwLock::new(RedisBannedTokenStore::new(
                    redis_connection,
                ))),
                Arc::new(RwLock::new(PostgresProjectStore::new(
                    pg_pool.clone(),
                ))),
                Arc::new(RwLock::new(PostgresTaskStore::new(pg_pool))),
            )
        }
        StoreBackend::Memory => {
            tracing::warn!("using in-memory stores, data will not persist");
            AppState::in_memory()
        }
    };

    if let Some(seed) = ADMIN_SEED.as_ref() {
        ensure_admin(&app_state.user_store, seed)
            .await
            .expect("Failed to seed admin user");

        if *STORE_BACKEND == StoreBackend::Memory {
            seed_sample_data(&app_state, seed)
                .await
                .expect("Failed to seed sample data");
        }
    }

    let app = Application::build(app_state, prod::APP_ADDRESS)
        .await
        .expect("Failed to build app");

    app.run().await.expect("Failed to run app");
}

async fn configure_postgresql() -> PgPool {
    let pg_pool = get_postgres_pool(&DATABASE_URL)
        .await
        .expect("Failed to create Postgres connection pool!");

    sqlx::migrate!()
        .run(&pg_pool)
        .await
        .expect("Failed to run migrations");

    pg_pool
}

fn configure_redis() -> redis::Connection {
    get_redis_client(REDIS_HOST_NAME.to_owned())
        .expect("Failed to get Redis client")
        .get_connection()
        .expect("Failed to get Redis connection")
}
