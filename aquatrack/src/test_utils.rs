//! Test utilities for database and HTTP tests.

use crate::auth::password::{self, Argon2Params};
use crate::config::{Config, PasswordConfig, PoolSettings};
use crate::db::{
    handlers::Users,
    models::users::{UserCreateDBRequest, UserDBResponse},
};
use axum_test::TestServer;
use rust_decimal::Decimal;
use sqlx::PgPool;

/// Cheap Argon2 parameters so hashing does not dominate test time
pub const TEST_ARGON2_PARAMS: Argon2Params = Argon2Params {
    memory_kib: 1024,
    iterations: 1,
    parallelism: 1,
};

pub fn create_test_config() -> Config {
    let mut config = Config::default();
    config.host = "127.0.0.1".to_string();
    config.port = 0;
    config.database.pool = PoolSettings {
        max_connections: 2,
        min_connections: 0,
        ..Default::default()
    };
    config.auth.password = PasswordConfig {
        argon2_memory_kib: TEST_ARGON2_PARAMS.memory_kib,
        argon2_iterations: TEST_ARGON2_PARAMS.iterations,
        argon2_parallelism: TEST_ARGON2_PARAMS.parallelism,
        ..Default::default()
    };
    config.enable_metrics = false;
    config
}

pub fn create_test_app(pool: PgPool) -> TestServer {
    crate::Application::new_with_pool(create_test_config(), pool)
        .expect("Failed to create application")
        .into_test_server()
}

pub async fn create_test_user(pool: &PgPool, username: &str, password: &str) -> UserDBResponse {
    let password_hash = password::hash_string_with_params(password, Some(TEST_ARGON2_PARAMS)).expect("Failed to hash password");

    let mut conn = pool.acquire().await.expect("Failed to acquire connection");
    Users::new(&mut conn)
        .create(&UserCreateDBRequest {
            username: username.to_string(),
            email: format!("{username}@example.com"),
            password_hash,
        })
        .await
        .expect("Failed to create test user")
}

/// Task standards are reference data with no write path in the service, so tests insert them directly
pub async fn create_task_standard(pool: &PgPool, task_name: &str, standard_amount: Decimal) {
    sqlx::query("INSERT INTO task_standards (task_name, standard_amount) VALUES ($1, $2)")
        .bind(task_name)
        .bind(standard_amount)
        .execute(pool)
        .await
        .expect("Failed to create task standard");
}
