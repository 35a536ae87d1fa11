//! # aquatrack: Water Conservation Tracking Backend
//!
//! `aquatrack` is the HTTP backend for a water-conservation app. Users register and log in, then
//! log how much water they used for everyday tasks (a shower, the dishes). Each entry is compared
//! with a per-task standard amount and scored: using less than the standard earns points, using
//! more costs them. The service reports each user's cumulative points.
//!
//! ## Architecture
//!
//! The application is built on [Axum](https://github.com/tokio-rs/axum) for the HTTP layer and
//! uses PostgreSQL, through a [`sqlx`] connection pool, for all persistence. There is no
//! in-process mutable state and no background work: every request is a linear sequence of queries.
//!
//! - The **API layer** ([`api`]) holds the four `/api/*` handlers and their request/response models.
//! - The **scoring rules** ([`scoring`]) classify an observed amount against its standard and
//!   compute the signed points for it.
//! - The **database layer** ([`db`]) uses small repository structs over a borrowed
//!   `PgConnection`, so the same repository works on a pooled connection or inside a transaction.
//!   Usage logging writes the usage record and its reward entry in one transaction.
//! - The **credential layer** ([`auth`]) stores passwords as salted Argon2id hashes.
//!
//! ## Quick Start
//!
//! ```no_run
//! use clap::Parser;
//! use aquatrack::{Application, Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let args = aquatrack::config::Args::parse();
//!     let config = Config::load(&args)?;
//!
//!     aquatrack::telemetry::init_telemetry(config.enable_otel_export)?;
//!
//!     // Connects the pool and runs migrations
//!     let app = Application::new(config).await?;
//!
//!     app.serve(async {
//!         tokio::signal::ctrl_c().await.expect("Failed to listen for Ctrl+C");
//!     }).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Database Setup
//!
//! Migrations are embedded in the binary and run on startup. They can also be run directly:
//!
//! ```no_run
//! # use sqlx::PgPool;
//! # async fn example(pool: PgPool) -> Result<(), sqlx::migrate::MigrateError> {
//! aquatrack::migrator().run(&pool).await?;
//! # Ok(())
//! # }
//! ```
//!
//! Task standards are reference data and are not created by the service; load them into the
//! `task_standards` table before logging usage.
//!
//! ## Configuration
//!
//! See the [`config`] module for configuration options.
pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod errors;
mod openapi;
pub mod scoring;
pub mod telemetry;
mod types;

#[cfg(test)]
mod test_utils;

use crate::config::CorsOrigin;
use axum::{Router, http::HeaderValue, routing::get, routing::post};
use axum_prometheus::PrometheusMetricLayer;
use bon::Builder;
pub use config::Config;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{Level, info, instrument};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

pub use openapi::ApiDoc;
pub use types::UserId;

/// Application state shared across all request handlers.
///
/// ```ignore
/// let state = AppState::builder().db(pool).config(config).build();
/// ```
#[derive(Clone, Builder)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
}

/// Get the aquatrack database migrator
pub fn migrator() -> sqlx::migrate::Migrator {
    sqlx::migrate!("./migrations")
}

fn create_cors_layer(config: &Config) -> anyhow::Result<CorsLayer> {
    let origins = &config.cors.allowed_origins;

    // tower-http rejects `*` inside an explicit origin list
    let allow_origin = if origins.iter().any(|origin| matches!(origin, CorsOrigin::Wildcard)) {
        AllowOrigin::any()
    } else {
        let mut values = Vec::with_capacity(origins.len());
        for origin in origins {
            if let CorsOrigin::Url(url) = origin {
                values.push(url.origin().ascii_serialization().parse::<HeaderValue>()?);
            }
        }
        AllowOrigin::list(values)
    };

    let mut cors = CorsLayer::new().allow_origin(allow_origin).allow_methods(Any).allow_headers(Any);

    if let Some(max_age) = config.cors.max_age {
        cors = cors.max_age(std::time::Duration::from_secs(max_age));
    }

    Ok(cors)
}

/// Build the application router.
///
/// Mounts the `/api` endpoints, `/healthz`, the OpenAPI document and Scalar UI, and (when
/// `enable_metrics` is set) Prometheus metrics at `/internal/metrics`. CORS and request tracing
/// wrap everything.
///
/// # Errors
///
/// Returns an error if a configured CORS origin is not a valid header value.
#[instrument(skip_all)]
pub fn build_router(state: &AppState) -> anyhow::Result<Router> {
    let api_routes = Router::new()
        .route("/register", post(api::handlers::auth::register))
        .route("/login", post(api::handlers::auth::login))
        .route("/log-water-usage", post(api::handlers::water_usage::log_water_usage))
        .route("/get-total-rewards", post(api::handlers::rewards::get_total_rewards))
        .with_state(state.clone());

    let router = Router::new()
        .route("/healthz", get(|| async { "OK" }))
        .route("/api/openapi.json", get(|| async { axum::Json(ApiDoc::openapi()) }))
        .nest("/api", api_routes)
        .merge(Scalar::with_url("/api/docs", ApiDoc::openapi()));

    let mut router = router.layer(create_cors_layer(&state.config)?);

    if state.config.enable_metrics {
        let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();
        router = router
            .route("/internal/metrics", get(|| async move { metric_handle.render() }))
            .layer(prometheus_layer);
    }

    let router = router.layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO)),
    );

    Ok(router)
}

/// The configured HTTP application with its database pool.
pub struct Application {
    router: Router,
    config: Config,
    pool: PgPool,
}

impl Application {
    /// Connect the database pool, run migrations and build the router
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        info!("Connecting to database");
        let pool = db::pools::connect(&config.database.url, &config.database.pool).await?;

        migrator().run(&pool).await?;
        info!("Database migrations applied");

        Self::new_with_pool(config, pool)
    }

    /// Build the application around an existing, already migrated pool
    pub fn new_with_pool(config: Config, pool: PgPool) -> anyhow::Result<Self> {
        let state = AppState::builder().db(pool.clone()).config(config.clone()).build();
        let router = build_router(&state)?;

        Ok(Self { router, config, pool })
    }

    #[cfg(test)]
    pub fn into_test_server(self) -> axum_test::TestServer {
        axum_test::TestServer::new(self.router).expect("Failed to create test server")
    }

    /// Start serving the application
    pub async fn serve<F>(self, shutdown: F) -> anyhow::Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let bind_addr = self.config.bind_address();
        let listener = TcpListener::bind(&bind_addr).await?;
        info!("Aquatrack listening on http://{}", bind_addr);

        axum::serve(listener, self.router).with_graceful_shutdown(shutdown).await?;

        info!("Closing database connections...");
        self.pool.close().await;

        info!("Shutting down telemetry...");
        telemetry::shutdown_telemetry();

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test_utils::create_test_config;
    use axum::http::{HeaderName, HeaderValue as Value, StatusCode};
    use sqlx::postgres::PgPoolOptions;

    // Routes that never touch the database can be exercised with a pool that never connects
    fn lazy_pool() -> PgPool {
        PgPoolOptions::new()
            .connect_lazy("postgres://localhost:5432/unused")
            .expect("lazy pool")
    }

    fn test_server(config: Config) -> axum_test::TestServer {
        Application::new_with_pool(config, lazy_pool()).unwrap().into_test_server()
    }

    #[tokio::test]
    async fn test_healthz() {
        let server = test_server(create_test_config());

        let response = server.get("/healthz").await;
        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(response.text(), "OK");
    }

    #[tokio::test]
    async fn test_openapi_json_and_docs() {
        let server = test_server(create_test_config());

        let response = server.get("/api/openapi.json").await;
        assert_eq!(response.status_code(), StatusCode::OK);
        let content = response.text();
        assert!(content.contains("\"openapi\""));
        assert!(content.contains("/api/log-water-usage"));

        let response = server.get("/api/docs").await;
        assert_eq!(response.status_code(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_metrics_disabled_by_default() {
        let server = test_server(create_test_config());

        let response = server.get("/internal/metrics").await;
        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_metrics_enabled() {
        let mut config = create_test_config();
        config.enable_metrics = true;
        let server = test_server(config);

        server.get("/healthz").await;
        let response = server.get("/internal/metrics").await;
        assert_eq!(response.status_code(), StatusCode::OK);
        assert!(response.text().contains("axum_http_requests"));
    }

    #[tokio::test]
    async fn test_cors_wildcard_by_default() {
        let server = test_server(create_test_config());

        let response = server
            .get("/healthz")
            .add_header(HeaderName::from_static("origin"), Value::from_static("https://anywhere.example"))
            .await;

        assert_eq!(response.header("access-control-allow-origin"), "*");
    }

    #[tokio::test]
    async fn test_cors_specific_origin() {
        let mut config = create_test_config();
        config.cors.allowed_origins = vec![CorsOrigin::Url("https://app.example.com".parse().unwrap())];
        let server = test_server(config);

        let response = server
            .get("/healthz")
            .add_header(HeaderName::from_static("origin"), Value::from_static("https://app.example.com"))
            .await;
        assert_eq!(response.header("access-control-allow-origin"), "https://app.example.com");

        let response = server
            .get("/healthz")
            .add_header(HeaderName::from_static("origin"), Value::from_static("https://evil.example"))
            .await;
        assert!(response.maybe_header("access-control-allow-origin").is_none());
    }
}
