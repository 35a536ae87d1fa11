//! API layer for HTTP request handling and data models.
//!
//! - **[`handlers`]**: Axum route handlers for the `/api/*` endpoints
//! - **[`models`]**: Request/response data structures for API communication
//!
//! All endpoints are documented with OpenAPI annotations using `utoipa`; the docs are served at
//! `/api/docs` when the server is running.

pub mod handlers;
pub mod models;
