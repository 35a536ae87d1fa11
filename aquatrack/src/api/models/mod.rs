//! API request and response data models.
//!
//! API models are distinct from the database models in [`crate::db::models`], so the wire
//! contract and the storage layout can change independently. Every model derives `utoipa`
//! schemas for the OpenAPI document.
//!
//! - [`auth`]: Registration and login payloads
//! - [`water_usage`]: Usage logging request and scored result
//! - [`rewards`]: Reward total lookup

pub mod auth;
pub mod rewards;
pub mod water_usage;
