//! HTTP request handlers for the `/api` endpoints.
//!
//! Each handler deserializes its JSON body, runs its queries through the repositories in
//! [`crate::db::handlers`] and maps failures onto [`crate::errors::Error`], which renders
//! `{"error": ...}` bodies.
//!
//! - [`auth`]: Registration and login
//! - [`water_usage`]: Usage logging and scoring
//! - [`rewards`]: Reward point totals

pub mod auth;
pub mod rewards;
pub mod water_usage;
