//! Database record models matching table schemas.
//!
//! Each module holds the create-request and response structs a repository in
//! [`crate::db::handlers`] accepts and returns. Database models are kept separate from the API
//! models in [`crate::api::models`] so storage and wire formats can evolve independently.
//!
//! - [`users`]: Registered accounts and their credential hashes
//! - [`task_standards`]: Reference water amounts per task (read-only here)
//! - [`water_usage`]: Logged usage records
//! - [`rewards`]: Signed point awards, one per usage record

pub mod rewards;
pub mod task_standards;
pub mod users;
pub mod water_usage;
