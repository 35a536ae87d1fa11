//! Repository implementations for database access.
//!
//! Each repository wraps a `&mut PgConnection`, so it can be built from a pooled connection or
//! from an open transaction. Multi-step writes that must succeed or fail together create every
//! repository they need from the same transaction:
//!
//! ```ignore
//! use aquatrack::db::handlers::{Rewards, WaterUsage};
//!
//! let mut tx = pool.begin().await?;
//! WaterUsage::new(&mut tx).create(&usage).await?;
//! Rewards::new(&mut tx).create(&reward).await?;
//! tx.commit().await?;
//! ```
//!
//! # Available Repositories
//!
//! - [`Users`]: Registration and username lookup
//! - [`TaskStandards`]: Standard amount lookup by task name
//! - [`WaterUsage`]: Append-only usage records
//! - [`Rewards`]: Append-only reward entries and per-user totals

pub mod rewards;
pub mod task_standards;
pub mod users;
pub mod water_usage;

pub use rewards::Rewards;
pub use task_standards::TaskStandards;
pub use users::Users;
pub use water_usage::WaterUsage;
