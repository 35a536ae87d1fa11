//! Database models for task standards.

use rust_decimal::Decimal;

/// Database response for a task standard
#[derive(Debug, Clone, PartialEq)]
pub struct TaskStandardDBResponse {
    pub task_name: String,
    pub standard_amount: Decimal,
}
