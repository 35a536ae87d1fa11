//! Database repository for task standards.
//!
//! Standards are reference data maintained outside this service, so the repository only reads.
//! Tests seed rows through [`crate::test_utils::create_task_standard`].

use crate::db::{errors::Result, models::task_standards::TaskStandardDBResponse};
use rust_decimal::Decimal;
use sqlx::{FromRow, PgConnection};
use tracing::instrument;

#[derive(Debug, Clone, FromRow)]
struct TaskStandard {
    pub task_name: String,
    pub standard_amount: Decimal,
}

impl From<TaskStandard> for TaskStandardDBResponse {
    fn from(standard: TaskStandard) -> Self {
        Self {
            task_name: standard.task_name,
            standard_amount: standard.standard_amount,
        }
    }
}

pub struct TaskStandards<'c> {
    db: &'c mut PgConnection,
}

impl<'c> TaskStandards<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    /// Look up the standard for a task by its exact name
    #[instrument(skip(self), err)]
    pub async fn get_by_task_name(&mut self, task_name: &str) -> Result<Option<TaskStandardDBResponse>> {
        let standard =
            sqlx::query_as::<_, TaskStandard>("SELECT task_name, standard_amount FROM task_standards WHERE task_name = $1")
                .bind(task_name)
                .fetch_optional(&mut *self.db)
                .await?;

        Ok(standard.map(TaskStandardDBResponse::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_task_standard;
    use sqlx::PgPool;

    #[sqlx::test]
    #[test_log::test]
    async fn test_get_by_task_name(pool: PgPool) {
        create_task_standard(&pool, "shower", Decimal::new(50, 0)).await;

        let mut conn = pool.acquire().await.unwrap();
        let mut repo = TaskStandards::new(&mut conn);

        let standard = repo.get_by_task_name("shower").await.unwrap().unwrap();
        assert_eq!(
            standard,
            TaskStandardDBResponse {
                task_name: "shower".to_string(),
                standard_amount: Decimal::new(50, 0),
            }
        );

        assert!(repo.get_by_task_name("bath").await.unwrap().is_none());
    }
}
