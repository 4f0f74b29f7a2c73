use sqlx::{Pool, Postgres};

use crate::error::NotifyError;
use crate::model::JobDetail;

/// Terminal transfer state that also promotes the overall job status.
pub const SUCCESS_STATE: &str = "SUCCESS";

/// Fetches the job row tracking the given DataSync task execution.
///
/// `task_execution_arn` is unique, so this resolves to at most one row;
/// zero rows is a [NotifyError::JobNotFound].
#[tracing::instrument(skip(db))]
pub async fn get_job_detail(
    db: &Pool<Postgres>,
    task_execution_arn: &str,
) -> Result<JobDetail, NotifyError> {
    let job = sqlx::query_as::<_, JobDetail>(
        r#"
        SELECT id, jobid, jobstatus, requestid, query, destination, task_execution_arn, data_transfer_state
        FROM emr_job_details
        WHERE task_execution_arn = $1
        "#,
    )
    .bind(task_execution_arn)
    .fetch_optional(db)
    .await?;

    job.ok_or_else(|| NotifyError::JobNotFound(task_execution_arn.to_string()))
}

/// Records the new transfer state on the job row, keyed by primary key.
///
/// When the transfer reached its success terminal the overall job status is
/// promoted to the same value. Both statements run in one transaction so a
/// crash between them cannot leave the transfer state updated while the job
/// status stays stale.
#[tracing::instrument(skip(db, job), fields(id = %job.id))]
pub async fn update_job(
    db: &Pool<Postgres>,
    job: &JobDetail,
    new_state: &str,
) -> Result<(), NotifyError> {
    tracing::info!(task_execution_arn = %job.task_execution_arn, "updating data transfer state");

    let mut tx = db.begin().await?;

    sqlx::query(r#"UPDATE emr_job_details SET data_transfer_state = $1 WHERE id = $2"#)
        .bind(new_state)
        .bind(&job.id)
        .execute(&mut *tx)
        .await?;

    if new_state == SUCCESS_STATE {
        sqlx::query(r#"UPDATE emr_job_details SET jobstatus = $1 WHERE id = $2"#)
            .bind(new_state)
            .bind(&job.id)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;

    tracing::info!(state = %new_state, "successfully updated data transfer state");

    Ok(())
}
