/// A single tracked transfer job, one row in `emr_job_details`.
///
/// Rows are created by the upstream submission flow; this service only ever
/// reads them and updates their status columns in place.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct JobDetail {
    pub id: String,
    #[sqlx(rename = "jobid")]
    pub job_id: String,
    #[sqlx(rename = "jobstatus")]
    pub job_status: String,
    #[sqlx(rename = "requestid")]
    pub request_id: String,
    pub query: String,
    pub destination: String,
    pub task_execution_arn: String,
    /// NULL until the first DataSync notification lands for this job
    pub data_transfer_state: Option<String>,
}

/// The slice of the DataSync event `detail` payload we consume.
#[derive(Debug, serde::Deserialize)]
pub struct TaskExecutionDetail {
    /// lifecycle state reported by DataSync, copied verbatim into the row
    #[serde(rename = "State")]
    pub state: String,
}
