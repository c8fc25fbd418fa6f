// Report-level errors (everything that turns a request into HTTP 500)

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// A collaborator the report cannot do without (disk, CPU counters, memory) failed.
    #[error("{collaborator} unavailable: {reason}")]
    CollaboratorUnavailable {
        collaborator: &'static str,
        reason: String,
    },
    #[error("collection task failed: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),
}

impl ReportError {
    pub fn unavailable(collaborator: &'static str, err: anyhow::Error) -> Self {
        ReportError::CollaboratorUnavailable {
            collaborator,
            reason: format!("{:#}", err),
        }
    }
}

impl IntoResponse for ReportError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "metrics report failed");
        let body = serde_json::json!({
            "success": false,
            "error": self.to_string(),
            "timestamp": crate::now_rfc3339(),
        });
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
