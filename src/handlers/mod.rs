pub mod admin;
pub mod inquiries;
pub mod showcase;
pub mod site;

use axum::{http::StatusCode, Json};
use serde::Serialize;

use crate::forms::{BlockReason, Notification, SubmitOutcome};
use crate::middleware::error_handling::{AppError, Result};

/// Body returned for an accepted form submission: the stored row and the
/// notification the form shows.
#[derive(Debug, Serialize)]
pub struct SubmissionResponse<T> {
    pub data: T,
    pub notification: Notification,
}

/// Turns a form outcome into the HTTP reply for that form.
pub(crate) fn submission_reply<T: Serialize>(
    outcome: SubmitOutcome<T>,
) -> Result<(StatusCode, Json<SubmissionResponse<T>>)> {
    match outcome {
        SubmitOutcome::Submitted { row, notification } => Ok((
            StatusCode::CREATED,
            Json(SubmissionResponse { data: row, notification }),
        )),
        SubmitOutcome::AlreadySubscribed { notification } => {
            Err(AppError::Conflict(notification.description))
        }
        SubmitOutcome::Failed { error, .. } => Err(error.into()),
        SubmitOutcome::Blocked(BlockReason::MissingFields(fields)) => Err(AppError::BadRequest(
            format!("Missing required fields: {}", fields.join(", ")),
        )),
        SubmitOutcome::Blocked(_) => Err(AppError::Conflict(
            "A submission is already in progress".to_string(),
        )),
    }
}
