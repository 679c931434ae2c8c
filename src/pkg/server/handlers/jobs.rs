use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;
use standard_error::{Interpolate, StandardError, Status};
use validator::Validate;

use crate::{
    pkg::{
        internal::adaptors::jobs::{
            mutators::JobMutator,
            selectors::JobSelector,
            spec::{JobEntry, JobStatus, NewJob},
        },
        server::state::AppState,
    },
    prelude::Result,
};

/// Submitted job fields, shared by the add-job form and the json api.
/// Missing fields deserialize as empty so they fail validation instead of
/// extraction.
#[derive(Deserialize, Validate, Debug, Default)]
pub struct CreateJobInput {
    #[serde(default)]
    #[validate(length(min = 1, message = "Field cannot be empty"))]
    pub title: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Field cannot be empty"))]
    pub company: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    #[validate(length(min = 1, message = "Field cannot be empty"))]
    pub salary_range: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Field cannot be empty"))]
    pub description: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Field cannot be empty"))]
    pub date_applied: String,
}

impl CreateJobInput {
    fn trimmed(self) -> Self {
        CreateJobInput {
            title: self.title.trim().to_string(),
            company: self.company.trim().to_string(),
            status: self.status.map(|s| s.trim().to_string()),
            salary_range: self.salary_range.trim().to_string(),
            description: self.description.trim().to_string(),
            date_applied: self.date_applied.trim().to_string(),
        }
    }

    /// Trims every field, checks presence, the date format and the status
    /// name. A missing or blank status becomes `Applied`.
    pub fn into_new_job(self) -> Result<NewJob> {
        let input = self.trimmed();
        input.validate().map_err(|e| {
            StandardError::new("ERR-JOB-001")
                .interpolate_err(e.to_string())
                .code(StatusCode::BAD_REQUEST)
        })?;
        NaiveDate::parse_from_str(&input.date_applied, "%Y-%m-%d").map_err(|e| {
            StandardError::new("ERR-JOB-002")
                .interpolate_err(e.to_string())
                .code(StatusCode::BAD_REQUEST)
        })?;
        let status = match input.status.as_deref() {
            None | Some("") => JobStatus::default(),
            Some(s) => s.parse::<JobStatus>().map_err(|e| {
                StandardError::new("ERR-JOB-003")
                    .interpolate_err(e)
                    .code(StatusCode::BAD_REQUEST)
            })?,
        };
        Ok(NewJob {
            title: input.title,
            company: input.company,
            status,
            salary_range: input.salary_range,
            description: input.description,
            date_applied: input.date_applied,
        })
    }
}

pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateJobInput>,
) -> Result<(StatusCode, Json<JobEntry>)> {
    let job = input.into_new_job().inspect_err(|_| {
        tracing::warn!("rejected invalid job submission");
    })?;
    let entry = JobMutator::new(&state.store).create(job).await;
    tracing::info!("created job #{} ({} at {})", entry.id, &entry.title, &entry.company);
    Ok((StatusCode::CREATED, Json(entry)))
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<JobEntry>>> {
    let jobs = JobSelector::new(&state.store).get_all().await;
    tracing::debug!("listing {} jobs", jobs.len());
    Ok(Json(jobs))
}

pub async fn retrieve(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    match JobSelector::new(&state.store).get_by_id(id).await {
        Some(job) => Json(job).into_response(),
        None => {
            tracing::debug!("job #{} not found", id);
            (
                StatusCode::NOT_FOUND,
                Json(json!({ "detail": "Job not found" })),
            )
                .into_response()
        }
    }
}
