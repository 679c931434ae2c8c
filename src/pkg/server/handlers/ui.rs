use askama::Template;
use axum::{
    Form,
    extract::{Path, State},
    http::StatusCode,
    response::{Html, Redirect},
};
use standard_error::{HtmlRes, Interpolate, StandardError, Status};

use crate::{
    pkg::{
        internal::adaptors::jobs::{mutators::JobMutator, selectors::JobSelector},
        server::{
            handlers::jobs::CreateJobInput,
            state::AppState,
            uispec::{AddJob, Dashboard, Details, NotFound},
        },
    },
    prelude::Result,
};

fn render(template: &impl Template) -> Result<Html<String>> {
    let page = template
        .render()
        .map_err(|e| StandardError::new("ERR-TPL-001").interpolate_err(e.to_string()))?;
    Ok(Html(page))
}

pub async fn home(State(state): State<AppState>) -> Result<Html<String>> {
    let jobs = JobSelector::new(&state.store).get_all().await;
    tracing::debug!("rendering dashboard with {} jobs", jobs.len());
    render(&Dashboard { jobs })
}

// ids that are not integers can never match, so they get the same page
pub async fn details(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Html<String>)> {
    let job = match id.parse::<i64>() {
        Ok(id) => JobSelector::new(&state.store).get_by_id(id).await,
        Err(_) => None,
    };
    match job {
        Some(job) => Ok((StatusCode::OK, render(&Details { job })?)),
        None => {
            tracing::debug!("job {} not found", &id);
            Ok((StatusCode::NOT_FOUND, render(&NotFound {})?))
        }
    }
}

pub async fn add_form() -> Result<Html<String>> {
    render(&AddJob::default())
}

pub async fn add(
    State(state): State<AppState>,
    Form(input): Form<CreateJobInput>,
) -> Result<Redirect> {
    let job = match input.into_new_job() {
        Ok(job) => job,
        Err(mut e) => {
            tracing::warn!("rejected invalid add-job form");
            let page = render(&AddJob::rejected())?.0;
            return Err(e.code(StatusCode::BAD_REQUEST).template(page));
        }
    };
    let entry = JobMutator::new(&state.store).create(job).await;
    tracing::info!("added job #{} ({} at {})", entry.id, &entry.title, &entry.company);
    Ok(Redirect::to("/"))
}
