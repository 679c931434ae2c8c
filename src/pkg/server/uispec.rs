use askama::Template;

use crate::pkg::internal::adaptors::jobs::spec::{JobEntry, JobStatus};

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct Dashboard {
    pub jobs: Vec<JobEntry>,
}

#[derive(Template)]
#[template(path = "details.html")]
pub struct Details {
    pub job: JobEntry,
}

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFound {}

#[derive(Template)]
#[template(path = "add.html")]
pub struct AddJob {
    pub statuses: [JobStatus; 4],
    pub error: Option<&'static str>,
}

impl AddJob {
    pub const INVALID_SUBMISSION: &'static str =
        "All fields are required, with a YYYY-MM-DD date and a listed status.";

    pub fn rejected() -> Self {
        AddJob {
            error: Some(Self::INVALID_SUBMISSION),
            ..Self::default()
        }
    }
}

impl Default for AddJob {
    fn default() -> Self {
        AddJob {
            statuses: JobStatus::ALL,
            error: None,
        }
    }
}
