use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobStatus {
    #[default]
    Applied,
    Interviewing,
    Offer,
    Rejected,
}

impl JobStatus {
    pub const ALL: [JobStatus; 4] = [
        JobStatus::Applied,
        JobStatus::Interviewing,
        JobStatus::Offer,
        JobStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Applied => "Applied",
            JobStatus::Interviewing => "Interviewing",
            JobStatus::Offer => "Offer",
            JobStatus::Rejected => "Rejected",
        }
    }

    /// css classes for the status badge on job cards
    pub fn badge_class(&self) -> &'static str {
        match self {
            JobStatus::Applied => "bg-blue-100 text-blue-700 border-blue-200",
            JobStatus::Interviewing => "bg-amber-100 text-amber-800 border-amber-200",
            JobStatus::Offer => "bg-emerald-100 text-emerald-800 border-emerald-200",
            JobStatus::Rejected => "bg-rose-100 text-rose-800 border-rose-200",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JobStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("unknown status: {s}"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobEntry {
    pub id: i64,
    pub title: String,
    pub company: String,
    pub status: JobStatus,
    pub salary_range: String,
    pub description: String,
    pub date_applied: String,
}

impl JobEntry {
    pub const EXCERPT_CHARS: usize = 160;

    pub fn from_new(id: i64, job: NewJob) -> Self {
        JobEntry {
            id,
            title: job.title,
            company: job.company,
            status: job.status,
            salary_range: job.salary_range,
            description: job.description,
            date_applied: job.date_applied,
        }
    }

    /// Description cut to [`Self::EXCERPT_CHARS`] characters for summary cards.
    pub fn excerpt(&self) -> String {
        let mut chars = self.description.chars();
        let head: String = chars.by_ref().take(Self::EXCERPT_CHARS).collect();
        if chars.next().is_some() {
            format!("{}…", head.trim_end())
        } else {
            head
        }
    }
}

/// A job as submitted by a caller, before the store assigns its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewJob {
    pub title: String,
    pub company: String,
    pub status: JobStatus,
    pub salary_range: String,
    pub description: String,
    pub date_applied: String,
}
