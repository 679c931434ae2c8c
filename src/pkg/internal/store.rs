use std::time::Duration;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::pkg::internal::adaptors::jobs::spec::{JobEntry, JobStatus};

/// Process-lifetime job collection. Records are kept in insertion order and
/// are only reachable through `JobSelector` and `JobMutator`.
#[derive(Debug)]
pub struct JobStore {
    jobs: RwLock<Vec<JobEntry>>,
    latency: Duration,
}

impl JobStore {
    pub fn empty() -> Self {
        Self::with_jobs(Vec::new())
    }

    pub fn seeded() -> Self {
        Self::with_jobs(seed_jobs())
    }

    fn with_jobs(jobs: Vec<JobEntry>) -> Self {
        JobStore {
            jobs: RwLock::new(jobs),
            latency: Duration::ZERO,
        }
    }

    /// Delay applied before every operation. Has no effect on results.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    pub(crate) async fn read(&self) -> RwLockReadGuard<'_, Vec<JobEntry>> {
        self.simulate_latency().await;
        self.jobs.read().await
    }

    // held across id assignment and push, so concurrent adds never share an id
    pub(crate) async fn write(&self) -> RwLockWriteGuard<'_, Vec<JobEntry>> {
        self.simulate_latency().await;
        self.jobs.write().await
    }
}

pub fn seed_jobs() -> Vec<JobEntry> {
    fn seed(
        id: i64,
        title: &str,
        company: &str,
        status: JobStatus,
        salary_range: &str,
        description: &str,
        date_applied: &str,
    ) -> JobEntry {
        JobEntry {
            id,
            title: title.into(),
            company: company.into(),
            status,
            salary_range: salary_range.into(),
            description: description.into(),
            date_applied: date_applied.into(),
        }
    }
    vec![
        seed(
            1,
            "Senior Frontend Engineer",
            "Acme Corp",
            JobStatus::Interviewing,
            "$140k - $170k",
            "Lead the migration to a modern design system and improve performance.",
            "2025-01-05",
        ),
        seed(
            2,
            "Fullstack TypeScript Developer",
            "Northwind Labs",
            JobStatus::Applied,
            "$125k - $155k",
            "Work across Next.js APIs and database integrations for internal tools.",
            "2025-01-08",
        ),
        seed(
            3,
            "Product Engineer",
            "Fjord Finance",
            JobStatus::Offer,
            "$150k - $185k + equity",
            "Ship user-facing features end-to-end with close PM/design collaboration.",
            "2024-12-18",
        ),
        seed(
            4,
            "Frontend Developer",
            "BrightHealth",
            JobStatus::Interviewing,
            "$110k - $135k",
            "Own the patient portal UI with a11y and performance as first-class concerns.",
            "2025-01-02",
        ),
        seed(
            5,
            "Staff UI Engineer",
            "Orbit Analytics",
            JobStatus::Rejected,
            "$180k - $210k",
            "Shape UI architecture and mentor teams building high-scale dashboards.",
            "2024-12-10",
        ),
    ]
}
