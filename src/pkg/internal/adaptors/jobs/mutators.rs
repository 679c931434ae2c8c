use crate::pkg::internal::{
    adaptors::jobs::spec::{JobEntry, NewJob},
    store::JobStore,
};

pub struct JobMutator<'a> {
    store: &'a JobStore,
}

impl<'a> JobMutator<'a> {
    pub fn new(store: &'a JobStore) -> Self {
        JobMutator { store }
    }

    /// Appends the job with id = current max id + 1 (1 when empty) and
    /// returns the stored entry. Values are stored as given.
    pub async fn create(&self, job: NewJob) -> JobEntry {
        let mut jobs = self.store.write().await;
        let id = jobs.iter().map(|j| j.id).max().unwrap_or(0) + 1;
        let entry = JobEntry::from_new(id, job);
        jobs.push(entry.clone());
        entry
    }
}
