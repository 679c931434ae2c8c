use crate::pkg::internal::{adaptors::jobs::spec::JobEntry, store::JobStore};

pub struct JobSelector<'a> {
    store: &'a JobStore,
}

impl<'a> JobSelector<'a> {
    pub fn new(store: &'a JobStore) -> Self {
        JobSelector { store }
    }

    /// Snapshot of every job in insertion order.
    pub async fn get_all(&self) -> Vec<JobEntry> {
        self.store.read().await.clone()
    }

    pub async fn get_by_id(&self, id: i64) -> Option<JobEntry> {
        self.store
            .read()
            .await
            .iter()
            .find(|job| job.id == id)
            .cloned()
    }
}
