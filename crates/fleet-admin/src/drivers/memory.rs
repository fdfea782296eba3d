use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use super::domain::{ApprovalDecision, DriverId, DriverRecord};
use super::filter::DriverFilter;
use super::pagination::{Page, PageRequest};
use super::repository::{DriverRepository, RepositoryError};
use super::status::project;

/// Process-local driver store; one mutex serializes reads and decisions.
#[derive(Debug, Default, Clone)]
pub struct InMemoryDriverRepository {
    records: Arc<Mutex<BTreeMap<DriverId, DriverRecord>>>,
}

impl InMemoryDriverRepository {
    pub fn seeded(records: Vec<DriverRecord>) -> Self {
        let records = records
            .into_iter()
            .map(|record| (record.id, record))
            .collect();
        Self {
            records: Arc::new(Mutex::new(records)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, BTreeMap<DriverId, DriverRecord>>, RepositoryError> {
        self.records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("driver store lock poisoned".to_string()))
    }
}

impl DriverRepository for InMemoryDriverRepository {
    fn query(
        &self,
        filter: &DriverFilter,
        page: PageRequest,
    ) -> Result<Page<DriverRecord>, RepositoryError> {
        let guard = self.lock()?;
        let matching = guard
            .values()
            .filter(|record| filter.matches(record))
            .cloned()
            .collect();
        Ok(Page::slice(matching, page))
    }

    fn fetch(&self, id: &DriverId) -> Result<Option<DriverRecord>, RepositoryError> {
        Ok(self.lock()?.get(id).cloned())
    }

    fn apply_decision(
        &self,
        id: &DriverId,
        decision: &ApprovalDecision,
    ) -> Result<DriverRecord, RepositoryError> {
        let mut guard = self.lock()?;
        let record = guard.get_mut(id).ok_or(RepositoryError::NotFound)?;
        let current = project(record).status;
        if current.is_terminal() {
            return Err(RepositoryError::Conflict { current });
        }
        decision.apply_to(record);
        Ok(record.clone())
    }
}
