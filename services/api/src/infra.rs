use lead_desk::workflows::leads::{
    ConflictCheckStatus, LeadFilters, LeadId, LeadPage, LeadRecord, LeadRepository,
    RepositoryError,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryLeadRepository {
    records: Arc<Mutex<HashMap<LeadId, LeadRecord>>>,
}

impl LeadRepository for InMemoryLeadRepository {
    fn insert(&self, record: LeadRecord) -> Result<LeadRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &LeadId) -> Result<Option<LeadRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn list(&self, filters: &LeadFilters) -> Result<LeadPage, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(filters.apply(guard.values().cloned()))
    }
}

pub(crate) fn parse_conflict_status(raw: &str) -> Result<ConflictCheckStatus, String> {
    let token = raw.trim().to_ascii_lowercase();
    ConflictCheckStatus::from_token(&token).ok_or_else(|| {
        let expected = ConflictCheckStatus::ordered()
            .into_iter()
            .map(ConflictCheckStatus::token)
            .collect::<Vec<_>>()
            .join(", ");
        format!("unknown conflict status '{raw}' (expected one of: {expected})")
    })
}
