use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use axum::response::Response;
use serde_json::Value;

use crate::workflows::leads::domain::{ConflictCheckStatus, LeadId, LeadSourceType};
use crate::workflows::leads::filters::LeadFilters;
use crate::workflows::leads::form::LeadForm;
use crate::workflows::leads::qualification::QualificationInputs;
use crate::workflows::leads::repository::{
    LeadPage, LeadRecord, LeadRepository, RepositoryError,
};
use crate::workflows::leads::{lead_router, IntakeSettings, LeadIntakeService};

pub(super) fn form() -> LeadForm {
    let mut form = LeadForm::new();
    form.first_name = "Sara".to_string();
    form.last_name = "Alharbi".to_string();
    form.phone = "0512345678".to_string();
    form
}

pub(super) fn qualified_form() -> LeadForm {
    let mut form = form();
    form.email = "sara@alharbi-holding.sa".to_string();
    form.company = "Alharbi Holding".to_string();
    form.practice_area = "corporate".to_string();
    form.source_type = Some(LeadSourceType::Referral);
    form.estimated_value = 120_000;
    form.budget = "50k_100k".to_string();
    form.authority = "decision_maker".to_string();
    form.need = "evaluating".to_string();
    form.timeline = "this_month".to_string();
    form
}

pub(super) fn invalid_form() -> LeadForm {
    let mut form = form();
    form.phone = "12345".to_string();
    form.last_name.clear();
    form
}

/// Every categorical option and bonus at its highest value.
pub(super) fn saturated_inputs() -> QualificationInputs {
    QualificationInputs {
        budget: "100k_500k".to_string(),
        authority: "decision_maker".to_string(),
        need: "urgent".to_string(),
        timeline: "this_week".to_string(),
        has_email: true,
        has_phone: true,
        has_company: true,
        estimated_value: 50_000,
        has_practice_area: true,
        conflict_status: ConflictCheckStatus::Clear,
        is_vip: true,
    }
}

pub(super) fn build_service() -> (LeadIntakeService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = LeadIntakeService::new(repository.clone(), IntakeSettings::default());
    (service, repository)
}

pub(super) fn lead_router_with_service(
    service: LeadIntakeService<MemoryRepository>,
) -> axum::Router {
    lead_router(Arc::new(service))
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<LeadId, LeadRecord>>>,
}

impl MemoryRepository {
    pub(super) fn len(&self) -> usize {
        self.records.lock().expect("repository mutex poisoned").len()
    }
}

impl LeadRepository for MemoryRepository {
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

pub(super) struct ConflictRepository;

impl LeadRepository for ConflictRepository {
    fn insert(&self, _record: LeadRecord) -> Result<LeadRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn fetch(&self, _id: &LeadId) -> Result<Option<LeadRecord>, RepositoryError> {
        Ok(None)
    }

    fn list(&self, filters: &LeadFilters) -> Result<LeadPage, RepositoryError> {
        Ok(filters.apply(Vec::new()))
    }
}

pub(super) struct UnavailableRepository;

impl LeadRepository for UnavailableRepository {
    fn insert(&self, _record: LeadRecord) -> Result<LeadRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("crm backend offline".to_string()))
    }

    fn fetch(&self, _id: &LeadId) -> Result<Option<LeadRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("crm backend offline".to_string()))
    }

    fn list(&self, _filters: &LeadFilters) -> Result<LeadPage, RepositoryError> {
        Err(RepositoryError::Unavailable("crm backend offline".to_string()))
    }
}

pub(super) fn assert_conflict_response(response: Response) {
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
