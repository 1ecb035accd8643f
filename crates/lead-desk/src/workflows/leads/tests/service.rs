use std::sync::Arc;

use super::common::{
    build_service, form, invalid_form, qualified_form, saturated_inputs, ConflictRepository,
    UnavailableRepository,
};
use crate::workflows::leads::domain::{LeadId, LeadStatus};
use crate::workflows::leads::filters::{LeadFilters, LeadSortKey, SortOrder};
use crate::workflows::leads::qualification::{ScoreTier, MAX_SCORE};
use crate::workflows::leads::repository::RepositoryError;
use crate::workflows::leads::service::{IntakeSettings, LeadIntakeService, LeadServiceError};
use crate::workflows::leads::validation::{FieldError, FormField};

#[test]
fn submit_scores_and_persists_the_lead() {
    let (service, repository) = build_service();

    let record = service.submit(qualified_form()).expect("lead accepted");

    assert!(record.id.0.starts_with("lead-"));
    assert_eq!(record.request.display_name, "Sara Alharbi");
    assert_eq!(record.score(), 135);
    assert_eq!(record.classification().tier, ScoreTier::Excellent);
    assert_eq!(record.request.qualification.score, 135);
    assert_eq!(repository.len(), 1);

    let fetched = service.get(&record.id).expect("lead stored");
    assert_eq!(fetched, record);
}

#[test]
fn submit_rejects_invalid_form_without_storing() {
    let (service, repository) = build_service();

    let err = service.submit(invalid_form()).expect_err("invalid form rejected");
    match err {
        LeadServiceError::Validation(errors) => {
            assert_eq!(errors.get(FormField::LastName), Some(FieldError::Required));
            assert_eq!(errors.get(FormField::Phone), Some(FieldError::InvalidPhone));
            assert_eq!(errors.get(FormField::FirstName), None);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(repository.len(), 0);
}

#[test]
fn submissions_receive_distinct_ids() {
    let (service, repository) = build_service();

    let first = service.submit(form()).expect("first lead");
    let second = service.submit(form()).expect("second lead");

    assert_ne!(first.id, second.id);
    assert_eq!(repository.len(), 2);
}

#[test]
fn get_unknown_lead_is_not_found() {
    let (service, _) = build_service();
    let err = service
        .get(&LeadId("lead-999999".to_string()))
        .expect_err("missing lead");
    assert!(matches!(
        err,
        LeadServiceError::Repository(RepositoryError::NotFound)
    ));
}

#[test]
fn repository_conflict_surfaces_from_submit() {
    let service = LeadIntakeService::new(Arc::new(ConflictRepository), IntakeSettings::default());
    let err = service.submit(form()).expect_err("conflict surfaced");
    assert!(matches!(
        err,
        LeadServiceError::Repository(RepositoryError::Conflict)
    ));
}

#[test]
fn unavailable_repository_propagates() {
    let service =
        LeadIntakeService::new(Arc::new(UnavailableRepository), IntakeSettings::default());

    let err = service
        .list(LeadFilters::default())
        .expect_err("list fails when backend is offline");
    assert!(err.to_string().contains("crm backend offline"));
}

#[test]
fn list_applies_filters_and_default_page_size() {
    let repository = Arc::new(super::common::MemoryRepository::default());
    let service = LeadIntakeService::new(
        repository.clone(),
        IntakeSettings {
            default_page_size: 2,
        },
    );

    let mut vip = qualified_form();
    vip.first_name = "Omar".to_string();
    vip.is_vip = true;
    service.submit(vip).expect("vip lead");
    service.submit(qualified_form()).expect("qualified lead");
    service.submit(form()).expect("bare lead");

    let page = service.list(LeadFilters::default()).expect("list");
    assert_eq!(page.total, 3);
    assert_eq!(page.limit, 2);
    assert_eq!(page.records.len(), 2);

    let vip_only = service
        .list(LeadFilters {
            vip_only: true,
            ..LeadFilters::default()
        })
        .expect("vip list");
    assert_eq!(vip_only.total, 1);
    assert_eq!(vip_only.records[0].request.display_name, "Omar Alharbi");

    let by_score = service
        .list(LeadFilters {
            sort_by: LeadSortKey::Score,
            sort_order: SortOrder::Asc,
            limit: Some(10),
            ..LeadFilters::default()
        })
        .expect("sorted list");
    let scores: Vec<u16> = by_score.records.iter().map(|record| record.score()).collect();
    assert_eq!(scores, vec![5, 135, 145]);

    let early = service
        .list(LeadFilters {
            tier: Some(ScoreTier::EarlyStage),
            status: Some(LeadStatus::New),
            ..LeadFilters::default()
        })
        .expect("tier filter");
    assert_eq!(early.total, 1);
}

#[test]
fn preview_does_not_store_anything() {
    let (service, repository) = build_service();
    let breakdown = service.preview(&saturated_inputs());
    assert_eq!(breakdown.score, MAX_SCORE);
    assert_eq!(repository.len(), 0);
}
