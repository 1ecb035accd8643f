//! Lead intake for the CRM: the intake form model, BANT qualification
//! scoring, the lead-creation payload, list filtering, and the HTTP surface.

pub mod domain;
pub mod filters;
pub mod form;
pub mod payload;
pub mod qualification;
pub mod repository;
pub mod router;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use domain::{
    Address, ConflictCheckStatus, IntakeDetails, LeadId, LeadSource, LeadSourceType, LeadStatus,
    LeadType, Urgency,
};
pub use filters::{FilterError, LeadFilters, LeadSortKey, SortOrder};
pub use form::{FormSection, FormSections, LeadForm};
pub use payload::{CreateLeadRequest, QualificationPayload};
pub use qualification::{
    classify, compute_score, score_breakdown, QualificationInputs, ScoreBreakdown,
    ScoreClassification, ScoreTier, MAX_SCORE,
};
pub use repository::{LeadPage, LeadRecord, LeadRepository, LeadView, RepositoryError};
pub use router::lead_router;
pub use service::{IntakeSettings, LeadIntakeService, LeadServiceError};
pub use validation::{FieldError, FormField, ValidationErrors};
