use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use super::domain::LeadId;
use super::filters::{LeadFilters, DEFAULT_PAGE_SIZE};
use super::form::LeadForm;
use super::qualification::{score_breakdown, QualificationInputs, ScoreBreakdown};
use super::repository::{LeadPage, LeadRecord, LeadRepository, RepositoryError};
use super::validation::ValidationErrors;

/// Tunables for the intake service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntakeSettings {
    pub default_page_size: u32,
}

impl Default for IntakeSettings {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Service composing form validation, qualification scoring, and the lead repository.
pub struct LeadIntakeService<R> {
    repository: Arc<R>,
    settings: IntakeSettings,
}

static LEAD_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_lead_id() -> LeadId {
    let id = LEAD_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    LeadId(format!("lead-{id:06}"))
}

impl<R> LeadIntakeService<R>
where
    R: LeadRepository + 'static,
{
    pub fn new(repository: Arc<R>, settings: IntakeSettings) -> Self {
        Self {
            repository,
            settings,
        }
    }

    pub fn settings(&self) -> IntakeSettings {
        self.settings
    }

    /// Validate and score a submitted form, then persist it as a new lead.
    pub fn submit(&self, mut form: LeadForm) -> Result<LeadRecord, LeadServiceError> {
        let request = match form.submit() {
            Ok(request) => request,
            Err(errors) => {
                warn!(invalid_fields = errors.len(), "lead submission rejected");
                return Err(errors.into());
            }
        };

        let record = LeadRecord {
            id: next_lead_id(),
            request,
            created_at: Utc::now(),
        };
        let stored = self.repository.insert(record)?;

        info!(
            lead_id = %stored.id.0,
            score = stored.score(),
            tier = stored.classification().tier.token(),
            "lead created"
        );
        Ok(stored)
    }

    pub fn get(&self, lead_id: &LeadId) -> Result<LeadRecord, LeadServiceError> {
        let record = self
            .repository
            .fetch(lead_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    pub fn list(&self, filters: LeadFilters) -> Result<LeadPage, LeadServiceError> {
        let filters = filters.with_default_limit(self.settings.default_page_size);
        let page = self.repository.list(&filters)?;
        debug!(
            total = page.total,
            page = page.page,
            returned = page.records.len(),
            "lead list served"
        );
        Ok(page)
    }

    /// Score preview for a set of qualification inputs; nothing is stored.
    pub fn preview(&self, inputs: &QualificationInputs) -> ScoreBreakdown {
        let breakdown = score_breakdown(inputs);
        debug!(
            score = breakdown.score,
            raw_total = breakdown.raw_total,
            "qualification score previewed"
        );
        breakdown
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LeadServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
