use chrono::{DateTime, Utc};
use serde::Serialize;

use super::domain::{LeadId, LeadSourceType, LeadStatus};
use super::filters::LeadFilters;
use super::payload::{CreateLeadRequest, QualificationPayload};
use super::qualification::{classify, ScoreClassification};

/// Stored lead: the request as submitted plus the identifiers assigned on intake.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadRecord {
    pub id: LeadId,
    pub request: CreateLeadRequest,
    pub created_at: DateTime<Utc>,
}

impl LeadRecord {
    pub fn score(&self) -> u16 {
        self.request.qualification.score
    }

    pub fn classification(&self) -> ScoreClassification {
        classify(self.score())
    }

    pub fn view(&self) -> LeadView {
        LeadView {
            id: self.id.clone(),
            display_name: self.request.display_name.clone(),
            status: self.request.status,
            source: self
                .request
                .source
                .as_ref()
                .map(|source| source.source_type),
            score: self.score(),
            classification: self.classification(),
            is_vip: self.request.is_vip,
            qualification: self.request.qualification.clone(),
            created_at: self.created_at,
        }
    }
}

/// One page of a filtered lead listing.
#[derive(Debug, Clone, PartialEq)]
pub struct LeadPage {
    pub total: usize,
    pub page: u32,
    pub limit: u32,
    pub records: Vec<LeadRecord>,
}

impl LeadPage {
    pub fn view(&self) -> LeadPageView {
        LeadPageView {
            total: self.total,
            page: self.page,
            limit: self.limit,
            leads: self.records.iter().map(LeadRecord::view).collect(),
        }
    }
}

/// Storage abstraction over the lead management backend.
pub trait LeadRepository: Send + Sync {
    fn insert(&self, record: LeadRecord) -> Result<LeadRecord, RepositoryError>;
    fn fetch(&self, id: &LeadId) -> Result<Option<LeadRecord>, RepositoryError>;
    fn list(&self, filters: &LeadFilters) -> Result<LeadPage, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Summary of a lead exposed through the API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadView {
    pub id: LeadId,
    pub display_name: String,
    pub status: LeadStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<LeadSourceType>,
    pub score: u16,
    pub classification: ScoreClassification,
    #[serde(rename = "isVIP")]
    pub is_vip: bool,
    pub qualification: QualificationPayload,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LeadPageView {
    pub total: usize,
    pub page: u32,
    pub limit: u32,
    pub leads: Vec<LeadView>,
}
