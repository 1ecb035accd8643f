use serde::{Deserialize, Serialize};

use super::domain::{
    Address, ConflictCheckStatus, IntakeDetails, LeadSource, LeadStatus, LeadType,
};
use super::form::LeadForm;
use super::qualification::{
    compute_score, AuthorityLevel, BudgetRange, NeedLevel, PurchaseTimeline,
};
use super::validation::normalize_phone;

/// Body of the lead-creation call sent to the lead management backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLeadRequest {
    #[serde(rename = "type")]
    pub lead_type: LeadType,
    pub first_name: String,
    pub last_name: String,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternate_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    pub status: LeadStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pipeline_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<LeadSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_value: Option<u64>,
    pub probability: u8,
    pub intake: IntakeDetails,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    pub qualification: QualificationPayload,
    pub conflict_check_status: ConflictCheckStatus,
    #[serde(rename = "isVIP")]
    pub is_vip: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// `qualification` block of the creation request. Only `score` is always sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualificationPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<BudgetRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_amount: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authority: Option<AuthorityLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub need: Option<NeedLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeline: Option<PurchaseTimeline>,
    pub score: u16,
}

impl QualificationPayload {
    pub fn from_form(form: &LeadForm) -> Self {
        Self {
            budget: BudgetRange::from_token(&form.budget)
                .filter(|budget| *budget != BudgetRange::Unknown),
            budget_amount: Some(form.budget_amount).filter(|amount| *amount > 0),
            authority: AuthorityLevel::from_token(&form.authority)
                .filter(|authority| *authority != AuthorityLevel::Unknown),
            need: NeedLevel::from_token(&form.need).filter(|need| *need != NeedLevel::Unknown),
            timeline: PurchaseTimeline::from_token(&form.timeline)
                .filter(|timeline| *timeline != PurchaseTimeline::Unknown),
            score: compute_score(&form.qualification_inputs()),
        }
    }
}

impl CreateLeadRequest {
    pub fn from_form(form: &LeadForm) -> Self {
        let first_name = form.first_name.trim().to_string();
        let last_name = form.last_name.trim().to_string();
        let display_name = non_empty(&form.display_name)
            .unwrap_or_else(|| format!("{first_name} {last_name}").trim().to_string());

        let source = form.source_type.map(|source_type| LeadSource {
            source_type,
            details: non_empty(&form.source_details),
            referral_source: non_empty(&form.referral_source),
        });

        let address = non_empty(&form.street).map(|street| Address {
            street,
            city: form.city.trim().to_string(),
            postal_code: form.postal_code.trim().to_string(),
            country: form.country.trim().to_string(),
        });

        Self {
            lead_type: form.lead_type,
            first_name,
            last_name,
            display_name,
            email: non_empty(&form.email),
            phone: normalize_phone(&form.phone),
            alternate_phone: non_empty(&normalize_phone(&form.alternate_phone)),
            whatsapp: non_empty(&normalize_phone(&form.whatsapp)),
            company: non_empty(&form.company),
            job_title: non_empty(&form.job_title),
            status: form.status,
            pipeline_id: non_empty(&form.pipeline_id),
            stage_id: non_empty(&form.stage_id),
            source,
            estimated_value: Some(form.estimated_value).filter(|value| *value > 0),
            probability: form.probability.min(100),
            intake: IntakeDetails {
                practice_area: non_empty(&form.practice_area),
                case_type: non_empty(&form.case_type),
                case_description: non_empty(&form.case_description),
                urgency: form.urgency,
                conflict_check_completed: form.conflict_status != ConflictCheckStatus::Pending,
            },
            address,
            qualification: QualificationPayload::from_form(form),
            conflict_check_status: form.conflict_status,
            is_vip: form.is_vip,
            notes: non_empty(&form.notes),
            tags: if form.tags.is_empty() {
                None
            } else {
                Some(form.tags.clone())
            },
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
