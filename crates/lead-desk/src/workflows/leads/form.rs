use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::{ConflictCheckStatus, LeadSourceType, LeadStatus, LeadType, Urgency};
use super::payload::CreateLeadRequest;
use super::qualification::{classify, compute_score, QualificationInputs, ScoreClassification};
use super::validation::{
    normalize_phone, validate_for_submit, validate_on_blur, FieldError, FormField,
    ValidationErrors,
};

const DEFAULT_COUNTRY: &str = "المملكة العربية السعودية";
const DEFAULT_PROBABILITY: u8 = 50;

/// Collapsible sections of the intake form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormSection {
    Qualification,
    Address,
    Intake,
    Advanced,
}

/// Visibility flags. Each is independent of the others.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormSections {
    pub show_qualification: bool,
    pub show_address: bool,
    pub show_intake: bool,
    pub advanced_mode: bool,
}

impl FormSections {
    pub fn is_open(&self, section: FormSection) -> bool {
        match section {
            FormSection::Qualification => self.show_qualification,
            FormSection::Address => self.show_address,
            FormSection::Intake => self.show_intake,
            FormSection::Advanced => self.advanced_mode,
        }
    }

    pub fn toggle(&mut self, section: FormSection) {
        let flag = match section {
            FormSection::Qualification => &mut self.show_qualification,
            FormSection::Address => &mut self.show_address,
            FormSection::Intake => &mut self.show_intake,
            FormSection::Advanced => &mut self.advanced_mode,
        };
        *flag = !*flag;
    }
}

/// State of a single lead intake form. Each instance owns its fields outright.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeadForm {
    #[serde(rename = "type")]
    pub lead_type: LeadType,
    pub first_name: String,
    pub last_name: String,
    pub display_name: String,
    pub email: String,
    pub phone: String,
    pub alternate_phone: String,
    pub whatsapp: String,
    pub company: String,
    pub job_title: String,

    pub status: LeadStatus,
    pub pipeline_id: String,
    pub stage_id: String,

    pub source_type: Option<LeadSourceType>,
    pub source_details: String,
    pub referral_source: String,

    pub estimated_value: u64,
    pub probability: u8,

    pub practice_area: String,
    pub case_type: String,
    pub case_description: String,
    pub urgency: Urgency,

    pub street: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,

    pub budget: String,
    pub budget_amount: u64,
    pub authority: String,
    pub need: String,
    pub timeline: String,

    pub conflict_status: ConflictCheckStatus,
    #[serde(rename = "isVIP", alias = "isVip")]
    pub is_vip: bool,

    pub notes: String,
    pub tags: Vec<String>,

    #[serde(skip)]
    pub sections: FormSections,
    #[serde(skip)]
    errors: BTreeMap<FormField, FieldError>,
}

impl Default for LeadForm {
    fn default() -> Self {
        Self {
            lead_type: LeadType::default(),
            first_name: String::new(),
            last_name: String::new(),
            display_name: String::new(),
            email: String::new(),
            phone: String::new(),
            alternate_phone: String::new(),
            whatsapp: String::new(),
            company: String::new(),
            job_title: String::new(),
            status: LeadStatus::default(),
            pipeline_id: String::new(),
            stage_id: String::new(),
            source_type: None,
            source_details: String::new(),
            referral_source: String::new(),
            estimated_value: 0,
            probability: DEFAULT_PROBABILITY,
            practice_area: String::new(),
            case_type: String::new(),
            case_description: String::new(),
            urgency: Urgency::default(),
            street: String::new(),
            city: String::new(),
            postal_code: String::new(),
            country: DEFAULT_COUNTRY.to_string(),
            budget: "unknown".to_string(),
            budget_amount: 0,
            authority: "unknown".to_string(),
            need: "unknown".to_string(),
            timeline: "unknown".to_string(),
            conflict_status: ConflictCheckStatus::default(),
            is_vip: false,
            notes: String::new(),
            tags: Vec::new(),
            sections: FormSections::default(),
            errors: BTreeMap::new(),
        }
    }
}

impl LeadForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::FirstName => &self.first_name,
            FormField::LastName => &self.last_name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::AlternatePhone => &self.alternate_phone,
            FormField::Whatsapp => &self.whatsapp,
        }
    }

    /// Replace a validated field's value. Phone fields keep digits only. A
    /// pending error on the field is dropped until the next blur.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        let slot = match field {
            FormField::FirstName => &mut self.first_name,
            FormField::LastName => &mut self.last_name,
            FormField::Email => &mut self.email,
            FormField::Phone => &mut self.phone,
            FormField::AlternatePhone => &mut self.alternate_phone,
            FormField::Whatsapp => &mut self.whatsapp,
        };
        *slot = if field.is_phone() {
            normalize_phone(&value)
        } else {
            value
        };
        self.errors.remove(&field);
    }

    /// Run the on-blur check for `field`, recording or clearing its error.
    pub fn blur(&mut self, field: FormField) -> Option<FieldError> {
        let outcome = validate_on_blur(field, self.value(field));
        match outcome {
            Some(error) => {
                self.errors.insert(field, error);
            }
            None => {
                self.errors.remove(&field);
            }
        }
        outcome
    }

    pub fn field_error(&self, field: FormField) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Adds a trimmed tag unless it is blank or already present.
    pub fn add_tag(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() || self.tags.iter().any(|existing| existing == tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    pub fn remove_tag(&mut self, tag: &str) {
        self.tags.retain(|existing| existing != tag);
    }

    pub fn qualification_inputs(&self) -> QualificationInputs {
        QualificationInputs {
            budget: self.budget.clone(),
            authority: self.authority.clone(),
            need: self.need.clone(),
            timeline: self.timeline.clone(),
            has_email: !self.email.trim().is_empty(),
            has_phone: !self.phone.trim().is_empty(),
            has_company: !self.company.trim().is_empty(),
            estimated_value: self.estimated_value,
            has_practice_area: !self.practice_area.trim().is_empty(),
            conflict_status: self.conflict_status,
            is_vip: self.is_vip,
        }
    }

    /// Current qualification score, derived from the fields on every call.
    pub fn score(&self) -> u16 {
        compute_score(&self.qualification_inputs())
    }

    pub fn classification(&self) -> ScoreClassification {
        classify(self.score())
    }

    /// Validate every field and, when clean, assemble the creation request.
    pub fn submit(&mut self) -> Result<CreateLeadRequest, ValidationErrors> {
        if let Err(errors) = validate_for_submit(self) {
            self.errors = errors.fields().collect();
            return Err(errors);
        }
        self.errors.clear();
        Ok(CreateLeadRequest::from_form(self))
    }
}
