use serde::{Deserialize, Serialize};

use super::super::domain::ConflictCheckStatus;
use super::score::QualificationInputs;

/// Independent bonuses awarded on top of the BANT tables. Any subset may fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BonusRule {
    EmailProvided,
    PhoneProvided,
    CompanyProvided,
    EstimatedValue,
    PracticeAreaProvided,
    ConflictClear,
    VipClient,
}

impl BonusRule {
    pub const fn all() -> [Self; 7] {
        [
            Self::EmailProvided,
            Self::PhoneProvided,
            Self::CompanyProvided,
            Self::EstimatedValue,
            Self::PracticeAreaProvided,
            Self::ConflictClear,
            Self::VipClient,
        ]
    }

    pub const fn points(self) -> u16 {
        match self {
            Self::EmailProvided
            | Self::PhoneProvided
            | Self::CompanyProvided
            | Self::PracticeAreaProvided => 5,
            Self::EstimatedValue | Self::ConflictClear | Self::VipClient => 10,
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::EmailProvided => "email address on file",
            Self::PhoneProvided => "phone number on file",
            Self::CompanyProvided => "company name on file",
            Self::EstimatedValue => "estimated matter value recorded",
            Self::PracticeAreaProvided => "practice area identified",
            Self::ConflictClear => "conflict check cleared",
            Self::VipClient => "flagged as VIP",
        }
    }

    pub fn applies(self, inputs: &QualificationInputs) -> bool {
        match self {
            Self::EmailProvided => inputs.has_email,
            Self::PhoneProvided => inputs.has_phone,
            Self::CompanyProvided => inputs.has_company,
            Self::EstimatedValue => inputs.estimated_value > 0,
            Self::PracticeAreaProvided => inputs.has_practice_area,
            Self::ConflictClear => inputs.conflict_status == ConflictCheckStatus::Clear,
            Self::VipClient => inputs.is_vip,
        }
    }
}
