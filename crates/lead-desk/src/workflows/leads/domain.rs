use serde::{Deserialize, Serialize};

/// Identifier wrapper for stored leads.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LeadId(pub String);

/// Whether the prospective client is a person or an organization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadType {
    #[default]
    Individual,
    Company,
}

/// Sales pipeline position of a lead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadStatus {
    #[default]
    New,
    Contacted,
    Qualified,
    ProposalSent,
    Negotiation,
    Won,
    Lost,
    OnHold,
}

impl LeadStatus {
    pub const fn ordered() -> [Self; 8] {
        [
            Self::New,
            Self::Contacted,
            Self::Qualified,
            Self::ProposalSent,
            Self::Negotiation,
            Self::Won,
            Self::Lost,
            Self::OnHold,
        ]
    }

    pub const fn token(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Contacted => "contacted",
            Self::Qualified => "qualified",
            Self::ProposalSent => "proposal_sent",
            Self::Negotiation => "negotiation",
            Self::Won => "won",
            Self::Lost => "lost",
            Self::OnHold => "on_hold",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|status| status.token() == token)
    }
}

/// Channel through which the lead reached the firm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadSourceType {
    Website,
    Referral,
    SocialMedia,
    Advertising,
    ColdCall,
    WalkIn,
    Event,
    Other,
}

impl LeadSourceType {
    pub const fn ordered() -> [Self; 8] {
        [
            Self::Website,
            Self::Referral,
            Self::SocialMedia,
            Self::Advertising,
            Self::ColdCall,
            Self::WalkIn,
            Self::Event,
            Self::Other,
        ]
    }

    pub const fn token(self) -> &'static str {
        match self {
            Self::Website => "website",
            Self::Referral => "referral",
            Self::SocialMedia => "social_media",
            Self::Advertising => "advertising",
            Self::ColdCall => "cold_call",
            Self::WalkIn => "walk_in",
            Self::Event => "event",
            Self::Other => "other",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|source| source.token() == token)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Low,
    #[default]
    Normal,
    High,
    Urgent,
    Critical,
}

/// Outcome of the conflict-of-interest check run before engaging a client.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictCheckStatus {
    #[default]
    Pending,
    Clear,
    PotentialConflict,
    Conflict,
}

impl ConflictCheckStatus {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Pending,
            Self::Clear,
            Self::PotentialConflict,
            Self::Conflict,
        ]
    }

    pub const fn token(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Clear => "clear",
            Self::PotentialConflict => "potential_conflict",
            Self::Conflict => "conflict",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|status| status.token() == token)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadSource {
    #[serde(rename = "type")]
    pub source_type: LeadSourceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referral_source: Option<String>,
}

/// Case details gathered during intake, ahead of the conflict check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntakeDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub practice_area: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_description: Option<String>,
    pub urgency: Urgency,
    pub conflict_check_completed: bool,
}
