//! Fixed BANT point tables.
//!
//! Every dimension keeps an `unknown` option worth nothing, and any token that
//! is not in a table resolves to zero points instead of failing.

use serde::{Deserialize, Serialize};

/// Budget range disclosed by the prospective client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BudgetRange {
    #[serde(rename = "unknown")]
    Unknown,
    #[serde(rename = "under_10k")]
    Under10k,
    #[serde(rename = "10k_50k")]
    From10kTo50k,
    #[serde(rename = "50k_100k")]
    From50kTo100k,
    #[serde(rename = "100k_500k")]
    From100kTo500k,
    #[serde(rename = "above_500k")]
    Above500k,
}

impl BudgetRange {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Unknown,
            Self::Under10k,
            Self::From10kTo50k,
            Self::From50kTo100k,
            Self::From100kTo500k,
            Self::Above500k,
        ]
    }

    pub const fn token(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Under10k => "under_10k",
            Self::From10kTo50k => "10k_50k",
            Self::From50kTo100k => "50k_100k",
            Self::From100kTo500k => "100k_500k",
            Self::Above500k => "above_500k",
        }
    }

    pub const fn points(self) -> u16 {
        match self {
            Self::Unknown => 0,
            Self::Under10k => 10,
            Self::From10kTo50k => 20,
            Self::From50kTo100k => 30,
            Self::From100kTo500k => 40,
            Self::Above500k => 50,
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ordered().into_iter().find(|item| item.token() == token)
    }
}

/// How much purchasing authority the contact holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthorityLevel {
    Unknown,
    NoAuthority,
    Influencer,
    Recommender,
    DecisionMaker,
    FinalApprover,
}

impl AuthorityLevel {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Unknown,
            Self::NoAuthority,
            Self::Influencer,
            Self::Recommender,
            Self::DecisionMaker,
            Self::FinalApprover,
        ]
    }

    pub const fn token(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::NoAuthority => "no_authority",
            Self::Influencer => "influencer",
            Self::Recommender => "recommender",
            Self::DecisionMaker => "decision_maker",
            Self::FinalApprover => "final_approver",
        }
    }

    pub const fn points(self) -> u16 {
        match self {
            Self::Unknown => 0,
            Self::NoAuthority => 5,
            Self::Influencer => 15,
            Self::Recommender => 20,
            Self::DecisionMaker => 30,
            Self::FinalApprover => 35,
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ordered().into_iter().find(|item| item.token() == token)
    }
}

/// Strength of the legal need behind the enquiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NeedLevel {
    Unknown,
    NoNeed,
    Exploring,
    Researching,
    Evaluating,
    Urgent,
    Critical,
}

impl NeedLevel {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::Unknown,
            Self::NoNeed,
            Self::Exploring,
            Self::Researching,
            Self::Evaluating,
            Self::Urgent,
            Self::Critical,
        ]
    }

    pub const fn token(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::NoNeed => "no_need",
            Self::Exploring => "exploring",
            Self::Researching => "researching",
            Self::Evaluating => "evaluating",
            Self::Urgent => "urgent",
            Self::Critical => "critical",
        }
    }

    // `unknown` and `no_need` both carry no qualifying signal.
    pub const fn points(self) -> u16 {
        match self {
            Self::Unknown | Self::NoNeed => 0,
            Self::Exploring => 10,
            Self::Researching => 15,
            Self::Evaluating => 20,
            Self::Urgent => 25,
            Self::Critical => 30,
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ordered().into_iter().find(|item| item.token() == token)
    }
}

/// When the client expects to engage the firm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PurchaseTimeline {
    Unknown,
    NoTimeline,
    NextYear,
    ThisYear,
    ThisQuarter,
    ThisMonth,
    ThisWeek,
    Immediate,
}

impl PurchaseTimeline {
    pub const fn ordered() -> [Self; 8] {
        [
            Self::Unknown,
            Self::NoTimeline,
            Self::NextYear,
            Self::ThisYear,
            Self::ThisQuarter,
            Self::ThisMonth,
            Self::ThisWeek,
            Self::Immediate,
        ]
    }

    pub const fn token(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::NoTimeline => "no_timeline",
            Self::NextYear => "next_year",
            Self::ThisYear => "this_year",
            Self::ThisQuarter => "this_quarter",
            Self::ThisMonth => "this_month",
            Self::ThisWeek => "this_week",
            Self::Immediate => "immediate",
        }
    }

    pub const fn points(self) -> u16 {
        match self {
            Self::Unknown => 0,
            Self::NoTimeline => 5,
            Self::NextYear => 10,
            Self::ThisYear => 15,
            Self::ThisQuarter => 20,
            Self::ThisMonth => 25,
            Self::ThisWeek => 30,
            Self::Immediate => 35,
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ordered().into_iter().find(|item| item.token() == token)
    }
}

/// The four BANT dimensions, each backed by one of the tables above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BantDimension {
    Budget,
    Authority,
    Need,
    Timeline,
}

impl BantDimension {
    pub const fn ordered() -> [Self; 4] {
        [Self::Budget, Self::Authority, Self::Need, Self::Timeline]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Budget => "budget",
            Self::Authority => "authority",
            Self::Need => "need",
            Self::Timeline => "timeline",
        }
    }

    /// Points for `token` in this dimension's table; zero when the token is not listed.
    pub fn lookup(self, token: &str) -> u16 {
        match self {
            Self::Budget => BudgetRange::from_token(token).map_or(0, BudgetRange::points),
            Self::Authority => AuthorityLevel::from_token(token).map_or(0, AuthorityLevel::points),
            Self::Need => NeedLevel::from_token(token).map_or(0, NeedLevel::points),
            Self::Timeline => {
                PurchaseTimeline::from_token(token).map_or(0, PurchaseTimeline::points)
            }
        }
    }

    pub fn recognizes(self, token: &str) -> bool {
        match self {
            Self::Budget => BudgetRange::from_token(token).is_some(),
            Self::Authority => AuthorityLevel::from_token(token).is_some(),
            Self::Need => NeedLevel::from_token(token).is_some(),
            Self::Timeline => PurchaseTimeline::from_token(token).is_some(),
        }
    }

    /// Table rows in display order.
    pub fn options(self) -> Vec<TableEntry> {
        match self {
            Self::Budget => BudgetRange::ordered()
                .into_iter()
                .map(|item| TableEntry::new(item.token(), item.points()))
                .collect(),
            Self::Authority => AuthorityLevel::ordered()
                .into_iter()
                .map(|item| TableEntry::new(item.token(), item.points()))
                .collect(),
            Self::Need => NeedLevel::ordered()
                .into_iter()
                .map(|item| TableEntry::new(item.token(), item.points()))
                .collect(),
            Self::Timeline => PurchaseTimeline::ordered()
                .into_iter()
                .map(|item| TableEntry::new(item.token(), item.points()))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TableEntry {
    pub token: &'static str,
    pub points: u16,
}

impl TableEntry {
    const fn new(token: &'static str, points: u16) -> Self {
        Self { token, points }
    }
}
