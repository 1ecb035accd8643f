use std::cmp::Ordering;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::domain::{LeadSourceType, LeadStatus};
use super::qualification::ScoreTier;
use super::repository::{LeadPage, LeadRecord};

pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const MAX_PAGE_SIZE: u32 = 100;

/// Sentinel used by list selectors for "no filter".
const ALL: &str = "all";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LeadSortKey {
    #[default]
    CreatedAt,
    Score,
    DisplayName,
}

impl LeadSortKey {
    pub const fn token(self) -> &'static str {
        match self {
            Self::CreatedAt => "createdAt",
            Self::Score => "score",
            Self::DisplayName => "displayName",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        [Self::CreatedAt, Self::Score, Self::DisplayName]
            .into_iter()
            .find(|key| key.token() == token)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub const fn token(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("invalid value '{value}' for query parameter '{param}'")]
    InvalidValue { param: &'static str, value: String },
}

/// Selections from the lead list toolbar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadFilters {
    pub search: Option<String>,
    pub status: Option<LeadStatus>,
    pub source: Option<LeadSourceType>,
    pub tier: Option<ScoreTier>,
    pub min_score: Option<u16>,
    pub vip_only: bool,
    pub sort_by: LeadSortKey,
    pub sort_order: SortOrder,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl LeadFilters {
    /// Parse list query parameters. Blank values and `all` mean "no filter";
    /// unrecognized parameter names are ignored.
    pub fn from_query(params: &HashMap<String, String>) -> Result<Self, FilterError> {
        let param = |name: &str| selection(params, name);

        Ok(Self {
            search: param("search").map(str::to_string),
            status: param("status")
                .map(|value| LeadStatus::from_token(value).ok_or_else(|| invalid("status", value)))
                .transpose()?,
            source: param("source")
                .map(|value| {
                    LeadSourceType::from_token(value).ok_or_else(|| invalid("source", value))
                })
                .transpose()?,
            tier: param("tier")
                .map(|value| ScoreTier::from_token(value).ok_or_else(|| invalid("tier", value)))
                .transpose()?,
            min_score: param("minScore")
                .map(|value| value.parse().map_err(|_| invalid("minScore", value)))
                .transpose()?,
            vip_only: param("vip")
                .map(|value| value.parse().map_err(|_| invalid("vip", value)))
                .transpose()?
                .unwrap_or(false),
            sort_by: param("sortBy")
                .map(|value| LeadSortKey::from_token(value).ok_or_else(|| invalid("sortBy", value)))
                .transpose()?
                .unwrap_or_default(),
            sort_order: param("sortOrder")
                .map(|value| SortOrder::from_token(value).ok_or_else(|| invalid("sortOrder", value)))
                .transpose()?
                .unwrap_or_default(),
            page: param("page")
                .map(|value| value.parse().map_err(|_| invalid("page", value)))
                .transpose()?,
            limit: param("limit")
                .map(|value| value.parse().map_err(|_| invalid("limit", value)))
                .transpose()?,
        })
    }

    /// Query parameters for the backend list call. Unset filters are left out;
    /// sorting and paging are always sent.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        if let Some(search) = self.search.as_deref().map(str::trim) {
            if !search.is_empty() {
                pairs.push(("search", search.to_string()));
            }
        }
        if let Some(status) = self.status {
            pairs.push(("status", status.token().to_string()));
        }
        if let Some(source) = self.source {
            pairs.push(("source", source.token().to_string()));
        }
        if let Some(tier) = self.tier {
            pairs.push(("tier", tier.token().to_string()));
        }
        if let Some(min_score) = self.min_score {
            pairs.push(("minScore", min_score.to_string()));
        }
        if self.vip_only {
            pairs.push(("vip", "true".to_string()));
        }

        pairs.push(("sortBy", self.sort_by.token().to_string()));
        pairs.push(("sortOrder", self.sort_order.token().to_string()));
        pairs.push(("page", self.page().to_string()));
        pairs.push(("limit", self.limit().to_string()));
        pairs
    }

    pub fn is_active(&self) -> bool {
        self.search.as_deref().is_some_and(|search| !search.trim().is_empty())
            || self.status.is_some()
            || self.source.is_some()
            || self.tier.is_some()
            || self.min_score.is_some()
            || self.vip_only
    }

    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1).max(1)
    }

    pub fn limit(&self) -> u32 {
        self.limit
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE)
    }

    /// Fill in a page size when the caller did not choose one.
    pub fn with_default_limit(mut self, limit: u32) -> Self {
        if self.limit.is_none() {
            self.limit = Some(limit);
        }
        self
    }

    pub fn matches(&self, record: &LeadRecord) -> bool {
        let request = &record.request;

        if let Some(search) = self.search.as_deref().map(str::trim) {
            let needle = search.to_lowercase();
            let haystacks = [
                Some(request.display_name.as_str()),
                request.email.as_deref(),
                Some(request.phone.as_str()),
                request.company.as_deref(),
            ];
            let found = haystacks
                .into_iter()
                .flatten()
                .any(|value| value.to_lowercase().contains(&needle));
            if !found {
                return false;
            }
        }

        if self.status.is_some_and(|status| status != request.status) {
            return false;
        }
        if let Some(source) = self.source {
            if request.source.as_ref().map(|item| item.source_type) != Some(source) {
                return false;
            }
        }
        if self.tier.is_some_and(|tier| tier != record.classification().tier) {
            return false;
        }
        if self.min_score.is_some_and(|min| record.score() < min) {
            return false;
        }
        if self.vip_only && !request.is_vip {
            return false;
        }
        true
    }

    /// Filter, sort, and paginate records held in memory.
    pub fn apply<I>(&self, records: I) -> LeadPage
    where
        I: IntoIterator<Item = LeadRecord>,
    {
        let mut matching: Vec<LeadRecord> = records
            .into_iter()
            .filter(|record| self.matches(record))
            .collect();
        matching.sort_by(|left, right| self.compare(left, right));

        let total = matching.len();
        let page = self.page();
        let limit = self.limit();
        let offset = (page as usize - 1).saturating_mul(limit as usize);
        let records = matching
            .into_iter()
            .skip(offset)
            .take(limit as usize)
            .collect();

        LeadPage {
            total,
            page,
            limit,
            records,
        }
    }

    fn compare(&self, left: &LeadRecord, right: &LeadRecord) -> Ordering {
        let ordering = match self.sort_by {
            LeadSortKey::CreatedAt => left.created_at.cmp(&right.created_at),
            LeadSortKey::Score => left.score().cmp(&right.score()),
            LeadSortKey::DisplayName => left
                .request
                .display_name
                .to_lowercase()
                .cmp(&right.request.display_name.to_lowercase()),
        }
        .then_with(|| left.id.cmp(&right.id));

        match self.sort_order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }
}

pub(crate) fn selection<'a>(
    params: &'a HashMap<String, String>,
    name: &str,
) -> Option<&'a str> {
    params
        .get(name)
        .map(|value| value.trim())
        .filter(|value| !value.is_empty() && *value != ALL)
}

pub(crate) fn invalid(param: &'static str, value: &str) -> FilterError {
    FilterError::InvalidValue {
        param,
        value: value.to_string(),
    }
}
