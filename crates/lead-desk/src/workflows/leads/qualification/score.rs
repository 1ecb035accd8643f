use serde::{Deserialize, Serialize};

use super::super::domain::ConflictCheckStatus;
use super::bonus::BonusRule;
use super::tables::BantDimension;
use super::tier::{classify, ScoreClassification};

pub const MAX_SCORE: u16 = 150;

/// Everything the qualification score reads from a lead.
///
/// Categorical fields stay as raw option tokens so that unrecognized values
/// degrade to zero points rather than failing to parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QualificationInputs {
    pub budget: String,
    pub authority: String,
    pub need: String,
    pub timeline: String,
    pub has_email: bool,
    pub has_phone: bool,
    pub has_company: bool,
    pub estimated_value: u64,
    pub has_practice_area: bool,
    pub conflict_status: ConflictCheckStatus,
    #[serde(rename = "isVIP", alias = "isVip")]
    pub is_vip: bool,
}

impl Default for QualificationInputs {
    fn default() -> Self {
        Self {
            budget: "unknown".to_string(),
            authority: "unknown".to_string(),
            need: "unknown".to_string(),
            timeline: "unknown".to_string(),
            has_email: false,
            has_phone: false,
            has_company: false,
            estimated_value: 0,
            has_practice_area: false,
            conflict_status: ConflictCheckStatus::default(),
            is_vip: false,
        }
    }
}

impl QualificationInputs {
    pub fn token(&self, dimension: BantDimension) -> &str {
        match dimension {
            BantDimension::Budget => &self.budget,
            BantDimension::Authority => &self.authority,
            BantDimension::Need => &self.need,
            BantDimension::Timeline => &self.timeline,
        }
    }
}

/// Qualification score in `0..=MAX_SCORE`.
pub fn compute_score(inputs: &QualificationInputs) -> u16 {
    let categorical: u16 = BantDimension::ordered()
        .into_iter()
        .map(|dimension| dimension.lookup(inputs.token(dimension)))
        .sum();
    let bonuses: u16 = BonusRule::all()
        .into_iter()
        .filter(|rule| rule.applies(inputs))
        .map(BonusRule::points)
        .sum();

    let score = (categorical + bonuses).min(MAX_SCORE);
    debug_assert!(score <= MAX_SCORE);
    score
}

/// Where a slice of the score came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "key")]
pub enum ScoreFactor {
    Dimension(BantDimension),
    Bonus(BonusRule),
}

/// Discrete contribution to a lead score, kept so the total can be audited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreComponent {
    pub factor: ScoreFactor,
    pub points: u16,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub components: Vec<ScoreComponent>,
    pub raw_total: u16,
    pub score: u16,
    pub capped: bool,
    pub classification: ScoreClassification,
}

/// Same total as [`compute_score`], with one component per dimension and per fired bonus.
pub fn score_breakdown(inputs: &QualificationInputs) -> ScoreBreakdown {
    let mut components = Vec::with_capacity(11);

    for dimension in BantDimension::ordered() {
        let token = inputs.token(dimension);
        let points = dimension.lookup(token);
        let notes = if dimension.recognizes(token) {
            format!("{} option '{}'", dimension.key(), token)
        } else {
            format!("{} option '{}' not recognized", dimension.key(), token)
        };
        components.push(ScoreComponent {
            factor: ScoreFactor::Dimension(dimension),
            points,
            notes,
        });
    }

    for rule in BonusRule::all() {
        if rule.applies(inputs) {
            components.push(ScoreComponent {
                factor: ScoreFactor::Bonus(rule),
                points: rule.points(),
                notes: rule.description().to_string(),
            });
        }
    }

    let raw_total: u16 = components.iter().map(|component| component.points).sum();
    let score = raw_total.min(MAX_SCORE);

    ScoreBreakdown {
        components,
        raw_total,
        score,
        capped: raw_total > MAX_SCORE,
        classification: classify(score),
    }
}
