use serde::{Deserialize, Serialize};

/// Classification band derived from a lead score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreTier {
    EarlyStage,
    NeedsFollowup,
    Good,
    Excellent,
}

impl ScoreTier {
    /// Highest band first.
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Excellent,
            Self::Good,
            Self::NeedsFollowup,
            Self::EarlyStage,
        ]
    }

    pub const fn from_score(score: u16) -> Self {
        if score >= Self::Excellent.min_score() {
            Self::Excellent
        } else if score >= Self::Good.min_score() {
            Self::Good
        } else if score >= Self::NeedsFollowup.min_score() {
            Self::NeedsFollowup
        } else {
            Self::EarlyStage
        }
    }

    pub const fn min_score(self) -> u16 {
        match self {
            Self::Excellent => 100,
            Self::Good => 70,
            Self::NeedsFollowup => 40,
            Self::EarlyStage => 0,
        }
    }

    pub const fn token(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::NeedsFollowup => "needs_followup",
            Self::EarlyStage => "early_stage",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::NeedsFollowup => "Needs follow-up",
            Self::EarlyStage => "Early stage",
        }
    }

    pub const fn label_ar(self) -> &'static str {
        match self {
            Self::Excellent => "ممتاز",
            Self::Good => "جيد",
            Self::NeedsFollowup => "يحتاج متابعة",
            Self::EarlyStage => "مرحلة مبكرة",
        }
    }

    pub const fn color(self) -> ColorBand {
        match self {
            Self::Excellent => ColorBand::Emerald,
            Self::Good => ColorBand::Blue,
            Self::NeedsFollowup => ColorBand::Amber,
            Self::EarlyStage => ColorBand::Slate,
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ordered().into_iter().find(|tier| tier.token() == token)
    }
}

/// Presentation colour family for a tier badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorBand {
    Emerald,
    Blue,
    Amber,
    Slate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreClassification {
    pub tier: ScoreTier,
    pub label: &'static str,
    pub label_ar: &'static str,
    pub color: ColorBand,
}

pub fn classify(score: u16) -> ScoreClassification {
    let tier = ScoreTier::from_score(score);
    ScoreClassification {
        tier,
        label: tier.label(),
        label_ar: tier.label_ar(),
        color: tier.color(),
    }
}
