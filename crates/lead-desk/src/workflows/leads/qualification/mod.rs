//! BANT lead qualification: point tables, bonus rules, the capped score, and
//! the tier classifier. Everything here is pure and recomputed on demand.

mod bonus;
mod score;
mod tables;
mod tier;

pub use bonus::BonusRule;
pub use score::{
    compute_score, score_breakdown, QualificationInputs, ScoreBreakdown, ScoreComponent,
    ScoreFactor, MAX_SCORE,
};
pub use tables::{
    AuthorityLevel, BantDimension, BudgetRange, NeedLevel, PurchaseTimeline, TableEntry,
};
pub use tier::{classify, ColorBand, ScoreClassification, ScoreTier};
