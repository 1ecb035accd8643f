use super::common::saturated_inputs;
use crate::workflows::leads::domain::ConflictCheckStatus;
use crate::workflows::leads::qualification::{
    classify, compute_score, score_breakdown, BantDimension, BonusRule, QualificationInputs,
    ScoreFactor, ScoreTier, MAX_SCORE,
};

fn all_tokens(dimension: BantDimension) -> Vec<&'static str> {
    dimension
        .options()
        .into_iter()
        .map(|entry| entry.token)
        .chain(["", "not_a_real_option", "UNKNOWN"])
        .collect()
}

fn with_bonus(mut inputs: QualificationInputs, rule: BonusRule) -> QualificationInputs {
    match rule {
        BonusRule::EmailProvided => inputs.has_email = true,
        BonusRule::PhoneProvided => inputs.has_phone = true,
        BonusRule::CompanyProvided => inputs.has_company = true,
        BonusRule::EstimatedValue => inputs.estimated_value = 25_000,
        BonusRule::PracticeAreaProvided => inputs.has_practice_area = true,
        BonusRule::ConflictClear => inputs.conflict_status = ConflictCheckStatus::Clear,
        BonusRule::VipClient => inputs.is_vip = true,
    }
    inputs
}

#[test]
fn saturated_lead_caps_at_max_and_is_excellent() {
    let inputs = saturated_inputs();
    let breakdown = score_breakdown(&inputs);

    assert_eq!(breakdown.raw_total, 175);
    assert!(breakdown.capped);
    assert_eq!(compute_score(&inputs), MAX_SCORE);
    assert_eq!(breakdown.score, MAX_SCORE);
    assert_eq!(breakdown.classification.tier, ScoreTier::Excellent);
    assert_eq!(breakdown.classification.label, "Excellent");
}

#[test]
fn empty_lead_scores_zero_and_is_early_stage() {
    let inputs = QualificationInputs::default();
    assert_eq!(compute_score(&inputs), 0);

    let breakdown = score_breakdown(&inputs);
    assert_eq!(breakdown.classification.tier, ScoreTier::EarlyStage);
    assert!(!breakdown.capped);
    assert_eq!(breakdown.components.len(), 4);
    assert!(breakdown
        .components
        .iter()
        .all(|component| component.points == 0));
}

#[test]
fn score_is_deterministic() {
    let inputs = saturated_inputs();
    let first = compute_score(&inputs);
    for _ in 0..10 {
        assert_eq!(compute_score(&inputs), first);
        assert_eq!(score_breakdown(&inputs).score, first);
    }
}

#[test]
fn every_option_combination_stays_in_bounds() {
    let mut seen = 0usize;
    for budget in all_tokens(BantDimension::Budget) {
        for authority in all_tokens(BantDimension::Authority) {
            for need in all_tokens(BantDimension::Need) {
                for timeline in all_tokens(BantDimension::Timeline) {
                    for vip in [false, true] {
                        let inputs = QualificationInputs {
                            budget: budget.to_string(),
                            authority: authority.to_string(),
                            need: need.to_string(),
                            timeline: timeline.to_string(),
                            has_email: vip,
                            has_company: vip,
                            estimated_value: if vip { 1 } else { 0 },
                            is_vip: vip,
                            ..QualificationInputs::default()
                        };
                        let score = compute_score(&inputs);
                        assert!(score <= MAX_SCORE);
                        assert_eq!(score_breakdown(&inputs).score, score);
                        seen += 1;
                    }
                }
            }
        }
    }
    assert!(seen > 0);
}

#[test]
fn unrecognized_tokens_contribute_nothing() {
    let baseline = QualificationInputs {
        has_email: true,
        ..QualificationInputs::default()
    };
    let garbage = QualificationInputs {
        budget: "a lot".to_string(),
        authority: "the boss".to_string(),
        need: "yesterday".to_string(),
        timeline: "soon-ish".to_string(),
        ..baseline.clone()
    };

    assert_eq!(compute_score(&garbage), compute_score(&baseline));

    let breakdown = score_breakdown(&garbage);
    let notes: Vec<&str> = breakdown
        .components
        .iter()
        .filter(|component| matches!(component.factor, ScoreFactor::Dimension(_)))
        .map(|component| component.notes.as_str())
        .collect();
    assert_eq!(notes.len(), 4);
    assert!(notes.iter().all(|note| note.ends_with("not recognized")));
}

#[test]
fn each_bonus_adds_exactly_its_points_below_the_cap() {
    let base = QualificationInputs {
        budget: "10k_50k".to_string(),
        authority: "influencer".to_string(),
        ..QualificationInputs::default()
    };
    let base_score = compute_score(&base);
    assert_eq!(base_score, 35);

    for rule in BonusRule::all() {
        let boosted = with_bonus(base.clone(), rule);
        assert_eq!(
            compute_score(&boosted),
            base_score + rule.points(),
            "bonus {rule:?}"
        );
    }
}

#[test]
fn bonuses_never_lower_the_score_near_the_cap() {
    let mut inputs = saturated_inputs();
    inputs.is_vip = false;
    inputs.conflict_status = ConflictCheckStatus::Pending;
    let before = compute_score(&inputs);

    for rule in BonusRule::all() {
        let after = compute_score(&with_bonus(inputs.clone(), rule));
        assert!(after >= before, "bonus {rule:?} lowered the score");
        assert!(after <= MAX_SCORE);
    }
}

#[test]
fn breakdown_components_sum_to_raw_total() {
    let inputs = QualificationInputs {
        budget: "above_500k".to_string(),
        authority: "final_approver".to_string(),
        need: "critical".to_string(),
        timeline: "immediate".to_string(),
        has_phone: true,
        ..QualificationInputs::default()
    };
    let breakdown = score_breakdown(&inputs);
    let summed: u16 = breakdown
        .components
        .iter()
        .map(|component| component.points)
        .sum();

    assert_eq!(summed, breakdown.raw_total);
    assert_eq!(breakdown.raw_total, 155);
    assert_eq!(breakdown.score, compute_score(&inputs));
    assert!(breakdown.components.iter().any(|component| component.factor
        == ScoreFactor::Bonus(BonusRule::PhoneProvided)));
}

#[test]
fn classification_follows_score_for_every_value() {
    let mut previous = ScoreTier::EarlyStage;
    for score in 0..=MAX_SCORE {
        let tier = classify(score).tier;
        assert!(tier >= previous, "tier dropped at {score}");
        assert_eq!(tier, ScoreTier::from_score(score));
        previous = tier;
    }
}
