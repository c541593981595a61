use super::*;
use crate::constants::{GRAMMAR_PENALTY_CAP, LENGTH_PENALTY_CAP};

fn words(n: usize) -> String {
    vec!["word"; n].join(" ")
}

#[test]
fn test_tier_order_is_fixed() {
    let rules: Vec<LengthRule> = LENGTH_TIERS.iter().map(|t| t.rule).collect();
    assert_eq!(
        rules,
        vec![
            LengthRule::StudentWordsBelow(20),
            LengthRule::RatioBelow(0.15),
            LengthRule::RatioBelow(0.25),
            LengthRule::RatioBelow(0.35),
            LengthRule::RatioAbove(0.75),
            LengthRule::RatioAbove(0.65),
        ]
    );
    let penalties: Vec<u32> = LENGTH_TIERS.iter().map(|t| t.penalty).collect();
    assert_eq!(penalties, vec![15, 15, 10, 5, 10, 5]);
}

#[test]
fn test_length_cap_is_largest_tier() {
    assert!(LENGTH_TIERS.iter().all(|t| t.penalty <= LENGTH_PENALTY_CAP));
    let largest = LENGTH_TIERS.iter().map(|t| t.penalty).max();
    assert_eq!(largest, Some(LENGTH_PENALTY_CAP));
}

#[test]
fn test_short_response_always_fifteen() {
    // ratio 0.5 would be the zero band, but fewer than 20 words wins first
    assert_eq!(length_penalty(10, 20), 15);
    assert_eq!(length_penalty(19, 38), 15);
    assert_eq!(length_penalty(0, 0), 15);
}

#[test]
fn test_twenty_words_is_not_short() {
    assert_eq!(length_penalty(20, 40), 0);
}

#[test]
fn test_low_ratio_tiers() {
    assert_eq!(length_penalty(20, 200), 15); // 0.10
    assert_eq!(length_penalty(30, 150), 10); // 0.20
    assert_eq!(length_penalty(30, 100), 5); // 0.30
    assert_eq!(length_penalty(50, 100), 0); // 0.50
}

#[test]
fn test_low_ratio_boundaries_are_strict() {
    assert_eq!(length_penalty(30, 200), 10); // exactly 0.15 -> next tier
    assert_eq!(length_penalty(25, 100), 5); // exactly 0.25 -> next tier
    assert_eq!(length_penalty(35, 100), 0); // exactly 0.35 -> zero band
}

#[test]
fn test_high_ratio_boundaries_are_strict() {
    assert_eq!(length_penalty(65, 100), 0); // exactly 0.65
    assert_eq!(length_penalty(66, 100), 5);
    assert_eq!(length_penalty(75, 100), 5); // exactly 0.75 -> looser row
    assert_eq!(length_penalty(76, 100), 10);
    assert!(!LengthRule::RatioAbove(0.75).matches(75, 0.75));
}

#[test]
fn test_high_ratio_takes_larger_penalty() {
    // 0.80 satisfies both high rows; the tighter 0.75 row is listed first
    let tier = matching_tier(&LENGTH_TIERS, 80, 100).expect("high ratio matches");
    assert_eq!(tier.rule, LengthRule::RatioAbove(0.75));
    assert_eq!(length_penalty(80, 100), 10);
    assert_eq!(length_penalty(60, 50), 10); // 1.2
}

#[test]
fn test_every_tier_is_reachable() {
    let cases = [(10, 20), (20, 200), (30, 150), (30, 100), (80, 100), (70, 100)];
    for (tier, (student, reference)) in LENGTH_TIERS.iter().zip(cases) {
        let hit = matching_tier(&LENGTH_TIERS, student, reference).expect("tier matches");
        assert_eq!(hit, tier);
    }
}

#[test]
fn test_zero_reference_words_forces_ratio_zero() {
    assert_eq!(length_ratio(120, 0), 0.0);
    assert_eq!(length_penalty(120, 0), 15);
    assert_eq!(length_penalty(5, 0), 15);
}

#[test]
fn test_matching_tier_none_means_zero() {
    assert!(matching_tier(&LENGTH_TIERS, 50, 100).is_none());
}

#[test]
fn test_custom_table_is_honoured_in_order() {
    // looser row first: it shadows the 0.75 row entirely
    let table = [
        LengthTier {
            rule: LengthRule::RatioAbove(0.65),
            penalty: 5,
        },
        LengthTier {
            rule: LengthRule::RatioAbove(0.75),
            penalty: 10,
        },
    ];
    assert_eq!(matching_tier(&table, 80, 100).map(|t| t.penalty), Some(5));
    assert_eq!(matching_tier(&table, 70, 100).map(|t| t.penalty), Some(5));
}

#[test]
fn test_grammar_zero_issues_is_zero() {
    for w in [0, 1, 10, 500] {
        assert_eq!(grammar_penalty(0, w), 0);
    }
}

#[test]
fn test_grammar_density_truncates() {
    assert_eq!(grammar_penalty(1, 30), 3); // 3.33
    assert_eq!(grammar_penalty(2, 30), 6); // 6.67
    assert_eq!(grammar_penalty(1, 100), 1);
    assert_eq!(grammar_penalty(1, 101), 0); // 0.99
}

#[test]
fn test_grammar_density_is_capped() {
    assert_eq!(grammar_penalty(5, 10), 20); // density 50
    assert_eq!(issue_density(5, 10), 50);
    assert_eq!(grammar_penalty(20, 100), 20); // exactly at the cap
    assert_eq!(grammar_penalty(21, 100), GRAMMAR_PENALTY_CAP);
}

#[test]
fn test_grammar_zero_words_uses_raw_count() {
    assert_eq!(grammar_penalty(3, 0), 3);
    assert_eq!(grammar_penalty(20, 0), 20);
    assert_eq!(grammar_penalty(57, 0), 20);
}

#[test]
fn test_grammar_huge_counts_do_not_overflow() {
    assert_eq!(grammar_penalty(usize::MAX, 1), 20);
}

#[test]
fn test_assess_uses_student_words_for_both() {
    let student = words(10);
    let reference = words(50);
    let penalties = Penalties::assess(&student, &reference, 5);
    assert_eq!(
        penalties,
        Penalties {
            length: 15,
            grammar: 20
        }
    );
    assert_eq!(penalties.total(), 35);
}

#[test]
fn test_assess_empty_texts() {
    let penalties = Penalties::assess("", "", 0);
    assert_eq!(penalties.length, 15);
    assert_eq!(penalties.grammar, 0);
}

#[test]
fn test_assess_in_zero_band() {
    let penalties = Penalties::assess(&words(25), &words(50), 0);
    assert_eq!(penalties, Penalties::default());
}
