//! Property tests for the voyage rating.

use proptest::prelude::*;

use voyage_rating::core::rating::standard_captain_history_risk;
use voyage_rating::{compute_rating, Grade, HistoryEntry, Rating, RatingError, RatingVariant, Voyage};

fn zone() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("china".to_string()),
        Just("east-indies".to_string()),
        Just("west-indies".to_string()),
        Just("west".to_string()),
        proptest::string::string_regex("[a-z-]{1,12}").unwrap(),
    ]
}

fn voyage() -> impl Strategy<Value = Voyage> {
    let length = prop_oneof![0_i64..40, 0_i64..=i64::MAX];
    (zone(), length).prop_map(|(zone, length)| Voyage::new(zone, length))
}

fn history() -> impl Strategy<Value = Vec<HistoryEntry>> {
    let entry = (zone(), -100.0_f64..100.0).prop_map(|(zone, profit)| HistoryEntry::new(zone, profit));
    proptest::collection::vec(entry, 0..16)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every non-negative length yields a grade, computed the same way twice.
    #[test]
    fn property_valid_inputs_always_grade_deterministically(
        voyage in voyage(),
        history in history()
    ) {
        let first = compute_rating(&voyage, &history);
        let second = compute_rating(&voyage.clone(), &history.clone());

        prop_assert!(matches!(first, Ok(Grade::A) | Ok(Grade::B)));
        prop_assert_eq!(first.ok(), second.ok());
    }

    /// PROPERTY: rating never modifies the caller's voyage or history.
    #[test]
    fn property_inputs_are_not_mutated(voyage in voyage(), history in history()) {
        let voyage_before = voyage.clone();
        let history_before = history.clone();

        let _ = Rating::new(&voyage, &history);

        prop_assert_eq!(voyage, voyage_before);
        prop_assert_eq!(history, history_before);
    }

    /// PROPERTY: negative lengths are rejected as invalid input.
    #[test]
    fn property_negative_length_is_rejected(
        zone in zone(),
        length in i64::MIN..0,
        history in history()
    ) {
        let result = compute_rating(&Voyage::new(zone, length), &history);
        let is_invalid_input = matches!(result, Err(RatingError::InvalidInput { .. }));
        prop_assert!(is_invalid_input);
    }

    /// PROPERTY: every factor that is clamped stays non-negative, and the
    /// experienced variant never adds captain risk.
    #[test]
    fn property_risk_factors_are_non_negative(voyage in voyage(), history in history()) {
        let breakdown = Rating::new(&voyage, &history).unwrap().breakdown();

        prop_assert!(breakdown.voyage_risk >= 0);
        prop_assert!(breakdown.captain_history_risk >= 0);
        prop_assert!(breakdown.captain_history_risk <= standard_captain_history_risk(&history));

        let experienced = voyage.zone == "china" && history.iter().any(|e| e.zone == "china");
        prop_assert_eq!(breakdown.variant == RatingVariant::ExperiencedChina, experienced);
    }
}
