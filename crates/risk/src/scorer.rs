use core_types::{RiskClassification, RiskProfile, RiskProfileInput};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Classifies a customer from their behavioral inputs.
///
/// Deterministic and total: the same input triple always produces the same
/// score and classification. Scores are additive bucket points — volume
/// contributes 10..=40, movement frequency 10..=30 and liquidity preference
/// 10 or 30, so the total always lands in 30..=100.
pub fn classify(input: &RiskProfileInput) -> RiskProfile {
    let score = volume_points(input.invested_volume)
        + frequency_points(input.movement_frequency)
        + liquidity_points(input.prefers_liquidity);

    let (classification, rationale) = if score <= 40 {
        (
            RiskClassification::Conservative,
            "Conservative profile: low activity, focus on safety and liquidity",
        )
    } else if score <= 70 {
        (
            RiskClassification::Moderate,
            "Moderate profile: balance between safety and returns",
        )
    } else {
        (
            RiskClassification::Aggressive,
            "Aggressive profile: pursues high returns, accepts higher risk",
        )
    };

    RiskProfile {
        classification,
        score,
        rationale: rationale.to_string(),
    }
}

// Bucket boundaries are upper-exclusive: a volume of exactly 10,000 falls
// into the 20-point bucket.
fn volume_points(volume: Decimal) -> u8 {
    if volume < dec!(10_000) {
        10
    } else if volume < dec!(50_000) {
        20
    } else if volume < dec!(100_000) {
        30
    } else {
        40
    }
}

fn frequency_points(frequency: u32) -> u8 {
    if frequency < 3 {
        10
    } else if frequency < 10 {
        20
    } else {
        30
    }
}

fn liquidity_points(prefers_liquidity: bool) -> u8 {
    if prefers_liquidity { 10 } else { 30 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::RiskClassification::*;
    use rust_decimal_macros::dec;

    fn input(volume: Decimal, frequency: u32, liquidity: bool) -> RiskProfileInput {
        RiskProfileInput::new(volume, frequency, liquidity).unwrap()
    }

    #[test]
    fn low_activity_customer_is_conservative() {
        let profile = classify(&input(dec!(5_000), 1, true));
        assert_eq!(profile.score, 30);
        assert_eq!(profile.classification, Conservative);
    }

    #[test]
    fn high_volume_infrequent_customer_is_aggressive() {
        let profile = classify(&input(dec!(60_000), 5, false));
        assert_eq!(profile.score, 80);
        assert_eq!(profile.classification, Aggressive);
    }

    #[test]
    fn classification_is_deterministic() {
        let a = classify(&input(dec!(42_000), 7, false));
        let b = classify(&input(dec!(42_000), 7, false));
        assert_eq!(a, b);
    }

    #[test]
    fn volume_boundaries_fall_into_upper_bucket() {
        assert_eq!(volume_points(dec!(9_999.99)), 10);
        assert_eq!(volume_points(dec!(10_000)), 20);
        assert_eq!(volume_points(dec!(49_999.99)), 20);
        assert_eq!(volume_points(dec!(50_000)), 30);
        assert_eq!(volume_points(dec!(99_999.99)), 30);
        assert_eq!(volume_points(dec!(100_000)), 40);
    }

    #[test]
    fn frequency_boundaries_fall_into_upper_bucket() {
        assert_eq!(frequency_points(2), 10);
        assert_eq!(frequency_points(3), 20);
        assert_eq!(frequency_points(9), 20);
        assert_eq!(frequency_points(10), 30);
    }

    #[test]
    fn liquidity_preference_lowers_the_score() {
        assert_eq!(liquidity_points(true), 10);
        assert_eq!(liquidity_points(false), 30);
    }

    #[test]
    fn all_bucket_combinations_classify_on_score_boundaries() {
        let volumes = [dec!(5_000), dec!(20_000), dec!(75_000), dec!(200_000)];
        let frequencies = [1, 5, 15];
        let liquidity = [true, false];

        for &volume in &volumes {
            for &frequency in &frequencies {
                for &prefers in &liquidity {
                    let profile = classify(&input(volume, frequency, prefers));

                    assert!((30..=100).contains(&profile.score));
                    let expected = if profile.score <= 40 {
                        Conservative
                    } else if profile.score <= 70 {
                        Moderate
                    } else {
                        Aggressive
                    };
                    assert_eq!(profile.classification, expected);
                }
            }
        }
    }

    #[test]
    fn rationale_matches_classification() {
        let conservative = classify(&input(dec!(1_000), 0, true));
        assert!(conservative.rationale.starts_with("Conservative"));

        let moderate = classify(&input(dec!(20_000), 5, false));
        assert_eq!(moderate.score, 60);
        assert!(moderate.rationale.starts_with("Moderate"));

        let aggressive = classify(&input(dec!(200_000), 15, false));
        assert_eq!(aggressive.score, 100);
        assert!(aggressive.rationale.starts_with("Aggressive"));
    }
}
