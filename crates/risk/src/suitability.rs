use core_types::{RiskClassification, RiskLevel, Suitability};

/// Matches a product's risk level against a customer classification.
///
/// Medium-risk products are acceptable for both moderate and aggressive
/// investors; anything riskier than the profile tolerates is flagged, and
/// low-risk products offered to bolder profiles are flagged the other way.
pub fn assess(classification: RiskClassification, product_risk: RiskLevel) -> Suitability {
    use RiskClassification::*;
    use RiskLevel::*;

    match (product_risk, classification) {
        (Low, Conservative) => Suitability::Suitable,
        (Low, Moderate) | (Low, Aggressive) => Suitability::TooConservative,

        (Medium, Conservative) => Suitability::TooRisky,
        (Medium, Moderate) | (Medium, Aggressive) => Suitability::Suitable,

        (High, Conservative) | (High, Moderate) => Suitability::TooRisky,
        (High, Aggressive) => Suitability::Suitable,
    }
}
