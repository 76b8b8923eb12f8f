use core_types::{Product, ProductKind, RiskLevel, RiskProfile};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Optional narrowing criteria applied on top of the classification match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Filters {
    /// Amount the caller intends to invest; products demanding a higher
    /// minimum application are excluded.
    pub min_value: Option<Decimal>,
    pub risk_level: Option<RiskLevel>,
    pub kind: Option<ProductKind>,
    /// When set, only products redeemable before their minimum period.
    pub require_liquidity: bool,
}

/// Selects the catalog products recommended for a profile.
///
/// A product is eligible when its recommended classification equals the
/// profile's classification and it passes every supplied filter. Results
/// are ordered by descending annual rate, ties broken by ascending
/// minimum application, so repeated calls over the same catalog always
/// yield the same sequence.
pub fn recommend(profile: &RiskProfile, catalog: &[Product], filters: &Filters) -> Vec<Product> {
    let mut eligible: Vec<Product> = catalog
        .iter()
        .filter(|p| p.recommended_classification == profile.classification)
        .filter(|p| {
            filters
                .min_value
                .is_none_or(|value| p.minimum_application <= value)
        })
        .filter(|p| filters.risk_level.is_none_or(|level| p.risk == level))
        .filter(|p| filters.kind.is_none_or(|kind| p.kind == kind))
        .filter(|p| !filters.require_liquidity || p.allows_early_redemption)
        .cloned()
        .collect();

    eligible.sort_by(|a, b| {
        b.annual_rate
            .cmp(&a.annual_rate)
            .then(a.minimum_application.cmp(&b.minimum_application))
    });

    eligible
}
