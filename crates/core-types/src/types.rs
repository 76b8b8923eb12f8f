use crate::error::{Error, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Investor classification derived from a behavioral score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskClassification {
    Conservative,
    Moderate,
    Aggressive,
}

impl fmt::Display for RiskClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RiskClassification::Conservative => "Conservative",
            RiskClassification::Moderate => "Moderate",
            RiskClassification::Aggressive => "Aggressive",
        };
        write!(f, "{}", name)
    }
}

/// Risk level assigned to an investment product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl FromStr for RiskLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Ok(RiskLevel::Low),
            "medium" => Ok(RiskLevel::Medium),
            "high" => Ok(RiskLevel::High),
            other => Err(Error::validation(format!("unknown risk level '{}'", other))),
        }
    }
}

/// Category of investment product offered in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductKind {
    Cdb,
    Lci,
    Lca,
    TreasuryBond,
    Fund,
}

impl FromStr for ProductKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "cdb" => Ok(ProductKind::Cdb),
            "lci" => Ok(ProductKind::Lci),
            "lca" => Ok(ProductKind::Lca),
            "treasury" | "treasury-bond" => Ok(ProductKind::TreasuryBond),
            "fund" => Ok(ProductKind::Fund),
            other => Err(Error::validation(format!(
                "unknown product kind '{}'",
                other
            ))),
        }
    }
}

/// Behavioral inputs used to classify a customer's risk appetite.
///
/// Constructed per calculation; the classifier itself never fails, so the
/// non-negative-volume precondition is enforced here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskProfileInput {
    /// Total volume of historical investments.
    pub invested_volume: Decimal,
    /// Number of account movements over the reference period.
    pub movement_frequency: u32,
    /// Whether the customer favors products with early redemption.
    pub prefers_liquidity: bool,
}

impl RiskProfileInput {
    pub fn new(
        invested_volume: Decimal,
        movement_frequency: u32,
        prefers_liquidity: bool,
    ) -> Result<Self> {
        if invested_volume.is_sign_negative() {
            return Err(Error::validation("invested volume cannot be negative"));
        }

        Ok(Self {
            invested_volume,
            movement_frequency,
            prefers_liquidity,
        })
    }
}

/// Result of classifying a customer: score, classification and rationale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskProfile {
    pub classification: RiskClassification,
    /// Behavioral score in the 0..=100 range.
    pub score: u8,
    pub rationale: String,
}

/// An investment product. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub kind: ProductKind,
    /// Annual nominal rate, e.g. `0.12` for 12% a year.
    pub annual_rate: Decimal,
    pub risk: RiskLevel,
    /// Minimum holding period before redemption, in days.
    pub minimum_term_days: u32,
    /// Smallest amount the product accepts.
    pub minimum_application: Decimal,
    /// Whether the product can be redeemed before the minimum period
    /// without a fee.
    pub allows_early_redemption: bool,
    pub recommended_classification: RiskClassification,
}

impl Product {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: u32,
        name: impl Into<String>,
        kind: ProductKind,
        annual_rate: Decimal,
        risk: RiskLevel,
        minimum_term_days: u32,
        minimum_application: Decimal,
        allows_early_redemption: bool,
        recommended_classification: RiskClassification,
    ) -> Result<Self> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(Error::validation("product name cannot be empty"));
        }
        if annual_rate.is_sign_negative() {
            return Err(Error::validation("annual rate cannot be negative"));
        }
        if minimum_application <= Decimal::ZERO {
            return Err(Error::validation(
                "minimum application amount must be positive",
            ));
        }

        Ok(Self {
            id,
            name,
            kind,
            annual_rate,
            risk,
            minimum_term_days,
            minimum_application,
            allows_early_redemption,
            recommended_classification,
        })
    }

    /// Compact projection of the product echoed on simulation results.
    pub fn summary(&self) -> ProductSummary {
        ProductSummary {
            id: self.id,
            name: self.name.clone(),
            kind: self.kind,
            annual_rate: self.annual_rate,
            risk: self.risk,
        }
    }
}

/// The subset of product fields echoed back with a simulation result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSummary {
    pub id: u32,
    pub name: String,
    pub kind: ProductKind,
    pub annual_rate: Decimal,
    pub risk: RiskLevel,
}

/// A request to project the growth of a principal over a term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    pub principal: Decimal,
    pub term_months: u32,
    pub product: Product,
}

/// Outcome of matching a product's risk level against a customer profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Suitability {
    /// No profile was available to assess against.
    NotAssessed,
    Suitable,
    /// Low-risk product offered to a bolder profile.
    TooConservative,
    /// Product riskier than the profile tolerates.
    TooRisky,
}

/// Kind of regulatory disclaimer attached to a simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisclaimerKind {
    DepositInsurance,
    FixedIncome,
    VariableIncome,
}

/// Regulatory disclaimer text derived from the product kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disclaimer {
    pub kind: DisclaimerKind,
    pub text: String,
    pub mandatory: bool,
}

impl Disclaimer {
    pub fn for_kind(kind: ProductKind) -> Self {
        match kind {
            ProductKind::Cdb => Self {
                kind: DisclaimerKind::DepositInsurance,
                text: "Deposit-insured products are guaranteed up to 250,000.00 per \
                       holder and per institution."
                    .to_string(),
                mandatory: true,
            },
            ProductKind::Lci | ProductKind::Lca | ProductKind::TreasuryBond => Self {
                kind: DisclaimerKind::FixedIncome,
                text: "Fixed-income investments are subject to market risk, including \
                       interest rate and inflation variations."
                    .to_string(),
                mandatory: true,
            },
            ProductKind::Fund => Self {
                kind: DisclaimerKind::VariableIncome,
                text: "Past performance is no guarantee of future results. Fund \
                       investments may lose capital."
                    .to_string(),
                mandatory: true,
            },
        }
    }
}

/// Projection produced by the simulation calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Projected value at the end of the term, rounded to 2 decimal places.
    pub final_value: Decimal,
    /// `(final - principal) / principal`, before output rounding.
    pub return_ratio: f64,
    pub term_months: u32,
    pub product: ProductSummary,
    pub suitability: Suitability,
    pub disclaimer: Disclaimer,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn product(name: &str, minimum_application: Decimal) -> Result<Product> {
        Product::new(
            1,
            name,
            ProductKind::Cdb,
            dec!(0.12),
            RiskLevel::Low,
            90,
            minimum_application,
            true,
            RiskClassification::Conservative,
        )
    }

    #[test]
    fn product_rejects_empty_name() {
        assert!(product("  ", dec!(100)).is_err());
    }

    #[test]
    fn product_rejects_non_positive_minimum_application() {
        assert!(product("CDB Plus", dec!(0)).is_err());
        assert!(product("CDB Plus", dec!(-5)).is_err());
    }

    #[test]
    fn product_rejects_negative_rate() {
        let result = Product::new(
            1,
            "CDB Plus",
            ProductKind::Cdb,
            dec!(-0.01),
            RiskLevel::Low,
            90,
            dec!(100),
            true,
            RiskClassification::Conservative,
        );
        assert!(result.is_err());
    }

    #[test]
    fn profile_input_rejects_negative_volume() {
        assert!(RiskProfileInput::new(dec!(-1), 0, true).is_err());
        assert!(RiskProfileInput::new(dec!(0), 0, true).is_ok());
    }

    #[test]
    fn product_kind_parses_case_insensitively() {
        assert_eq!("CDB".parse::<ProductKind>().unwrap(), ProductKind::Cdb);
        assert_eq!(
            "treasury".parse::<ProductKind>().unwrap(),
            ProductKind::TreasuryBond
        );
        assert!("stock".parse::<ProductKind>().is_err());
    }

    #[test]
    fn disclaimer_follows_product_kind() {
        let cdb = Disclaimer::for_kind(ProductKind::Cdb);
        assert_eq!(cdb.kind, DisclaimerKind::DepositInsurance);

        let lci = Disclaimer::for_kind(ProductKind::Lci);
        assert_eq!(lci.kind, DisclaimerKind::FixedIncome);

        let fund = Disclaimer::for_kind(ProductKind::Fund);
        assert_eq!(fund.kind, DisclaimerKind::VariableIncome);
        assert!(fund.mandatory);
    }
}
