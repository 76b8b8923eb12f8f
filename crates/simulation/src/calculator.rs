use core_types::{
    Disclaimer, Error, Result, RiskProfile, SimulationRequest, SimulationResult, Suitability,
};
use num_traits::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Days assumed per month when checking a term against a product's
/// minimum holding period.
const DAYS_PER_MONTH: u32 = 30;

/// How an annual nominal rate is converted to a monthly rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Compounding {
    /// `monthly = (1 + annual)^(1/12) - 1`. A 12-month projection at a
    /// 12% product yields an effective return of 12%.
    #[default]
    EffectiveAnnual,
    /// `monthly = annual / 12`. Slightly overshoots the nominal rate
    /// over a year; kept for parity with systems that quote it this way.
    NominalMonthly,
}

/// Business limits and the compounding convention for the calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Longest accepted term, in months.
    pub max_term_months: u32,
    /// Largest accepted principal.
    pub max_principal: Decimal,
    pub compounding: Compounding,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            max_term_months: 360,
            max_principal: Decimal::from(10_000_000),
            compounding: Compounding::EffectiveAnnual,
        }
    }
}

/// Projects the growth of a principal invested in a product over a term.
///
/// Stateless apart from its configuration; any number of callers may
/// share one instance.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    config: CalculatorConfig,
}

impl Calculator {
    pub fn new(config: CalculatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Validates the request against the configured limits and the
    /// product's own constraints, then compounds the principal monthly.
    ///
    /// Intermediate math runs unrounded; only the final monetary value is
    /// rounded, to 2 decimal places. The return ratio is reported before
    /// rounding so it stays scale-invariant.
    pub fn simulate(
        &self,
        request: &SimulationRequest,
        profile: Option<&RiskProfile>,
    ) -> Result<SimulationResult> {
        let product = &request.product;

        if request.principal <= Decimal::ZERO {
            return Err(Error::validation("principal must be greater than zero"));
        }
        if request.principal > self.config.max_principal {
            return Err(Error::validation(format!(
                "principal cannot exceed {}",
                self.config.max_principal
            )));
        }
        if request.term_months == 0 {
            return Err(Error::validation("term must be at least 1 month"));
        }
        if request.term_months > self.config.max_term_months {
            return Err(Error::validation(format!(
                "term cannot exceed {} months",
                self.config.max_term_months
            )));
        }
        if request.principal < product.minimum_application {
            return Err(Error::validation(format!(
                "minimum application for this product is {}",
                product.minimum_application
            )));
        }

        // Early redemption waives the minimum-term check, never the
        // minimum-value check above.
        let term_days = request.term_months * DAYS_PER_MONTH;
        if term_days < product.minimum_term_days && !product.allows_early_redemption {
            return Err(Error::validation(format!(
                "minimum holding period for this product is {} days",
                product.minimum_term_days
            )));
        }

        let annual_rate = product.annual_rate.to_f64().unwrap_or(0.0);
        let monthly_rate = match self.config.compounding {
            Compounding::EffectiveAnnual => (1.0 + annual_rate).powf(1.0 / 12.0) - 1.0,
            Compounding::NominalMonthly => annual_rate / 12.0,
        };
        let growth = (1.0 + monthly_rate).powi(request.term_months as i32);

        let growth_factor = Decimal::from_f64(growth).ok_or_else(|| {
            Error::validation("projected value exceeds the representable range")
        })?;
        let final_value = request
            .principal
            .checked_mul(growth_factor)
            .ok_or_else(|| Error::validation("projected value exceeds the representable range"))?
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

        let suitability = match profile {
            Some(profile) => risk::assess(profile.classification, product.risk),
            None => Suitability::NotAssessed,
        };

        Ok(SimulationResult {
            final_value,
            return_ratio: growth - 1.0,
            term_months: request.term_months,
            product: product.summary(),
            suitability,
            disclaimer: Disclaimer::for_kind(product.kind),
        })
    }
}
