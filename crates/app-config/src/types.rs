use rust_decimal::Decimal;
use serde::Deserialize;
use simulation::{CalculatorConfig, Compounding};
use telemetry::DEFAULT_CAPACITY_PER_SERVICE;

/// Top-level application settings. Every field is defaulted so the
/// service runs with no configuration file present.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct Settings {
    #[serde(default)]
    pub simulation: SimulationSettings,
    #[serde(default)]
    pub telemetry: TelemetrySettings,
}

/// Limits and conventions for the simulation calculator.
#[derive(Deserialize, Debug, Clone)]
pub struct SimulationSettings {
    #[serde(default = "default_max_term_months")]
    pub max_term_months: u32,
    #[serde(default = "default_max_principal")]
    pub max_principal: Decimal,
    #[serde(default)]
    pub compounding: Compounding,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            max_term_months: default_max_term_months(),
            max_principal: default_max_principal(),
            compounding: Compounding::default(),
        }
    }
}

impl SimulationSettings {
    pub fn to_calculator_config(&self) -> CalculatorConfig {
        CalculatorConfig {
            max_term_months: self.max_term_months,
            max_principal: self.max_principal,
            compounding: self.compounding,
        }
    }
}

/// Retention bound for the telemetry aggregator.
#[derive(Deserialize, Debug, Clone)]
pub struct TelemetrySettings {
    #[serde(default = "default_capacity_per_service")]
    pub capacity_per_service: usize,
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        Self {
            capacity_per_service: default_capacity_per_service(),
        }
    }
}

fn default_max_term_months() -> u32 {
    360
}

fn default_max_principal() -> Decimal {
    Decimal::from(10_000_000)
}

fn default_capacity_per_service() -> usize {
    DEFAULT_CAPACITY_PER_SERVICE
}
