use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};
use core_types::{ProductKind, RiskLevel, RiskProfile, RiskProfileInput, SimulationRequest};
use recommendation::Filters;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use simulation::Calculator;
use std::sync::Arc;
use std::time::Instant;
use telemetry::{Aggregator, Window};
use tracing_subscriber::prelude::*;

mod catalog;

// Stable service names used for call telemetry.
const SVC_RISK_PROFILE: &str = "risk-profile";
const SVC_SIMULATION: &str = "simulation";
const SVC_RECOMMENDATION: &str = "recommendation";

// --- Command-Line Interface Definition ---

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = "Investment simulation decision core.")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Classifies a customer from their behavioral inputs.
    Classify {
        /// Total volume of historical investments.
        #[arg(long)]
        volume: Decimal,
        /// Account movements over the reference period.
        #[arg(long)]
        frequency: u32,
        /// The customer favors early-redemption products.
        #[arg(long)]
        liquidity: bool,
    },

    /// Projects an investment on a demo-catalog product.
    Simulate {
        #[arg(long)]
        principal: Decimal,
        #[arg(long)]
        term_months: u32,
        /// Product kind to simulate against (cdb, lci, lca, treasury, fund).
        #[arg(long)]
        kind: String,
        /// Optional behavioral inputs; when both volume and frequency are
        /// given, the result carries a suitability verdict.
        #[arg(long)]
        volume: Option<Decimal>,
        #[arg(long)]
        frequency: Option<u32>,
        #[arg(long)]
        liquidity: bool,
    },

    /// Lists demo-catalog products recommended for a profile.
    Recommend {
        #[arg(long)]
        volume: Decimal,
        #[arg(long)]
        frequency: u32,
        #[arg(long)]
        liquidity: bool,
        /// Only products affordable with this amount.
        #[arg(long)]
        min_value: Option<Decimal>,
        /// Only products at this risk level (low, medium, high).
        #[arg(long)]
        risk: Option<String>,
        /// Only products redeemable before their minimum period.
        #[arg(long)]
        liquid_only: bool,
    },

    /// Runs a demo round of core calls and prints the telemetry summary.
    Demo,
}

fn main() -> Result<()> {
    let fmt_layer = tracing_subscriber::fmt::layer().with_filter(
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
    );
    tracing_subscriber::registry().with(fmt_layer).init();

    let cli = Cli::parse();

    let settings = app_config::load_settings()?;
    let calculator = Calculator::new(settings.simulation.to_calculator_config());
    let aggregator = Arc::new(Aggregator::new(settings.telemetry.capacity_per_service));
    let catalog = catalog::demo_products()?;

    match cli.command {
        Commands::Classify {
            volume,
            frequency,
            liquidity,
        } => {
            let input = RiskProfileInput::new(volume, frequency, liquidity)?;
            let profile = timed(&aggregator, SVC_RISK_PROFILE, || risk::classify(&input));

            tracing::info!(
                classification = %profile.classification,
                score = profile.score,
                "customer classified"
            );
            println!("{}", serde_json::to_string_pretty(&profile)?);
        }

        Commands::Simulate {
            principal,
            term_months,
            kind,
            volume,
            frequency,
            liquidity,
        } => {
            let kind: ProductKind = kind.parse()?;
            let product = catalog
                .iter()
                .find(|p| p.kind == kind)
                .cloned()
                .ok_or_else(|| anyhow!("no demo product of kind {:?}", kind))?;

            let profile = match (volume, frequency) {
                (Some(volume), Some(frequency)) => {
                    let input = RiskProfileInput::new(volume, frequency, liquidity)?;
                    Some(timed(&aggregator, SVC_RISK_PROFILE, || {
                        risk::classify(&input)
                    }))
                }
                _ => None,
            };

            let request = SimulationRequest {
                principal,
                term_months,
                product,
            };
            let result = timed(&aggregator, SVC_SIMULATION, || {
                calculator.simulate(&request, profile.as_ref())
            })?;

            tracing::info!(
                product = %result.product.name,
                final_value = %result.final_value,
                return_ratio = result.return_ratio,
                "simulation completed"
            );
            println!("{}", serde_json::to_string_pretty(&result)?);
        }

        Commands::Recommend {
            volume,
            frequency,
            liquidity,
            min_value,
            risk,
            liquid_only,
        } => {
            let input = RiskProfileInput::new(volume, frequency, liquidity)?;
            let profile = timed(&aggregator, SVC_RISK_PROFILE, || risk::classify(&input));

            let filters = Filters {
                min_value,
                risk_level: risk.as_deref().map(str::parse::<RiskLevel>).transpose()?,
                kind: None,
                require_liquidity: liquid_only,
            };
            let products = timed(&aggregator, SVC_RECOMMENDATION, || {
                recommendation::recommend(&profile, &catalog, &filters)
            });

            tracing::info!(
                classification = %profile.classification,
                count = products.len(),
                "recommendations computed"
            );
            println!("{}", serde_json::to_string_pretty(&products)?);
        }

        Commands::Demo => {
            run_demo(&calculator, &aggregator, &catalog)?;
        }
    }

    Ok(())
}

/// Runs each core operation a few times with telemetry around every call,
/// then prints the aggregated summary.
fn run_demo(
    calculator: &Calculator,
    aggregator: &Arc<Aggregator>,
    catalog: &[core_types::Product],
) -> Result<()> {
    let customers = [
        (dec!(5_000), 1, true),
        (dec!(60_000), 5, false),
        (dec!(250_000), 15, false),
    ];

    for (volume, frequency, liquidity) in customers {
        let input = RiskProfileInput::new(volume, frequency, liquidity)?;
        let profile: RiskProfile =
            timed(aggregator, SVC_RISK_PROFILE, || risk::classify(&input));
        tracing::info!(%volume, frequency, classification = %profile.classification, "demo classify");

        let products = timed(aggregator, SVC_RECOMMENDATION, || {
            recommendation::recommend(&profile, catalog, &Filters::default())
        });
        tracing::info!(count = products.len(), "demo recommend");

        if let Some(product) = products.first() {
            let request = SimulationRequest {
                principal: product.minimum_application * Decimal::from(10),
                term_months: 24,
                product: product.clone(),
            };
            let result = timed(aggregator, SVC_SIMULATION, || {
                calculator.simulate(&request, Some(&profile))
            })?;
            tracing::info!(
                product = %result.product.name,
                final_value = %result.final_value,
                "demo simulate"
            );
        }
    }

    let summary = aggregator.summarize(&Window::default());
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}

/// Times a core call and records it under a stable service name. The
/// surrounding transport layer would do this around every request.
fn timed<T>(aggregator: &Aggregator, service: &str, call: impl FnOnce() -> T) -> T {
    let start = Instant::now();
    let output = call();
    aggregator.record(service, start.elapsed().as_millis() as u64);
    output
}
