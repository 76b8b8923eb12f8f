use core_types::{Product, ProductKind, Result, RiskClassification, RiskLevel};
use rust_decimal_macros::dec;

/// Built-in demo catalog standing in for the (out-of-scope) product store.
pub fn demo_products() -> Result<Vec<Product>> {
    Ok(vec![
        Product::new(
            1,
            "CDB Liquidez Diária",
            ProductKind::Cdb,
            dec!(0.105),
            RiskLevel::Low,
            30,
            dec!(500),
            true,
            RiskClassification::Conservative,
        )?,
        Product::new(
            2,
            "LCI Habitação",
            ProductKind::Lci,
            dec!(0.098),
            RiskLevel::Low,
            180,
            dec!(1_000),
            false,
            RiskClassification::Conservative,
        )?,
        Product::new(
            3,
            "Tesouro Prefixado 2030",
            ProductKind::TreasuryBond,
            dec!(0.112),
            RiskLevel::Low,
            90,
            dec!(100),
            true,
            RiskClassification::Conservative,
        )?,
        Product::new(
            4,
            "CDB Prazo Longo",
            ProductKind::Cdb,
            dec!(0.13),
            RiskLevel::Medium,
            360,
            dec!(5_000),
            false,
            RiskClassification::Moderate,
        )?,
        Product::new(
            5,
            "LCA Agronegócio",
            ProductKind::Lca,
            dec!(0.12),
            RiskLevel::Medium,
            270,
            dec!(2_000),
            false,
            RiskClassification::Moderate,
        )?,
        Product::new(
            6,
            "Fundo Multimercado",
            ProductKind::Fund,
            dec!(0.18),
            RiskLevel::High,
            0,
            dec!(10_000),
            true,
            RiskClassification::Aggressive,
        )?,
    ])
}
