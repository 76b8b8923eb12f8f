pub mod calculator;

pub use calculator::{Calculator, CalculatorConfig, Compounding};
