//! Arithmetic helper and greeting formatter, plus the CLI that demonstrates
//! them.

pub mod calculator;
pub mod cli;
pub mod config;
pub mod demo;
pub mod display;
pub mod error;
pub mod greeting;
pub mod logging;

pub use calculator::{Calculator, Operation};
pub use config::Settings;
pub use error::{CalcError, CalcResult};
pub use greeting::greet;
