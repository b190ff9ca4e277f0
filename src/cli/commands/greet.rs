//! Greet command.

use crate::config::Settings;
use crate::greeting::greet;

/// Run greet command - falls back to the configured name.
pub fn run_greet(name: Option<&str>, config: &Settings) {
    let name = name.unwrap_or(config.demo.name.as_str());
    println!("{}", greet(name));
}
