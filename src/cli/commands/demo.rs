//! Demo command.

use crate::calculator::Calculator;
use crate::demo::demo_lines;

/// Run demo command - print the sample calculations and greeting.
pub fn run_demo() {
    match demo_lines(&Calculator::new()) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
