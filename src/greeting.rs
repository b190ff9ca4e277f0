//! Greeting formatter.

/// Build the welcome message for `name`.
pub fn greet(name: &str) -> String {
    format!("Hello, {name}! Welcome to the Copilot CLI Automation Accelerator.")
}
