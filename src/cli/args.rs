//! CLI argument parsing using clap.

use clap::{
    Parser, Subcommand,
    builder::styling::{AnsiColor, Effects, Styles},
};
use std::path::PathBuf;

use crate::calculator::Operation;

fn clap_cargo_style() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default())
}

/// Arithmetic and greeting demo
#[derive(Parser)]
#[command(
    name = "calcgreet",
    version = env!("CARGO_PKG_VERSION"),
    about = "Arithmetic and greeting demo",
    long_about = "Runs a fixed arithmetic and greeting demo. Without a subcommand the demo is printed.",
    styles = clap_cargo_style()
)]
pub struct Cli {
    /// Path to custom settings.toml file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Print the four sample calculations and the greeting
    Demo,

    /// Apply a single arithmetic operation
    #[command(
        after_help = "Examples:\n  calcgreet calc add 5 3\n  calcgreet calc divide 20 4\n  calcgreet calc '*' 6 7"
    )]
    Calc {
        /// add, subtract, multiply, divide (or + - * /)
        op: Operation,

        /// First operand
        #[arg(allow_negative_numbers = true)]
        a: f64,

        /// Second operand
        #[arg(allow_negative_numbers = true)]
        b: f64,
    },

    /// Print the welcome message
    Greet {
        /// Name to greet (defaults to demo.name from settings)
        name: Option<String>,
    },

    /// Write default settings to .calcgreet/settings.toml
    Init {
        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Display active settings
    Config,
}

impl Cli {
    /// The command to run, `demo` when none was given.
    pub fn effective_command(&self) -> &Commands {
        self.command.as_ref().unwrap_or(&Commands::Demo)
    }
}
