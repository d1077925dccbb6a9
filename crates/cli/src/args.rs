// crates/cli/src/args.rs
use clap::{ArgAction, Parser};

use crate::value_enum::OutputFormat;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "enforce-range",
    version = crate::VERSION,
    about = "Clamp a number into an inclusive [MIN, MAX] range",
    after_help = "Pass `null` for an unbounded MIN or MAX. With only MIN and MAX, the value is read \
                  from the first non-empty line of stdin. Put `--` before operands such as -Infinity."
)]
pub struct Args {
    /// MIN, MAX and VALUE, in that order
    #[arg(
        value_name = "OPERAND",
        num_args = 0..=3,
        allow_negative_numbers = true
    )]
    pub operands: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "plain")]
    pub format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
