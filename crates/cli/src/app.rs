// crates/cli/src/app.rs
use std::io::{BufRead, Write};

use anyhow::{Context, bail};
use enforce_range_domain::ClampRange;
use enforce_range_shared_kernel::{EnforceRangeError, ErrorKind, Operand};

use crate::args::Args;
use crate::parsers::parse_operand;
use crate::presentation::{Report, print_report};

/// Exit code for a failed run.
pub fn exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<EnforceRangeError>().map(EnforceRangeError::kind) {
        Some(ErrorKind::Type) => 2,
        Some(ErrorKind::Range) => 3,
        None => 1,
    }
}

/// Render a failed run the way it is printed on stderr.
pub fn describe_error(err: &anyhow::Error) -> String {
    match err.downcast_ref::<EnforceRangeError>() {
        Some(enforce_err) => format!("{}: {enforce_err}", enforce_err.kind()),
        None => format!("Error: {err:#}"),
    }
}

/// Run one invocation. With two operands the value comes from `input`.
///
/// Bounds are validated before `input` is read.
///
/// # Errors
/// Returns the library error unchanged (so callers can classify it), or an
/// I/O error reading `input` / writing `out`.
pub fn run<R: BufRead, W: Write>(args: &Args, input: R, out: &mut W) -> anyhow::Result<()> {
    let operands: Vec<Operand> = args.operands.iter().map(String::as_str).map(parse_operand).collect();
    log::debug!("operands: {operands:?}");

    let missing = Operand::Missing;
    let min = operands.first().unwrap_or(&missing);
    let max = operands.get(1).unwrap_or(&missing);
    let range = ClampRange::from_operands(min, max)?;

    let value = match operands.get(2) {
        Some(value) => value.clone(),
        None => match read_value_line(input)? {
            Some(line) => parse_operand(&line),
            None => bail!("no value on stdin for range {range}"),
        },
    };
    let result = range.clamp_operand(&value)?;

    print_report(out, &Report::new(range, &value, result), args.format)
}

fn read_value_line<R: BufRead>(input: R) -> anyhow::Result<Option<String>> {
    for line in input.lines() {
        let line = line.context("reading value from stdin")?;
        if !line.trim().is_empty() {
            return Ok(Some(line));
        }
    }
    Ok(None)
}
