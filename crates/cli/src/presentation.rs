// crates/cli/src/presentation.rs
use std::io::Write;

use enforce_range_domain::ClampRange;
use enforce_range_shared_kernel::Operand;
use serde::Serialize;

use crate::value_enum::OutputFormat;

/// One clamp, as reported by `--format json`.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub min: f64,
    pub max: f64,
    pub value: &'a Operand,
    pub result: f64,
}

impl<'a> Report<'a> {
    pub fn new(range: ClampRange, value: &'a Operand, result: f64) -> Self {
        Self {
            min: range.min(),
            max: range.max(),
            value,
            result,
        }
    }
}

pub fn format_number(n: f64) -> String {
    if n == f64::INFINITY {
        "Infinity".to_string()
    } else if n == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else {
        n.to_string()
    }
}

/// # Errors
/// Propagates write and serialization failures.
pub fn print_report<W: Write>(out: &mut W, report: &Report<'_>, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Plain => writeln!(out, "{}", format_number(report.result))?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, report)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(report: &Report<'_>, format: OutputFormat) -> String {
        let mut buf = Vec::new();
        print_report(&mut buf, report, format).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_plain_prints_the_result() {
        let value = Operand::from("7");
        let range = ClampRange::new(Some(5.0), Some(6.0)).unwrap();
        assert_eq!(render(&Report::new(range, &value, 6.0), OutputFormat::Plain), "6\n");
    }

    #[test]
    fn test_json_uses_null_for_unbounded() {
        let value = Operand::from(100);
        let range = ClampRange::new(Some(0.0), None).unwrap();
        let out = render(&Report::new(range, &value, 100.0), OutputFormat::Json);
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, serde_json::json!({"min": 0.0, "max": null, "value": 100.0, "result": 100.0}));
    }

    #[test]
    fn test_infinities_are_spelled_out() {
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(1.1), "1.1");
    }
}
