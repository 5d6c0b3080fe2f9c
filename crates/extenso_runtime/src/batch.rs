//! Line-oriented conversion for the CLI.

use std::io::{BufRead, Write};

use extenso_foundation::{Conversion, INVALID_NUMBER, Result};
use extenso_parser::Converter;

/// Counts of converted lines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Lines that resolved to a number.
    pub accepted: usize,
    /// Lines that were rejected.
    pub rejected: usize,
}

/// Renders a conversion for output.
///
/// With `explain`, a rejection is followed by its reason.
#[must_use]
pub fn render(conversion: &Conversion, explain: bool) -> String {
    match conversion {
        Conversion::Number(n) => n.to_string(),
        Conversion::Invalid(rejection) if explain => format!("{INVALID_NUMBER}: {rejection}"),
        Conversion::Invalid(_) => INVALID_NUMBER.to_string(),
    }
}

/// Converts every non-blank line of `input`, writing one result per line.
///
/// Bytes that are not UTF-8 are replaced, so such a line is rejected
/// instead of ending the batch.
///
/// # Errors
///
/// Returns an error if reading or writing fails.
pub fn run_batch<R: BufRead, W: Write>(
    mut input: R,
    output: &mut W,
    converter: &Converter<'_>,
    explain: bool,
) -> Result<BatchSummary> {
    let mut summary = BatchSummary::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        if line.trim().is_empty() {
            continue;
        }

        let conversion = converter.convert(&line);
        if conversion.is_valid() {
            summary.accepted += 1;
        } else {
            summary.rejected += 1;
        }
        writeln!(output, "{}", render(&conversion, explain))?;
    }

    tracing::debug!(
        accepted = summary.accepted,
        rejected = summary.rejected,
        "batch finished"
    );
    Ok(summary)
}
