//! Batch conversion tests.

use extenso_parser::{Converter, ConverterConfig};
use extenso_runtime::{BatchSummary, run_batch};
use extenso_vocabulary::portuguese;

fn run(input: &str, config: ConverterConfig, explain: bool) -> (BatchSummary, String) {
    let converter = Converter::with_config(portuguese::standard(), config);
    let mut output = Vec::new();
    let summary = run_batch(input.as_bytes(), &mut output, &converter, explain).unwrap();
    (summary, String::from_utf8(output).unwrap())
}

#[test]
fn one_result_per_line() {
    let (summary, output) = run(
        "cento e vinte e dois\nmil\ne cento\n",
        ConverterConfig::default(),
        false,
    );
    assert_eq!(output, "122\n1000\nInvalidNumber\n");
    assert_eq!(summary.accepted, 2);
    assert_eq!(summary.rejected, 1);
}

#[test]
fn blank_lines_are_skipped() {
    let (summary, output) = run("\n   \ndois\n\n", ConverterConfig::default(), false);
    assert_eq!(output, "2\n");
    assert_eq!(summary, BatchSummary { accepted: 1, rejected: 0 });
}

#[test]
fn scale_follows_config() {
    let (_, short) = run("um bilião", ConverterConfig::short_scale(), false);
    let (_, long) = run("um bilião", ConverterConfig::long_scale(), false);
    assert_eq!(short, "1000000000\n");
    assert_eq!(long, "1000000000000\n");
}

#[test]
fn explain_prints_reason() {
    let (_, output) = run("cento dois\n", ConverterConfig::default(), true);
    assert_eq!(
        output,
        "InvalidNumber: missing separator before 'Dois' (token 1)\n"
    );
}

#[test]
fn windows_line_endings() {
    let (_, output) = run("vinte e um\r\ndois\r\n", ConverterConfig::default(), false);
    assert_eq!(output, "21\n2\n");
}

#[test]
fn undecodable_bytes_do_not_stop_the_batch() {
    let converter = Converter::new(portuguese::standard());
    let mut output = Vec::new();
    let input: &[u8] = b"cem\n\xFF\xFE\ncento e um\n";

    let summary = run_batch(input, &mut output, &converter, true).unwrap();

    assert_eq!(summary, BatchSummary { accepted: 2, rejected: 1 });
    let text = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "100");
    assert!(lines[1].starts_with("InvalidNumber: unknown word"));
    assert_eq!(lines[2], "101");
}
