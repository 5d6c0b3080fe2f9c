//! Separator rule tests.

use extenso_foundation::{Conversion, Rejection, ScaleMode};
use extenso_parser::convert_phrase;

fn long(phrase: &str) -> Conversion {
    convert_phrase(phrase, ScaleMode::Long)
}

#[test]
fn leading_separator() {
    assert_eq!(long("e cento"), Conversion::Invalid(Rejection::LeadingSeparator));
    assert_eq!(long("e"), Conversion::Invalid(Rejection::LeadingSeparator));
}

#[test]
fn trailing_separator() {
    assert_eq!(
        long("vinte e"),
        Conversion::Invalid(Rejection::TrailingSeparator { position: 1 })
    );
}

#[test]
fn doubled_separator() {
    assert_eq!(
        long("cento e e dois"),
        Conversion::Invalid(Rejection::DoubledSeparator { position: 2 })
    );
}

#[test]
fn missing_separator() {
    assert_eq!(
        long("cento dois"),
        Conversion::Invalid(Rejection::MissingSeparator {
            position: 1,
            word: "Dois".to_string(),
        })
    );
}

#[test]
fn exempt_words_never_follow_the_separator() {
    assert_eq!(
        long("dois e mil"),
        Conversion::Invalid(Rejection::SeparatorBeforeExempt {
            position: 1,
            word: "Mil".to_string(),
        })
    );
    assert_eq!(
        long("dois e milhões"),
        Conversion::Invalid(Rejection::SeparatorBeforeExempt {
            position: 1,
            word: "Milhões".to_string(),
        })
    );
}

#[test]
fn exempt_words_need_no_separator() {
    assert_eq!(long("vinte mil"), Conversion::Number(20_000));
    assert_eq!(long("vinte milhões"), Conversion::Number(20_000_000));
}

#[test]
fn unknown_token_reports_position() {
    assert_eq!(
        long("cento e xpto"),
        Conversion::Invalid(Rejection::UnknownToken {
            position: 2,
            word: "Xpto".to_string(),
        })
    );
}

#[test]
fn empty_phrase() {
    assert_eq!(long(""), Conversion::Invalid(Rejection::EmptyPhrase));
    assert_eq!(long(" \t "), Conversion::Invalid(Rejection::EmptyPhrase));
}
