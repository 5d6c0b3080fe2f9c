//! Short and long scale tests.

use extenso_foundation::{Conversion, ErrorKind, Rejection, ScaleMode};
use extenso_parser::{Converter, ConverterConfig, convert, convert_phrase};
use extenso_vocabulary::portuguese;

#[test]
fn billion_depends_on_scale() {
    assert_eq!(convert("um bilião", true), "1000000000");
    assert_eq!(convert("um bilião", false), "1000000000000");
    assert_eq!(convert("bilião", true), "1000000000");
    assert_eq!(convert("três biliões", false), "3000000000000");
}

#[test]
fn trillion_depends_on_scale() {
    assert_eq!(convert("um trilião", true), "1000000000000");
    assert_eq!(convert("um trilião", false), "1000000000000000000");
}

#[test]
fn thousand_before_scale_word() {
    assert_eq!(
        convert_phrase("dois mil milhões", ScaleMode::Short),
        Conversion::Invalid(Rejection::ThousandBeforeScale {
            position: 1,
            word: "Milhões".to_string(),
        })
    );
    assert_eq!(
        convert_phrase("dois mil milhões", ScaleMode::Long),
        Conversion::Number(2_000_000_000)
    );
}

#[test]
fn long_scale_idioms() {
    assert_eq!(convert("mil milhões", false), "1000000000");
    assert_eq!(convert("mil biliões", false), "1000000000000000");
    // Not an idiom under the short scale, but a leading thousand may still
    // multiply a following scale word.
    assert_eq!(convert("mil milhões", true), "1000000000");
}

#[test]
fn overflow_is_rejected() {
    assert_eq!(
        convert_phrase("nove triliões", ScaleMode::Long),
        Conversion::Number(9_000_000_000_000_000_000)
    );
    assert_eq!(
        convert_phrase("dez triliões", ScaleMode::Long),
        Conversion::Invalid(Rejection::Overflow)
    );
    assert_eq!(
        convert_phrase("dez triliões", ScaleMode::Short),
        Conversion::Number(10_000_000_000_000)
    );
}

#[test]
fn converter_config() {
    let vocab = portuguese::standard();
    let short = Converter::with_config(vocab, ConverterConfig::short_scale());
    let long = Converter::with_config(vocab, ConverterConfig::long_scale());

    assert_eq!(short.convert("dois biliões"), Conversion::Number(2_000_000_000));
    assert_eq!(
        long.convert("dois biliões"),
        Conversion::Number(2_000_000_000_000)
    );
    assert_eq!(short.config().scale_mode, ScaleMode::Short);
}

#[test]
fn token_limit() {
    let config = ConverterConfig::default().with_max_tokens(4);
    let converter = Converter::with_config(portuguese::standard(), config);

    assert_eq!(converter.convert("vinte e dois mil"), Conversion::Number(22_000));
    let err = converter.try_convert("cento e vinte e dois").unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::InvalidNumber(Rejection::TooManyTokens { limit: 4, count: 5 })
    ));
}
