//! Worked examples.

use extenso_foundation::INVALID_NUMBER;
use extenso_parser::convert;

#[test]
fn reference_examples() {
    assert_eq!(convert("cento e vinte e dois", false), "122");
    assert_eq!(convert("mil", false), "1000");
    assert_eq!(convert("e cento", false), INVALID_NUMBER);
    assert_eq!(convert("cento e e dois", false), INVALID_NUMBER);
    assert_eq!(convert("cento dois", false), INVALID_NUMBER);
}

#[test]
fn single_words() {
    let cases = [
        ("zero", "0"),
        ("um", "1"),
        ("dezassete", "17"),
        ("catorze", "14"),
        ("quatorze", "14"),
        ("cem", "100"),
        ("novecentos", "900"),
    ];
    for (phrase, expected) in cases {
        assert_eq!(convert(phrase, false), expected, "{phrase}");
        assert_eq!(convert(phrase, true), expected, "{phrase}");
    }
}

#[test]
fn composed_numbers() {
    let cases = [
        ("vinte e um", "21"),
        ("noventa e nove", "99"),
        ("cento e um", "101"),
        ("novecentos e noventa e nove", "999"),
        ("dois mil", "2000"),
        ("mil e um", "1001"),
        ("mil e cento e onze", "1111"),
        ("trezentos e vinte e cinco mil", "325000"),
        ("quinhentos mil", "500000"),
        ("dois mil e trezentos e quarenta e cinco", "2345"),
        (
            "novecentos e noventa e nove mil e novecentos e noventa e nove",
            "999999",
        ),
    ];
    for (phrase, expected) in cases {
        assert_eq!(convert(phrase, false), expected, "{phrase}");
    }
}

#[test]
fn millions() {
    assert_eq!(convert("milhão", false), "1000000");
    assert_eq!(convert("um milhão", false), "1000000");
    assert_eq!(convert("dois milhões", false), "2000000");
    assert_eq!(convert("cento e vinte milhões", false), "120000000");
}

#[test]
fn whole_stack_is_the_multiplier() {
    // Everything accumulated so far is summed before a scale word multiplies
    // it, including values that were themselves already scaled.
    assert_eq!(convert("um milhão e duzentos mil", false), "1000200000");
    assert_eq!(convert("dois milhões e trezentos mil", false), "2000300000");
    assert_eq!(convert("milhão mil", false), "1000000000");
}

#[test]
fn case_insensitive() {
    assert_eq!(
        convert("CENTO E VINTE E DOIS", false),
        convert("cento e vinte e dois", false)
    );
    assert_eq!(convert("Dois MIL", true), "2000");
}

#[test]
fn empty_and_blank() {
    assert_eq!(convert("", false), INVALID_NUMBER);
    assert_eq!(convert("   ", true), INVALID_NUMBER);
    assert_eq!(convert("\t\n", false), INVALID_NUMBER);
}

#[test]
fn separator_is_required_after_scale_words() {
    assert_eq!(convert("mil cento e onze", false), INVALID_NUMBER);
    assert_eq!(convert("um milhão duzentos mil", false), INVALID_NUMBER);
}

#[test]
fn unknown_words() {
    assert_eq!(convert("cento e xpto", false), INVALID_NUMBER);
    assert_eq!(convert("123", false), INVALID_NUMBER);
    assert_eq!(convert("dezesseis", false), INVALID_NUMBER);
}
