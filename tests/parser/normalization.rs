//! Normalizer tests.

use extenso_parser::{Normalizer, convert};
use proptest::prelude::*;

#[test]
fn collapses_whitespace_and_fixes_case() {
    assert_eq!(
        Normalizer::normalize("  cento \t e\nVINTE   e dois "),
        "Cento E Vinte E Dois"
    );
    assert_eq!(Normalizer::normalize("   "), "");
}

#[test]
fn tokenizes_on_single_spaces() {
    assert_eq!(
        Normalizer::tokenize("Dois Mil Milhões"),
        vec!["Dois", "Mil", "Milhões"]
    );
    assert!(Normalizer::tokenize("").is_empty());
}

#[test]
fn accented_capitals() {
    assert_eq!(Normalizer::normalize("ÚNICO três"), "Único Três");
}

proptest! {
    #[test]
    fn normalize_is_idempotent(input in "[a-zA-Zãõçê \t\n]{0,60}") {
        let once = Normalizer::normalize(&input);
        prop_assert_eq!(Normalizer::normalize(&once), once.clone());
        prop_assert!(!once.starts_with(' ') && !once.ends_with(' '));
        prop_assert!(!once.contains("  "));
    }

    #[test]
    fn normalized_and_raw_convert_alike(input in "[a-zãõçê \t]{0,60}", short in any::<bool>()) {
        prop_assert_eq!(convert(&input, short), convert(&Normalizer::normalize(&input), short));
    }
}
