//! Conversion outcome tests.

use extenso_foundation::{Conversion, ErrorKind, INVALID_NUMBER, Rejection};

#[test]
fn number_displays_as_decimal() {
    let conversion = Conversion::Number(1_000_200_000);
    assert!(conversion.is_valid());
    assert_eq!(conversion.value(), Some(1_000_200_000));
    assert_eq!(conversion.to_string(), "1000200000");
}

#[test]
fn every_rejection_displays_as_sentinel() {
    let rejections = [
        Rejection::EmptyPhrase,
        Rejection::LeadingSeparator,
        Rejection::TrailingSeparator { position: 3 },
        Rejection::DoubledSeparator { position: 2 },
        Rejection::MissingSeparator {
            position: 1,
            word: "Dois".into(),
        },
        Rejection::Overflow,
    ];

    for rejection in rejections {
        let conversion = Conversion::from(rejection.clone());
        assert!(!conversion.is_valid());
        assert_eq!(conversion.value(), None);
        assert_eq!(conversion.rejection(), Some(&rejection));
        assert_eq!(conversion.to_string(), INVALID_NUMBER);
    }
}

#[test]
fn rejection_positions() {
    assert_eq!(Rejection::EmptyPhrase.position(), None);
    assert_eq!(Rejection::LeadingSeparator.position(), Some(0));
    assert_eq!(Rejection::Overflow.position(), None);
    assert_eq!(
        Rejection::UnknownToken {
            position: 4,
            word: "Xpto".into()
        }
        .position(),
        Some(4)
    );
}

#[test]
fn rejection_messages_name_the_word() {
    let rejection = Rejection::SeparatorBeforeExempt {
        position: 1,
        word: "Mil".into(),
    };
    assert_eq!(
        rejection.to_string(),
        "separator at token 1 cannot precede 'Mil'"
    );
}

#[test]
fn into_result_carries_phrase_and_position() {
    assert_eq!(Conversion::Number(5).into_result("Cinco").unwrap(), 5);

    let err = Conversion::Invalid(Rejection::DoubledSeparator { position: 2 })
        .into_result("Cento E E Dois")
        .unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::InvalidNumber(Rejection::DoubledSeparator { position: 2 })
    ));
    let context = err.context.unwrap();
    assert_eq!(context.phrase.as_deref(), Some("Cento E E Dois"));
    assert_eq!(context.position, Some(2));
}
