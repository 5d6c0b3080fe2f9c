//! Serialization of conversion outcomes (the `serde` feature).

use extenso_foundation::{Conversion, Rejection, ScaleMode};

fn round_trip<T>(value: &T) -> T
where
    T: serde::Serialize + serde::de::DeserializeOwned,
{
    let bytes = rmp_serde::to_vec_named(value).unwrap();
    rmp_serde::from_slice(&bytes).unwrap()
}

#[test]
fn conversions_survive_messagepack() {
    let outcomes = [
        Conversion::Number(1_000_200_000),
        Conversion::Invalid(Rejection::EmptyPhrase),
        Conversion::Invalid(Rejection::ThousandBeforeScale {
            position: 1,
            word: "Milhões".to_string(),
        }),
        Conversion::Invalid(Rejection::TooManyTokens { limit: 3, count: 5 }),
    ];

    for outcome in &outcomes {
        assert_eq!(&round_trip(outcome), outcome);
    }
}

#[test]
fn scale_mode_survives_messagepack() {
    assert_eq!(round_trip(&ScaleMode::Short), ScaleMode::Short);
    assert_eq!(round_trip(&ScaleMode::Long), ScaleMode::Long);
}
