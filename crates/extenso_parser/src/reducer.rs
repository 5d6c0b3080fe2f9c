//! The token scan.
//!
//! A single left-to-right pass over the tokens of a normalized phrase. Each
//! token is checked against the separator rules, resolved against the
//! vocabulary, and pushed on a [`TokenStack`]. A scale word collapses the
//! whole stack into one multiplier before it is pushed, so "Trezentos E
//! Vinte E Cinco Mil" is (300 + 20 + 5) * 1000. The result is the sum of
//! whatever is left on the stack.

use std::borrow::Cow;

use extenso_foundation::{Conversion, Rejection, ScaleMode};
use extenso_vocabulary::Vocabulary;

/// Values resolved so far, local to one scan.
#[derive(Debug, Default)]
struct TokenStack {
    values: Vec<i64>,
}

impl TokenStack {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
        }
    }

    fn push(&mut self, value: i64) {
        self.values.push(value);
    }

    fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Pops every value and returns their sum.
    fn collapse(&mut self) -> Result<i64, Rejection> {
        let mut multiplier: i64 = 0;
        while let Some(value) = self.values.pop() {
            multiplier = multiplier.checked_add(value).ok_or(Rejection::Overflow)?;
        }
        Ok(multiplier)
    }

    fn total(mut self) -> Result<i64, Rejection> {
        self.collapse()
    }
}

/// Reduces the tokens of a normalized phrase to a number.
#[must_use]
pub fn reduce(vocabulary: &Vocabulary, tokens: &[&str], mode: ScaleMode) -> Conversion {
    match scan(vocabulary, tokens, mode) {
        Ok(value) => Conversion::Number(value),
        Err(rejection) => {
            tracing::debug!(%rejection, "phrase rejected");
            Conversion::Invalid(rejection)
        }
    }
}

fn scan(vocabulary: &Vocabulary, tokens: &[&str], mode: ScaleMode) -> Result<i64, Rejection> {
    let Some(last) = tokens.len().checked_sub(1) else {
        return Err(Rejection::EmptyPhrase);
    };
    let mut stack = TokenStack::with_capacity(tokens.len());

    for (cursor, &raw) in tokens.iter().enumerate() {
        if vocabulary.is_separator(raw) {
            check_separator(vocabulary, tokens, cursor, last)?;
            continue;
        }

        let token: Cow<'_, str> = if vocabulary.is_implicit_one(raw) {
            Cow::Owned(vocabulary.implicit_one_key(raw))
        } else {
            Cow::Borrowed(raw)
        };

        if cursor > 0
            && !vocabulary.is_separator_exempt(&token)
            && !vocabulary.is_separator(tokens[cursor - 1])
        {
            return Err(Rejection::MissingSeparator {
                position: cursor,
                word: token.into_owned(),
            });
        }

        if mode.is_short()
            && cursor > 0
            && cursor < last
            && vocabulary.is_thousand(&token)
            && vocabulary.clashes_with_thousand(tokens[cursor + 1])
        {
            return Err(Rejection::ThousandBeforeScale {
                position: cursor,
                word: tokens[cursor + 1].to_string(),
            });
        }

        let Some(mut value) = vocabulary.lookup(&token, mode) else {
            return Err(Rejection::UnknownToken {
                position: cursor,
                word: token.into_owned(),
            });
        };

        if vocabulary.scale_tier(&token).is_some() && !stack.is_empty() {
            let multiplier = stack.collapse()?;
            value = value.checked_mul(multiplier).ok_or(Rejection::Overflow)?;
        }

        tracing::trace!(cursor, token = %token, value, "token resolved");
        stack.push(value);
    }

    stack.total()
}

/// Checks the separator at `cursor`.
fn check_separator(
    vocabulary: &Vocabulary,
    tokens: &[&str],
    cursor: usize,
    last: usize,
) -> Result<(), Rejection> {
    if cursor == 0 {
        return Err(Rejection::LeadingSeparator);
    }
    if cursor == last {
        return Err(Rejection::TrailingSeparator { position: cursor });
    }

    let next = tokens[cursor + 1];
    if vocabulary.is_separator_exempt(next) {
        return Err(Rejection::SeparatorBeforeExempt {
            position: cursor,
            word: next.to_string(),
        });
    }
    if vocabulary.is_separator(tokens[cursor - 1]) {
        return Err(Rejection::DoubledSeparator { position: cursor });
    }

    Ok(())
}
