//! Syntax highlighting for the REPL.

use std::borrow::Cow;
use std::collections::HashSet;

use extenso_vocabulary::{Vocabulary, canonical_form};

/// Highlighter for numeral phrases.
///
/// Known number words are green, the separator is cyan, unknown words are
/// red, and a leading `:command` is magenta.
pub struct ExtensoHighlighter {
    words: HashSet<String>,
    separator: String,
}

impl ExtensoHighlighter {
    /// Creates a highlighter for the words of a vocabulary.
    #[must_use]
    pub fn new(vocabulary: &Vocabulary) -> Self {
        Self {
            words: vocabulary.words().into_iter().map(String::from).collect(),
            separator: vocabulary.separator().to_string(),
        }
    }

    /// Highlight a line of input.
    pub fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.trim().is_empty() {
            return Cow::Borrowed(line);
        }

        let mut result = String::with_capacity(line.len() * 2);
        let mut word = String::new();
        let mut first_word = true;

        for c in line.chars() {
            if c.is_whitespace() {
                if !word.is_empty() {
                    self.push_word(&mut result, &word, first_word);
                    word.clear();
                    first_word = false;
                }
                result.push(c);
            } else {
                word.push(c);
            }
        }
        if !word.is_empty() {
            self.push_word(&mut result, &word, first_word);
        }

        Cow::Owned(result)
    }

    fn push_word(&self, out: &mut String, word: &str, first_word: bool) {
        let color = if first_word && word.starts_with(':') {
            "\x1b[35m" // magenta
        } else {
            let canonical = canonical_form(word);
            if canonical == self.separator {
                "\x1b[36m" // cyan
            } else if self.words.contains(&canonical) {
                "\x1b[32m" // green
            } else {
                "\x1b[31m" // red
            }
        };

        out.push_str(color);
        out.push_str(word);
        out.push_str("\x1b[0m");
    }
}
