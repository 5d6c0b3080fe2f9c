//! Vocabulary tables for numeral phrases.
//!
//! A [`Vocabulary`] holds one scale-independent base table, one table per
//! [`ScaleMode`], the word classes that drive the token scan, and the three
//! literals the scan depends on (separator, one, thousand). It is built once
//! with a [`VocabularyBuilder`] and is read-only afterwards.

use std::collections::{BTreeSet, HashMap};

use extenso_foundation::{Error, ErrorKind, Result, ScaleMode};

use crate::word::{GrammaticalNumber, ScaleTier, ScaleWord, WordClass, canonical_form};

/// Immutable word tables and classes.
#[derive(Clone, Debug)]
pub struct Vocabulary {
    /// Words valid under either scale
    base: HashMap<String, i64>,
    /// Scale words under the short scale
    short_scale: HashMap<String, i64>,
    /// Scale words under the long scale
    long_scale: HashMap<String, i64>,
    /// Word classes by canonical word
    classes: HashMap<String, WordClass>,
    separator: String,
    one: String,
    thousand: String,
}

impl Vocabulary {
    /// The word that joins numeral components ("E").
    #[must_use]
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// The word for one ("Um").
    #[must_use]
    pub fn one(&self) -> &str {
        &self.one
    }

    /// The word for thousand ("Mil").
    #[must_use]
    pub fn thousand(&self) -> &str {
        &self.thousand
    }

    /// Looks up a word in the base table only.
    #[must_use]
    pub fn lookup_base(&self, word: &str) -> Option<i64> {
        self.base.get(word).copied()
    }

    /// Looks up a word in the table of the given scale only.
    #[must_use]
    pub fn lookup_scale(&self, word: &str, mode: ScaleMode) -> Option<i64> {
        self.scale_table(mode).get(word).copied()
    }

    /// Looks up a word in the base table, then in the table of the given scale.
    #[must_use]
    pub fn lookup(&self, word: &str, mode: ScaleMode) -> Option<i64> {
        self.lookup_base(word)
            .or_else(|| self.lookup_scale(word, mode))
    }

    /// Returns the class of a word, if it has one.
    #[must_use]
    pub fn class_of(&self, word: &str) -> Option<&WordClass> {
        self.classes.get(word)
    }

    /// Returns true if the word is the separator.
    #[must_use]
    pub fn is_separator(&self, word: &str) -> bool {
        word == self.separator
    }

    /// Returns true if the word is the thousand literal.
    #[must_use]
    pub fn is_thousand(&self, word: &str) -> bool {
        word == self.thousand
    }

    /// Returns true if the word may (and must) appear without a separator.
    #[must_use]
    pub fn is_separator_exempt(&self, word: &str) -> bool {
        self.class_of(word).is_some_and(|c| c.separator_exempt)
    }

    /// Returns the scale tier of a word, if it is a scale word.
    #[must_use]
    pub fn scale_tier(&self, word: &str) -> Option<ScaleTier> {
        self.class_of(word).and_then(|c| c.tier)
    }

    /// Returns true if the word is only tabled with a leading "one".
    #[must_use]
    pub fn is_implicit_one(&self, word: &str) -> bool {
        word != self.one
            && word != self.thousand
            && self.class_of(word).is_some_and(|c| c.implicit_one)
    }

    /// Returns true if the word cannot directly follow "thousand" in
    /// short-scale phrases.
    #[must_use]
    pub fn clashes_with_thousand(&self, word: &str) -> bool {
        self.class_of(word).is_some_and(|c| c.clashes_with_thousand)
    }

    /// The lookup key for a bare singular scale word ("Um Milhão").
    #[must_use]
    pub fn implicit_one_key(&self, word: &str) -> String {
        format!("{} {word}", self.one)
    }

    /// Every single-word entry, sorted. Used for completion and highlighting.
    #[must_use]
    pub fn words(&self) -> Vec<&str> {
        let keys: BTreeSet<&str> = self
            .base
            .keys()
            .chain(self.short_scale.keys())
            .chain(self.long_scale.keys())
            .chain(self.classes.keys())
            .map(String::as_str)
            .filter(|w| !w.contains(' '))
            .chain(std::iter::once(self.separator.as_str()))
            .collect();
        keys.into_iter().collect()
    }

    /// Number of entries in the base table and in each scale table.
    #[must_use]
    pub fn table_sizes(&self) -> (usize, usize, usize) {
        (self.base.len(), self.short_scale.len(), self.long_scale.len())
    }

    fn scale_table(&self, mode: ScaleMode) -> &HashMap<String, i64> {
        match mode {
            ScaleMode::Short => &self.short_scale,
            ScaleMode::Long => &self.long_scale,
        }
    }
}

/// Builds a [`Vocabulary`].
///
/// Every word passed in is put in canonical form first, so callers may use
/// any casing. A word may be registered twice only with the same value.
#[derive(Clone, Debug)]
pub struct VocabularyBuilder {
    base: HashMap<String, i64>,
    short_scale: HashMap<String, i64>,
    long_scale: HashMap<String, i64>,
    classes: HashMap<String, WordClass>,
    separator: String,
    one: String,
    thousand: String,
}

impl VocabularyBuilder {
    /// Creates a builder for the given separator, one and thousand literals.
    ///
    /// The one and thousand words still need to be registered with
    /// [`register_number`](Self::register_number).
    #[must_use]
    pub fn new(separator: &str, one: &str, thousand: &str) -> Self {
        Self {
            base: HashMap::new(),
            short_scale: HashMap::new(),
            long_scale: HashMap::new(),
            classes: HashMap::new(),
            separator: canonical_form(separator.trim()),
            one: canonical_form(one.trim()),
            thousand: canonical_form(thousand.trim()),
        }
    }

    /// Registers a scale-independent word or phrase.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::ConflictingEntry`] if the word already has a
    /// different value.
    pub fn register_number(&mut self, word: &str, value: i64) -> Result<&mut Self> {
        insert_entry(&mut self.base, canonical_form(word.trim()), value)?;
        Ok(self)
    }

    /// Registers a million/billion/trillion name under both scales.
    ///
    /// The singular is tabled as "one + singular"; the bare singular is
    /// classified so the scan can add the implicit "one".
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidVocabulary`] for the thousand tier, which
    /// is registered through the thousand literal, and
    /// [`ErrorKind::ConflictingEntry`] on value conflicts.
    pub fn register_scale_word(&mut self, scale_word: &ScaleWord<'_>) -> Result<&mut Self> {
        if !scale_word.tier.is_above_thousand() {
            return Err(Error::new(ErrorKind::InvalidVocabulary(format!(
                "'{}' uses the thousand tier; register thousand as a number instead",
                scale_word.singular
            ))));
        }

        let singular = canonical_form(scale_word.singular.trim());
        let plural = canonical_form(scale_word.plural.trim());
        let prefixed = format!("{} {singular}", self.one);

        for (table, value) in [
            (&mut self.short_scale, scale_word.short_scale),
            (&mut self.long_scale, scale_word.long_scale),
        ] {
            insert_entry(table, prefixed.clone(), value)?;
            insert_entry(table, plural.clone(), value)?;
        }

        let tier = Some(scale_word.tier);
        self.classes.insert(
            singular,
            WordClass {
                tier,
                number: Some(GrammaticalNumber::Singular),
                separator_exempt: true,
                clashes_with_thousand: true,
                implicit_one: true,
            },
        );
        self.classes.insert(
            prefixed,
            WordClass {
                tier,
                number: Some(GrammaticalNumber::Singular),
                separator_exempt: true,
                clashes_with_thousand: false,
                implicit_one: false,
            },
        );
        self.classes.insert(
            plural,
            WordClass {
                tier,
                number: Some(GrammaticalNumber::Plural),
                separator_exempt: true,
                clashes_with_thousand: true,
                implicit_one: false,
            },
        );

        Ok(self)
    }

    /// Registers an idiomatic phrase valid under one scale only, such as the
    /// long-scale "Mil Milhões".
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::ConflictingEntry`] on value conflicts.
    pub fn register_scale_phrase(
        &mut self,
        mode: ScaleMode,
        phrase: &str,
        value: i64,
    ) -> Result<&mut Self> {
        let table = match mode {
            ScaleMode::Short => &mut self.short_scale,
            ScaleMode::Long => &mut self.long_scale,
        };
        insert_entry(table, canonical_form(phrase.trim()), value)?;
        Ok(self)
    }

    /// Validates the literals and freezes the tables.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::MissingLiteral`] if a literal is empty or the one
    /// and thousand words are not in the base table, and
    /// [`ErrorKind::InvalidVocabulary`] if the separator is also a number
    /// word or contains whitespace.
    pub fn build(mut self) -> Result<Vocabulary> {
        for (what, literal) in [
            ("separator", &self.separator),
            ("one", &self.one),
            ("thousand", &self.thousand),
        ] {
            if literal.is_empty() {
                return Err(Error::missing_literal(what));
            }
        }

        if self.separator.contains(char::is_whitespace) {
            return Err(Error::new(ErrorKind::InvalidVocabulary(format!(
                "separator '{}' must be a single word",
                self.separator
            ))));
        }

        let separator_is_number = self.base.contains_key(&self.separator)
            || self.short_scale.contains_key(&self.separator)
            || self.long_scale.contains_key(&self.separator);
        if separator_is_number {
            return Err(Error::new(ErrorKind::InvalidVocabulary(format!(
                "separator '{}' is also a number word",
                self.separator
            ))));
        }

        if !self.base.contains_key(&self.one) {
            return Err(Error::missing_literal(format!(
                "one ('{}') is not in the base table",
                self.one
            )));
        }
        if !self.base.contains_key(&self.thousand) {
            return Err(Error::missing_literal(format!(
                "thousand ('{}') is not in the base table",
                self.thousand
            )));
        }

        self.classes
            .insert(self.thousand.clone(), WordClass::thousand());

        tracing::debug!(
            base = self.base.len(),
            short_scale = self.short_scale.len(),
            long_scale = self.long_scale.len(),
            classes = self.classes.len(),
            "vocabulary built"
        );

        Ok(Vocabulary {
            base: self.base,
            short_scale: self.short_scale,
            long_scale: self.long_scale,
            classes: self.classes,
            separator: self.separator,
            one: self.one,
            thousand: self.thousand,
        })
    }
}

fn insert_entry(table: &mut HashMap<String, i64>, word: String, value: i64) -> Result<()> {
    match table.get(&word) {
        Some(&existing) if existing != value => {
            Err(Error::conflicting_entry(word, existing, value))
        }
        Some(_) => Ok(()),
        None => {
            table.insert(word, value);
            Ok(())
        }
    }
}
