//! The translation engine.
//!
//! A [`Codec`] is one algorithm with two configurations. Both split the input
//! on the source word break, split every word into units (on the source char
//! break, or char by char when it is empty), map each unit and rejoin with the
//! target breaks. Only the input preparation differs:
//!
//! * **Encode** (English → Morse) upper-cases ASCII and turns line breaks into
//!   word breaks.
//! * **Decode** (Morse → English) rejects doubled char or word breaks before
//!   any unit is mapped.
//!
//! The first unmapped unit aborts the whole call; no partial output escapes.

use crate::{
    lang::{
        Lang,
        data::{ENGLISH, MORSE},
    },
    table::SymbolTable,
};
use memchr::memmem;
use smallvec::SmallVec;
use std::{borrow::Cow, collections::HashMap};
use thiserror::Error;
use tracing::{debug, trace};

/// Content-level failure: the input cannot be expressed in the target language.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TranslationError {
    #[error("Could not translate from {from} to {to}: no mapping for symbol '{symbol}'")]
    UnmappedSymbol {
        symbol: String,
        from: &'static str,
        to: &'static str,
    },

    #[error("Double character breaks are not allowed in {0}")]
    DoubleCharBreak(&'static str),

    #[error("Double word breaks are not allowed in {0}")]
    DoubleWordBreak(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Encode,
    Decode,
}

#[derive(Debug, Clone)]
pub struct Codec<'t> {
    source: Lang,
    target: Lang,
    direction: Direction,
    mapping: HashMap<&'t str, &'t str>,
}

impl Codec<'static> {
    /// English → Morse over the built-in table.
    pub fn encoder() -> Self {
        Self::with_table(SymbolTable::get(), Direction::Encode)
    }

    /// Morse → English over the built-in table.
    pub fn decoder() -> Self {
        Self::with_table(SymbolTable::get(), Direction::Decode)
    }

    /// The codec translating `source` into `target`, if that direction exists.
    pub fn between(source: Lang, target: Lang) -> Option<Self> {
        if source == ENGLISH && target == MORSE {
            Some(Self::encoder())
        } else if source == MORSE && target == ENGLISH {
            Some(Self::decoder())
        } else {
            None
        }
    }
}

impl<'t> Codec<'t> {
    /// Derive the directional unit mapping from `table`.
    pub fn with_table(table: &'t SymbolTable, direction: Direction) -> Self {
        let (source, target, mapping) = match direction {
            Direction::Encode => (ENGLISH, MORSE, table.text_pairs().collect()),
            Direction::Decode => (
                MORSE,
                ENGLISH,
                table.text_pairs().map(|(text, code)| (code, text)).collect(),
            ),
        };
        Self {
            source,
            target,
            direction,
            mapping,
        }
    }

    #[inline(always)]
    pub fn source(&self) -> Lang {
        self.source
    }

    #[inline(always)]
    pub fn target(&self) -> Lang {
        self.target
    }

    #[inline(always)]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Translate `text` from the source language into the target language.
    ///
    /// Morse input is trimmed of surrounding whitespace before it is
    /// validated, so a trailing newline from a file is accepted.
    pub fn translate(&self, text: &str) -> Result<String, TranslationError> {
        let prepared = self.prepare(text)?;
        let mut out = String::with_capacity(self.estimate_len(prepared.len()));
        let mut words = 0usize;

        for word in prepared
            .split(self.source.word_break())
            .filter(|w| !w.is_empty())
        {
            // A word made only of char breaks has no units and emits nothing.
            let units = self.split_units(word);
            if units.is_empty() {
                continue;
            }
            if words > 0 {
                out.push_str(self.target.word_break());
            }
            self.translate_units(word, &units, &mut out)?;
            words += 1;
        }

        debug!(
            from = self.source.name(),
            to = self.target.name(),
            words,
            input_len = text.len(),
            output_len = out.len(),
            "translated"
        );
        Ok(out)
    }

    fn prepare<'a>(&self, text: &'a str) -> Result<Cow<'a, str>, TranslationError> {
        match self.direction {
            Direction::Encode => Ok(fold_for_encoding(text, self.source.word_break())),
            Direction::Decode => {
                let text = text.trim();
                let double_char = self.source.char_break().repeat(2);
                if memmem::find(text.as_bytes(), double_char.as_bytes()).is_some() {
                    return Err(TranslationError::DoubleCharBreak(self.source.display()));
                }
                let double_word = self.source.word_break().repeat(2);
                if memmem::find(text.as_bytes(), double_word.as_bytes()).is_some() {
                    return Err(TranslationError::DoubleWordBreak(self.source.display()));
                }
                Ok(Cow::Borrowed(text))
            }
        }
    }

    fn split_units<'w>(&self, word: &'w str) -> SmallVec<[&'w str; 8]> {
        if self.source.is_contiguous() {
            word.char_indices()
                .map(|(i, c)| &word[i..i + c.len_utf8()])
                .collect()
        } else {
            word.split(self.source.char_break())
                .filter(|u| !u.is_empty())
                .collect()
        }
    }

    fn translate_units(
        &self,
        word: &str,
        units: &[&str],
        out: &mut String,
    ) -> Result<(), TranslationError> {
        for (i, unit) in units.iter().enumerate() {
            let Some(mapped) = self.mapping.get(*unit) else {
                trace!(unit, word, "no mapping");
                return Err(TranslationError::UnmappedSymbol {
                    symbol: (*unit).to_owned(),
                    from: self.source.display(),
                    to: self.target.display(),
                });
            };
            if i > 0 {
                out.push_str(self.target.char_break());
            }
            out.push_str(mapped);
        }
        Ok(())
    }

    #[inline]
    fn estimate_len(&self, input_len: usize) -> usize {
        match self.direction {
            // Average rendered code plus its break.
            Direction::Encode => input_len * 5,
            Direction::Decode => input_len / 3 + 1,
        }
    }
}

/// Upper-case ASCII and turn line breaks into `word_break`, borrowing when
/// nothing changes.
fn fold_for_encoding<'a>(text: &'a str, word_break: &str) -> Cow<'a, str> {
    let needs_fold = text
        .bytes()
        .any(|b| b.is_ascii_lowercase() || b == b'\n' || b == b'\r');
    if !needs_fold {
        return Cow::Borrowed(text);
    }
    let mut folded = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\n' | '\r' => folded.push_str(word_break),
            c => folded.push(c.to_ascii_uppercase()),
        }
    }
    Cow::Owned(folded)
}
