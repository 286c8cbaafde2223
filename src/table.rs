//! The process-wide symbol table.
//!
//! Built once from [`SYMBOLS`] on first use. Building renders every canonical
//! `.`/`-` code into the Morse marks and checks the bijection invariant:
//! no empty code, no code containing a Morse separator, no symbol or code
//! listed twice.

use crate::lang::{
    Lang, MORSE_MARKS, Marks,
    data::{MORSE, SYMBOLS},
};
use std::{collections::HashMap, sync::OnceLock};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("symbol `{0}` has an empty code")]
    EmptyCode(char),

    #[error("code `{code}` of symbol `{symbol}` contains a mark that is neither dot nor dash")]
    InvalidMark { symbol: char, code: &'static str },

    #[error("code `{code}` of symbol `{symbol}` contains the separator `{separator}`")]
    ReservedSeparator {
        symbol: char,
        code: String,
        separator: &'static str,
    },

    #[error("symbol `{0}` is mapped more than once")]
    DuplicateSymbol(char),

    #[error("code `{code}` is shared by `{first}` and `{second}`")]
    DuplicateCode {
        code: String,
        first: char,
        second: char,
    },
}

#[derive(Debug, Clone)]
struct Entry {
    symbol: char,
    text: String,
    code: String,
}

/// Bidirectional symbol ⇄ code lookup. Immutable once built.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    entries: Vec<Entry>,
    by_symbol: HashMap<char, usize>,
    by_code: HashMap<String, usize>,
}

impl SymbolTable {
    /// The built-in English ⇄ Morse table.
    ///
    /// # Panics
    /// If the built-in data breaks the bijection invariant.
    pub fn get() -> &'static SymbolTable {
        static TABLE: OnceLock<SymbolTable> = OnceLock::new();
        TABLE.get_or_init(|| {
            SymbolTable::build(SYMBOLS, MORSE_MARKS, &MORSE)
                .unwrap_or_else(|e| panic!("built-in symbol table is malformed: {e}"))
        })
    }

    /// Render `pairs` with `marks` and validate them against the separators
    /// of `code_lang`.
    pub fn build(
        pairs: &[(char, &'static str)],
        marks: Marks,
        code_lang: &Lang,
    ) -> Result<Self, TableError> {
        let mut entries = Vec::with_capacity(pairs.len());
        let mut by_symbol = HashMap::with_capacity(pairs.len());
        let mut by_code: HashMap<String, usize> = HashMap::with_capacity(pairs.len());

        for (idx, &(symbol, canonical)) in pairs.iter().enumerate() {
            if canonical.is_empty() {
                return Err(TableError::EmptyCode(symbol));
            }
            let code = render(symbol, canonical, marks)?;

            for separator in [code_lang.char_break(), code_lang.word_break()] {
                if !separator.is_empty() && code.contains(separator) {
                    return Err(TableError::ReservedSeparator {
                        symbol,
                        code,
                        separator,
                    });
                }
            }
            if by_symbol.insert(symbol, idx).is_some() {
                return Err(TableError::DuplicateSymbol(symbol));
            }
            if let Some(&first) = by_code.get(&code) {
                return Err(TableError::DuplicateCode {
                    code,
                    first: pairs[first].0,
                    second: symbol,
                });
            }
            by_code.insert(code.clone(), idx);
            entries.push(Entry {
                symbol,
                text: symbol.to_string(),
                code,
            });
        }

        Ok(Self {
            entries,
            by_symbol,
            by_code,
        })
    }

    /// Rendered code of `symbol`.
    #[inline]
    pub fn encode_char(&self, symbol: char) -> Option<&str> {
        self.by_symbol
            .get(&symbol)
            .map(|&i| self.entries[i].code.as_str())
    }

    /// Symbol whose rendered code is `code`.
    #[inline]
    pub fn decode_code(&self, code: &str) -> Option<char> {
        self.by_code.get(code).map(|&i| self.entries[i].symbol)
    }

    /// `(symbol, rendered code)` in authored order.
    pub fn entries(&self) -> impl ExactSizeIterator<Item = (char, &str)> + '_ {
        self.entries.iter().map(|e| (e.symbol, e.code.as_str()))
    }

    /// `(symbol as text, rendered code)` in authored order.
    pub(crate) fn text_pairs(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries
            .iter()
            .map(|e| (e.text.as_str(), e.code.as_str()))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn render(symbol: char, canonical: &'static str, marks: Marks) -> Result<String, TableError> {
    canonical
        .chars()
        .map(|m| match m {
            '.' => Ok(marks.dot),
            '-' => Ok(marks.dash),
            _ => Err(TableError::InvalidMark {
                symbol,
                code: canonical,
            }),
        })
        .collect()
}
