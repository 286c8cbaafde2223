pub mod data;

use crate::lang::data::{ENGLISH, LANG_TABLE, MORSE};

/// Segmentation rules for one alphabet.
///
/// `char_break` may be empty, meaning characters of a word are contiguous.
/// `word_break` is never empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lang {
    pub name: &'static str,
    pub display: &'static str,
    pub char_break: &'static str,
    pub word_break: &'static str,
}

impl Lang {
    /// Lookup key used by the registry and the command line.
    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        self.name
    }
    /// Human name used in error messages.
    #[inline(always)]
    pub const fn display(&self) -> &'static str {
        self.display
    }
    #[inline(always)]
    pub const fn char_break(&self) -> &'static str {
        self.char_break
    }
    #[inline(always)]
    pub const fn word_break(&self) -> &'static str {
        self.word_break
    }
    #[inline(always)]
    pub const fn is_contiguous(&self) -> bool {
        self.char_break.is_empty()
    }

    /// Exact, case-sensitive lookup by [`Lang::name`].
    #[inline]
    pub fn from_name(name: &str) -> Option<Lang> {
        LANG_TABLE.get(name).copied()
    }
}

pub const DEFAULT_SOURCE: Lang = ENGLISH;
pub const DEFAULT_TARGET: Lang = MORSE;

/// How the two marks of the code alphabet are written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marks {
    pub dot: char,
    pub dash: char,
}

pub const MORSE_MARKS: Marks = Marks { dot: '*', dash: '-' };

#[inline(always)]
pub fn all_langs() -> &'static [Lang] {
    &[ENGLISH, MORSE]
}
