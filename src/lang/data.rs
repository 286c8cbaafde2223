use crate::lang::Lang;

use phf::{Map, phf_map};

/// ---------------------------------------------------------------------------
///    Macro – generates the ordered symbol slice from one table
/// ---------------------------------------------------------------------------
macro_rules! define_symbols {
    ($( $symbol:literal => $code:literal ),* $(,)?) => {
        /// Every mapped symbol in authored order, codes in canonical `.`/`-` notation.
        pub static SYMBOLS: &[(char, &str)] = &[
            $( ($symbol, $code) ),*
        ];
    };
}

pub const ENGLISH: Lang = Lang {
    name: "english",
    display: "English",
    char_break: "",
    word_break: " ",
};

pub const MORSE: Lang = Lang {
    name: "morse",
    display: "Morse",
    char_break: ".",
    word_break: "/",
};

pub static LANG_TABLE: Map<&'static str, Lang> = phf_map! {
    "english" => ENGLISH,
    "morse" => MORSE,
};

// ---------------------------------------------------------------------------
//    Symbol definitions (single source of truth)
// ---------------------------------------------------------------------------
define_symbols! {
    'A' => ".-",
    'B' => "-...",
    'C' => "-.-.",
    'D' => "-..",
    'E' => ".",
    'F' => "..-.",
    'G' => "--.",
    'H' => "....",
    'I' => "..",
    'J' => ".---",
    'K' => "-.-",
    'L' => ".-..",
    'M' => "--",
    'N' => "-.",
    'O' => "---",
    'P' => ".--.",
    'Q' => "--.-",
    'R' => ".-.",
    'S' => "...",
    'T' => "-",
    'U' => "..-",
    'V' => "...-",
    'W' => ".--",
    'X' => "-..-",
    'Y' => "-.--",
    'Z' => "--..",
    '.' => ".-.-.-",
    ',' => "--..--",
    '?' => "..--..",
    '/' => "-..-.",
    '@' => ".--.-.",
    '1' => ".----",
    '2' => "..---",
    '3' => "...--",
    '4' => "....-",
    '5' => ".....",
    '6' => "-....",
    '7' => "--...",
    '8' => "---..",
    '9' => "----.",
    '0' => "-----",
}
