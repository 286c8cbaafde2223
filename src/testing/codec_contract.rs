use crate::{
    codec::{Codec, Direction, TranslationError},
    table::SymbolTable,
};

/// Samples that every encoder must accept. Decoders get the encoded form.
pub const SAMPLES: &[&str] = &[
    "HELLO WORLD",
    "SOS",
    "E T",
    "THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG",
    "CALL 911, NOW?",
    "USER@HOST.COM",
    "A/B",
    "1234567890",
];

/// Assert that an encoder/decoder pair satisfies every universal codec contract.
///
/// 1. `round_trips_samples` → decode(encode(s)) == s
/// 2. `output_stays_in_target_alphabet` → no stray characters in the output
/// 3. `handles_empty_and_blank_input` → empty in, empty out
/// 4. `translation_is_repeatable` → the codec carries no state between calls
/// 5. `fails_fast_on_unmapped_units` → first unknown unit aborts the call
#[macro_export]
macro_rules! assert_codec_contract {
    ($encoder:expr, $decoder:expr) => {
        $crate::testing::codec_contract::round_trips_samples($encoder, $decoder);
        $crate::testing::codec_contract::output_stays_in_target_alphabet($encoder);
        $crate::testing::codec_contract::output_stays_in_target_alphabet($decoder);
        $crate::testing::codec_contract::handles_empty_and_blank_input($encoder);
        $crate::testing::codec_contract::handles_empty_and_blank_input($decoder);
        $crate::testing::codec_contract::translation_is_repeatable($encoder);
        $crate::testing::codec_contract::translation_is_repeatable($decoder);
        $crate::testing::codec_contract::fails_fast_on_unmapped_units($encoder);
        $crate::testing::codec_contract::fails_fast_on_unmapped_units($decoder);
    };
}

pub fn round_trips_samples(encoder: &Codec<'_>, decoder: &Codec<'_>) {
    assert_eq!(encoder.direction(), Direction::Encode);
    assert_eq!(decoder.direction(), Direction::Decode);
    for &sample in SAMPLES {
        let code = encoder.translate(sample).unwrap();
        assert_eq!(decoder.translate(&code).unwrap(), sample, "code: `{code}`");
    }
}

pub fn output_stays_in_target_alphabet(codec: &Codec<'_>) {
    let table = SymbolTable::get();
    let target = codec.target();
    let allowed = |c: char| -> bool {
        let c_str = c.to_string();
        let in_alphabet = match codec.direction() {
            Direction::Encode => table.entries().any(|(_, code)| code.contains(c)),
            Direction::Decode => table.encode_char(c).is_some(),
        };
        in_alphabet || c_str == target.char_break() || c_str == target.word_break()
    };

    for &sample in SAMPLES {
        let input = match codec.direction() {
            Direction::Encode => sample.to_string(),
            Direction::Decode => Codec::encoder().translate(sample).unwrap(),
        };
        let output = codec.translate(&input).unwrap();
        assert!(
            output.chars().all(allowed),
            "stray character in `{output}` (input: `{input}`)"
        );
    }
}

pub fn handles_empty_and_blank_input(codec: &Codec<'_>) {
    assert_eq!(codec.translate("").unwrap(), "");
    let blank = codec.source().word_break().repeat(3);
    assert_eq!(codec.translate(codec.source().word_break()).unwrap(), "");
    if codec.direction() == Direction::Encode {
        assert_eq!(codec.translate(&blank).unwrap(), "");
    }
}

pub fn translation_is_repeatable(codec: &Codec<'_>) {
    for &sample in SAMPLES {
        let input = match codec.direction() {
            Direction::Encode => sample.to_string(),
            Direction::Decode => Codec::encoder().translate(sample).unwrap(),
        };
        let once = codec.translate(&input).unwrap();
        let twice = codec.translate(&input).unwrap();
        assert_eq!(once, twice);
    }
}

pub fn fails_fast_on_unmapped_units(codec: &Codec<'_>) {
    let input = match codec.direction() {
        Direction::Encode => "OK #HASH ~TILDE",
        Direction::Decode => "---.-*-/********/-----*",
    };
    match codec.translate(input) {
        Err(TranslationError::UnmappedSymbol { symbol, from, to }) => {
            let first_bad = match codec.direction() {
                Direction::Encode => "#",
                Direction::Decode => "********",
            };
            assert_eq!(symbol, first_bad);
            assert_eq!(from, codec.source().display());
            assert_eq!(to, codec.target().display());
        }
        other => panic!("expected an unmapped symbol error, got {other:?}"),
    }
}
