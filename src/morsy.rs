use thiserror::Error;

use crate::{
    codec::TranslationError,
    io::{read_from_file, write_to_file},
    lang::data::{ENGLISH, MORSE},
    registry::{TranslatorNotFoundError, resolve},
};
use std::{io, path::Path, path::PathBuf};
use tracing::info;

#[derive(Debug, Error)]
pub enum MorsyError {
    #[error(transparent)]
    Translation(#[from] TranslationError),
    #[error(transparent)]
    TranslatorNotFound(#[from] TranslatorNotFoundError),
    #[error("could not read `{}`: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("could not write `{}`: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// Resolve a translator for the named languages and run it over `text`.
pub fn translate(source: &str, target: &str, text: &str) -> Result<String, MorsyError> {
    let codec = resolve(source, target)?;
    Ok(codec.translate(text)?)
}

/// Translate the file at `input` into a new file at `output`.
///
/// The translator is resolved before the input is touched, and `output` is
/// only written when translation succeeds.
pub fn translate_file(
    source: &str,
    target: &str,
    input: &Path,
    output: &Path,
) -> Result<(), MorsyError> {
    let codec = resolve(source, target)?;
    let text = read_from_file(input).map_err(|source| MorsyError::Read {
        path: input.to_path_buf(),
        source,
    })?;
    let translated = codec.translate(&text)?;
    write_to_file(output, &translated).map_err(|source| MorsyError::Write {
        path: output.to_path_buf(),
        source,
    })?;
    info!(
        input = %input.display(),
        output = %output.display(),
        bytes = translated.len(),
        "wrote translation"
    );
    Ok(())
}

/// Morse → Morse is never useful; read it as Morse → English.
pub fn redirect_target<'a>(source: &str, target: &'a str) -> &'a str {
    if source == MORSE.name() && target == MORSE.name() {
        ENGLISH.name()
    } else {
        target
    }
}
