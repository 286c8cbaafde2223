use crate::{
    codec::Codec,
    lang::{
        Lang,
        data::{ENGLISH, MORSE},
    },
};
use thiserror::Error;
use tracing::debug;

/// Usage-level failure: nobody translates between the requested languages.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("No translation from {from} to {to} available")]
pub struct TranslatorNotFoundError {
    pub from: String,
    pub to: String,
}

static SUPPORTED: &[(Lang, Lang)] = &[(ENGLISH, MORSE), (MORSE, ENGLISH)];

/// Every `(source, target)` pair [`resolve`] accepts.
#[inline(always)]
pub fn supported_pairs() -> &'static [(Lang, Lang)] {
    SUPPORTED
}

/// Build the codec translating `source` into `target`, both given by
/// [`Lang::name`].
pub fn resolve(source: &str, target: &str) -> Result<Codec<'static>, TranslatorNotFoundError> {
    let codec = Lang::from_name(source)
        .zip(Lang::from_name(target))
        .and_then(|(s, t)| Codec::between(s, t));

    match codec {
        Some(codec) => {
            debug!(source, target, direction = ?codec.direction(), "resolved translator");
            Ok(codec)
        }
        None => Err(TranslatorNotFoundError {
            from: source.to_owned(),
            to: target.to_owned(),
        }),
    }
}
