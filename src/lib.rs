pub mod codec;
pub mod io;
pub mod lang;
pub mod logging;
pub mod morsy;
pub mod registry;
pub mod table;

#[cfg(test)]
mod testing;

pub use codec::{Codec, Direction, TranslationError};
pub use lang::Lang;
pub use lang::data::{ENGLISH, MORSE};
pub use morsy::{MorsyError, translate, translate_file};
pub use registry::{TranslatorNotFoundError, resolve};
pub use table::{SymbolTable, TableError};
