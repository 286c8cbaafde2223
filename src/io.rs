//! Whole-file helpers used by the command line.

use std::{fs, io, path::Path};

/// Read the whole file at `path` as UTF-8 text.
pub fn read_from_file(path: impl AsRef<Path>) -> io::Result<String> {
    fs::read_to_string(path)
}

/// Write `text` to `path`, replacing the file if it exists.
pub fn write_to_file(path: impl AsRef<Path>, text: &str) -> io::Result<()> {
    fs::write(path, text)
}
