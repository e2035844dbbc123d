//! Array identifier derivation and validation
//!
//! The emitted array is named after the input file's stem
//! (`roms/tetris.gb` -> `tetris`) unless the caller overrides it. Either
//! way the name must be a valid C identifier, since it ends up in a
//! `unsigned char <name>[]` declaration.

use std::path::Path;

use crate::error::EmbedError;

/// Validate `name` as a C identifier.
pub fn validate(name: &str) -> Result<&str, EmbedError> {
    let mut chars = name.chars();
    let valid_start = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    if valid_start && chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        Ok(name)
    } else {
        Err(EmbedError::InvalidIdentifier(name.to_string()))
    }
}

/// Derive the identifier from the input path's file stem.
pub fn derive_from_path(input: &Path) -> Result<String, EmbedError> {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| EmbedError::InvalidIdentifier(input.display().to_string()))?;
    validate(stem).map(str::to_string)
}
