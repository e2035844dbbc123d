//! rom-embed - binary resource to C header converter
//!
//! Embeds a binary resource (a cartridge ROM, a boot image) into a C
//! header as an `unsigned char` array literal, either verbatim or
//! compressed with DEFLATE. Size constants are emitted alongside the
//! array so a consumer of the compressed form can allocate a correctly
//! sized decompression buffer.

pub mod compress;
pub mod emitter;
pub mod encoder;
pub mod error;
pub mod identifier;

use std::path::PathBuf;

use crate::compress::{Compressor, DeflateCompressor};
use crate::error::EmbedError;

/// Embedding mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Embed the raw resource bytes unchanged.
    Verbatim,
    /// Embed DEFLATE-compressed bytes at the given level (0-9).
    Compressed { level: u32 },
}

/// Immutable run configuration, built once from CLI arguments.
#[derive(Debug, Clone)]
pub struct EmbedConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Overrides the identifier derived from the input file stem.
    pub name: Option<String>,
    pub mode: Mode,
}

/// Run the full pipeline: load -> [compress] -> encode -> emit.
pub fn run(config: &EmbedConfig) -> Result<(), EmbedError> {
    run_with_compressor(config, &DeflateCompressor)
}

/// Same as [`run`] but with a caller-supplied compression backend.
pub fn run_with_compressor(
    config: &EmbedConfig,
    compressor: &dyn Compressor,
) -> Result<(), EmbedError> {
    let identifier = match &config.name {
        Some(name) => identifier::validate(name)?.to_string(),
        None => identifier::derive_from_path(&config.input)?,
    };

    let raw = std::fs::read(&config.input).map_err(|source| EmbedError::InputNotFound {
        path: config.input.clone(),
        source,
    })?;
    let original_size = raw.len();

    let header = match config.mode {
        Mode::Verbatim => {
            let rows = encoder::encode_rows(&raw);
            emitter::render_header(&identifier, &[("size", original_size)], &rows)
        }
        Mode::Compressed { level } => {
            let compressed = compressor.compress(&raw, level)?;
            let rows = encoder::encode_rows(&compressed);
            emitter::render_header(
                &identifier,
                &[
                    ("compressed_size", compressed.len()),
                    ("original_size", original_size),
                ],
                &rows,
            )
        }
    };

    emitter::write_header(&config.output, &header)?;

    tracing::info!(
        "Embedded {:?} as '{}': {} bytes -> {}",
        config.input,
        identifier,
        original_size,
        config.output.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingCompressor;

    impl Compressor for FailingCompressor {
        fn compress(&self, _bytes: &[u8], _level: u32) -> Result<Vec<u8>, EmbedError> {
            Err(EmbedError::Compression(std::io::Error::other(
                "backend rejected input",
            )))
        }
    }

    fn config(dir: &tempfile::TempDir, mode: Mode) -> EmbedConfig {
        EmbedConfig {
            input: dir.path().join("boot.bin"),
            output: dir.path().join("boot.h"),
            name: None,
            mode,
        }
    }

    #[test]
    fn test_missing_input_reported() {
        let dir = tempfile::tempdir().unwrap();
        let err = run(&config(&dir, Mode::Verbatim)).unwrap_err();
        assert!(matches!(err, EmbedError::InputNotFound { .. }));
        assert!(!dir.path().join("boot.h").exists());
    }

    #[test]
    fn test_compressor_failure_aborts_before_output() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config(&dir, Mode::Compressed { level: 6 });
        std::fs::write(&cfg.input, [0u8; 64]).unwrap();

        let err = run_with_compressor(&cfg, &FailingCompressor).unwrap_err();
        assert!(matches!(err, EmbedError::Compression(_)));
        assert!(!cfg.output.exists(), "no partial artifact may be written");
    }

    #[test]
    fn test_name_override_wins_over_stem() {
        let dir = tempfile::tempdir().unwrap();
        let mut cfg = config(&dir, Mode::Verbatim);
        cfg.name = Some("custom".to_string());
        std::fs::write(&cfg.input, [0xaa]).unwrap();

        run(&cfg).unwrap();
        let header = std::fs::read_to_string(&cfg.output).unwrap();
        assert!(header.contains("unsigned char custom[] = {"));
        assert!(!header.contains("boot"));
    }

    #[test]
    fn test_invalid_override_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut cfg = config(&dir, Mode::Verbatim);
        cfg.name = Some("not valid".to_string());
        std::fs::write(&cfg.input, [0xaa]).unwrap();

        let err = run(&cfg).unwrap_err();
        assert!(matches!(err, EmbedError::InvalidIdentifier(_)));
    }
}
