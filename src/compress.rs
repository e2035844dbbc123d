//! Compression collaborator
//!
//! The pipeline only needs one capability: deterministically compress a
//! byte sequence at a fixed level. The trait keeps the backend swappable
//! for any LZ-family codec without touching encoding or emission.

use flate2::write::ZlibEncoder;
use flate2::Compression;
use std::io::Write;

use crate::error::EmbedError;

/// Default compression level (0-9). This runs once at build time, so
/// favor output size over speed.
pub const DEFAULT_LEVEL: u32 = 9;

pub trait Compressor {
    /// Compress `bytes` at `level`. Output is deterministic per level.
    fn compress(&self, bytes: &[u8], level: u32) -> Result<Vec<u8>, EmbedError>;
}

/// DEFLATE backend emitting a zlib stream, so consumers can inflate the
/// embedded bytes with stock zlib.
pub struct DeflateCompressor;

impl Compressor for DeflateCompressor {
    fn compress(&self, bytes: &[u8], level: u32) -> Result<Vec<u8>, EmbedError> {
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::new(level));
        encoder.write_all(bytes)?;
        Ok(encoder.finish()?)
    }
}
