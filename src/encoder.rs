//! Byte array row encoder
//!
//! Turns a byte sequence into the lines of a C array initializer: rows
//! of up to 16 comma-separated `0x%02x` tokens, in input order, each row
//! ending in a trailing comma so rows concatenate cleanly.

use std::fmt::Write as FmtWrite;

/// Bytes per emitted row.
pub const ROW_WIDTH: usize = 16;

/// Encode `bytes` into initializer rows.
///
/// Every row is formatted the same way, full or partial; the final row
/// simply holds the `len % 16` remainder. Empty input yields no rows.
pub fn encode_rows(bytes: &[u8]) -> Vec<String> {
    bytes
        .chunks(ROW_WIDTH)
        .map(|chunk| {
            let mut row = String::with_capacity(chunk.len() * 6);
            for &byte in chunk {
                // infallible: fmt::Write on String never errors
                let _ = write!(row, "0x{:02x}, ", byte);
            }
            // drop the separator space after the last token, keep the comma
            row.pop();
            row
        })
        .collect()
}
