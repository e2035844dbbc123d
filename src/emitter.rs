//! C header emitter
//!
//! Assembles the size constants and encoder rows into the final header
//! text and writes it to the destination path. The layout is fixed:
//!
//! ```c
//! const unsigned int tetris_size = 17;
//!
//! unsigned char tetris[] = {
//!     0x00, 0x01, ...
//! };
//! ```

use std::fmt::Write as FmtWrite;
use std::path::Path;

use crate::error::EmbedError;

const ROW_INDENT: &str = "    ";

/// Render the header text for `identifier`.
///
/// `sizes` holds `(suffix, value)` pairs emitted as
/// `const unsigned int <identifier>_<suffix> = <value>;` lines ahead of
/// the array, in order. `rows` is the pre-encoded array body.
pub fn render_header(identifier: &str, sizes: &[(&str, usize)], rows: &[String]) -> String {
    let mut output = String::new();

    for (suffix, value) in sizes {
        // infallible: fmt::Write on String never errors
        let _ = writeln!(
            output,
            "const unsigned int {}_{} = {};",
            identifier, suffix, value
        );
    }
    let _ = writeln!(output);

    let _ = writeln!(output, "unsigned char {}[] = {{", identifier);
    for row in rows {
        let _ = writeln!(output, "{}{}", ROW_INDENT, row);
    }
    let _ = writeln!(output, "}};");

    output
}

/// Write the rendered header to `path`, creating parent directories as
/// needed. On failure the destination contents are undefined; callers
/// must treat any error as requiring a full re-run.
pub fn write_header(path: &Path, contents: &str) -> Result<(), EmbedError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|source| EmbedError::OutputPath {
                path: path.to_path_buf(),
                source,
            })?;
        }
    }
    std::fs::write(path, contents).map_err(|source| EmbedError::OutputPath {
        path: path.to_path_buf(),
        source,
    })
}
