//! Writing sorted line sets and the original text back to disk.

use crate::error::{SortContext, SortResult};
use crate::text::{Line, SourceText};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Renders lines to `writer`, one record per output line, bytes verbatim.
pub fn render_lines<W: Write>(writer: &mut W, lines: &[Line<'_>]) -> std::io::Result<()> {
    for line in lines {
        writer.write_all(line.bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

/// Writes `lines` to a file at `path`.
pub fn write_lines(path: &Path, lines: &[Line<'_>]) -> SortResult<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    render_lines(&mut writer, lines).with_context(|| format!("writing {}", path.display()))
}

/// Writes a verbatim copy of the source text to `path`.
pub fn write_original(path: &Path, text: &SourceText) -> SortResult<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(text.bytes())
        .and_then(|()| writer.flush())
        .with_context(|| format!("writing {}", path.display()))
}
