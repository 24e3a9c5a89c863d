//! Markdown document on disk.

use crate::models::TextBuffer;
use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

pub fn read_document(path: &Path) -> io::Result<TextBuffer> {
    let text = fs::read_to_string(path)?;
    Ok(TextBuffer::from_text(&text))
}

/// Writes `buffer` to a sibling temp file, then renames it over `path`.
/// The original is untouched if anything before the rename fails.
pub fn write_document(path: &Path, buffer: &TextBuffer) -> io::Result<()> {
    let tmp = temp_path(path)?;
    let written = write_file(&tmp, buffer).and_then(|()| fs::rename(&tmp, path));
    if written.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    written
}

fn write_file(path: &Path, buffer: &TextBuffer) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    buffer.write_to(&mut writer)?;
    let file = writer.into_inner().map_err(|e| e.into_error())?;
    file.sync_all()
}

fn temp_path(path: &Path) -> io::Result<PathBuf> {
    let name = path.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("not a file path: {}", path.display()),
        )
    })?;
    let mut tmp_name = std::ffi::OsString::from(".");
    tmp_name.push(name);
    tmp_name.push(".bulledit.tmp");
    Ok(path.with_file_name(tmp_name))
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/document.rs"]
mod tests;
