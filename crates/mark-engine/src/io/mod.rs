use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Default extension appended to the input path for the HTML output.
pub const DEFAULT_OUTPUT_EXTENSION: &str = "html";

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read a markup source file and return its content
pub fn read_source(path: &Path) -> Result<String, IoError> {
    if !path.is_file() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Write rendered HTML next to its source
pub fn write_html(path: &Path, html: &str) -> Result<(), IoError> {
    fs::write(path, html).map_err(IoError::Io)
}

/// `notes.txt` → `notes.txt.html`: the extension is appended, never substituted.
pub fn output_path_for(input: &Path, extension: &str) -> PathBuf {
    let mut name = OsString::from(input.as_os_str());
    name.push(".");
    name.push(extension);
    PathBuf::from(name)
}
