//! Source/destination plumbing for the CLI.
//!
//! `-` selects stdin or stdout. Destinations refuse to clobber an existing
//! file unless `overwrite` is set.

use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use crate::config::BROTLI_EXTENSION;

pub const STDIO_MARK: &str = "-";

pub fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == STDIO_MARK
}

pub fn open_src(path: &Path) -> io::Result<Box<dyn Read + Send>> {
    if is_stdio(path) {
        log::debug!("using stdin for input");
        return Ok(Box::new(io::stdin()));
    }
    let f = File::open(path)
        .map_err(|e| io::Error::new(e.kind(), format!("{}: {e}", path.display())))?;
    Ok(Box::new(BufReader::new(f)))
}

pub fn open_dst(path: &Path, overwrite: bool) -> io::Result<Box<dyn Write + Send>> {
    if is_stdio(path) {
        log::debug!("using stdout for output");
        return Ok(Box::new(io::stdout()));
    }
    if !overwrite && path.exists() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{}: already exists; not overwritten", path.display()),
        ));
    }
    let f = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|e| io::Error::new(e.kind(), format!("{}: {e}", path.display())))?;
    Ok(Box::new(BufWriter::new(f)))
}

/// `foo.txt` -> `foo.txt.br`
pub fn compressed_name(src: &Path) -> PathBuf {
    let mut name = src.as_os_str().to_owned();
    name.push(BROTLI_EXTENSION);
    PathBuf::from(name)
}

/// `foo.txt.br` -> `foo.txt`; `None` when the suffix is missing.
pub fn decompressed_name(src: &Path) -> Option<PathBuf> {
    let s = src.to_str()?;
    let stem = s.strip_suffix(BROTLI_EXTENSION)?;
    if stem.is_empty() || stem.ends_with('/') {
        return None;
    }
    Some(PathBuf::from(stem))
}
