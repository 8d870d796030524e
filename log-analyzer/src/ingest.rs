use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use crate::error::AnalyzeError;

/// Opens `path` for line-by-line reading.
///
/// The file is opened eagerly so a missing source is reported before any
/// line is consumed, even when the caller never iterates.
pub fn open_log(path: impl AsRef<Path>) -> Result<LogLines, AnalyzeError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| AnalyzeError::from_io(path, e))?;
    if file.metadata().map(|m| m.is_dir()).unwrap_or(false) {
        return Err(AnalyzeError::Read {
            path: path.to_path_buf(),
            source: std::io::Error::other("path is a directory"),
        });
    }
    tracing::debug!(path = %path.display(), "opened log source");
    Ok(LogLines {
        path: path.to_path_buf(),
        reader: BufReader::new(file),
        buf: Vec::new(),
    })
}

/// Lazy sequence of lines with terminators stripped. Owns the file handle.
#[derive(Debug)]
pub struct LogLines {
    path: PathBuf,
    reader: BufReader<File>,
    buf: Vec<u8>,
}

impl Iterator for LogLines {
    type Item = Result<String, AnalyzeError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                if self.buf.last() == Some(&b'\n') {
                    self.buf.pop();
                    if self.buf.last() == Some(&b'\r') {
                        self.buf.pop();
                    }
                }
                Some(Ok(String::from_utf8_lossy(&self.buf).into_owned()))
            }
            Err(e) => Some(Err(AnalyzeError::from_io(&self.path, e))),
        }
    }
}
