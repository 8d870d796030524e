use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("Log file not found: {}", path.display())]
    SourceNotFound { path: PathBuf },

    #[error("failed to read log file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl AnalyzeError {
    pub(crate) fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            Self::SourceNotFound { path }
        } else {
            Self::Read { path, source }
        }
    }
}
