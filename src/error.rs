use std::fmt;
use std::io;
use std::path::PathBuf;

/// Fatal errors. Malformed markup never lands here — only I/O does.
#[derive(Debug)]
pub enum HhcError {
    /// Input file could not be read.
    Read { path: PathBuf, source: io::Error },
    /// Summary file could not be written.
    Write { path: PathBuf, source: io::Error },
}

impl fmt::Display for HhcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HhcError::Read { path, source } => {
                write!(f, "cannot read {}: {source}", path.display())
            }
            HhcError::Write { path, source } => {
                write!(f, "cannot write {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for HhcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HhcError::Read { source, .. } | HhcError::Write { source, .. } => Some(source),
        }
    }
}
