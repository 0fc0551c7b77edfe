use std::io;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

/// Every way a run can end early. All of them are fatal.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Unknown flag, `-h`, or a flag missing its value.
    #[error("usage: {program} [-v]|[-f filename][-n integer]")]
    Usage { program: String },

    #[error("-f: error opening file: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The copy step ran without an input handle (`-f` never given).
    #[error("dump_file: Invalid argument")]
    MissingInput,

    #[error("dump_file: {0}")]
    Copy(#[source] io::Error),
}

impl Error {
    /// The I/O condition behind the error, as `perror` would have seen it.
    pub fn kind(&self) -> Option<io::ErrorKind> {
        match self {
            Error::Usage { .. } => None,
            Error::MissingInput => Some(io::ErrorKind::InvalidInput),
            Error::Open { source, .. } | Error::Copy(source) => Some(source.kind()),
        }
    }
}
