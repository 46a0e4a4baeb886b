use std::io;
use std::path::PathBuf;

use rdx_table::TableError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CommandError>;

/// Failure of a command-line operation.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Table(#[from] TableError),

    #[error("no generated fragment for trait `{0}`")]
    UnknownFragment(String),

    #[error("{0}")]
    Usage(String),
}

impl CommandError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> CommandError {
        let path = path.into();
        move |source| CommandError::Io { path, source }
    }
}
