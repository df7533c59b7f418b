use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for the transform pipeline.
///
/// Every fault propagates unchanged to the top-level boundary, which logs
/// the specific kind and shows the user a single fixed message. The kind
/// distinction exists for diagnostics and tests only.
#[derive(Error, Debug)]
pub enum CipherError {
    #[error("key `{value}` is not an integer")]
    MalformedKey {
        value: String,
        source: ParseIntError,
    },

    #[error("no data source: pass inline data or an input file")]
    NoDataSource,

    #[error("reading {}: {}", path.display(), source)]
    InputIo { path: PathBuf, source: io::Error },

    #[error("writing {}: {}", path.display(), source)]
    OutputIo { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Shift(#[from] caesar::ShiftError),
}

pub type CipherResult<T> = Result<T, CipherError>;
