//! Payload resolution: inline data or a whole-file read.

use std::fs;

use tracing::debug;

use crate::error::{CipherError, CipherResult};

/// Produce the text to transform.
///
/// Inline data always wins over a file path when both are supplied; the
/// file is then never opened. With neither source present the pipeline
/// has nothing to work on and fails.
pub fn resolve(data: Option<&str>, input_path: Option<&str>) -> CipherResult<String> {
    if let Some(data) = data {
        if input_path.is_some() {
            debug!("inline data supplied, ignoring input file");
        }
        return Ok(data.to_owned());
    }
    if let Some(path) = input_path {
        debug!(path, "reading payload from file");
        return fs::read_to_string(path).map_err(|source| CipherError::InputIo {
            path: path.into(),
            source,
        });
    }
    Err(CipherError::NoDataSource)
}
