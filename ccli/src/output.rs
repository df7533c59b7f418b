//! Result emission: stdout or a created/truncated file.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::args::Destination;
use crate::error::{CipherError, CipherResult};

/// Emit the transformed text to the chosen destination.
///
/// Console output gets a trailing newline; file output is written verbatim.
pub fn write(destination: &Destination, text: &str) -> CipherResult<()> {
    match destination {
        Destination::Console => {
            println!("{text}");
            Ok(())
        }
        Destination::File(path) => write_file(path, text),
    }
}

fn write_file(path: &Path, text: &str) -> CipherResult<()> {
    debug!(path = %path.display(), "writing result to file");
    let wrap = |source| CipherError::OutputIo {
        path: path.to_owned(),
        source,
    };
    // the handle is scoped, so it is flushed and closed on every exit path
    let mut file = File::options()
        .create(true)
        .truncate(true)
        .write(true)
        .open(path)
        .map_err(wrap)?;
    file.write_all(text.as_bytes()).map_err(wrap)?;
    file.flush().map_err(wrap)?;
    Ok(())
}
