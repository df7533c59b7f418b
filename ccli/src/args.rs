//! Flag/value collection from the raw argument list.

use std::collections::HashMap;
use std::path::PathBuf;

use caesar::Mode;

use crate::error::{CipherError, CipherResult};

const MODE: &str = "-mode";
const KEY: &str = "-key";
const DATA: &str = "-data";
const IN: &str = "-in";
const OUT: &str = "-out";

const ENC: &str = "enc";
const CONSOLE: &str = "console";

/// Where the transformed text goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Console,
    File(PathBuf),
}

/// Flag/value pairs collected once per invocation, read-only afterwards.
///
/// Tokens are paired two at a time: each flag token is taken with the token
/// immediately following it as its value. No flag names are validated here;
/// unknown flags stay in the map but are never consulted. A duplicate flag
/// overwrites the earlier value.
#[derive(Debug)]
pub struct ParsedArgs {
    values: HashMap<String, String>,
}

impl ParsedArgs {
    /// Build the mapping from the raw tokens (program name excluded).
    ///
    /// A trailing flag with no value token is dropped.
    pub fn parse(tokens: &[String]) -> Self {
        let mut values = HashMap::new();
        for pair in tokens.chunks_exact(2) {
            values.insert(pair[0].clone(), pair[1].clone());
        }
        Self { values }
    }

    fn get(&self, flag: &str) -> Option<&str> {
        self.values.get(flag).map(String::as_str)
    }

    /// Shift direction. `enc` is the default; any other value decrypts.
    pub fn mode(&self) -> Mode {
        match self.get(MODE) {
            None => Mode::Encrypt,
            Some(value) if value == ENC => Mode::Encrypt,
            Some(_) => Mode::Decrypt,
        }
    }

    /// Signed shift amount, `0` when unspecified.
    pub fn key(&self) -> CipherResult<i32> {
        match self.get(KEY) {
            None => Ok(0),
            Some(raw) => raw.parse().map_err(|source| CipherError::MalformedKey {
                value: raw.to_owned(),
                source,
            }),
        }
    }

    /// Inline text to transform, if supplied.
    pub fn data(&self) -> Option<&str> {
        self.get(DATA)
    }

    /// Path of the file to read the payload from, if supplied.
    pub fn input_path(&self) -> Option<&str> {
        self.get(IN)
    }

    /// Output destination; the literal `console` (and absence) means stdout.
    pub fn destination(&self) -> Destination {
        match self.get(OUT) {
            None => Destination::Console,
            Some(value) if value == CONSOLE => Destination::Console,
            Some(path) => Destination::File(PathBuf::from(path)),
        }
    }
}
