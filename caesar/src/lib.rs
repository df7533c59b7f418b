#![cfg_attr(not(test), no_std)]
#![forbid(unsafe_code)]

//! Additive (Caesar-style) shift cipher over Unicode scalar values.
//!
//! Each character's code point is shifted by a signed key, forward to
//! encrypt and backward to decrypt. No wraparound or clamping is applied,
//! so a large key can land on non-printable but perfectly valid characters.
//! The one thing the shift cannot do is leave the scalar-value range (go
//! negative, pass `U+10FFFF`, or fall into the surrogate gap); such a
//! shift fails with [`ShiftError`] instead of producing a character.

extern crate alloc;

use alloc::string::String;
use core::error::Error;
use core::fmt;

/// Direction of the character shift.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Encrypt,
    Decrypt,
}

/// A shift landed on a code point that is not a valid character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftError {
    code: i64,
}

impl ShiftError {
    /// The out-of-range code point the shift produced.
    pub fn code(&self) -> i64 {
        self.code
    }
}

impl fmt::Display for ShiftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "shifted code point {} is not a valid character", self.code)
    }
}

impl Error for ShiftError {}

/// Additive shift cipher instance holding the signed key.
#[derive(Debug, Clone, Copy)]
pub struct Caesar {
    key: i64,
}

impl Caesar {
    /// Init a new shift cipher instance with the given signed key.
    pub fn new(key: i32) -> Self {
        // widen so negation and addition can never overflow
        Self {
            key: i64::from(key),
        }
    }

    /// Shift every character of `text` by the key, direction chosen by `mode`.
    pub fn apply(&self, mode: Mode, text: &str) -> Result<String, ShiftError> {
        let delta = match mode {
            Mode::Encrypt => self.key,
            Mode::Decrypt => -self.key,
        };
        text.chars().map(|c| shift_char(c, delta)).collect()
    }

    /// Shift every character forward by the key.
    pub fn encrypt(&self, text: &str) -> Result<String, ShiftError> {
        self.apply(Mode::Encrypt, text)
    }

    /// Shift every character backward by the key.
    pub fn decrypt(&self, text: &str) -> Result<String, ShiftError> {
        self.apply(Mode::Decrypt, text)
    }
}

/// One-shot en/decryption with a supplied key.
pub fn apply_static(key: i32, mode: Mode, text: &str) -> Result<String, ShiftError> {
    Caesar::new(key).apply(mode, text)
}

fn shift_char(c: char, delta: i64) -> Result<char, ShiftError> {
    // raw additive shift on the code point, no clamping
    let code = i64::from(u32::from(c)) + delta;
    u32::try_from(code)
        .ok()
        .and_then(char::from_u32)
        .ok_or(ShiftError { code })
}


#[cfg(test)]
mod props {
    use crate::Caesar;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn round_trips_whenever_the_shift_is_valid(
            text in "\\PC{0,64}",
            key in -0x1000i32..=0x1000,
        ) {
            let cipher = Caesar::new(key);
            if let Ok(ciphertext) = cipher.encrypt(&text) {
                prop_assert_eq!(&cipher.decrypt(&ciphertext).unwrap(), &text);
            }
            if let Ok(shifted) = cipher.decrypt(&text) {
                prop_assert_eq!(&cipher.encrypt(&shifted).unwrap(), &text);
            }
        }

        #[test]
        fn zero_key_is_identity_on_arbitrary_text(text in "\\PC{0,64}") {
            prop_assert_eq!(&Caesar::new(0).encrypt(&text).unwrap(), &text);
        }
    }
}
