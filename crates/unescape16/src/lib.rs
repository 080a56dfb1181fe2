//! Decoding of JSON string literal payloads into UTF-16 code units.
//!
//! Given the bytes between the quotes of a JSON string literal (already
//! located by a surrounding structural scanner), [`decode`] validates UTF-8
//! well-formedness and interprets backslash escapes (including `\uXXXX`
//! surrogate pairs) in a single linear pass, writing UTF-16 code units into a
//! caller-supplied buffer. There is no backtracking and no allocation; all
//! state lives on the stack of one call, so concurrent calls on disjoint
//! buffers need no synchronization.
//!
//! The decoder rejects, with a precise [`ErrorKind`], every class of
//! adversarial input: overlong encodings, bytes encoding surrogate
//! codepoints or values above U+10FFFF, truncated multi-byte sequences,
//! malformed or truncated escapes, and unpaired surrogate escapes.
//!
//! ```
//! use unescape16::decode;
//!
//! let src = b"caf\xC3\xA9";
//! let mut dest = [0u16; 8];
//! let mut written = 0;
//! decode(&mut dest, &mut written, src).unwrap();
//! assert_eq!(&dest[..written], &[0x63, 0x61, 0x66, 0xE9]);
//! ```
//!
//! Structural JSON parsing (objects, arrays, numbers, whitespace) is out of
//! scope: the caller locates the quoted span and maps the result of this
//! primitive into its own parse outcome.

#![no_std]

#[cfg(test)]
extern crate alloc;
#[cfg(test)]
extern crate std;

mod decoder;
mod error;
mod options;
mod utf8;

#[cfg(test)]
mod tests;

pub use decoder::{decode, decode_with};
pub use error::{DecodeError, ErrorKind};
pub use options::DecodeOptions;
