//! Decode failure reporting.

use thiserror::Error;

/// A terminal decode failure: the reason plus the byte offset, relative to
/// the start of the source span, at which it was detected.
///
/// For truncation errors the offset is the source length. Output already
/// written before the failure point stays in the destination buffer and the
/// output cursor reflects it; it is not a complete result.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("{kind} at byte {offset}")]
pub struct DecodeError {
    /// What went wrong.
    pub kind: ErrorKind,
    /// Byte offset of the offending byte within the source span.
    pub offset: usize,
}

impl DecodeError {
    pub(crate) fn new(kind: ErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }
}

/// The reason a decode failed. Kinds are mutually exclusive; the first
/// violation detected wins and nothing is retried or resynchronized.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    /// An ill-formed UTF-8 sequence: an overlong encoding, an invalid lead
    /// or continuation byte, a codepoint above U+10FFFF, or a directly
    /// encoded surrogate codepoint.
    #[error("malformed UTF-8 sequence")]
    MalformedUtf8,

    /// The input ended while continuation bytes of a multi-byte UTF-8
    /// sequence were still owed.
    #[error("truncated UTF-8 sequence at end of input")]
    TruncatedUtf8,

    /// The byte after a backslash is not one of `"` `\` `/` `b` `f` `n` `r`
    /// `t` `u`. Carries the offending byte.
    #[error("invalid escape character 0x{0:02X}")]
    InvalidEscape(u8),

    /// A byte inside a `\uXXXX` escape is not an ASCII hex digit. Carries
    /// the offending byte.
    #[error("invalid hex digit 0x{0:02X} in unicode escape")]
    InvalidHexDigit(u8),

    /// A high surrogate escape not followed by a low surrogate escape, or a
    /// low surrogate escape with no preceding high surrogate. Carries the
    /// surrogate unit that could not be paired.
    #[error("unpaired surrogate U+{0:04X}")]
    UnpairedSurrogate(u16),

    /// The input ended inside an escape sequence: right after the
    /// backslash, mid-hex-collection, or while the second `\u` of a
    /// surrogate pair was still expected.
    #[error("truncated escape sequence at end of input")]
    TruncatedEscape,
}
