//! Runtime configuration for the decoder.

/// Configuration options for string decoding.
///
/// # Examples
///
/// ```rust
/// use unescape16::{DecodeOptions, decode_with};
///
/// let options = DecodeOptions { assume_ascii: true };
/// let mut dest = [0u16; 2];
/// let mut written = 0;
/// decode_with(&mut dest, &mut written, br"a\n", &options).unwrap();
/// assert_eq!(&dest[..written], &[0x61, 0x0A]);
/// ```
///
/// # Default
///
/// All options default to `false`.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecodeOptions {
    /// Whether the source is known to be pure ASCII.
    ///
    /// When `true`, the UTF-8 decoder is bypassed: any byte at or above
    /// 0x80 outside an escape sequence fails with
    /// [`ErrorKind::MalformedUtf8`](crate::ErrorKind::MalformedUtf8).
    /// Escape sequences, which are ASCII by construction, are interpreted
    /// as usual.
    ///
    /// # Default
    ///
    /// `false`
    pub assume_ascii: bool,
}
