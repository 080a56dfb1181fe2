//! The escape interpreter and the transducer loop driving it together with
//! the UTF-8 decoder over one string literal's payload bytes.
//!
//! Two state machines share one byte cursor and one output cursor. Outside
//! an escape, bytes belong to the UTF-8 decoder; from the backslash onward
//! they belong to the escape interpreter and are read directly as ASCII. A
//! byte is owned by exactly one machine at a time, so the decoder is never
//! mid-UTF-8-sequence while an escape is open.

use crate::{
    error::{DecodeError, ErrorKind},
    options::DecodeOptions,
    utf8::{Utf8Decoder, Utf8Step},
};

const HIGH_SURROGATES: core::ops::RangeInclusive<u16> = 0xD800..=0xDBFF;
const LOW_SURROGATES: core::ops::RangeInclusive<u16> = 0xDC00..=0xDFFF;

/// Escape interpreter state. `None` outside an escape; the other variants
/// track progress through one escape sequence, including the mandatory
/// `\uXXXX` low half after a high surrogate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Escape {
    None,
    /// Saw a backslash; the next byte selects the escape form.
    Begin,
    /// Collecting the four hex digits of a `\uXXXX` escape. `pairing` is
    /// set while collecting the low half of a surrogate pair.
    Hex { unit: u16, digits: u8, pairing: bool },
    /// A high surrogate was emitted; the next byte must be `\`.
    PairBackslash(u16),
    /// A high surrogate was emitted and `\` consumed; the next byte must
    /// be `u`.
    PairU(u16),
}

/// Output cursor over the caller's destination buffer. Writes are bounds
/// checked by the slice index, so an undersized buffer panics rather than
/// overrunning.
struct Sink<'a> {
    dest: &'a mut [u16],
    written: usize,
}

impl Sink<'_> {
    #[inline]
    fn push(&mut self, unit: u16) {
        self.dest[self.written] = unit;
        self.written += 1;
    }
}

#[inline]
fn hex_value(byte: u8) -> Option<u16> {
    match byte {
        b'0'..=b'9' => Some(u16::from(byte - b'0')),
        b'a'..=b'f' => Some(u16::from(byte - b'a') + 10),
        b'A'..=b'F' => Some(u16::from(byte - b'A') + 10),
        _ => None,
    }
}

/// Decodes the payload bytes of a JSON string literal into UTF-16 code
/// units, with default options.
///
/// `src` is the byte span between (and excluding) the quotes. Decoded units
/// are written to `dest` starting at `*dest_offset`; on return, success or
/// failure, `*dest_offset` is the total count of units written so far, which
/// lets a caller fill one buffer across several literals. On failure the
/// units written before the failure point remain in place and are not
/// rewound, but do not form a complete result.
///
/// One input byte yields at most one output unit (a surrogate pair costs at
/// least four input bytes), so `src.len()` units of headroom always suffice.
///
/// # Errors
///
/// Returns the first violation encountered; see [`ErrorKind`] for the
/// possible reasons. All errors are terminal for the call.
///
/// # Panics
///
/// Panics if `dest.len() < *dest_offset + units`, where `units` is the
/// number of code units the input decodes to. Sizing `dest` with at least
/// `*dest_offset + src.len()` units always satisfies this.
///
/// # Examples
///
/// ```
/// use unescape16::decode;
///
/// let src = br"tab\there \uD83D\uDE00";
/// let mut dest = [0u16; 32];
/// let mut written = 0;
/// decode(&mut dest, &mut written, src).unwrap();
/// assert_eq!(
///     String::from_utf16(&dest[..written]).unwrap(),
///     "tab\there \u{1F600}",
/// );
/// ```
pub fn decode(dest: &mut [u16], dest_offset: &mut usize, src: &[u8]) -> Result<(), DecodeError> {
    decode_with(dest, dest_offset, src, &DecodeOptions::default())
}

/// Decodes the payload bytes of a JSON string literal into UTF-16 code
/// units.
///
/// Identical to [`decode`] but with explicit [`DecodeOptions`]; see there
/// for the full contract.
///
/// # Errors
///
/// Returns the first violation encountered; see [`ErrorKind`].
///
/// # Panics
///
/// Panics if `dest` is too small, as described for [`decode`].
pub fn decode_with(
    dest: &mut [u16],
    dest_offset: &mut usize,
    src: &[u8],
    options: &DecodeOptions,
) -> Result<(), DecodeError> {
    let mut sink = Sink {
        dest,
        written: *dest_offset,
    };
    let result = run(&mut sink, src, options);
    // Written back on every exit: the cursor reflects units emitted before
    // a failure point and is never rewound.
    *dest_offset = sink.written;
    result
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "codepoint casts are range-checked before truncation"
)]
fn run(sink: &mut Sink<'_>, src: &[u8], options: &DecodeOptions) -> Result<(), DecodeError> {
    let mut utf8 = Utf8Decoder::new();
    let mut escape = Escape::None;

    for (offset, &byte) in src.iter().enumerate() {
        match escape {
            Escape::None => {
                let codepoint = if options.assume_ascii {
                    if byte >= 0x80 {
                        return Err(DecodeError::new(ErrorKind::MalformedUtf8, offset));
                    }
                    u32::from(byte)
                } else {
                    match utf8.step(byte) {
                        Utf8Step::Complete(codepoint) => codepoint,
                        Utf8Step::Pending => continue,
                        Utf8Step::Invalid => {
                            return Err(DecodeError::new(ErrorKind::MalformedUtf8, offset));
                        }
                    }
                };
                if codepoint == u32::from(b'\\') {
                    escape = Escape::Begin;
                } else if codepoint <= 0xFFFF {
                    // The byte classifier rejects encoded surrogates, so a
                    // raw codepoint in this range is always a valid unit.
                    sink.push(codepoint as u16);
                } else {
                    sink.push((0xD7C0 + (codepoint >> 10)) as u16);
                    sink.push((0xDC00 + (codepoint & 0x3FF)) as u16);
                }
            }
            Escape::Begin => {
                escape = match byte {
                    b'"' | b'\\' | b'/' => {
                        sink.push(u16::from(byte));
                        Escape::None
                    }
                    b'b' => {
                        sink.push(0x08);
                        Escape::None
                    }
                    b'f' => {
                        sink.push(0x0C);
                        Escape::None
                    }
                    b'n' => {
                        sink.push(0x0A);
                        Escape::None
                    }
                    b'r' => {
                        sink.push(0x0D);
                        Escape::None
                    }
                    b't' => {
                        sink.push(0x09);
                        Escape::None
                    }
                    b'u' => Escape::Hex {
                        unit: 0,
                        digits: 0,
                        pairing: false,
                    },
                    _ => return Err(DecodeError::new(ErrorKind::InvalidEscape(byte), offset)),
                };
            }
            Escape::Hex {
                unit,
                digits,
                pairing,
            } => {
                let Some(value) = hex_value(byte) else {
                    return Err(DecodeError::new(ErrorKind::InvalidHexDigit(byte), offset));
                };
                let unit = (unit << 4) | value;
                if digits < 3 {
                    escape = Escape::Hex {
                        unit,
                        digits: digits + 1,
                        pairing,
                    };
                    continue;
                }
                // Emitted before surrogate validation: a failed pairing
                // leaves this unit in the output ahead of the error.
                sink.push(unit);
                escape = if pairing {
                    if !LOW_SURROGATES.contains(&unit) {
                        return Err(DecodeError::new(ErrorKind::UnpairedSurrogate(unit), offset));
                    }
                    Escape::None
                } else if HIGH_SURROGATES.contains(&unit) {
                    Escape::PairBackslash(unit)
                } else if LOW_SURROGATES.contains(&unit) {
                    return Err(DecodeError::new(ErrorKind::UnpairedSurrogate(unit), offset));
                } else {
                    Escape::None
                };
            }
            Escape::PairBackslash(high) => {
                if byte != b'\\' {
                    return Err(DecodeError::new(ErrorKind::UnpairedSurrogate(high), offset));
                }
                escape = Escape::PairU(high);
            }
            Escape::PairU(high) => {
                if byte != b'u' {
                    return Err(DecodeError::new(ErrorKind::UnpairedSurrogate(high), offset));
                }
                escape = Escape::Hex {
                    unit: 0,
                    digits: 0,
                    pairing: true,
                };
            }
        }
    }

    if escape != Escape::None {
        return Err(DecodeError::new(ErrorKind::TruncatedEscape, src.len()));
    }
    if !utf8.is_accept() {
        return Err(DecodeError::new(ErrorKind::TruncatedUtf8, src.len()));
    }
    Ok(())
}
