//! Incremental UTF-8 validation and decoding.
//!
//! This is Bjoern Hoehrmann's table-driven DFA
//! (<http://bjoern.hoehrmann.de/utf-8/decoder/dfa/>): each byte is mapped to
//! one of twelve classes, and a transition table maps (state, class) to the
//! next state. The classes split the lead-byte ranges finely enough that
//! overlong encodings, encoded surrogate codepoints, and codepoints above
//! U+10FFFF all land in [`REJECT`] without any per-codepoint range checks.
//!
//! The test module keeps an explicit range/case rendition of the same
//! automaton and checks it against the tables for every (state, byte) pair.
//! The two must stay equivalent; the tables are the production form.

/// All bytes of a codepoint have been consumed; the accumulator is complete.
pub(crate) const ACCEPT: u8 = 0;

/// The input is ill-formed. Terminal: every transition out of `REJECT` stays
/// in `REJECT`.
pub(crate) const REJECT: u8 = 12;

// Byte classes. ASCII is 0; continuation bytes split into three classes
// (0x80-8F, 0x90-9F, 0xA0-BF) so that the E0/ED/F0/F4 lead bytes can
// restrict which continuations they accept; 0xC0, 0xC1 and 0xF5-0xFF can
// start nothing valid.
#[rustfmt::skip]
const BYTE_CLASS: [u8; 256] = [
     0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
     0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
     0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
     0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
     0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
     0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
     0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
     0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
     1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
     9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9,
     7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7,
     7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7,
     8, 8, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2,
     2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2,
    10, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 4, 3, 3,
    11, 6, 6, 6, 5, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8,
];

// State transition table, indexed by `state + class`. States are multiples
// of 12 so a state doubles as its own row offset. The intermediate states
// encode how many continuation bytes are still owed and which continuation
// classes the current lead byte permits.
#[rustfmt::skip]
const TRANSITION: [u8; 108] = [
     0,12,24,36,60,96,84,12,12,12,48,72,
    12,12,12,12,12,12,12,12,12,12,12,12,
    12, 0,12,12,12,12,12, 0,12, 0,12,12,
    12,24,12,12,12,12,12,24,12,24,12,12,
    12,12,12,12,12,12,12,24,12,12,12,12,
    12,24,12,12,12,12,12,12,12,24,12,12,
    12,12,12,12,12,12,12,36,12,36,12,12,
    12,36,12,12,12,12,12,36,12,36,12,12,
    12,36,12,12,12,12,12,12,12,12,12,12,
];

/// Outcome of feeding one byte to the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Utf8Step {
    /// A codepoint is complete.
    Complete(u32),
    /// More continuation bytes are owed.
    Pending,
    /// The sequence is ill-formed. Permanent for this decoder instance.
    Invalid,
}

/// One in-flight UTF-8 sequence: the DFA state plus the codepoint bits
/// accumulated so far. The accumulator is meaningful only between the bytes
/// of a single sequence.
#[derive(Debug)]
pub(crate) struct Utf8Decoder {
    state: u8,
    codepoint: u32,
}

impl Utf8Decoder {
    pub(crate) fn new() -> Self {
        Self {
            state: ACCEPT,
            codepoint: 0,
        }
    }

    /// Consumes one byte. On a lead byte the accumulator is seeded with the
    /// byte's data bits (the class value doubles as the mask width); on a
    /// continuation byte the low six bits are shifted in.
    #[inline]
    pub(crate) fn step(&mut self, byte: u8) -> Utf8Step {
        let class = BYTE_CLASS[usize::from(byte)];
        self.codepoint = if self.state == ACCEPT {
            u32::from(byte) & (0xFF >> class)
        } else {
            (self.codepoint << 6) | u32::from(byte & 0x3F)
        };
        self.state = TRANSITION[usize::from(self.state + class)];
        match self.state {
            ACCEPT => Utf8Step::Complete(self.codepoint),
            REJECT => Utf8Step::Invalid,
            _ => Utf8Step::Pending,
        }
    }

    /// True when no sequence is in flight: the decoder is between
    /// codepoints, not mid-sequence and not rejected.
    #[inline]
    pub(crate) fn is_accept(&self) -> bool {
        self.state == ACCEPT
    }
}
