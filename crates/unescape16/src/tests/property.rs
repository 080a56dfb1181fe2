use alloc::{string::String, vec, vec::Vec};

use quickcheck::{QuickCheck, TestResult};

use crate::{DecodeOptions, decode, decode_with};

/// UTF-16 re-encoding of `text`, surrogate pairs included, via the standard
/// library.
fn reference_units(text: &str) -> Vec<u16> {
    text.encode_utf16().collect()
}

/// Independent scalar-by-scalar decode of `bytes` via `bstr`, re-encoded to
/// UTF-16. Returns `None` if any sequence is invalid.
fn bstr_reference_units(bytes: &[u8]) -> Option<Vec<u16>> {
    let mut units = Vec::new();
    let mut rest = bytes;
    while !rest.is_empty() {
        let (ch, len) = bstr::decode_utf8(rest);
        let ch = ch?;
        let mut buf = [0u16; 2];
        units.extend_from_slice(ch.encode_utf16(&mut buf));
        rest = &rest[len..];
    }
    Some(units)
}

/// Property: escape-free well-formed UTF-8 decodes to the same unit sequence
/// a reference decoder produces.
#[test]
fn escape_free_text_matches_reference() {
    fn prop(s: String) -> bool {
        let text: String = s.chars().filter(|&c| c != '\\').collect();
        let mut dest = vec![0u16; text.len()];
        let mut written = 0;
        decode(&mut dest, &mut written, text.as_bytes()).is_ok()
            && dest[..written] == reference_units(&text)[..]
    }
    QuickCheck::new().quickcheck(prop as fn(String) -> bool);
}

/// Property: for arbitrary byte inputs, success or failure, the number of
/// units written never exceeds the input byte length. This is what justifies
/// the caller's buffer-sizing precondition.
#[test]
fn output_never_exceeds_input_length() {
    fn prop(bytes: Vec<u8>) -> bool {
        let mut dest = vec![0u16; bytes.len()];
        let mut written = 0;
        let _ = decode(&mut dest, &mut written, &bytes);
        written <= bytes.len()
    }
    QuickCheck::new().quickcheck(prop as fn(Vec<u8>) -> bool);
}

/// Property: on escape-free input the decoder accepts exactly the inputs the
/// standard library considers well-formed UTF-8.
#[test]
fn acceptance_agrees_with_std_validation() {
    fn prop(bytes: Vec<u8>) -> TestResult {
        if bytes.contains(&b'\\') {
            return TestResult::discard();
        }
        let mut dest = vec![0u16; bytes.len()];
        let mut written = 0;
        let accepted = decode(&mut dest, &mut written, &bytes).is_ok();
        TestResult::from_bool(accepted == core::str::from_utf8(&bytes).is_ok())
    }
    QuickCheck::new().quickcheck(prop as fn(Vec<u8>) -> TestResult);
}

/// Property: accepted escape-free input matches an independent (`bstr`)
/// decode, not just the standard library's.
#[test]
fn decoded_units_match_bstr_reference() {
    fn prop(bytes: Vec<u8>) -> TestResult {
        if bytes.contains(&b'\\') {
            return TestResult::discard();
        }
        let mut dest = vec![0u16; bytes.len()];
        let mut written = 0;
        if decode(&mut dest, &mut written, &bytes).is_err() {
            return TestResult::discard();
        }
        match bstr_reference_units(&bytes) {
            Some(expected) => TestResult::from_bool(dest[..written] == expected[..]),
            None => TestResult::failed(),
        }
    }
    QuickCheck::new().quickcheck(prop as fn(Vec<u8>) -> TestResult);
}

/// Property: on ASCII input the assume-ASCII fast path and the full decoder
/// agree on both status and output.
#[test]
fn ascii_fast_path_agrees_with_full_decoder() {
    fn prop(bytes: Vec<u8>) -> bool {
        let ascii: Vec<u8> = bytes.iter().map(|b| b & 0x7F).collect();

        let mut full_dest = vec![0u16; ascii.len()];
        let mut full_written = 0;
        let full = decode(&mut full_dest, &mut full_written, &ascii);

        let options = DecodeOptions { assume_ascii: true };
        let mut fast_dest = vec![0u16; ascii.len()];
        let mut fast_written = 0;
        let fast = decode_with(&mut fast_dest, &mut fast_written, &ascii, &options);

        full == fast
            && full_written == fast_written
            && full_dest[..full_written] == fast_dest[..fast_written]
    }
    QuickCheck::new().quickcheck(prop as fn(Vec<u8>) -> bool);
}
