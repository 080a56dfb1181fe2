//! Black-box fuzzing of the string decoder: for arbitrary payload bytes and
//! options, the decoder must never panic with a correctly sized buffer,
//! never write more units than input bytes, and must agree with a reference
//! decode on accepted escape-free input.
#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use unescape16::{DecodeOptions, decode_with};

#[derive(Arbitrary, Debug)]
struct Input {
    assume_ascii: bool,
    data: Vec<u8>,
}

fuzz_target!(|input: Input| {
    let Input { assume_ascii, data } = input;
    let options = DecodeOptions { assume_ascii };

    let mut dest = vec![0u16; data.len()];
    let mut written = 0;
    let result = decode_with(&mut dest, &mut written, &data, &options);

    assert!(written <= data.len(), "wrote {written} units from {} bytes", data.len());

    if result.is_ok() && !data.contains(&b'\\') {
        let text = std::str::from_utf8(&data).expect("accepted input must be well-formed UTF-8");
        let expected: Vec<u16> = text.encode_utf16().collect();
        assert_eq!(&dest[..written], &expected[..]);
    }
});
