//! Provides `read_all`, which slurps the input stream, `decode_if_utf16`,
//! which translates UTF-16 input to UTF-8, and the `Lines` structure, which
//! splits the (UTF-8 or unknown-encoding) bytes into trailing-whitespace
//! stripped lines.
use anyhow::{Context, Result};
use bstr::ByteSlice;
use memchr::memchr;
use std::io::Read;

/// Read `reader` to exhaustion. A closed or empty stream gives an empty `Vec`.
pub fn read_all(mut reader: impl Read) -> Result<Vec<u8>> {
    let mut contents = Vec::new();
    reader.read_to_end(&mut contents).context("Can't read standard input")?;
    Ok(contents)
}

/// Decode UTF-16 to UTF-8 if we see a UTF-16 Byte Order Mark at the beginning of `candidate`.
/// Otherwise return `candidate` unchanged
#[must_use]
pub fn decode_if_utf16(candidate: Vec<u8>) -> Vec<u8> {
    // `decode_without_bom_handling` changes malformed sequences to the Unicode
    // REPLACEMENT CHARACTER, and translates the UTF-16 BOM to a UTF-8 BOM.
    if let Some((enc, _)) = encoding_rs::Encoding::for_bom(&candidate) {
        if [encoding_rs::UTF_16LE, encoding_rs::UTF_16BE].contains(&enc) {
            log::info!("input has a {} byte order mark, translating to UTF-8", enc.name());
            let (translated, _had_malformed_sequences) =
                enc.decode_without_bom_handling(&candidate);
            return translated.into_owned().into_bytes();
        }
    }
    return candidate;
}

/// The input lines, in order, each borrowed from the input buffer with its
/// line terminator and any other trailing whitespace removed.
/// * Lines are byte strings: bytes that aren't valid UTF-8 pass through as is.
/// * A leading Byte Order Mark stays part of the first line, so it shows up
///   in every combination that includes that line.
#[derive(Debug)]
pub struct Lines<'data> {
    lines: Vec<&'data [u8]>,
}

impl<'data> Lines<'data> {
    /// Split `slice` on `\n`. A last line without a terminating `\n` is still
    /// a line, but a terminating `\n` doesn't start a new (empty) line.
    #[must_use]
    pub fn from_bytes(mut slice: &'data [u8]) -> Self {
        let mut lines = Vec::new();
        while let Some(end) = memchr(b'\n', slice) {
            let (line, rest) = slice.split_at(end);
            slice = &rest[1..];
            lines.push(line.trim_end_with(is_trailing_space));
        }
        if !slice.is_empty() {
            lines.push(slice.trim_end_with(is_trailing_space));
        }
        Lines { lines }
    }

    /// The number of input lines
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Was the input empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The line at (zero-based) position `index`
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&'data [u8]> {
        self.lines.get(index).copied()
    }
}

/// Unicode `White_Space`, plus the ASCII information separators U+001C..U+001F
fn is_trailing_space(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}
