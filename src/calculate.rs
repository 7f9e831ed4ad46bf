//! Houses the `run` and `write_combinations` functions
//!
use anyhow::{bail, Result};
use std::io;

use crate::combinations::{combination_count, Combinations};
use crate::input::{decode_if_utf16, read_all, Lines};

/// Past this many input lines the output has more than 2^24 lines, which is
/// worth a warning.
const LOTS_OF_LINES: usize = 24;

/// Reads all of `input`, then writes every combination of its lines to `out`.
/// The input is read to exhaustion before anything is written.
pub fn run(input: impl io::Read, out: impl io::Write) -> Result<()> {
    let contents = decode_if_utf16(read_all(input)?);
    let lines = Lines::from_bytes(&contents);
    log::info!("read {} bytes, {} lines", contents.len(), lines.len());
    write_combinations(&lines, out)
}

/// Writes one line to `out` for each non-empty subset of `lines`, in
/// `Combinations` order. Each output line is the selected input lines, in
/// input order, joined by single spaces and terminated by `\n`.
///
/// * An input line containing a space looks the same, once joined, as two
///   separate lines would; the output isn't meant to be split apart again.
/// * A Byte Order Mark at the start of the input belongs to the first line,
///   and is printed wherever that line is.
pub fn write_combinations(lines: &Lines, mut out: impl io::Write) -> Result<()> {
    let n = lines.len();
    match combination_count(n) {
        Some(count) => {
            log::info!("printing {count} combinations of {n} lines");
            if n > LOTS_OF_LINES {
                log::warn!("{n} input lines will produce {count} output lines");
            }
        }
        None => log::warn!("{n} input lines will produce more than 2^128 output lines"),
    }

    for subset in Combinations::new(n) {
        log::trace!("subset {:?}", subset.indices());
        let mut separator: &[u8] = b"";
        for &index in subset.indices() {
            let Some(line) = lines.get(index) else {
                bail!("Internal error: subset index {index} out of range for {n} lines");
            };
            out.write_all(separator)?;
            out.write_all(line)?;
            separator = b" ";
        }
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}

#[allow(clippy::pedantic)]
#[cfg(test)]
mod test {
    use super::*;
    use bstr::ByteSlice;
    use itertools::Itertools;

    fn calc(input: &[u8]) -> String {
        let mut answer = Vec::new();
        run(input, &mut answer).unwrap();
        String::from_utf8(answer).unwrap()
    }

    #[test]
    fn foo_bar_baz() {
        let expected = "foo\nbar\nbaz\nfoo bar\nfoo baz\nbar baz\nfoo bar baz\n";
        assert_eq!(calc(b"foo\nbar\nbaz\n"), expected);
        assert_eq!(calc(b"foo\nbar\nbaz"), expected);
        assert_eq!(calc(b"foo \r\nbar\t\r\nbaz\r\n"), expected);
    }

    #[test]
    fn two_lines() {
        assert_eq!(calc(b"a\nb\n"), "a\nb\na b\n");
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert_eq!(calc(b""), "");
    }

    #[test]
    fn a_single_blank_line_gives_a_single_blank_line() {
        assert_eq!(calc(b"\n"), "\n");
        assert_eq!(calc(b"   \n"), "\n");
    }

    #[test]
    fn blank_lines_are_joined_like_any_other() {
        assert_eq!(calc(b"a\n\n"), "a\n\na \n");
        assert_eq!(calc(b"\nb\n"), "\nb\n b\n");
    }

    #[test]
    fn duplicate_lines_are_not_merged() {
        assert_eq!(calc(b"x\nx\n"), "x\nx\nx x\n");
    }

    #[test]
    fn lines_with_spaces_are_joined_verbatim() {
        assert_eq!(calc(b"a b\nc\n"), "a b\nc\na b c\n");
    }

    #[test]
    fn bom_goes_wherever_the_first_line_goes() {
        let input = "\u{FEFF}x\ny\n";
        assert_eq!(calc(input.as_bytes()), "\u{FEFF}x\ny\n\u{FEFF}x y\n");
        assert_eq!(calc("\u{FEFF}".as_bytes()), "\u{FEFF}\n");
    }

    #[test]
    fn information_separators_are_stripped_like_spaces() {
        assert_eq!(calc(b"a\x1c\nb\n"), "a\nb\na b\n");
    }

    #[test]
    fn utf16_input_is_printed_as_utf8() {
        let mut input = b"\xff\xfe".to_vec();
        for b in b"p\nq\n" {
            input.push(*b);
            input.push(0);
        }
        assert_eq!(calc(&input), "\u{FEFF}p\nq\n\u{FEFF}p q\n");
    }

    #[test]
    fn non_utf8_bytes_pass_through() {
        let mut answer = Vec::new();
        run(&b"\xff\n\xfe\n"[..], &mut answer).unwrap();
        assert_eq!(answer, b"\xff\n\xfe\n\xff \xfe\n");
    }

    #[test]
    fn line_count_is_two_to_the_n_minus_one() {
        for n in 0..=10 {
            let input: String = (0..n).map(|i| format!("L{i}\n")).collect();
            let output = calc(input.as_bytes());
            assert_eq!(output.lines().count(), (1 << n) - 1, "for n = {n}");
        }
    }

    #[test]
    fn splitting_the_output_recovers_the_power_set() {
        let words = ["alpha", "beta", "gamma", "delta", "epsilon"];
        let input = words.iter().map(|w| format!("{w}\n")).collect::<String>();
        let output = calc(input.as_bytes());

        let sizes: Vec<usize> = output.lines().map(|l| l.split(' ').count()).collect();
        assert!(sizes.windows(2).all(|w| w[0] <= w[1]));

        let recovered: Vec<Vec<&str>> = output.lines().map(|l| l.split(' ').collect()).collect();
        let expected: Vec<Vec<&str>> = words.iter().copied().powerset().skip(1).collect();
        assert_eq!(recovered, expected);
    }

    #[test]
    fn output_is_repeatable() {
        let input = b"one\ntwo\nthree\nfour\n";
        assert_eq!(calc(input), calc(input));
    }

    #[test]
    fn write_errors_are_reported() {
        struct Broken;
        impl io::Write for Broken {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }
        let err = run(&b"a\nb\n"[..], Broken).unwrap_err();
        let io_err = err.downcast_ref::<io::Error>().unwrap();
        assert_eq!(io_err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn huge_inputs_start_printing_instead_of_failing() {
        struct Limited(Vec<u8>);
        impl io::Write for Limited {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                if self.0.len() >= 1024 {
                    return Err(io::Error::new(io::ErrorKind::BrokenPipe, "enough"));
                }
                self.0.extend_from_slice(buf);
                Ok(buf.len())
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }
        let input: String = (0..130).map(|i| format!("L{i}\n")).collect();
        let lines = Lines::from_bytes(input.as_bytes());
        let mut out = Limited(Vec::new());
        let err = write_combinations(&lines, &mut out).unwrap_err();
        assert!(err.downcast_ref::<io::Error>().is_some());
        assert!(out.0.starts_with(b"L0\nL1\nL2\n"));
    }

    #[test]
    fn lines_struct_can_be_used_directly() {
        let lines = Lines::from_bytes(b"q\nr\n");
        let mut answer = Vec::new();
        write_combinations(&lines, &mut answer).unwrap();
        assert_eq!(answer.to_str().unwrap(), "q\nr\nq r\n");
    }
}
