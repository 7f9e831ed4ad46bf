//! The `run` function is the kernel of the application: it reads every line
//! of its input, then prints each non-empty combination of those lines. The
//! `args` module parses the command line, the `input` module hides input
//! details, and the `combinations` module enumerates the subsets to print.
//!
//! Current Limitations:
//! * A "line" is zero or more non-newline bytes followed by a newline (or by
//!   the end of input). A lone `\r` doesn't end a line.
//! * `n` lines produce `2^n - 1` output lines, so anything past a few dozen
//!   lines of input will take longer than anyone wants to wait.

#![deny(unused_must_use)]
#![deny(clippy::all)]
#![allow(clippy::needless_return)]
#![deny(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![deny(missing_docs)]

pub mod args;
pub mod calculate;
pub mod combinations;
pub mod input;
pub mod subset;

pub use calculate::{run, write_combinations};
pub use combinations::{combination_count, Combinations};
pub use input::Lines;
pub use subset::Subset;
