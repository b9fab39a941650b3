//! Low-level input layer for the ku scanner.
//!
//! - [`SourceText`]: a whole source file (or string) held in memory
//! - [`ByteReader`]: one-byte-at-a-time reader over a borrowed buffer,
//!   with mark/slice support for cutting token literals out of the source
//!
//! The scanner in `ku_lexer` keeps two codes of lookahead on top of the
//! reader; [`LOOKAHEAD`] is that distance, and [`ByteReader::mark`] and
//! [`ByteReader::slice_from_mark`] correct for it.

mod byte_reader;
mod source;

pub use byte_reader::{ByteReader, Code, LOOKAHEAD};
pub use source::{SourceReadError, SourceReadErrorKind, SourceText};
