//! FASTA reading and writing
//!
//! # Example
//!
//! ```rust
//! use seqparser::prelude::*;  // needed to import necessary traits
//! use seqparser::fasta::Reader;
//!
//! # fn main() {
//! let seq = b">id1 some description
//! SEQUENCE
//! >id2
//! ANOTHER
//! ";
//!
//! let reader = Reader::new(&seq[..], "<memory>");
//!
//! // We'll write the records back to this vector
//! let mut output = vec![];
//!
//! for result in reader {
//!     let rec = result.unwrap();
//!     println!("ID: '{}', description: {:?}", rec.id(), rec.desc());
//!     println!("{}", rec.seq());
//!     rec.write(&mut output).unwrap();
//! }
//!
//! assert_eq!(&seq[..], output.as_slice());
//! # }
//! ```
//!
//! For reading files, [`Parser`](Parser) is usually more convenient.
//!
//! # Details on parsing
//!
//! * Every line is trimmed of surrounding whitespace before it is
//!   interpreted. Like all parsers in this crate, `fasta::Reader` handles
//!   UNIX (LF) and Windows (CRLF) line endings.
//! * Lines starting with `>` are headers. Their content (without `>`) is
//!   remembered, but no record is returned.
//! * Every other line is a complete sequence, returned together with the
//!   most recent header. Sequences wrapped over several lines are therefore
//!   returned as several records sharing the same header.
//! * Sequence lines before the first header are returned with an empty
//!   header.
//! * Empty lines are not allowed anywhere, an error of the kind
//!   [`ErrorKind::BlankLine`](crate::ErrorKind::BlankLine) is returned.
//! * Input without any sequence line results in
//!   [`ErrorKind::EmptyInput`](crate::ErrorKind::EmptyInput).
mod assembler;
mod record;
mod write;

pub use self::assembler::*;
pub use self::record::*;
pub use self::write::*;

/// FASTA parser over an arbitrary `io::Read` instance
pub type Reader<R, P = crate::policy::StdPolicy> = crate::Reader<R, Assembler, P>;

/// FASTA file parser configuration
pub type Parser<P = crate::policy::StdPolicy> = crate::Parser<Assembler, P>;

/// Iterator over FASTA file records
pub type Records<'p, P = crate::policy::StdPolicy> = crate::Records<'p, Assembler, P>;
