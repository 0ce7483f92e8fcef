//! FASTQ reading and writing
//!
//! # Example
//!
//! ```rust
//! use seqparser::prelude::*;  // needed to import necessary traits
//! use seqparser::fastq::Reader;
//!
//! # fn main() {
//! let seq = b"@id1 some description
//! SEQUENCE
//! +
//! IIIIIIII
//! @id2
//! SEQUENCE
//! +
//! IIIIIIII
//! ";
//!
//! let reader = Reader::new(&seq[..], "<memory>");
//!
//! // We'll write the records back to this vector
//! let mut output = vec![];
//!
//! for result in reader {
//!     let rec = result.unwrap();
//!     println!("ID: {}, description: {:?}", rec.id(), rec.desc());
//!     println!("seq:  {}", rec.seq());
//!     println!("qual: {}", rec.qual());
//!     rec.write(&mut output).unwrap();
//! }
//!
//! // The output is identical
//! assert_eq!(&seq[..], output.as_slice());
//! # }
//! ```
//!
//! # Details on parsing
//!
//! * Every line is trimmed of surrounding whitespace before it is
//!   interpreted. LF and CRLF line endings are accepted.
//! * Lines starting with `@` are headers, their content (without `@`) is
//!   remembered for the following records.
//! * Lines consisting of exactly `+` are skipped. A separator with
//!   additional content (`+id`) is *not* recognized and taken as data.
//! * The remaining lines alternate between sequence and quality. A record
//!   is returned with every quality line.
//! * A sequence line without a following quality line at the end of the
//!   input is silently dropped.
//! * Empty lines are not allowed anywhere, an error of the kind
//!   [`ErrorKind::BlankLine`](crate::ErrorKind::BlankLine) is returned.
//! * Sequence and quality lengths are not compared while parsing. Use
//!   [`OwnedRecord::check_lengths()`](OwnedRecord::check_lengths) for that.
mod assembler;
mod record;
mod write;

pub use self::assembler::*;
pub use self::record::*;
pub use self::write::*;

/// FASTQ parser over an arbitrary `io::Read` instance
pub type Reader<R, P = crate::policy::StdPolicy> = crate::Reader<R, Assembler, P>;

/// FASTQ file parser configuration
pub type Parser<P = crate::policy::StdPolicy> = crate::Parser<Assembler, P>;

/// Iterator over FASTQ file records
pub type Records<'p, P = crate::policy::StdPolicy> = crate::Records<'p, Assembler, P>;
