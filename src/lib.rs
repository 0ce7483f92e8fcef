//! Streaming FASTA and FASTQ record parsers, plus DNA to RNA transcription.
//!
//! Both parsers expect every sequence (and every quality string) on a single
//! line. Input is scanned line by line through a growable buffer, so files of
//! any size can be parsed without loading them into memory.
//!
//! # Parsing a file
//!
//! A [`Parser`](Parser) only stores the path of the file and some buffer
//! configuration. Each iteration opens the file anew and yields owned records
//! one at a time:
//!
//! ```no_run
//! use seqparser::prelude::*;
//! use seqparser::fasta;
//!
//! let parser = fasta::Parser::new("seqs.fasta");
//!
//! for record in &parser {
//!     let record = record.expect("Error reading record");
//!     println!("{}: {} bp", record.id(), record.seq().len());
//! }
//! ```
//!
//! FASTQ works the same way, records additionally carry the quality line:
//!
//! ```no_run
//! use seqparser::prelude::*;
//! use seqparser::fastq;
//!
//! let parser = fastq::Parser::new("seqs.fastq");
//! let records: Result<Vec<_>, _> = parser.records().collect();
//! ```
//!
//! # Reading from other sources
//!
//! [`Reader`](Reader) drives the same parsing logic over any `io::Read`
//! instance. The name given to the reader is used in error messages:
//!
//! ```rust
//! use seqparser::prelude::*;
//! use seqparser::fastq;
//!
//! let seq = b"@id1 some description
//! ACGT
//! +
//! IIII
//! ";
//!
//! let mut reader = fastq::Reader::new(&seq[..], "<memory>");
//! let rec = reader.next().unwrap().unwrap();
//! assert_eq!(rec.id(), "id1");
//! assert_eq!(rec.desc(), Some("some description"));
//! assert_eq!(rec.opt_qual(), Some("IIII"));
//! assert!(reader.next().is_none());
//! ```
//!
//! # Errors
//!
//! Blank lines are never allowed, and a pass over input without a single
//! record is an error as well ([`ErrorKind::EmptyInput`](ErrorKind::EmptyInput)).
//! After an error, the iterator is exhausted and the underlying file is
//! closed.
//!
//! # Transcription
//!
//! ```rust
//! use seqparser::{transcribe, reverse_transcribe};
//!
//! assert_eq!(transcribe("ATCGCCT", false).unwrap(), "UAGCGGA");
//! assert_eq!(reverse_transcribe("ATCGCCT").unwrap(), "AGGCGAU");
//! ```

extern crate buffer_redux;
extern crate memchr;

#[macro_use]
extern crate log;

#[macro_use]
extern crate serde_derive;
extern crate serde;

pub mod core;
mod error;
pub mod fasta;
pub mod fastq;
pub mod policy;
mod position;
pub mod prelude;
mod reader;
mod record;
mod transcribe;

pub use crate::error::*;
pub use crate::position::*;
pub use crate::reader::*;
pub use crate::record::*;
pub use crate::transcribe::*;
