//! Contains the buffered line reader shared by all parsers. Record
//! assemblers pull their input from [`LineReader`](LineReader), so the type
//! is part of the [`RecordAssembler`](crate::RecordAssembler) signature, but
//! most users will not need it directly.
mod lines;

pub use self::lines::*;
