use crate::ErrorPosition;
use std::fmt;
use std::io;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum ErrorKind {
    /// `std::io::Error`, either from opening the input or from reading it.
    /// Lines that are not valid UTF-8 are reported with
    /// `std::io::ErrorKind::InvalidData`.
    Io(io::Error),
    /// An empty (or whitespace-only) line was found.
    BlankLine {
        /// Name of the input and 1-based number of the offending line.
        pos: ErrorPosition,
    },
    /// A full pass over the input did not produce a single record.
    EmptyInput {
        /// Name of the input
        name: String,
    },
    /// Sequence and quality lengths found to be different. This error is
    /// never returned by the parsers, only by
    /// [`fastq::OwnedRecord::check_lengths()`](crate::fastq::OwnedRecord::check_lengths).
    UnequalLengths {
        /// ID of the record
        id: String,
        /// Length of sequence
        seq: usize,
        /// Length of quality information
        qual: usize,
    },
    /// Size limit of buffer was reached, which happens if
    /// `policy::BufPolicy::grow_to()` returned `None` for a line that did
    /// not fit into the buffer. This does not happen with the default
    /// `StdPolicy`.
    BufferLimit,
}

impl ErrorKind {
    /// Returns the position for this error, if one exists.
    pub fn position(&self) -> Option<&ErrorPosition> {
        match self {
            ErrorKind::BlankLine { pos } => Some(pos),
            _ => None,
        }
    }
}

/// Parsing error
#[derive(Debug)]
pub struct Error {
    kind: Box<ErrorKind>,
}

impl Error {
    #[inline]
    pub fn new(kind: ErrorKind) -> Self {
        Error {
            kind: Box::new(kind),
        }
    }

    /// Returns a reference to the [`ErrorKind`](ErrorKind)
    /// associated with the error.
    #[inline]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Returns the [`ErrorKind`](ErrorKind) associated with
    /// the error, thereby consuming the error.
    #[inline]
    pub fn into_kind(self) -> ErrorKind {
        *self.kind
    }

    /// Returns the [`ErrorPosition`](ErrorPosition) of
    /// the error within the input, if known.
    #[inline]
    pub fn position(&self) -> Option<&ErrorPosition> {
        self.kind().position()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind() {
            ErrorKind::Io(ref e) => e.fmt(f),
            ErrorKind::BlankLine { pos } => write!(f, "Parse error: got an empty line ({})", pos),
            ErrorKind::EmptyInput { name } => {
                write!(f, "Parse error: input '{}' contains no records", name)
            }
            ErrorKind::UnequalLengths { id, seq, qual } => write!(
                f,
                "FASTQ error: sequence length is {}, but quality length is {} (record '{}')",
                seq, qual, id
            ),
            ErrorKind::BufferLimit => write!(f, "Parse error: Buffer limit reached"),
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Error {
        Error::new(ErrorKind::Io(e))
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Io(ref err) => Some(err),
            _ => None,
        }
    }
}
