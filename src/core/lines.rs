use std::fs::File;
use std::io::{self, BufRead};
use std::path::Path;
use std::str;

use memchr::memchr;

use crate::policy::{BufPolicy, StdPolicy};
use crate::{Error, ErrorKind, ErrorPosition};

/// The default initial buffer size for readers.
pub const BUFSIZE: usize = 64 * 1024;

/// Wraps `buffer_redux::BufReader` and hands out one line at a time,
/// trimmed of surrounding whitespace. The buffer grows according to a
/// [`BufPolicy`](crate::policy::BufPolicy) if a line does not fit.
///
/// Lines are numbered starting with 1. Line terminators may be UNIX-style
/// (`\n`) or Windows-style (`\r\n`), the last line does not need one.
pub struct LineReader<R, P = StdPolicy>
where
    R: io::Read,
{
    buf_reader: buffer_redux::BufReader<R>,
    buf_policy: P,
    name: String,
    // number of lines returned so far
    line_idx: u64,
    // length of the last returned line (including terminator),
    // consumed with the next call
    consumed: usize,
}

impl LineReader<File> {
    /// Opens a file, using its path as name.
    #[inline]
    pub fn from_path<F: AsRef<Path>>(path: F) -> io::Result<Self> {
        let path = path.as_ref();
        File::open(path).map(|f| LineReader::new(f, path.display().to_string()))
    }
}

impl<R> LineReader<R>
where
    R: io::Read,
{
    #[inline]
    pub fn new<S: Into<String>>(reader: R, name: S) -> Self {
        Self::with_capacity(reader, name, BUFSIZE)
    }

    /// Creates a line reader with a given initial buffer capacity. The
    /// minimum allowed capacity is 1.
    #[inline]
    pub fn with_capacity<S: Into<String>>(reader: R, name: S, capacity: usize) -> Self {
        assert!(capacity >= 1, "capacity smaller than 1");
        LineReader {
            buf_reader: buffer_redux::BufReader::with_capacity(capacity, reader),
            buf_policy: StdPolicy,
            name: name.into(),
            line_idx: 0,
            consumed: 0,
        }
    }
}

impl<R, P> LineReader<R, P>
where
    R: io::Read,
    P: BufPolicy,
{
    #[inline]
    pub fn set_policy<T: BufPolicy>(self, buf_policy: T) -> LineReader<R, T> {
        LineReader {
            buf_reader: self.buf_reader,
            buf_policy,
            name: self.name,
            line_idx: self.line_idx,
            consumed: self.consumed,
        }
    }

    #[inline]
    pub fn policy(&self) -> &P {
        &self.buf_policy
    }

    /// Name of the input, used in error messages
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of the line returned by the last call to `next_line()`
    /// (1-based), or 0 if nothing was read yet.
    #[inline]
    pub fn line(&self) -> u64 {
        self.line_idx
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf_reader.capacity()
    }

    /// Returns an error of the kind `ErrorKind::BlankLine` pointing to the
    /// current line.
    #[inline]
    pub fn blank_line_error(&self) -> Error {
        Error::new(ErrorKind::BlankLine {
            pos: ErrorPosition::new(self.name.as_str(), self.line_idx),
        })
    }

    /// Returns the next line with surrounding whitespace removed, or `None`
    /// at the end of the input.
    pub fn next_line(&mut self) -> crate::Result<Option<&str>> {
        self.buf_reader.consume(self.consumed);
        self.consumed = 0;

        let mut search_start = 0;
        let end = loop {
            if let Some(pos) = memchr(b'\n', &self.buf_reader.buffer()[search_start..]) {
                let end = search_start + pos;
                self.consumed = end + 1;
                break end;
            }
            search_start = self.buf_reader.buffer().len();

            // a full buffer would read as EOF
            self.buf_reader.make_room();
            if self.buf_reader.buf_len() == self.buf_reader.capacity() && !self.grow() {
                return Err(Error::new(ErrorKind::BufferLimit));
            }

            if self.read_into_buf()? == 0 {
                if search_start == 0 {
                    return Ok(None);
                }
                // last line without terminator
                self.consumed = search_start;
                break search_start;
            }
        };

        self.line_idx += 1;
        let line = str::from_utf8(&self.buf_reader.buffer()[..end])
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(Some(line.trim()))
    }

    // grow buffer based on policy
    #[inline]
    fn grow(&mut self) -> bool {
        let cap = self.buf_reader.capacity();
        if let Some(new_size) = self.buf_policy.grow_to(cap) {
            if new_size > cap {
                self.buf_reader.reserve(new_size - cap);
                return true;
            }
        }
        false
    }

    #[inline]
    fn read_into_buf(&mut self) -> io::Result<usize> {
        loop {
            match self.buf_reader.read_into_buf() {
                Err(ref e) if e.kind() == io::ErrorKind::Interrupted => {}
                res => return res,
            }
        }
    }
}
