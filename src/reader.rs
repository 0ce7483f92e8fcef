use std::fs::File;
use std::io;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use crate::core::{LineReader, BUFSIZE};
use crate::policy::{BufPolicy, StdPolicy};
use crate::{BaseRecord, Error, ErrorKind, Result};

/// Format-specific state machine turning lines into records.
///
/// A fresh assembler (`Default::default()`) is created for every pass over
/// the input, so all state is local to one pass.
pub trait RecordAssembler: Default {
    type Record: BaseRecord;

    /// Pulls lines from `lines` until a complete record is available.
    /// Returns `Ok(None)` once the input is exhausted.
    fn assemble<R, P>(&mut self, lines: &mut LineReader<R, P>) -> Result<Option<Self::Record>>
    where
        R: io::Read,
        P: BufPolicy;
}

/// Drives a [`RecordAssembler`](RecordAssembler) over any `io::Read`
/// instance, yielding owned records.
///
/// The input is released as soon as it is exhausted or an error occurs,
/// after which the iterator only returns `None`. If the input did not
/// contain any record, an error of the kind
/// [`ErrorKind::EmptyInput`](ErrorKind::EmptyInput) is returned as last
/// item.
pub struct Reader<R, A, P = StdPolicy>
where
    R: io::Read,
{
    lines: Option<LineReader<R, P>>,
    assembler: A,
    name: String,
    n_records: usize,
    exhausted: bool,
}

impl<R, A> Reader<R, A>
where
    R: io::Read,
    A: RecordAssembler,
{
    /// Creates a new reader with the default buffer size of 64 KiB.
    /// `name` is used in error messages.
    #[inline]
    pub fn new<S: Into<String>>(reader: R, name: S) -> Self {
        Self::with_capacity(reader, name, BUFSIZE)
    }

    /// Creates a new reader with a given buffer capacity. The minimum allowed
    /// capacity is 1.
    #[inline]
    pub fn with_capacity<S: Into<String>>(reader: R, name: S, capacity: usize) -> Self {
        Self::from_lines(LineReader::with_capacity(reader, name, capacity))
    }
}

impl<A> Reader<File, A>
where
    A: RecordAssembler,
{
    /// Creates a reader from a file path.
    #[inline]
    pub fn from_path<T: AsRef<Path>>(path: T) -> io::Result<Self> {
        LineReader::from_path(path).map(Reader::from_lines)
    }
}

impl<R, A, P> Reader<R, A, P>
where
    R: io::Read,
    A: RecordAssembler,
    P: BufPolicy,
{
    /// Creates a reader from an already instantiated
    /// [`LineReader`](crate::core::LineReader).
    #[inline]
    pub fn from_lines(lines: LineReader<R, P>) -> Self {
        Reader {
            name: lines.name().to_string(),
            lines: Some(lines),
            assembler: A::default(),
            n_records: 0,
            exhausted: false,
        }
    }

    /// Applies a [`BufPolicy`](crate::policy::BufPolicy) to the
    /// current reader.
    #[inline]
    pub fn set_policy<T: BufPolicy>(self, buf_policy: T) -> Reader<R, A, T> {
        Reader {
            lines: self.lines.map(|l| l.set_policy(buf_policy)),
            assembler: self.assembler,
            name: self.name,
            n_records: self.n_records,
            exhausted: self.exhausted,
        }
    }

    /// Name of the input
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of records returned so far
    #[inline]
    pub fn num_records(&self) -> usize {
        self.n_records
    }

    /// Returns `true` if the input is still held open by the reader.
    #[inline]
    pub fn is_open(&self) -> bool {
        self.lines.is_some()
    }

    /// Returns `true` if the end of the input was reached (even if it
    /// contained no records).
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}

impl<R, A, P> Iterator for Reader<R, A, P>
where
    R: io::Read,
    A: RecordAssembler,
    P: BufPolicy,
{
    type Item = Result<A::Record>;

    fn next(&mut self) -> Option<Self::Item> {
        let lines = self.lines.as_mut()?;
        match self.assembler.assemble(lines) {
            Ok(Some(record)) => {
                self.n_records += 1;
                trace!("{}: record {} ('{}')", self.name, self.n_records, record.id());
                Some(Ok(record))
            }
            Ok(None) => {
                // close before checking
                self.lines = None;
                self.exhausted = true;
                debug!("{}: finished after {} records", self.name, self.n_records);
                if self.n_records == 0 {
                    let name = self.name.clone();
                    return Some(Err(Error::new(ErrorKind::EmptyInput { name })));
                }
                None
            }
            Err(e) => {
                self.lines = None;
                debug!("{}: stopped after {} records: {}", self.name, self.n_records, e);
                Some(Err(e))
            }
        }
    }
}

/// Parser configuration for a sequence file.
///
/// The parser does not hold the file open and does not cache any records.
/// Every call to [`records()`](Parser::records) starts a fresh pass over
/// the file.
///
/// # Example
///
/// ```no_run
/// use seqparser::fastq;
/// use seqparser::policy::DoubleUntilLimited;
///
/// let parser = fastq::Parser::new("seqs.fastq")
///     .with_capacity(1 << 20)
///     .set_policy(DoubleUntilLimited::new(1 << 24, 1 << 28));
///
/// let n = parser.records().filter_map(Result::ok).count();
/// ```
#[derive(Debug)]
pub struct Parser<A, P = StdPolicy> {
    path: PathBuf,
    capacity: usize,
    buf_policy: P,
    unread: AtomicBool,
    _assembler: PhantomData<fn() -> A>,
}

impl<A> Parser<A>
where
    A: RecordAssembler,
{
    #[inline]
    pub fn new<T: AsRef<Path>>(path: T) -> Self {
        Parser {
            path: path.as_ref().to_owned(),
            capacity: BUFSIZE,
            buf_policy: StdPolicy,
            unread: AtomicBool::new(true),
            _assembler: PhantomData,
        }
    }
}

impl<A, P> Parser<A, P>
where
    A: RecordAssembler,
    P: BufPolicy + Clone,
{
    /// Sets the initial buffer capacity. The minimum allowed capacity is 1.
    #[inline]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity >= 1, "capacity smaller than 1");
        self.capacity = capacity;
        self
    }

    /// Applies a [`BufPolicy`](crate::policy::BufPolicy), which is cloned
    /// into every pass over the file.
    #[inline]
    pub fn set_policy<T: BufPolicy + Clone>(self, buf_policy: T) -> Parser<A, T> {
        Parser {
            path: self.path,
            capacity: self.capacity,
            buf_policy,
            unread: self.unread,
            _assembler: PhantomData,
        }
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn policy(&self) -> &P {
        &self.buf_policy
    }

    /// Returns `true` until a pass over the file has reached its end.
    #[inline]
    pub fn is_unread(&self) -> bool {
        self.unread.load(Ordering::Relaxed)
    }

    /// Returns an iterator over all records of the file. The file is opened
    /// with the first call to `next()`; errors opening it are returned as
    /// the first item.
    #[inline]
    pub fn records(&self) -> Records<A, P> {
        Records {
            parser: self,
            reader: None,
            started: false,
        }
    }

    fn open(&self) -> io::Result<Reader<File, A, P>> {
        debug!("opening {}", self.path.display());
        let lines = LineReader::with_capacity(
            File::open(&self.path)?,
            self.path.display().to_string(),
            self.capacity,
        )
        .set_policy(self.buf_policy.clone());
        Ok(Reader::from_lines(lines))
    }
}

impl<'p, A, P> IntoIterator for &'p Parser<A, P>
where
    A: RecordAssembler,
    P: BufPolicy + Clone,
{
    type Item = Result<A::Record>;
    type IntoIter = Records<'p, A, P>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.records()
    }
}

/// Iterator over the records of a file, obtained from
/// [`Parser::records()`](Parser::records).
/// Dropping it closes the file.
pub struct Records<'p, A, P = StdPolicy> {
    parser: &'p Parser<A, P>,
    reader: Option<Reader<File, A, P>>,
    started: bool,
}

impl<'p, A, P> Records<'p, A, P>
where
    A: RecordAssembler,
    P: BufPolicy + Clone,
{
    /// Returns `true` while the file is held open.
    #[inline]
    pub fn is_open(&self) -> bool {
        self.reader.as_ref().map_or(false, Reader::is_open)
    }
}

impl<'p, A, P> Iterator for Records<'p, A, P>
where
    A: RecordAssembler,
    P: BufPolicy + Clone,
{
    type Item = Result<A::Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.started {
            self.started = true;
            match self.parser.open() {
                Ok(rdr) => self.reader = Some(rdr),
                Err(e) => return Some(Err(e.into())),
            }
        }
        let reader = self.reader.as_mut()?;
        let item = reader.next();
        if reader.is_exhausted() {
            self.parser.unread.store(false, Ordering::Relaxed);
        }
        item
    }
}
