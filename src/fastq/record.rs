use std::io;

use super::write;
use crate::{BaseRecord, Error, ErrorKind};

/// A FASTQ record that owns its data
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnedRecord {
    pub head: String,
    pub seq: String,
    pub qual: String,
}

impl OwnedRecord {
    #[inline]
    pub fn new<H, S, Q>(head: H, seq: S, qual: Q) -> Self
    where
        H: Into<String>,
        S: Into<String>,
        Q: Into<String>,
    {
        OwnedRecord {
            head: head.into(),
            seq: seq.into(),
            qual: qual.into(),
        }
    }

    /// Return the FASTQ quality line
    #[inline]
    pub fn qual(&self) -> &str {
        &self.qual
    }

    /// Checks if the sequence and quality lengths are equal. If not, an
    /// error of the kind `ErrorKind::UnequalLengths` is returned.
    ///
    /// # Example
    ///
    /// ```rust
    /// use seqparser::fastq::OwnedRecord;
    ///
    /// let rec = OwnedRecord::new("id", "ACGT", "II");
    /// assert!(rec.check_lengths().is_err());
    /// ```
    #[inline]
    pub fn check_lengths(&self) -> Result<&Self, Error> {
        if self.seq.len() == self.qual.len() {
            return Ok(self);
        }
        Err(Error::new(ErrorKind::UnequalLengths {
            id: self.id().to_string(),
            seq: self.seq.len(),
            qual: self.qual.len(),
        }))
    }
}

impl BaseRecord for OwnedRecord {
    #[inline]
    fn head(&self) -> &str {
        &self.head
    }

    #[inline]
    fn seq(&self) -> &str {
        &self.seq
    }

    #[inline]
    fn opt_qual(&self) -> Option<&str> {
        Some(&self.qual)
    }

    #[inline]
    fn write<W>(&self, writer: W) -> io::Result<()>
    where
        W: io::Write,
    {
        write(writer, &self.head, &self.seq, &self.qual)
    }
}
