use std::io;

use super::write;
use crate::BaseRecord;

/// A FASTA record that owns its data
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnedRecord {
    pub head: String,
    pub seq: String,
}

impl OwnedRecord {
    #[inline]
    pub fn new<H: Into<String>, S: Into<String>>(head: H, seq: S) -> Self {
        OwnedRecord {
            head: head.into(),
            seq: seq.into(),
        }
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
        None
    }

    #[inline]
    fn write<W>(&self, writer: W) -> io::Result<()>
    where
        W: io::Write,
    {
        write(writer, &self.head, &self.seq)
    }
}
