use memchr::memchr;
use std::io;

/// Common trait of the FASTA and FASTQ record types.
pub trait BaseRecord {
    /// Return the header line of the record, without the leading `>` / `@`.
    fn head(&self) -> &str;

    /// Return the record sequence.
    fn seq(&self) -> &str;

    /// Returns the quality information or `None`.
    fn opt_qual(&self) -> Option<&str>;

    /// Writes the record to an output.
    fn write<W>(&self, writer: W) -> io::Result<()>
    where
        W: io::Write;

    /// Returns a boolean specifying whether there is quality information in
    /// this record or not.
    #[inline]
    fn has_quality(&self) -> bool {
        self.opt_qual().is_some()
    }

    /// Returns the record ID (everything before an optional space).
    #[inline]
    fn id(&self) -> &str {
        self.id_desc().0
    }

    /// Returns the record description (separated from the ID by a space),
    /// if present.
    #[inline]
    fn desc(&self) -> Option<&str> {
        self.id_desc().1
    }

    /// Returns both the ID and the description of the record (if present).
    #[inline]
    fn id_desc(&self) -> (&str, Option<&str>) {
        let head = self.head();
        if let Some(pos) = memchr(b' ', head.as_bytes()) {
            return (&head[..pos], Some(&head[pos + 1..]));
        }
        (head, None)
    }
}

impl<'a, R> BaseRecord for &'a R
where
    R: BaseRecord,
{
    fn head(&self) -> &str {
        (**self).head()
    }

    fn seq(&self) -> &str {
        (**self).seq()
    }

    fn opt_qual(&self) -> Option<&str> {
        (**self).opt_qual()
    }

    fn write<W: io::Write>(&self, writer: W) -> io::Result<()> {
        (**self).write(writer)
    }

    fn has_quality(&self) -> bool {
        (**self).has_quality()
    }

    fn id(&self) -> &str {
        (**self).id()
    }

    fn desc(&self) -> Option<&str> {
        (**self).desc()
    }

    fn id_desc(&self) -> (&str, Option<&str>) {
        (**self).id_desc()
    }
}
