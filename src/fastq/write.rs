use std::io;

/// Helper function for writing data (not necessarily stored in a record
/// instance) to the FASTQ format.
#[inline]
pub fn write<W>(mut writer: W, head: &str, seq: &str, qual: &str) -> io::Result<()>
where
    W: io::Write,
{
    writer.write_all(b"@")?;
    writer.write_all(head.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.write_all(seq.as_bytes())?;
    writer.write_all(b"\n+\n")?;
    writer.write_all(qual.as_bytes())?;
    writer.write_all(b"\n")
}
