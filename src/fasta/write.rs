use std::io;

/// Helper function for writing data (not necessarily stored in a record
/// instance) to the FASTA format.
#[inline]
pub fn write<W>(mut writer: W, head: &str, seq: &str) -> io::Result<()>
where
    W: io::Write,
{
    write_head(&mut writer, head)?;
    write_seq(writer, seq)
}

/// Writes only the header line.
#[inline]
pub fn write_head<W>(mut writer: W, head: &str) -> io::Result<()>
where
    W: io::Write,
{
    writer.write_all(b">")?;
    writer.write_all(head.as_bytes())?;
    writer.write_all(b"\n")
}

/// Writes only the sequence line.
#[inline]
pub fn write_seq<W>(mut writer: W, seq: &str) -> io::Result<()>
where
    W: io::Write,
{
    writer.write_all(seq.as_bytes())?;
    writer.write_all(b"\n")
}
