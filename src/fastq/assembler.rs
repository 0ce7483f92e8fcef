use std::io;

use super::OwnedRecord;
use crate::core::LineReader;
use crate::policy::BufPolicy;
use crate::{RecordAssembler, Result};

/// Assembles FASTQ records. After an `@` header, the next data line is taken
/// as sequence and the one after as quality; `+` separator lines may appear
/// anywhere and are skipped.
#[derive(Debug)]
pub struct Assembler {
    head: Option<String>,
    seq: Option<String>,
    awaiting_seq: bool,
}

impl Default for Assembler {
    fn default() -> Self {
        Assembler {
            head: None,
            seq: None,
            awaiting_seq: true,
        }
    }
}

impl RecordAssembler for Assembler {
    type Record = OwnedRecord;

    fn assemble<R, P>(&mut self, lines: &mut LineReader<R, P>) -> Result<Option<OwnedRecord>>
    where
        R: io::Read,
        P: BufPolicy,
    {
        while let Some(line) = lines.next_line()? {
            if line.is_empty() {
                return Err(lines.blank_line_error());
            }
            if line == "+" {
                continue;
            }
            if let Some(head) = line.strip_prefix('@') {
                self.head = Some(head.to_string());
                continue;
            }
            if self.awaiting_seq {
                self.seq = Some(line.to_string());
                self.awaiting_seq = false;
                continue;
            }
            self.awaiting_seq = true;
            let head = self.head.clone().unwrap_or_default();
            let seq = self.seq.take().unwrap_or_default();
            return Ok(Some(OwnedRecord::new(head, seq, line)));
        }
        if let Some(seq) = self.seq.take() {
            debug!(
                "{}: dropping sequence without quality at end of input ({} bp)",
                lines.name(),
                seq.len()
            );
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    fn assemble_all(input: &[u8]) -> Result<Vec<OwnedRecord>> {
        let mut lines = LineReader::new(input, "test");
        let mut asm = Assembler::default();
        let mut out = vec![];
        while let Some(rec) = asm.assemble(&mut lines)? {
            out.push(rec);
        }
        Ok(out)
    }

    #[test]
    fn standard() {
        let recs = assemble_all(b"@a\nACGT\n+\nIIII\n@b\nGG\n+\n##\n").unwrap();
        assert_eq!(
            recs,
            vec![
                OwnedRecord::new("a", "ACGT", "IIII"),
                OwnedRecord::new("b", "GG", "##"),
            ]
        );
    }

    #[test]
    fn separator_optional() {
        let recs = assemble_all(b"@a\nACGT\nIIII\n+\n@b\n+\nGG\n##\n").unwrap();
        assert_eq!(
            recs,
            vec![
                OwnedRecord::new("a", "ACGT", "IIII"),
                OwnedRecord::new("b", "GG", "##"),
            ]
        );
    }

    #[test]
    fn separator_with_content() {
        // '+a' is not a separator, the pairing continues with it
        let recs = assemble_all(b"@a\nACGT\n+a\nIIII\n").unwrap();
        assert_eq!(recs, vec![OwnedRecord::new("a", "ACGT", "+a")]);
    }

    #[test]
    fn dangling_seq() {
        let recs = assemble_all(b"@a\nACGT\n+\nIIII\n@b\nGG\n").unwrap();
        assert_eq!(recs, vec![OwnedRecord::new("a", "ACGT", "IIII")]);
    }

    #[test]
    fn lengths_not_checked() {
        let recs = assemble_all(b"@a\nACGT\n+\nII\n").unwrap();
        assert_eq!(recs.len(), 1);
        assert!(recs[0].check_lengths().is_err());
    }

    #[test]
    fn blank_line() {
        let err = assemble_all(b"@a\nACGT\n+\nIIII\n\n").unwrap_err();
        match err.kind() {
            ErrorKind::BlankLine { pos } => assert_eq!(pos.line(), 5),
            k => panic!("unexpected error kind: {:?}", k),
        }
    }
}
