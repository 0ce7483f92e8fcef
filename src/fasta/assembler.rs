use std::io;

use super::OwnedRecord;
use crate::core::LineReader;
use crate::policy::BufPolicy;
use crate::{RecordAssembler, Result};

/// Assembles FASTA records: a `>` header line followed by sequence lines,
/// each of which forms a record on its own.
#[derive(Debug, Default)]
pub struct Assembler {
    head: Option<String>,
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
            if let Some(head) = line.strip_prefix('>') {
                self.head = Some(head.to_string());
                continue;
            }
            let head = self.head.clone().unwrap_or_default();
            return Ok(Some(OwnedRecord::new(head, line)));
        }
        Ok(None)
    }
}
