#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

lazy_static! {
    pub static ref FASTA_PATH: PathBuf =
        [env!("CARGO_MANIFEST_DIR"), "tests", "data", "test.fa"].iter().collect();
    pub static ref FASTQ_PATH: PathBuf =
        [env!("CARGO_MANIFEST_DIR"), "tests", "data", "test.fq"].iter().collect();
}

pub const FASTA_SEQ0: &str = "TGATTGAATCTTTTGAGGGTCACGGCCCGGAAGCCAGAATTTCGGGGTCCTCTGTGGATATTAATCGAGCCCACACGGTGTGAGTTCAGCGGCCCCCGCA";
pub const FASTQ_SEQ0: &str = "TGTGGTCGTATAGTTATTGTCATAAATTACACAGAATCGCGATTCTCCGCGTCCACCAATCTTAGTGCACCACAGCATCGACCCGATTTATGACGCTGAG";
pub const FASTQ_QUAL0: &str = "*540($=*,=.062565,2>'487')!:&&6=,6,*7>:&132&83*8(58&59>'8!;28<94,0*;*.94**:9+7\"94(>7='(!5\"2/!%\"4#32=";

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Writes `content` to a temporary file, which is removed when dropped.
pub fn temp_file(content: &[u8]) -> NamedTempFile {
    let mut f = NamedTempFile::new().expect("could not create temporary file");
    f.write_all(content).unwrap();
    f.flush().unwrap();
    f
}
