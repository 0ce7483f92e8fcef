#[macro_use]
extern crate matches;
#[macro_use]
extern crate lazy_static;

mod common;

use common::*;
use seqparser::fasta::{OwnedRecord, Parser, Reader};
use seqparser::policy::DoubleUntilLimited;
use seqparser::prelude::*;
use seqparser::ErrorKind;

#[test]
fn first_record() {
    init_logger();
    let parser = Parser::new(&*FASTA_PATH);
    let records: Vec<_> = parser.records().collect::<Result<_, _>>().unwrap();
    assert_eq!(records.len(), 10);
    assert_eq!(records[0].head, "seq0");
    assert_eq!(records[0].seq, FASTA_SEQ0);
    for (i, rec) in records.iter().enumerate() {
        assert_eq!(rec.id(), format!("seq{}", i));
        assert_eq!(rec.seq().len(), 100);
        assert!(!rec.has_quality());
    }
}

#[test]
fn records_in_order() {
    let f = temp_file(b">a\nACGT\n>b desc\nGGCC\n>c\nT\n");
    let parser = Parser::new(f.path());
    let records: Vec<_> = parser.records().map(Result::unwrap).collect();
    assert_eq!(
        records,
        vec![
            OwnedRecord::new("a", "ACGT"),
            OwnedRecord::new("b desc", "GGCC"),
            OwnedRecord::new("c", "T"),
        ]
    );
    assert_eq!(records[1].id(), "b");
    assert_eq!(records[1].desc(), Some("desc"));
}

#[test]
fn reiterate() {
    let f = temp_file(b">a\nACGT\n>b\nGGCC\n");
    let parser = Parser::new(f.path());
    assert!(parser.is_unread());
    let first: Vec<_> = (&parser).into_iter().map(Result::unwrap).collect();
    assert!(!parser.is_unread());
    let second: Vec<_> = (&parser).into_iter().map(Result::unwrap).collect();
    assert_eq!(first, second);
}

#[test]
fn partial_pass_keeps_unread() {
    let f = temp_file(b">a\nACGT\n>b\nGGCC\n");
    let parser = Parser::new(f.path());
    let mut records = parser.records();
    assert!(records.next().unwrap().is_ok());
    assert!(records.is_open());
    drop(records);
    assert!(parser.is_unread());
    // a new pass starts from the beginning
    let all: Vec<_> = parser.records().map(Result::unwrap).collect();
    assert_eq!(
        all,
        vec![OwnedRecord::new("a", "ACGT"), OwnedRecord::new("b", "GGCC")]
    );
    assert!(!parser.is_unread());
}

#[test]
fn interleaved_passes() {
    let f = temp_file(b">a\nACGT\n>b\nGGCC\n>c\nT\n");
    let parser = Parser::new(f.path());
    let mut first = parser.records();
    let mut second = parser.records();
    let mut seqs1 = vec![];
    let mut seqs2 = vec![];
    for _ in 0..3 {
        seqs1.push(first.next().unwrap().unwrap().seq);
        seqs2.push(second.next().unwrap().unwrap().seq);
    }
    assert!(first.next().is_none());
    assert!(second.next().is_none());
    assert_eq!(seqs1, vec!["ACGT", "GGCC", "T"]);
    assert_eq!(seqs1, seqs2);
}

#[test]
fn empty_input() {
    let f = temp_file(b"");
    let parser = Parser::new(f.path());
    let mut records = parser.records();
    let err = records.next().unwrap().unwrap_err();
    assert_matches!(err.kind(), ErrorKind::EmptyInput { .. });
    assert!(!records.is_open());
    assert!(records.next().is_none());
    assert!(!parser.is_unread());
}

#[test]
fn headers_only() {
    let f = temp_file(b">a\n>b\n");
    let parser = Parser::new(f.path());
    let res: Vec<_> = parser.records().collect();
    assert_eq!(res.len(), 1);
    match res[0].as_ref().unwrap_err().kind() {
        ErrorKind::EmptyInput { name } => assert_eq!(name, &f.path().display().to_string()),
        k => panic!("unexpected error kind: {:?}", k),
    }
}

#[test]
fn blank_line() {
    let f = temp_file(b">a\nACGT\n\n>b\nGGCC\n");
    let parser = Parser::new(f.path());
    let mut records = parser.records();
    assert_eq!(records.next().unwrap().unwrap().seq, "ACGT");
    let err = records.next().unwrap().unwrap_err();
    assert_matches!(err.kind(), ErrorKind::BlankLine { .. });
    let pos = err.position().unwrap();
    assert_eq!(pos.line(), 3);
    assert_eq!(pos.name(), f.path().display().to_string());
    // file released, iteration ended
    assert!(!records.is_open());
    assert!(records.next().is_none());
}

#[test]
fn missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let parser = Parser::new(dir.path().join("missing.fa"));
    let mut records = parser.records();
    let err = records.next().unwrap().unwrap_err();
    match err.kind() {
        ErrorKind::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
        k => panic!("unexpected error kind: {:?}", k),
    }
    assert!(records.next().is_none());
}

#[test]
fn small_capacity() {
    let input = &b">id1\r\nACGTACGTACGT\r\n>id2\r\nTT"[..];
    for cap in 1..30 {
        let records: Vec<_> = Reader::with_capacity(input, "mem", cap)
            .map(Result::unwrap)
            .collect();
        assert_eq!(
            records,
            vec![
                OwnedRecord::new("id1", "ACGTACGTACGT"),
                OwnedRecord::new("id2", "TT"),
            ],
            "capacity {}",
            cap
        );
    }
}

#[test]
fn buffer_limit() {
    let f = temp_file(b">a\nACGTACGTACGTACGTACGT\n");
    let parser = Parser::new(f.path())
        .with_capacity(4)
        .set_policy(DoubleUntilLimited::new(4, 8));
    let err = parser.records().next().unwrap().unwrap_err();
    assert_matches!(err.kind(), ErrorKind::BufferLimit);
}

#[test]
fn write() {
    let input = b">id desc\nACGT\n>id2\nTTTT\n";
    let mut out = vec![];
    for rec in Reader::new(&input[..], "mem") {
        rec.unwrap().write(&mut out).unwrap();
    }
    assert_eq!(&out, input);
}
