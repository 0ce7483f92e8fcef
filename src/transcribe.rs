//! DNA to RNA transcription

use std::error;
use std::fmt;
use std::str;

/// Transcription error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscribeError {
    /// The input is not valid UTF-8 text.
    InvalidArgument(str::Utf8Error),
    /// The input is empty.
    EmptySequence,
    /// A character other than `A`, `C`, `G` or `T` (case-insensitive) was found.
    DisallowedNucleotide {
        /// The offending character (upper-cased)
        found: char,
        /// 1-based position of the character in `seq`
        pos: usize,
        /// The upper-cased sequence, reversed if `reversed` is `true`
        seq: String,
        /// Whether the sequence was reversed before checking
        reversed: bool,
    },
}

impl fmt::Display for TranscribeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TranscribeError::InvalidArgument(e) => {
                write!(f, "Transcription error: input is not text ({})", e)
            }
            TranscribeError::EmptySequence => write!(f, "Transcription error: empty sequence"),
            TranscribeError::DisallowedNucleotide {
                found,
                pos,
                seq,
                reversed,
            } => {
                write!(
                    f,
                    "Transcription error: disallowed nucleotide '{}' at position {} in {}",
                    found.escape_default(),
                    pos,
                    seq
                )?;
                if *reversed {
                    write!(f, " (reversed)")?;
                }
                Ok(())
            }
        }
    }
}

impl error::Error for TranscribeError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            TranscribeError::InvalidArgument(e) => Some(e),
            _ => None,
        }
    }
}

#[inline]
fn transcribe_base(base: char) -> Option<char> {
    match base {
        'A' => Some('U'),
        'C' => Some('G'),
        'T' => Some('A'),
        'G' => Some('C'),
        _ => None,
    }
}

/// Transcribes a DNA sequence into RNA (`A→U`, `C→G`, `T→A`, `G→C`).
/// Lowercase input is accepted. If `reverse` is `true`, the sequence is
/// read backwards.
///
/// # Example
///
/// ```rust
/// use seqparser::{transcribe, TranscribeError};
///
/// assert_eq!(transcribe("atcg", false).unwrap(), "UAGC");
/// assert_eq!(transcribe(b"ATCG", true).unwrap(), "CGAU");
///
/// match transcribe("ATCGX", false) {
///     Err(TranscribeError::DisallowedNucleotide { found, pos, .. }) => {
///         assert_eq!((found, pos), ('X', 5));
///     }
///     _ => unreachable!(),
/// }
/// ```
pub fn transcribe<S>(seq: S, reverse: bool) -> Result<String, TranscribeError>
where
    S: AsRef<[u8]>,
{
    let text = str::from_utf8(seq.as_ref()).map_err(TranscribeError::InvalidArgument)?;
    if text.is_empty() {
        return Err(TranscribeError::EmptySequence);
    }

    let mut working: Vec<char> = text.to_uppercase().chars().collect();
    if reverse {
        working.reverse();
    }

    let mut out = String::with_capacity(working.len());
    for (i, &base) in working.iter().enumerate() {
        match transcribe_base(base) {
            Some(b) => out.push(b),
            None => {
                return Err(TranscribeError::DisallowedNucleotide {
                    found: base,
                    pos: i + 1,
                    seq: working.iter().collect(),
                    reversed: reverse,
                })
            }
        }
    }
    Ok(out)
}

/// Same as `transcribe(seq, true)`
#[inline]
pub fn reverse_transcribe<S>(seq: S) -> Result<String, TranscribeError>
where
    S: AsRef<[u8]>,
{
    transcribe(seq, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapping() {
        assert_eq!(transcribe("ACTG", false).unwrap(), "UGAC");
    }

    #[test]
    fn reversed_error() {
        let err = reverse_transcribe("ACNT").unwrap_err();
        assert_eq!(
            err,
            TranscribeError::DisallowedNucleotide {
                found: 'N',
                pos: 2,
                seq: "TNCA".to_string(),
                reversed: true,
            }
        );
        assert!(err.to_string().ends_with("in TNCA (reversed)"));
    }

    #[test]
    fn not_text() {
        assert!(matches!(
            transcribe(&b"AC\xff"[..], false),
            Err(TranscribeError::InvalidArgument(_))
        ));
    }
}
