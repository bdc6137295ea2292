use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Error, Result};

/// Collect the sequence lines of a two-line record stream.
///
/// Lines 2, 4, 6, ... (1-indexed) are sequences; the header lines in between are
/// skipped without looking at them. Lines are kept as raw bytes, minus a
/// trailing `\r`, so neither headers nor sequences need to be valid UTF-8.
pub fn parse_sequences<R: BufRead>(reader: R) -> std::io::Result<Vec<Vec<u8>>> {
    let mut seqs = Vec::new();
    for (n, line) in reader.split(b'\n').enumerate() {
        let mut line = line?;
        if n % 2 == 1 {
            if line.last() == Some(&b'\r') {
                line.pop();
            }
            seqs.push(line);
        }
    }
    Ok(seqs)
}

pub fn read_sequences(path: impl AsRef<Path>) -> Result<Vec<Vec<u8>>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    let seqs = parse_sequences(BufReader::new(file)).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), sequences = seqs.len(), "read records");
    Ok(seqs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse(input: &[u8]) -> Vec<Vec<u8>> {
        parse_sequences(Cursor::new(input)).unwrap()
    }

    fn owned(seqs: &[&str]) -> Vec<Vec<u8>> {
        seqs.iter().map(|s| s.as_bytes().to_vec()).collect()
    }

    #[test]
    fn test_keeps_even_lines() {
        let input = b">a\nACGT\n>b\nTACGTG\n>c\nGGG\n";
        assert_eq!(parse(input), owned(&["ACGT", "TACGTG", "GGG"]));
    }

    #[test]
    fn test_odd_lines_are_not_validated() {
        let input = b"not a header\nAAA\nanother\nCC";
        assert_eq!(parse(input), owned(&["AAA", "CC"]));
    }

    #[test]
    fn test_trailing_header_is_dropped() {
        assert_eq!(parse(b">a\nAC\n>b\n"), owned(&["AC"]));
    }

    #[test]
    fn test_crlf_line_endings() {
        assert_eq!(parse(b">a\r\nAC\r\n>b\r\nGT\r\n"), owned(&["AC", "GT"]));
    }

    #[test]
    fn test_empty_sequence_lines_are_kept() {
        assert_eq!(parse(b">a\n\n>b\nA\n"), owned(&["", "A"]));
    }

    #[test]
    fn test_empty_input() {
        assert!(parse(b"").is_empty());
    }

    #[test]
    fn test_headers_are_not_decoded() {
        let input = b">caf\xe9 sample\nACGT\n>\xff\xfe\nTACGTG\n";
        assert_eq!(parse(input), owned(&["ACGT", "TACGTG"]));
    }

    #[test]
    fn test_sequence_bytes_are_kept_verbatim() {
        let seqs = parse(b">a\nAC\xe9GT\n");
        assert_eq!(seqs, vec![b"AC\xe9GT".to_vec()]);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.fa");
        let err = read_sequences(&path).unwrap_err();
        assert!(matches!(err, Error::FileOpen { path: p, .. } if p == path));
    }

    #[test]
    fn test_read_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seqs.fa");
        std::fs::write(&path, ">x\nAB\n>y\nXABY\n").unwrap();
        assert_eq!(read_sequences(&path).unwrap(), owned(&["AB", "XABY"]));
    }
}
