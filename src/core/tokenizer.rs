// src/core/tokenizer.rs
use crate::core::types::Token;
use crate::error::{Result, WordFreqError};
use std::collections::VecDeque;
use std::io::BufRead;

/// Lower-cases ASCII letters only. Everything else passes through untouched.
pub fn fold_case(raw: &str) -> Token {
    raw.to_ascii_lowercase()
}

/// A lazy stream of case-folded tokens read from any `BufRead`.
///
/// Input is consumed one line at a time, so a token never spans a line
/// break and memory stays bounded by the longest line. Bytes that are not
/// valid UTF-8 are replaced with U+FFFD instead of aborting the run.
/// A read error is yielded once as `InputUnreadable`, after which the
/// iterator is exhausted.
pub struct Tokens<R> {
    reader: R,
    line: Vec<u8>,
    pending: VecDeque<Token>,
    done: bool,
}

impl<R: BufRead> Tokens<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: Vec::new(),
            pending: VecDeque::new(),
            done: false,
        }
    }

    fn fill(&mut self) -> Result<bool> {
        self.line.clear();
        let read = self
            .reader
            .read_until(b'\n', &mut self.line)
            .map_err(WordFreqError::InputUnreadable)?;
        if read == 0 {
            return Ok(false);
        }
        let text = String::from_utf8_lossy(&self.line);
        self.pending.extend(text.split_whitespace().map(fold_case));
        Ok(true)
    }
}

impl<R: BufRead> Iterator for Tokens<R> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Some(Ok(token));
            }
            if self.done {
                return None;
            }
            match self.fill() {
                Ok(true) => continue,
                Ok(false) => {
                    self.done = true;
                    return None;
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, BufReader, Cursor, Read};

    fn collect(input: &str) -> Vec<Token> {
        Tokens::new(Cursor::new(input.as_bytes()))
            .collect::<Result<Vec<_>>>()
            .unwrap()
    }

    #[test]
    fn splits_on_any_whitespace_run() {
        assert_eq!(
            collect("  alpha\tbeta \n\n gamma\r\ndelta  "),
            vec!["alpha", "beta", "gamma", "delta"]
        );
    }

    #[test]
    fn folds_ascii_case_only() {
        assert_eq!(collect("Go go GO"), vec!["go", "go", "go"]);
        assert_eq!(fold_case("ÉCOLE"), "École");
        assert_eq!(fold_case("Straße"), "straße");
    }

    #[test]
    fn punctuation_is_kept() {
        assert_eq!(collect("Hello, world!"), vec!["hello,", "world!"]);
    }

    #[test]
    fn empty_and_blank_input_yield_nothing() {
        assert!(collect("").is_empty());
        assert!(collect(" \n\t \n").is_empty());
    }

    #[test]
    fn invalid_utf8_is_replaced_not_fatal() {
        let bytes: &[u8] = b"ok \xff\xfe bad";
        let tokens: Vec<Token> = Tokens::new(Cursor::new(bytes))
            .collect::<Result<Vec<_>>>()
            .unwrap();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0], "ok");
        assert_eq!(tokens[2], "bad");
    }

    #[test]
    fn long_tokens_are_not_truncated() {
        let word = "x".repeat(100_000);
        assert_eq!(collect(&word), vec![word]);
    }

    struct FailAfter {
        served: bool,
    }

    impl Read for FailAfter {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.served {
                return Err(io::Error::new(io::ErrorKind::Other, "disk on fire"));
            }
            self.served = true;
            let chunk = b"first line\n";
            buf[..chunk.len()].copy_from_slice(chunk);
            Ok(chunk.len())
        }
    }

    #[test]
    fn read_error_surfaces_once_then_stops() {
        let mut tokens = Tokens::new(BufReader::new(FailAfter { served: false }));
        assert_eq!(tokens.next().unwrap().unwrap(), "first");
        assert_eq!(tokens.next().unwrap().unwrap(), "line");
        assert!(matches!(
            tokens.next(),
            Some(Err(WordFreqError::InputUnreadable(_)))
        ));
        assert!(tokens.next().is_none());
    }
}
