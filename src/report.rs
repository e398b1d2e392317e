// src/report.rs
use crate::core::types::{Candidate, Count};
use crate::error::{Result, WordFreqError};
use serde::Serialize;
use std::io::Write;

/// Result of one run: the retained words plus a little context.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub total_tokens: Count,
    pub distinct_tokens: usize,
    pub capacity: usize,
    /// Ascending by count.
    pub entries: Vec<Candidate>,
}

impl Report {
    /// One `<count> <token>` line per entry, nothing else.
    pub fn write_plain<W: Write>(&self, out: &mut W) -> Result<()> {
        for entry in &self.entries {
            writeln!(out, "{} {}", entry.count, entry.token).map_err(WordFreqError::Output)?;
        }
        out.flush().map_err(WordFreqError::Output)
    }

    pub fn write_json<W: Write>(&self, out: &mut W) -> Result<()> {
        serde_json::to_writer_pretty(&mut *out, self)?;
        writeln!(out).map_err(WordFreqError::Output)?;
        out.flush().map_err(WordFreqError::Output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Report {
        Report {
            total_tokens: 6,
            distinct_tokens: 3,
            capacity: 2,
            entries: vec![Candidate::new("b", 2), Candidate::new("c", 3)],
        }
    }

    #[test]
    fn plain_lines_have_no_header_or_padding() {
        let mut out = Vec::new();
        sample().write_plain(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "2 b\n3 c\n");
    }

    #[test]
    fn empty_report_prints_nothing() {
        let mut report = sample();
        report.entries.clear();
        let mut out = Vec::new();
        report.write_plain(&mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn json_carries_entries_in_order() {
        let mut out = Vec::new();
        sample().write_json(&mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["total_tokens"], 6);
        assert_eq!(value["distinct_tokens"], 3);
        assert_eq!(value["capacity"], 2);
        assert_eq!(value["entries"][0]["token"], "b");
        assert_eq!(value["entries"][1]["count"], 3);
    }
}
