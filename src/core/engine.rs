// src/core/engine.rs
use crate::config::Config;
use crate::core::frequency::FrequencyTable;
use crate::core::selector::TopKSelector;
use crate::core::tokenizer::Tokens;
use crate::core::types::Candidate;
use crate::error::Result;
use crate::report::Report;
use std::io::BufRead;

// One pass: tokens -> frequency table -> bounded selector -> report.
// The table is fully built before selection starts, then drained into the
// selector entry by entry.
pub struct WordFreqEngine {
    capacity: usize,
}

impl WordFreqEngine {
    pub fn new(config: &Config) -> Self {
        Self::with_capacity(config.capacity)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { capacity }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Reads `reader` to the end and ranks what it saw.
    /// A read error aborts the run before anything is ranked.
    pub fn run<R: BufRead>(&self, reader: R) -> Result<Report> {
        let table = FrequencyTable::from_tokens(Tokens::new(reader))?;
        log::info!(
            "read {} tokens, {} distinct",
            table.total(),
            table.distinct()
        );

        let total_tokens = table.total();
        let distinct_tokens = table.distinct();
        let entries = self.rank(table);
        log::info!("kept {} of {} (capacity {})", entries.len(), distinct_tokens, self.capacity);

        Ok(Report {
            total_tokens,
            distinct_tokens,
            capacity: self.capacity,
            entries,
        })
    }

    /// Consumes the table and returns the top entries, lowest count first.
    pub fn rank(&self, table: FrequencyTable) -> Vec<Candidate> {
        let mut selector = TopKSelector::new(self.capacity);
        selector.extend(table.into_candidates());
        if let Some(threshold) = selector.min_count() {
            log::debug!("admission threshold settled at {}", threshold);
        }
        selector.into_ascending()
    }
}
