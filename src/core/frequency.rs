// src/core/frequency.rs
use crate::core::types::{Candidate, Count, Token, TokenId};
use crate::error::Result;
use std::collections::HashMap;

/// Token -> occurrence count, built once per run.
///
/// Entries live in a `Vec` in first-seen order with a side index for
/// lookups. Draining in that order keeps ranking deterministic for a
/// given input, tie-breaks included.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    index: HashMap<Token, TokenId>,
    entries: Vec<Candidate>,
    total: Count,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes a token stream, stopping at the first read error.
    pub fn from_tokens<I>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = Result<Token>>,
    {
        let mut table = Self::new();
        for token in tokens {
            table.record(token?);
        }
        Ok(table)
    }

    /// Counts tokens that are already case-folded.
    pub fn accumulate<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Token>,
    {
        let mut table = Self::new();
        for token in tokens {
            table.record(token);
        }
        table
    }

    /// Adds one occurrence, returning the token's id.
    /// O(1) amortized.
    pub fn record(&mut self, token: impl Into<Token>) -> TokenId {
        let token = token.into();
        self.total += 1;
        if let Some(&id) = self.index.get(&token) {
            self.entries[id].count += 1;
            return id;
        }
        let id = self.entries.len();
        self.index.insert(token.clone(), id);
        self.entries.push(Candidate::new(token, 1));
        id
    }

    pub fn get(&self, token: &str) -> Option<Count> {
        self.index.get(token).map(|&id| self.entries[id].count)
    }

    /// Number of distinct tokens.
    pub fn distinct(&self) -> usize {
        self.entries.len()
    }

    /// Number of tokens recorded, equal to the sum of all counts.
    pub fn total(&self) -> Count {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Candidate> {
        self.entries.iter()
    }

    /// Hands every entry over in first-seen order, dropping the index.
    pub fn into_candidates(self) -> impl Iterator<Item = Candidate> {
        self.entries.into_iter()
    }
}
