// src/core/types.rs
use serde::{Deserialize, Serialize};

/// A whitespace-delimited unit of input, already case-folded.
pub type Token = String;

/// Number of times a token occurred in the input.
pub type Count = u64;

/// Position of a token in first-seen order.
/// This is the index into the frequency table's entry store.
pub type TokenId = usize;

/// A (token, count) pair considered for retention by the selector.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Candidate {
    pub token: Token,
    pub count: Count,
}

impl Candidate {
    pub fn new(token: impl Into<Token>, count: Count) -> Self {
        Self { token: token.into(), count }
    }
}
