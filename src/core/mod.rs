// src/core/mod.rs

pub mod engine;
pub mod frequency;
pub mod selector;
pub mod tokenizer;
pub mod types;
