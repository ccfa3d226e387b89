//! Search module - Query scoring over the pre-built page index
//!
//! Provides:
//! - query: query-string decoding and term splitting
//! - score: occurrence counting, per-record scoring, and ranking
//! - api: the search command (load index, score, render)

pub mod api;
pub mod query;
pub mod score;
