//! Relevance scoring for a single document
//!
//! Each call analyzes the document text, indexes it in memory, parses the
//! key phrase and scores the two against each other. Nothing outlives a call.
//!
//! ```
//! use ranker_core::{Ranker, format_score};
//!
//! let ranker = Ranker::default();
//! let score = ranker.rank("<p>The quick brown fox</p>", "fox").unwrap();
//!
//! assert_eq!(format_score(score), "0.50");
//! ```

pub mod token;
pub mod analysis;
pub mod index;
pub mod query;
pub mod similarity;
pub mod scoring;
pub mod ranker;

pub use crate::token::Token;
pub use crate::analysis::Analyzer;
pub use crate::index::{EphemeralIndex, Posting};
pub use crate::query::QueryNode;
pub use crate::query::parser::{QueryParser, ParseError};
pub use crate::scoring::{score, explain, Explanation, LeafExplanation};
pub use crate::ranker::{Ranker, format_score};
