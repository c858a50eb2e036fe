//! An in-memory inverted index over a single field of a single document
//!
//! The index is built in one pass over a token stream and is never modified
//! afterwards.

use std::collections::HashMap;

use crate::token::Token;


#[derive(Debug, Clone, PartialEq, Default)]
pub struct Posting {
    positions: Vec<u32>,
}


impl Posting {
    #[inline]
    pub fn positions(&self) -> &[u32] {
        &self.positions
    }

    #[inline]
    pub fn term_frequency(&self) -> u32 {
        self.positions.len() as u32
    }

    #[inline]
    pub fn contains_position(&self, position: u32) -> bool {
        self.positions.binary_search(&position).is_ok()
    }
}


#[derive(Debug, Clone, PartialEq, Default)]
pub struct EphemeralIndex {
    postings: HashMap<String, Posting>,
    total_token_count: u32,
}


impl EphemeralIndex {
    pub fn build<I: IntoIterator<Item=Token>>(tokens: I) -> EphemeralIndex {
        let mut postings: HashMap<String, Posting> = HashMap::new();
        let mut total_token_count = 0;

        for token in tokens {
            // Tokens arrive in position order so each postings list stays sorted
            postings.entry(token.term).or_default().positions.push(token.position);
            total_token_count += 1;
        }

        EphemeralIndex {
            postings: postings,
            total_token_count: total_token_count,
        }
    }

    pub fn posting(&self, term: &str) -> Option<&Posting> {
        self.postings.get(term)
    }

    pub fn frequency(&self, term: &str) -> u32 {
        self.posting(term).map_or(0, Posting::term_frequency)
    }

    pub fn positions(&self, term: &str) -> &[u32] {
        match self.posting(term) {
            Some(posting) => posting.positions(),
            None => &[],
        }
    }

    #[inline]
    pub fn length(&self) -> u32 {
        self.total_token_count
    }

    #[inline]
    pub fn term_count(&self) -> usize {
        self.postings.len()
    }
}
