//! Scores a query against a document's index
//!
//! A document that doesn't match the query scores zero. Otherwise the score
//! is built from the query's leaves (terms and phrases) that aren't negated:
//!
//! ```text
//! score = coord * length_norm * sum(sqrt(tf(leaf)) * boost(leaf) for each matched leaf)
//! ```
//!
//! Negated leaves only decide whether the document matches, they never add to
//! the score.

use serde::Serialize;

use crate::index::EphemeralIndex;
use crate::query::QueryNode;
use crate::similarity::{SimilarityModel, coord, length_norm};


#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeafExplanation {
    pub query: String,
    pub term_frequency: u32,
    pub boost: f64,
    pub score: f64,
}


#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Explanation {
    pub score: f64,
    pub matches: bool,
    pub coord: f64,
    pub length_norm: f64,
    pub length: u32,
    pub leaves: Vec<LeafExplanation>,
}


struct ScoredLeaf<'q> {
    leaf: &'q QueryNode,
    term_frequency: u32,
    boost: f64,
}


fn collect_leaves<'q>(node: &'q QueryNode, index: &EphemeralIndex, leaves: &mut Vec<ScoredLeaf<'q>>) {
    match *node {
        QueryNode::Term{boost, ..} | QueryNode::Phrase{boost, ..} => {
            leaves.push(ScoredLeaf {
                leaf: node,
                term_frequency: node.leaf_frequency(index).unwrap_or(0),
                boost: boost,
            });
        }
        QueryNode::And{ref children} | QueryNode::Or{ref children} => {
            for child in children {
                collect_leaves(child, index, leaves);
            }
        }
        QueryNode::Not{..} => {}
    }
}


fn scored_leaves<'q>(query: &'q QueryNode, index: &EphemeralIndex) -> Vec<ScoredLeaf<'q>> {
    let mut leaves = Vec::new();
    collect_leaves(query, index, &mut leaves);
    leaves
}


pub fn score(index: &EphemeralIndex, query: &QueryNode) -> f64 {
    if !query.matches(index) {
        return 0.0f64;
    }

    let similarity = SimilarityModel;
    let leaves = scored_leaves(query, index);

    let mut matched = 0;
    let mut term_scores_sum = 0.0f64;
    for leaf in leaves.iter().filter(|leaf| leaf.term_frequency > 0) {
        matched += 1;
        term_scores_sum += similarity.term_score(leaf.term_frequency, leaf.boost);
    }

    similarity.score(term_scores_sum, matched, leaves.len(), index.length())
}


pub fn explain(index: &EphemeralIndex, query: &QueryNode) -> Explanation {
    let similarity = SimilarityModel;
    let matches = query.matches(index);
    let leaves = scored_leaves(query, index);

    let mut matched = 0;
    let mut term_scores_sum = 0.0f64;
    let mut leaf_explanations = Vec::with_capacity(leaves.len());

    for leaf in leaves.iter() {
        let leaf_score = if leaf.term_frequency > 0 {
            let term_score = similarity.term_score(leaf.term_frequency, leaf.boost);
            matched += 1;
            term_scores_sum += term_score;
            term_score
        } else {
            0.0f64
        };

        leaf_explanations.push(LeafExplanation {
            query: leaf.leaf.to_string(),
            term_frequency: leaf.term_frequency,
            boost: leaf.boost,
            score: leaf_score,
        });
    }

    let score = if matches {
        similarity.score(term_scores_sum, matched, leaves.len(), index.length())
    } else {
        0.0f64
    };

    Explanation {
        score: score,
        matches: matches,
        coord: coord(matched, leaves.len()),
        length_norm: length_norm(index.length()),
        length: index.length(),
        leaves: leaf_explanations,
    }
}
