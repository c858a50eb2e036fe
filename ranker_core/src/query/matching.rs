use crate::index::{EphemeralIndex, Posting};
use crate::query::QueryNode;


/// Counts the distinct positions where `terms` occur consecutively
pub fn phrase_frequency(index: &EphemeralIndex, terms: &[String]) -> u32 {
    let (first, rest) = match terms.split_first() {
        Some(split) => split,
        None => return 0,
    };

    // Every remaining term must be present at least once
    let postings = match rest.iter().map(|term| index.posting(term)).collect::<Option<Vec<&Posting>>>() {
        Some(postings) => postings,
        None => return 0,
    };

    index.positions(first).iter()
        .filter(|&&start| {
            postings.iter().enumerate().all(|(offset, posting)| {
                match start.checked_add(offset as u32 + 1) {
                    Some(position) => posting.contains_position(position),
                    None => false,
                }
            })
        })
        .count() as u32
}


impl QueryNode {
    /// Term frequency of a leaf, `None` for combinators
    pub fn leaf_frequency(&self, index: &EphemeralIndex) -> Option<u32> {
        match *self {
            QueryNode::Term{ref text, ..} => Some(index.frequency(text)),
            QueryNode::Phrase{ref terms, ..} => Some(phrase_frequency(index, terms)),
            _ => None,
        }
    }

    pub fn matches(&self, index: &EphemeralIndex) -> bool {
        match *self {
            QueryNode::Term{ref text, ..} => index.frequency(text) > 0,
            QueryNode::Phrase{ref terms, ..} => phrase_frequency(index, terms) > 0,
            QueryNode::And{ref children} => {
                for child in children {
                    if !child.matches(index) {
                        return false;
                    }
                }

                true
            }
            QueryNode::Or{ref children} => {
                for child in children {
                    if child.matches(index) {
                        return true;
                    }
                }

                false
            }
            QueryNode::Not{ref child} => !child.matches(index),
        }
    }
}


#[cfg(test)]
mod tests {
    use crate::analysis::Analyzer;
    use crate::index::EphemeralIndex;
    use crate::query::QueryNode;

    use super::phrase_frequency;

    fn make_index(text: &str) -> EphemeralIndex {
        EphemeralIndex::build(Analyzer::default().analyze(text))
    }

    fn terms(terms: &[&str]) -> Vec<String> {
        terms.iter().map(|term| term.to_string()).collect()
    }

    #[test]
    fn test_phrase_frequency() {
        let index = make_index("to be or not to be");

        assert_eq!(phrase_frequency(&index, &terms(&["to", "be"])), 2);
        assert_eq!(phrase_frequency(&index, &terms(&["be", "or", "not"])), 1);
        assert_eq!(phrase_frequency(&index, &terms(&["be", "to"])), 0);
        assert_eq!(phrase_frequency(&index, &terms(&["to", "question"])), 0);
        assert_eq!(phrase_frequency(&index, &terms(&[])), 0);
    }

    #[test]
    fn test_phrase_frequency_repeated_term() {
        let index = make_index("a a a b");

        assert_eq!(phrase_frequency(&index, &terms(&["a", "a"])), 2);
        assert_eq!(phrase_frequency(&index, &terms(&["a", "a", "a", "b"])), 1);
    }

    #[test]
    fn test_term_matches() {
        let index = make_index("the quick brown fox");

        assert!(QueryNode::new_term("fox").matches(&index));
        assert!(!QueryNode::new_term("cat").matches(&index));
    }

    #[test]
    fn test_phrase_matches() {
        let index = make_index("the quick brown fox");

        assert!(QueryNode::new_phrase(terms(&["quick", "brown"])).unwrap().matches(&index));
        assert!(!QueryNode::new_phrase(terms(&["brown", "quick"])).unwrap().matches(&index));
        assert!(!QueryNode::new_phrase(terms(&["quick", "fox"])).unwrap().matches(&index));
    }

    #[test]
    fn test_boolean_matches() {
        let index = make_index("the quick brown fox");

        let and = QueryNode::new_conjunction(vec![QueryNode::new_term("quick"), QueryNode::new_term("cat")]).unwrap();
        assert!(!and.matches(&index));

        let or = QueryNode::new_disjunction(vec![QueryNode::new_term("quick"), QueryNode::new_term("cat")]).unwrap();
        assert!(or.matches(&index));

        let not = QueryNode::new_conjunction(vec![
            QueryNode::new_term("fox"),
            QueryNode::new_negation(QueryNode::new_term("cat")),
        ]).unwrap();
        assert!(not.matches(&index));
    }

    #[test]
    fn test_leaf_frequency() {
        let index = make_index("fox fox quick fox");

        assert_eq!(QueryNode::new_term("fox").leaf_frequency(&index), Some(3));
        assert_eq!(QueryNode::new_phrase(terms(&["fox", "fox"])).unwrap().leaf_frequency(&index), Some(1));
        assert_eq!(QueryNode::new_negation(QueryNode::new_term("fox")).leaf_frequency(&index), None);
    }
}
