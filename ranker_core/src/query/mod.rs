pub mod parser;
pub mod matching;

use std::fmt;


#[derive(Debug, Clone, PartialEq)]
pub enum QueryNode {
    Term {
        text: String,
        boost: f64,
    },
    Phrase {
        terms: Vec<String>,
        boost: f64,
    },
    And {
        children: Vec<QueryNode>,
    },
    Or {
        children: Vec<QueryNode>,
    },
    Not {
        child: Box<QueryNode>,
    },
}


impl QueryNode {
    pub fn new_term<T: Into<String>>(text: T) -> QueryNode {
        QueryNode::Term {
            text: text.into(),
            boost: 1.0f64,
        }
    }

    /// Builds a leaf from a list of analyzed terms
    ///
    /// A single term becomes a `Term`, nothing at all becomes `None`.
    pub fn new_phrase(mut terms: Vec<String>) -> Option<QueryNode> {
        match terms.len() {
            0 => None,
            1 => terms.pop().map(QueryNode::new_term),
            _ => {
                Some(QueryNode::Phrase {
                    terms: terms,
                    boost: 1.0f64,
                })
            }
        }
    }

    pub fn new_conjunction(mut children: Vec<QueryNode>) -> Option<QueryNode> {
        match children.len() {
            0 => None,
            // Single query, unpack it from children array and return it
            1 => children.pop(),
            _ => {
                Some(QueryNode::And {
                    children: children,
                })
            }
        }
    }

    pub fn new_disjunction(mut children: Vec<QueryNode>) -> Option<QueryNode> {
        match children.len() {
            0 => None,
            1 => children.pop(),
            _ => {
                Some(QueryNode::Or {
                    children: children,
                })
            }
        }
    }

    /// Negates a query, a double negation cancels out
    pub fn new_negation(child: QueryNode) -> QueryNode {
        match child {
            QueryNode::Not{child} => *child,
            child => {
                QueryNode::Not {
                    child: Box::new(child),
                }
            }
        }
    }

    pub fn boost(&mut self, add_boost: f64) {
        if add_boost == 1.0f64 {
            // This boost query won't have any effect
            return;
        }

        match *self {
            QueryNode::Term{ref mut boost, ..} => {
                *boost *= add_boost;
            }
            QueryNode::Phrase{ref mut boost, ..} => {
                *boost *= add_boost;
            }
            QueryNode::And{ref mut children} => {
                for child in children {
                    child.boost(add_boost);
                }
            }
            QueryNode::Or{ref mut children} => {
                for child in children {
                    child.boost(add_boost);
                }
            }
            QueryNode::Not{ref mut child} => {
                child.boost(add_boost);
            }
        }
    }
}


fn write_boost(f: &mut fmt::Formatter, boost: f64) -> fmt::Result {
    if boost != 1.0f64 {
        write!(f, "^{}", boost)?;
    }

    Ok(())
}


fn write_children(f: &mut fmt::Formatter, children: &[QueryNode], operator: &str) -> fmt::Result {
    write!(f, "(")?;

    for (i, child) in children.iter().enumerate() {
        if i > 0 {
            write!(f, " {} ", operator)?;
        }

        write!(f, "{}", child)?;
    }

    write!(f, ")")
}


/// Renders the query back into query syntax, with group boosts already applied to the leaves
impl fmt::Display for QueryNode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            QueryNode::Term{ref text, boost} => {
                write!(f, "{}", text)?;
                write_boost(f, boost)
            }
            QueryNode::Phrase{ref terms, boost} => {
                write!(f, "\"{}\"", terms.join(" "))?;
                write_boost(f, boost)
            }
            QueryNode::And{ref children} => write_children(f, children, "AND"),
            QueryNode::Or{ref children} => write_children(f, children, "OR"),
            QueryNode::Not{ref child} => write!(f, "NOT {}", child),
        }
    }
}
