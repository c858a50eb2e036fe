//! Parses classic boolean query syntax
//!
//! ```text
//! query    := or_expr EOF
//! or_expr  := and_expr ( ( "OR" | "||" | <adjacent> ) and_expr )*
//! and_expr := unary ( ( "AND" | "&&" ) unary )*
//! unary    := ( "NOT" | "!" | "-" ) unary | primary
//! primary  := "(" or_expr ")" boost? | PHRASE boost? | WORD boost?
//! boost    := "^" number
//! ```
//!
//! Words and phrases are run through the same analyzer as the document text.

pub mod lexer;

use std::error::Error;
use std::fmt;
use std::iter::Peekable;
use std::vec;

use log::debug;

use crate::analysis::Analyzer;
use crate::query::QueryNode;
use crate::query::parser::lexer::{tokenize, QueryToken};


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    EmptyQuery,
    UnbalancedGrouping,
    InvalidBoost,
    DanglingNot,
    MissingOperand,
    NestingTooDeep,
}


impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ParseError::EmptyQuery => write!(f, "query has no terms"),
            ParseError::UnbalancedGrouping => write!(f, "unbalanced parentheses or quotes"),
            ParseError::InvalidBoost => write!(f, "boost must be a positive number directly after a term, phrase or group"),
            ParseError::DanglingNot => write!(f, "negated query has nothing to exclude from"),
            ParseError::MissingOperand => write!(f, "operator is missing an operand"),
            ParseError::NestingTooDeep => write!(f, "groups are nested more than {} deep", MAX_GROUP_DEPTH),
        }
    }
}


impl Error for ParseError {}


/// Parentheses may nest this deep
pub const MAX_GROUP_DEPTH: usize = 64;


fn parse_boost(raw: &str) -> Result<f64, ParseError> {
    match raw.parse::<f64>() {
        Ok(boost) if boost.is_finite() && boost > 0.0f64 => Ok(boost),
        _ => Err(ParseError::InvalidBoost),
    }
}


/// Checks parentheses pair up before any parsing takes place
fn check_grouping(tokens: &[QueryToken]) -> Result<(), ParseError> {
    let mut depth = 0usize;

    for token in tokens {
        match *token {
            QueryToken::LeftParen => {
                depth += 1;

                if depth > MAX_GROUP_DEPTH {
                    return Err(ParseError::NestingTooDeep);
                }
            }
            QueryToken::RightParen => {
                depth = depth.checked_sub(1).ok_or(ParseError::UnbalancedGrouping)?;
            }
            _ => {}
        }
    }

    if depth == 0 {
        Ok(())
    } else {
        Err(ParseError::UnbalancedGrouping)
    }
}


#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueryParser {
    analyzer: Analyzer,
}


impl QueryParser {
    pub fn new(analyzer: Analyzer) -> QueryParser {
        QueryParser {
            analyzer: analyzer,
        }
    }

    pub fn parse(&self, query: &str) -> Result<QueryNode, ParseError> {
        let tokens = tokenize(query)?;

        if tokens.is_empty() {
            return Err(ParseError::EmptyQuery);
        }

        check_grouping(&tokens)?;

        if !tokens.iter().any(QueryToken::is_leaf) {
            return Err(ParseError::EmptyQuery);
        }

        let mut state = ParserState {
            analyzer: &self.analyzer,
            tokens: tokens.into_iter().peekable(),
            depth: 0,
        };

        let node = state.parse_or()?;

        if state.tokens.next().is_some() {
            return Err(ParseError::UnbalancedGrouping);
        }

        match node {
            Some(QueryNode::Not{..}) => Err(ParseError::DanglingNot),
            Some(node) => {
                debug!("parsed query {:?} as {}", query, node);
                Ok(node)
            }
            None => Err(ParseError::EmptyQuery),
        }
    }
}


/// Parses a query using the default analyzer
pub fn parse(query: &str) -> Result<QueryNode, ParseError> {
    QueryParser::default().parse(query)
}


/// Each parse method returns `None` for an operand whose terms were all
/// removed by analysis, these are dropped from their parent.
struct ParserState<'a> {
    analyzer: &'a Analyzer,
    tokens: Peekable<vec::IntoIter<QueryToken>>,
    depth: usize,
}


impl<'a> ParserState<'a> {
    fn next_starts_operand(&mut self) -> bool {
        self.tokens.peek().map_or(false, QueryToken::starts_operand)
    }

    fn parse_or(&mut self) -> Result<Option<QueryNode>, ParseError> {
        let mut operands = vec![self.parse_and()?];

        loop {
            match self.tokens.peek() {
                Some(&QueryToken::Or) => {
                    self.tokens.next();

                    if !self.next_starts_operand() {
                        return Err(ParseError::MissingOperand);
                    }

                    operands.push(self.parse_and()?);
                }
                // Adjacent operands with no operator between them
                Some(token) if token.starts_operand() => {
                    operands.push(self.parse_and()?);
                }
                _ => break,
            }
        }

        Ok(QueryNode::new_disjunction(operands.into_iter().flatten().collect()))
    }

    fn parse_and(&mut self) -> Result<Option<QueryNode>, ParseError> {
        let mut operands = vec![self.parse_unary()?];

        while let Some(&QueryToken::And) = self.tokens.peek() {
            self.tokens.next();

            if !self.next_starts_operand() {
                return Err(ParseError::MissingOperand);
            }

            operands.push(self.parse_unary()?);
        }

        Ok(QueryNode::new_conjunction(operands.into_iter().flatten().collect()))
    }

    fn parse_unary(&mut self) -> Result<Option<QueryNode>, ParseError> {
        // Only the parity of a run of negations matters
        let mut negated = false;

        while let Some(&QueryToken::Not) = self.tokens.peek() {
            self.tokens.next();

            if !self.next_starts_operand() {
                return Err(ParseError::MissingOperand);
            }

            negated = !negated;
        }

        let node = self.parse_primary()?;

        if negated {
            Ok(node.map(QueryNode::new_negation))
        } else {
            Ok(node)
        }
    }

    fn parse_primary(&mut self) -> Result<Option<QueryNode>, ParseError> {
        let node = match self.tokens.next() {
            Some(QueryToken::Word(word)) => self.analyze(&word),
            Some(QueryToken::Phrase(body)) => self.analyze(&body),
            Some(QueryToken::LeftParen) => {
                self.depth += 1;

                if self.depth > MAX_GROUP_DEPTH {
                    return Err(ParseError::NestingTooDeep);
                }

                let node = match self.tokens.peek() {
                    // "()"
                    Some(&QueryToken::RightParen) => None,
                    _ => self.parse_or()?,
                };

                match self.tokens.next() {
                    Some(QueryToken::RightParen) => {}
                    _ => return Err(ParseError::UnbalancedGrouping),
                }

                self.depth -= 1;
                node
            }
            Some(QueryToken::RightParen) if self.depth == 0 => return Err(ParseError::UnbalancedGrouping),
            Some(QueryToken::Boost(_)) => return Err(ParseError::InvalidBoost),
            _ => return Err(ParseError::MissingOperand),
        };

        self.parse_boost_suffix(node)
    }

    fn parse_boost_suffix(&mut self, node: Option<QueryNode>) -> Result<Option<QueryNode>, ParseError> {
        let boost = match self.tokens.peek() {
            Some(&QueryToken::Boost(ref raw)) => parse_boost(raw)?,
            _ => return Ok(node),
        };

        self.tokens.next();

        Ok(node.map(|mut node| {
            node.boost(boost);
            node
        }))
    }

    fn analyze(&self, text: &str) -> Option<QueryNode> {
        let terms = self.analyzer.analyze(text)
            .map(|token| token.term)
            .collect::<Vec<String>>();

        QueryNode::new_phrase(terms)
    }
}
