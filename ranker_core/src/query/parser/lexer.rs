//! Splits a query string into tokens

use crate::query::parser::ParseError;


#[derive(Debug, Clone, PartialEq)]
pub enum QueryToken {
    Word(String),
    Phrase(String),
    /// Raw text following a '^'
    Boost(String),
    LeftParen,
    RightParen,
    And,
    Or,
    Not,
}


impl QueryToken {
    #[inline]
    pub fn is_leaf(&self) -> bool {
        match *self {
            QueryToken::Word(_) | QueryToken::Phrase(_) => true,
            _ => false,
        }
    }

    /// True if this token can begin an operand
    #[inline]
    pub fn starts_operand(&self) -> bool {
        match *self {
            QueryToken::Word(_) | QueryToken::Phrase(_) | QueryToken::LeftParen | QueryToken::Not => true,
            _ => false,
        }
    }

    #[inline]
    fn accepts_boost(&self) -> bool {
        match *self {
            QueryToken::Word(_) | QueryToken::Phrase(_) | QueryToken::RightParen => true,
            _ => false,
        }
    }
}


#[inline]
fn is_boundary(c: char) -> bool {
    c.is_whitespace() || c == '(' || c == ')' || c == '"' || c == '^'
}


/// Reads a word starting at `start`, returns the word, whether any character
/// was escaped, and the index after the word
fn read_word(chars: &[char], start: usize) -> (String, bool, usize) {
    let mut word = String::new();
    let mut escaped = false;
    let mut i = start;

    while i < chars.len() && !is_boundary(chars[i]) {
        if chars[i] == '\\' && i + 1 < chars.len() {
            word.push(chars[i + 1]);
            escaped = true;
            i += 2;
        } else {
            word.push(chars[i]);
            i += 1;
        }
    }

    (word, escaped, i)
}


/// Reads a quoted phrase body, `start` is the index after the opening quote
fn read_phrase(chars: &[char], start: usize) -> Result<(String, usize), ParseError> {
    let mut body = String::new();
    let mut i = start;

    while i < chars.len() {
        match chars[i] {
            '\\' if i + 1 < chars.len() => {
                body.push(chars[i + 1]);
                i += 2;
            }
            '"' => return Ok((body, i + 1)),
            c => {
                body.push(c);
                i += 1;
            }
        }
    }

    Err(ParseError::UnbalancedGrouping)
}


pub fn tokenize(query: &str) -> Result<Vec<QueryToken>, ParseError> {
    let chars = query.chars().collect::<Vec<char>>();
    let mut tokens: Vec<QueryToken> = Vec::new();

    // Set when the previous token ends directly before the current character
    let mut adjacent = false;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            adjacent = false;
            i += 1;
            continue;
        }

        match c {
            '(' => {
                tokens.push(QueryToken::LeftParen);
                i += 1;
            }
            ')' => {
                tokens.push(QueryToken::RightParen);
                i += 1;
            }
            '"' => {
                let (body, end) = read_phrase(&chars, i + 1)?;
                tokens.push(QueryToken::Phrase(body));
                i = end;
            }
            '^' => {
                let boostable = adjacent && tokens.last().map_or(false, QueryToken::accepts_boost);
                if !boostable {
                    return Err(ParseError::InvalidBoost);
                }

                let start = i + 1;
                let mut end = start;
                while end < chars.len() && !is_boundary(chars[end]) {
                    end += 1;
                }

                if end == start {
                    return Err(ParseError::InvalidBoost);
                }

                tokens.push(QueryToken::Boost(chars[start..end].iter().collect()));
                i = end;
            }
            '&' if chars.get(i + 1) == Some(&'&') => {
                tokens.push(QueryToken::And);
                i += 2;
            }
            '|' if chars.get(i + 1) == Some(&'|') => {
                tokens.push(QueryToken::Or);
                i += 2;
            }
            '!' | '-' => {
                tokens.push(QueryToken::Not);
                i += 1;
            }
            _ => {
                let (word, escaped, end) = read_word(&chars, i);

                tokens.push(match word.as_str() {
                    "AND" if !escaped => QueryToken::And,
                    "OR" if !escaped => QueryToken::Or,
                    "NOT" if !escaped => QueryToken::Not,
                    _ => QueryToken::Word(word),
                });
                i = end;
            }
        }

        adjacent = true;
    }

    Ok(tokens)
}
