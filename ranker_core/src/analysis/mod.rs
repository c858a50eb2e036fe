//! The analysis module
//!
//! This module provides a library of tools for breaking down a string of text
//! into Tokens.
//!
//! These tools are sorted into four categories:
//!
//!  - Character filters rewrite the raw input before it is tokenised
//!  - Tokenisers split a string of text into a stream of tokens
//!  - Filters apply transformations to streams of tokens
//!  - Analyzers are a combination of the above

pub mod char_filters;
pub mod tokenizers;
pub mod filters;

use std::borrow::Cow;

use crate::token::Token;
use crate::analysis::char_filters::CharFilterSpec;
use crate::analysis::tokenizers::TokenizerSpec;
use crate::analysis::filters::FilterSpec;


/// Defines an analyzer
///
/// Analyzers hold no state between calls, each call to `analyze` returns a new,
/// independent token stream.
///
/// # Examples
///
/// ```
/// use ranker_core::Token;
/// use ranker_core::analysis::Analyzer;
///
/// let analyzer = Analyzer::default();
///
/// let tokens = analyzer.analyze("<p>Hello, <b>WORLD</b>!</p>").collect::<Vec<Token>>();
///
/// assert_eq!(tokens, vec![
///     Token::new("hello", 0),
///     Token::new("world", 1),
/// ]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Analyzer {
    pub char_filters: Vec<CharFilterSpec>,
    pub tokenizer: TokenizerSpec,
    pub filters: Vec<FilterSpec>,
}


impl Analyzer {
    /// Strips HTML, splits on non-alphanumeric characters and lowercases
    pub fn html() -> Analyzer {
        Analyzer {
            char_filters: vec![
                CharFilterSpec::HtmlStrip,
            ],
            tokenizer: TokenizerSpec::Standard,
            filters: vec![
                FilterSpec::Lowercase,
            ],
        }
    }

    pub fn analyze<'a>(&self, input: &'a str) -> Box<dyn Iterator<Item=Token> + 'a> {
        let mut text = Cow::Borrowed(input);

        for char_filter in self.char_filters.iter() {
            text = char_filter.initialise(text);
        }

        let mut analyzer = self.tokenizer.initialise(text);

        for filter in self.filters.iter() {
            analyzer = filter.initialise(analyzer);
        }

        analyzer
    }
}


impl Default for Analyzer {
    fn default() -> Analyzer {
        Analyzer::html()
    }
}
