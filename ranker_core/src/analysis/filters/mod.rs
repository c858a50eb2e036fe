pub mod lowercase;

use crate::token::Token;
use crate::analysis::filters::lowercase::LowercaseFilter;


/// Defines a token filter
///
/// You can use this to define a token filter before having to bind it to any data
///
/// # Examples
///
/// ```
/// use ranker_core::Token;
/// use ranker_core::analysis::tokenizers::TokenizerSpec;
/// use ranker_core::analysis::filters::FilterSpec;
///
/// let standard_tokenizer = TokenizerSpec::Standard;
/// let token_stream = standard_tokenizer.initialise("Hello, WORLD!".into());
///
/// // Lowercase filter
/// let lowercase_filter = FilterSpec::Lowercase;
/// let filtered_token_stream = lowercase_filter.initialise(token_stream);
///
/// let tokens = filtered_token_stream.collect::<Vec<Token>>();
///
/// assert_eq!(tokens, vec![
///     Token::new("hello", 0),
///     Token::new("world", 1),
/// ]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum FilterSpec {
    Lowercase,
}


impl FilterSpec {
    pub fn initialise<'a>(&self, input: Box<dyn Iterator<Item=Token> + 'a>) -> Box<dyn Iterator<Item=Token> + 'a> {
        match *self {
            FilterSpec::Lowercase => {
                Box::new(LowercaseFilter::new(input))
            }
        }
    }
}
