pub mod standard;

use std::borrow::Cow;

use crate::token::Token;
use crate::analysis::tokenizers::standard::StandardTokenizer;


/// Defines a tokenizer
///
/// You can use this to define a tokenizer before having to bind it to any data
///
/// # Examples
///
/// ```
/// use ranker_core::Token;
/// use ranker_core::analysis::tokenizers::TokenizerSpec;
///
/// let standard_tokenizer = TokenizerSpec::Standard;
/// let token_stream = standard_tokenizer.initialise("Hello, world!".into());
///
/// let tokens = token_stream.collect::<Vec<Token>>();
///
/// assert_eq!(tokens, vec![
///     Token::new("Hello", 0),
///     Token::new("world", 1),
/// ]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum TokenizerSpec {
    Standard,
}


impl TokenizerSpec {
    pub fn initialise<'a>(&self, input: Cow<'a, str>) -> Box<dyn Iterator<Item=Token> + 'a> {
        match *self {
            TokenizerSpec::Standard => {
                match input {
                    Cow::Borrowed(input) => Box::new(StandardTokenizer::new(input)),
                    // The tokenizer can't borrow from a string it would also own
                    Cow::Owned(input) => Box::new(StandardTokenizer::new(&input).collect::<Vec<Token>>().into_iter()),
                }
            }
        }
    }
}
