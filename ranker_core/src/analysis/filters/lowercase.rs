//! Converts each token into lowercase

use crate::token::Token;


pub struct LowercaseFilter<'a> {
    tokens: Box<dyn Iterator<Item=Token> + 'a>,
}


impl<'a> LowercaseFilter<'a> {
    pub fn new(tokens: Box<dyn Iterator<Item=Token> + 'a>) -> LowercaseFilter<'a> {
        LowercaseFilter {
            tokens: tokens,
        }
    }
}


impl<'a> Iterator for LowercaseFilter<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.tokens.next().map(|token| {
            Token {
                term: token.term.to_lowercase(),
                position: token.position,
            }
        })
    }
}
