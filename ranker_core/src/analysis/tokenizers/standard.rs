//! Splits strings by word boundaries, according to the Unicode Standard [Annex #29](http://unicode.org/reports/tr29/) rules
//!
//! Words are split again at any character that isn't alphanumeric, so "can't"
//! becomes "can" and "t". Every token is a non-empty run of alphanumeric
//! characters.

use unicode_segmentation::{UnicodeSegmentation, UnicodeWords};

use crate::token::Token;


pub struct StandardTokenizer<'a> {
    words: UnicodeWords<'a>,
    /// What's left of the current word
    word_rest: &'a str,
    position_counter: u32,
}


impl<'a> StandardTokenizer<'a> {
    pub fn new(input: &'a str) -> StandardTokenizer<'a> {
        StandardTokenizer {
            words: input.unicode_words(),
            word_rest: "",
            position_counter: 0,
        }
    }
}


impl<'a> Iterator for StandardTokenizer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            if let Some(run_start) = self.word_rest.find(|c: char| c.is_alphanumeric()) {
                let run = &self.word_rest[run_start..];
                let run_length = run.find(|c: char| !c.is_alphanumeric()).unwrap_or(run.len());
                self.word_rest = &run[run_length..];

                let position = self.position_counter;
                self.position_counter += 1;

                return Some(Token {
                    term: run[..run_length].to_string(),
                    position: position,
                });
            }

            self.word_rest = self.words.next()?;
        }
    }
}
