pub mod html_strip;

use std::borrow::Cow;

use crate::analysis::char_filters::html_strip::{strip_html, strip_html_owned};


/// Defines a character filter
///
/// Character filters rewrite the raw input string before it reaches the tokenizer
#[derive(Debug, Clone, PartialEq)]
pub enum CharFilterSpec {
    HtmlStrip,
}


impl CharFilterSpec {
    pub fn initialise<'a>(&self, input: Cow<'a, str>) -> Cow<'a, str> {
        match *self {
            CharFilterSpec::HtmlStrip => {
                match input {
                    Cow::Borrowed(input) => strip_html(input),
                    Cow::Owned(input) => Cow::Owned(strip_html_owned(input)),
                }
            }
        }
    }
}
