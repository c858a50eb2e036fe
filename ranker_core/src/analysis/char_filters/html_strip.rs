//! Removes HTML markup from a string before it is tokenised
//!
//! Tags and comments are replaced with a single space so that text from
//! neighbouring elements doesn't run together. The contents of `<script>` and
//! `<style>` elements are dropped. Character entities are decoded.

use std::borrow::Cow;
use std::char;


/// Entities longer than this are treated as literal text
const MAX_ENTITY_LENGTH: usize = 32;


#[inline]
fn needs_stripping(input: &str) -> bool {
    input.contains(|c: char| c == '<' || c == '&')
}


pub fn strip_html(input: &str) -> Cow<str> {
    if !needs_stripping(input) {
        return Cow::Borrowed(input);
    }

    let mut scanner = TagScanner::new(input);
    let mut output = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(index) = rest.find(|c: char| c == '<' || c == '&') {
        output.push_str(&rest[..index]);
        rest = &rest[index..];

        rest = if rest.starts_with('<') {
            scanner.strip_markup(rest, input.len() - rest.len(), &mut output)
        } else {
            decode_entity(rest, &mut output)
        };
    }

    output.push_str(rest);
    Cow::Owned(output)
}


pub fn strip_html_owned(input: String) -> String {
    if !needs_stripping(&input) {
        return input;
    }

    strip_html(&input).into_owned()
}


/// Finds the ends of tags
///
/// Every scan either consumes the text it looks at or fails in constant time,
/// so stripping stays linear in the length of the input.
struct TagScanner {
    /// Byte offset of the last '>' in the input
    last_close: Option<usize>,
    /// Set once a quote-aware scan has run off the end of the input, from then
    /// on quotes are ignored
    ignore_quotes: bool,
}


impl TagScanner {
    fn new(input: &str) -> TagScanner {
        TagScanner {
            last_close: input.rfind('>'),
            ignore_quotes: false,
        }
    }

    /// Consumes the markup at the start of `input` (which begins with '<' and
    /// sits at `offset` in the document) and returns what's left
    fn strip_markup<'a>(&mut self, input: &'a str, offset: usize, output: &mut String) -> &'a str {
        if input.starts_with("<!--") {
            // An unterminated comment runs to the end of the document
            return match input[4..].find("-->") {
                Some(end) => {
                    output.push(' ');
                    &input[4 + end + 3..]
                }
                None => "",
            };
        }

        let starts_tag = match input[1..].chars().next() {
            Some(c) => c.is_ascii_alphabetic() || c == '/' || c == '!' || c == '?',
            None => false,
        };

        let tag_end = if starts_tag { self.find_tag_end(input, offset) } else { None };

        let tag_end = match tag_end {
            Some(tag_end) => tag_end,
            None => {
                // Not markup, keep the '<'
                output.push('<');
                return &input[1..];
            }
        };

        output.push(' ');
        let tag = &input[1..tag_end];
        let rest = &input[tag_end + 1..];

        match raw_text_element(tag) {
            Some(name) => {
                let closing = format!("</{}", name);

                match find_ignore_ascii_case(rest, &closing) {
                    Some(start) => {
                        let after_closing = &rest[start..];
                        let after_offset = offset + tag_end + 1 + start;

                        match self.find_tag_end(after_closing, after_offset) {
                            Some(end) => &after_closing[end + 1..],
                            None => "",
                        }
                    }
                    None => "",
                }
            }
            None => rest,
        }
    }

    /// Finds the '>' that closes the tag at the start of `input`, skipping over
    /// quoted attribute values
    fn find_tag_end(&mut self, input: &str, offset: usize) -> Option<usize> {
        match self.last_close {
            Some(last_close) if last_close > offset => {}
            _ => return None,
        }

        if !self.ignore_quotes {
            match find_quoted_tag_end(input) {
                Some(end) => return Some(end),
                None => self.ignore_quotes = true,
            }
        }

        input.find('>')
    }
}


fn find_quoted_tag_end(input: &str) -> Option<usize> {
    let mut quote = None;

    for (index, byte) in input.bytes().enumerate().skip(1) {
        match quote {
            Some(q) if byte == q => quote = None,
            Some(_) => {}
            None => {
                match byte {
                    b'"' | b'\'' => quote = Some(byte),
                    b'>' => return Some(index),
                    _ => {}
                }
            }
        }
    }

    None
}


/// Returns the element name if the tag opens an element whose contents are
/// not document text
fn raw_text_element(tag: &str) -> Option<&'static str> {
    if tag.ends_with('/') {
        return None;
    }

    let name_end = tag.find(|c: char| !c.is_ascii_alphanumeric()).unwrap_or(tag.len());
    let name = &tag[..name_end];

    if name.eq_ignore_ascii_case("script") {
        Some("script")
    } else if name.eq_ignore_ascii_case("style") {
        Some("style")
    } else {
        None
    }
}


fn find_ignore_ascii_case(haystack: &str, needle: &str) -> Option<usize> {
    haystack.as_bytes()
        .windows(needle.len())
        .position(|window| window.eq_ignore_ascii_case(needle.as_bytes()))
}


/// Decodes the entity at the start of `input` (which begins with '&') and
/// returns what's left
fn decode_entity<'a>(input: &'a str, output: &mut String) -> &'a str {
    let semicolon = input.bytes().take(MAX_ENTITY_LENGTH).position(|b| b == b';');

    let semicolon = match semicolon {
        Some(semicolon) if semicolon > 1 => semicolon,
        _ => {
            output.push('&');
            return &input[1..];
        }
    };

    let entity = &input[1..semicolon];

    if entity.starts_with('#') {
        let number = &entity[1..];
        let value = if number.starts_with('x') || number.starts_with('X') {
            u32::from_str_radix(&number[1..], 16).ok()
        } else {
            number.parse::<u32>().ok()
        };

        match value.and_then(char::from_u32) {
            Some(c) => output.push(c),
            None => output.push(' '),
        }
    } else if entity.chars().all(|c| c.is_ascii_alphanumeric()) {
        output.push(match entity {
            "amp" => '&',
            "lt" => '<',
            "gt" => '>',
            "quot" => '"',
            "apos" => '\'',
            _ => ' ',
        });
    } else {
        output.push('&');
        return &input[1..];
    }

    &input[semicolon + 1..]
}
