#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub term: String,
    pub position: u32,
}


impl Token {
    pub fn new<T: Into<String>>(term: T, position: u32) -> Token {
        Token {
            term: term.into(),
            position: position,
        }
    }
}
