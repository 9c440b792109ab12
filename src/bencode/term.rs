use std::fmt;

pub const OPEN_LIST: u8 = b'l';
pub const OPEN_DICT: u8 = b'd';
pub const OPEN_INTEGER: u8 = b'i';
pub const END_TERM: u8 = b'e';
pub const STRING_DELIMITER: u8 = b':';

/// kind of bencode term, used as a tag on the nesting stack and in errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Term {
    #[default]
    String,
    Integer,
    List,
    Dictionary,
    /// the `<length>:` prefix of a string
    StringHeader,
}

impl Term {
    pub fn as_str(&self) -> &'static str {
        match self {
            Term::String => "string",
            Term::Integer => "int",
            Term::List => "list",
            Term::Dictionary => "dict",
            Term::StringHeader => "string_header",
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
