use super::term::Term;
use std::fmt;

/// What went wrong while decoding a metainfo file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// reached the end of a term (or of the input) before it was complete
    UnexpectedEndOfTerm,
    /// lists and dictionaries nested deeper than `MAX_DEPTH`
    TermDepthLimit,
    /// a byte that cannot start any term
    Confusion,
    InputTooLong,
    NoTopLevelDict,
    /// the top-level dictionary has no "announce" key
    NoAnnounce,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::UnexpectedEndOfTerm => "unexpected end of term",
            ErrorKind::TermDepthLimit => "reached maximum term depth limit",
            ErrorKind::Confusion => "confusion",
            ErrorKind::InputTooLong => "input is too long",
            ErrorKind::NoTopLevelDict => "bencode object does not have top-level dict",
            ErrorKind::NoAnnounce => "no announce key",
        }
    }

    /// kinds whose message does not mention a position
    fn is_positionless(&self) -> bool {
        matches!(
            self,
            ErrorKind::InputTooLong
                | ErrorKind::Confusion
                | ErrorKind::NoTopLevelDict
                | ErrorKind::NoAnnounce
        )
    }
}

/// A decode failure: the kind, the byte offset it happened at and the term
/// being parsed, if any. Small enough to pass around by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeError {
    kind: ErrorKind,
    offset: u32,
    term: Option<Term>,
}

impl DecodeError {
    pub fn new(kind: ErrorKind, offset: u32, term: Option<Term>) -> DecodeError {
        DecodeError { kind, offset, term }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// byte offset into the input of the offending byte
    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn term(&self) -> Option<Term> {
        self.term
    }

    /// Returns up to ten bytes either side of the error offset and a second
    /// line with a caret under the offending byte.
    pub fn excerpt(&self, input: &[u8]) -> (String, String) {
        let at = (self.offset as usize).min(input.len());
        let from = at.saturating_sub(10);
        let to = (at + 10).min(input.len());

        let snippet = String::from_utf8_lossy(&input[from..to]).into_owned();
        let caret = format!("{}^", " ".repeat(at - from));
        (snippet, caret)
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error decoding bencode object: {}", self.kind.as_str())?;
        if self.kind.is_positionless() {
            return Ok(());
        }
        write!(
            f,
            " when parsing a {} at character {}",
            self.term.unwrap_or_default(),
            self.offset
        )
    }
}

impl std::error::Error for DecodeError {}
