//! Ahead-of-time metainfo decoding.
//!
//! The decoder knows the handful of keys it cares about up front. It walks
//! the input once, tracking only the kind of each open container, and writes
//! recognised values straight into a [`MetaInfo`] as borrowed slices. No
//! intermediate value tree is built and nothing is allocated.

use super::error::{DecodeError, ErrorKind};
use super::scan::{scan_integer, scan_length_prefixed_string};
use super::stack::{Stack, MAX_DEPTH};
use super::term::{Term, END_TERM, OPEN_DICT, OPEN_INTEGER, OPEN_LIST};
use crate::torrent::MetaInfo;

/// Inputs at least this long are rejected, offsets must fit in a u32.
pub const MAX_INPUT_LEN: usize = 0x7FFF_FFFE;

/// Destination of the next string value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StringSlot {
    Announce,
    Comment,
    Name,
    Pieces,
}

impl StringSlot {
    fn for_key(key: &[u8]) -> Option<StringSlot> {
        match key {
            b"announce" => Some(StringSlot::Announce),
            b"comment" => Some(StringSlot::Comment),
            b"name" => Some(StringSlot::Name),
            b"pieces" => Some(StringSlot::Pieces),
            _ => None,
        }
    }

    fn apply<'a>(self, meta: &mut MetaInfo<'a>, value: &'a [u8]) {
        match self {
            StringSlot::Announce => meta.announce = Some(value),
            StringSlot::Comment => meta.comment = Some(value),
            StringSlot::Name => meta.info.name = value,
            StringSlot::Pieces => meta.info.pieces = value,
        }
    }
}

/// Destination of the next integer value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IntegerSlot {
    Length,
    PieceLength,
}

impl IntegerSlot {
    fn for_key(key: &[u8]) -> Option<IntegerSlot> {
        match key {
            b"length" => Some(IntegerSlot::Length),
            b"piece length" => Some(IntegerSlot::PieceLength),
            _ => None,
        }
    }

    fn apply(self, meta: &mut MetaInfo<'_>, value: u64) {
        match self {
            IntegerSlot::Length => meta.info.length = value,
            IntegerSlot::PieceLength => meta.info.piece_length = value,
        }
    }
}

/// Decodes a .torrent file into `meta`.
///
/// Keys are matched by text alone, whatever dictionary they appear in: a
/// `name` inside some nested dictionary overwrites the one from `info`.
/// On error `meta` may have been partially written.
pub fn decode_metainfo<'a>(meta: &mut MetaInfo<'a>, input: &'a [u8]) -> Result<(), DecodeError> {
    decode_bounded(meta, input, MAX_INPUT_LEN)
}

fn decode_bounded<'a>(
    meta: &mut MetaInfo<'a>,
    input: &'a [u8],
    max_len: usize,
) -> Result<(), DecodeError> {
    if input.len() >= max_len {
        log::debug!("refusing to decode {} byte input", input.len());
        return Err(DecodeError::new(ErrorKind::InputTooLong, 0, None));
    }

    if input.first() != Some(&OPEN_DICT) {
        return Err(DecodeError::new(ErrorKind::NoTopLevelDict, 0, None));
    }

    // offsets below max_len always fit in a u32
    let fail = |kind: ErrorKind, at: usize, term: Option<Term>| {
        let err = DecodeError::new(kind, at as u32, term);
        log::debug!("{}", err);
        err
    };

    let mut stack = Stack::new();
    stack.push(Term::Dictionary);

    let mut next_string: Option<StringSlot> = None;
    let mut next_integer: Option<IntegerSlot> = None;

    let mut info_start: Option<usize> = None;
    let mut info_end: Option<usize> = None;

    let mut i = 1;
    while i < input.len() {
        // the top-level dictionary has already been closed
        if stack.depth() == 0 {
            return Err(fail(ErrorKind::Confusion, i, None));
        }

        match input[i] {
            c @ (OPEN_LIST | OPEN_DICT) => {
                let term = if c == OPEN_LIST {
                    Term::List
                } else {
                    Term::Dictionary
                };
                if stack.depth() >= MAX_DEPTH {
                    return Err(fail(ErrorKind::TermDepthLimit, i, Some(term)));
                }
                stack.push(term);
                i += 1;
            }
            OPEN_INTEGER => {
                let (value, consumed) = scan_integer(&input[i + 1..]);

                if let Some(slot) = next_integer.take() {
                    slot.apply(meta, value as u64);
                }

                i += consumed + 1;
                if input.get(i) != Some(&END_TERM) {
                    return Err(fail(ErrorKind::UnexpectedEndOfTerm, i, Some(Term::Integer)));
                }
                i += 1;
            }
            b'0'..=b'9' => {
                let (bytes, consumed) = scan_length_prefixed_string(&input[i..])
                    .map_err(|_| fail(ErrorKind::UnexpectedEndOfTerm, i, Some(Term::String)))?;
                i += consumed;

                // list elements are never interesting
                if stack.top() != Term::Dictionary {
                    continue;
                }

                if let Some(slot) = next_string.take() {
                    slot.apply(meta, bytes);
                    continue;
                }

                // anything else is a key; the first top-level info dictionary wins
                if info_start.is_none()
                    && bytes == b"info"
                    && stack.depth() == 1
                    && input.get(i) == Some(&OPEN_DICT)
                {
                    info_start = Some(i);
                }

                if let Some(slot) = IntegerSlot::for_key(bytes) {
                    next_integer = Some(slot);
                } else if let Some(slot) = StringSlot::for_key(bytes) {
                    next_string = Some(slot);
                }
            }
            END_TERM => {
                stack.pop();
                i += 1;

                if stack.depth() == 1 && info_start.is_some() && info_end.is_none() {
                    info_end = Some(i);
                }
            }
            _ => return Err(fail(ErrorKind::Confusion, i, None)),
        }
    }

    if stack.depth() > 0 {
        return Err(fail(
            ErrorKind::UnexpectedEndOfTerm,
            input.len(),
            Some(stack.top()),
        ));
    }

    if let (Some(start), Some(end)) = (info_start, info_end) {
        log::trace!("info dictionary spans bytes {}..{}", start, end);
        meta.info_dict = input.get(start..end);
    }

    Ok(())
}
