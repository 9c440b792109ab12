use crate::tracker::decimal::{decimal_length, write_decimal};
use crate::tracker::escape::{escape_identifier, MAX_ESCAPED_LEN};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Size of a [`UrlBuffer`], large enough for any sane announce URL.
pub const URL_BUFFER_LEN: usize = 2048;

/// Working space for [`build_announce_url`].
pub type UrlBuffer = [u8; URL_BUFFER_LEN];

// query param keys, in the order they are written
const INFO_HASH: &[u8] = b"info_hash";
const PEER_ID: &[u8] = b"peer_id";
const DOWNLOADED: &[u8] = b"downloaded";
const UPLOADED: &[u8] = b"uploaded";
const NUMWANT: &[u8] = b"numwant";
const PORT: &[u8] = b"port";
const LEFT: &[u8] = b"left";
const EVENT: &[u8] = b"event";

/// longest rendering of an [`AnnounceEvent`]
const MAX_EVENT_LEN: usize = "completed".len();

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnnounceEvent {
    /// must be sent when the client quits a download
    #[default]
    Stopped,
    /// must be sent with the first request to the tracker
    Started,
    /// must be sent when the download completes, but not if it was already
    /// complete when the client started
    Completed,
}

impl AnnounceEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnnounceEvent::Stopped => "stopped",
            AnnounceEvent::Started => "started",
            AnnounceEvent::Completed => "completed",
        }
    }
}

/// Maps the numeric event codes 0, 1 and 2. Anything else is `Stopped`.
impl From<u8> for AnnounceEvent {
    fn from(code: u8) -> Self {
        match code {
            1 => AnnounceEvent::Started,
            2 => AnnounceEvent::Completed,
            _ => AnnounceEvent::Stopped,
        }
    }
}

impl fmt::Display for AnnounceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown announce event {0:?}, expected stopped, started or completed")]
pub struct ParseEventError(String);

impl FromStr for AnnounceEvent {
    type Err = ParseEventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stopped" => Ok(AnnounceEvent::Stopped),
            "started" => Ok(AnnounceEvent::Started),
            "completed" => Ok(AnnounceEvent::Completed),
            _ => Err(ParseEventError(s.to_string())),
        }
    }
}

/// The query parameters of an announce to an HTTP tracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnounceRequest {
    pub info_hash: [u8; 20],
    pub peer_id: [u8; 20],
    /// port the client listens on
    pub port: u16,
    pub uploaded: u64,
    pub downloaded: u64,
    /// bytes still to download until completion
    pub left: u64,
    /// number of peers wanted from the tracker
    pub numwant: u64,
    pub event: AnnounceEvent,
}

impl AnnounceRequest {
    pub fn new(info_hash: [u8; 20], peer_id: [u8; 20], port: u16) -> AnnounceRequest {
        AnnounceRequest {
            info_hash,
            peer_id,
            port,
            uploaded: 0,
            downloaded: 0,
            left: 0,
            numwant: 50,
            event: AnnounceEvent::Started,
        }
    }

    pub fn set_uploaded(&mut self, uploaded: u64) {
        self.uploaded = uploaded;
    }

    pub fn set_downloaded(&mut self, downloaded: u64) {
        self.downloaded = downloaded;
    }

    pub fn set_left(&mut self, left: u64) {
        self.left = left;
    }

    pub fn set_event(&mut self, event: AnnounceEvent) {
        self.event = event;
    }

    pub fn set_numwant(&mut self, numwant: u64) {
        self.numwant = numwant;
    }
}

/// Upper bound on the length of the URL `build_announce_url` writes.
///
/// Identifiers are counted at their worst case escaped size and the event
/// as "completed", integers at their exact rendered size.
pub fn announce_url_bound(announce: &[u8], req: &AnnounceRequest) -> usize {
    let param = |key: &[u8], value_len: usize| key.len() + 1 + value_len;

    announce.len()
        + 1
        + param(INFO_HASH, MAX_ESCAPED_LEN)
        + 1
        + param(PEER_ID, MAX_ESCAPED_LEN)
        + 1
        + param(DOWNLOADED, decimal_length(req.downloaded))
        + 1
        + param(UPLOADED, decimal_length(req.uploaded))
        + 1
        + param(NUMWANT, decimal_length(req.numwant))
        + 1
        + param(PORT, decimal_length(req.port.into()))
        + 1
        + param(LEFT, decimal_length(req.left))
        + 1
        + param(EVENT, MAX_EVENT_LEN)
}

/// Cursor over a buffer that is known to be large enough.
struct UrlWriter<'b> {
    buf: &'b mut [u8],
    n: usize,
}

impl<'b> UrlWriter<'b> {
    fn put(&mut self, bytes: &[u8]) {
        self.buf[self.n..self.n + bytes.len()].copy_from_slice(bytes);
        self.n += bytes.len();
    }

    fn put_byte(&mut self, b: u8) {
        self.buf[self.n] = b;
        self.n += 1;
    }

    fn key(&mut self, separator: u8, key: &[u8]) {
        self.put_byte(separator);
        self.put(key);
        self.put_byte(b'=');
    }

    fn identifier(&mut self, id: &[u8; 20]) {
        self.n += escape_identifier(&mut self.buf[self.n..], id);
    }

    fn decimal(&mut self, x: u64) {
        self.n += write_decimal(&mut self.buf[self.n..], x);
    }

    fn finish(self) -> &'b [u8] {
        let UrlWriter { buf, n } = self;
        &buf[..n]
    }
}

/// Writes the announce URL for `req` into `buf`.
///
/// The length is bounded before anything is written. If the URL might not
/// fit, `buf` is left untouched and `None` is returned.
pub fn build_announce_url<'b>(
    buf: &'b mut [u8],
    announce: &[u8],
    req: &AnnounceRequest,
) -> Option<&'b [u8]> {
    let bound = announce_url_bound(announce, req);
    if bound >= buf.len() {
        log::debug!(
            "announce url needs up to {} bytes, buffer holds {}",
            bound,
            buf.len()
        );
        return None;
    }

    let mut w = UrlWriter { buf, n: 0 };

    // http://bttracker.debian.org:6969/announce
    w.put(announce);

    // ?info_hash=%A9%3E...
    w.key(b'?', INFO_HASH);
    w.identifier(&req.info_hash);

    // &peer_id=-QM0100-...
    w.key(b'&', PEER_ID);
    w.identifier(&req.peer_id);

    // &downloaded=93&uploaded=23&numwant=50&port=6881&left=23904
    w.key(b'&', DOWNLOADED);
    w.decimal(req.downloaded);
    w.key(b'&', UPLOADED);
    w.decimal(req.uploaded);
    w.key(b'&', NUMWANT);
    w.decimal(req.numwant);
    w.key(b'&', PORT);
    w.decimal(req.port.into());
    w.key(b'&', LEFT);
    w.decimal(req.left);

    // &event=completed
    w.key(b'&', EVENT);
    w.put(req.event.as_str().as_bytes());

    Some(w.finish())
}
