pub mod bencode {
    pub mod aot;
    pub mod error;
    pub mod scan;
    pub mod stack;
    pub mod term;
}

pub mod torrent;
pub mod utils;
pub mod tracker {
    pub mod decimal;
    pub mod escape;
    pub mod http;
}

#[cfg(test)]
mod fixture;

pub use bencode::aot::{decode_metainfo, MAX_INPUT_LEN};
pub use bencode::error::{DecodeError, ErrorKind};
pub use torrent::{Info, MetaInfo};
pub use tracker::http::{build_announce_url, AnnounceEvent, AnnounceRequest, UrlBuffer};
