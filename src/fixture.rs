//! Metainfo files for tests, encoded with serde_bencode so the bytes are
//! exactly what a standard encoder produces.

use serde::Serialize;
use sha1::{Digest, Sha1};

#[derive(Debug, Serialize)]
pub struct InfoFixture {
    pub length: u64,
    pub name: String,
    #[serde(rename = "piece length")]
    pub piece_length: u64,
    #[serde(with = "serde_bytes")]
    pub pieces: Vec<u8>,
}

#[derive(Debug, Serialize)]
pub struct TorrentFixture {
    pub announce: String,
    pub comment: String,
    #[serde(rename = "created by")]
    pub created_by: String,
    #[serde(rename = "creation date")]
    pub creation_date: i64,
    pub httpseeds: Vec<String>,
    pub info: InfoFixture,
    #[serde(rename = "url-list")]
    pub url_list: Vec<String>,
}

/// Same shape and field values as the debian 12.5.0 netinst torrent. The
/// piece hashes are synthetic.
pub fn debian() -> TorrentFixture {
    let length: u64 = 659554304;
    let piece_length: u64 = 262144;
    let piece_count = length.div_ceil(piece_length) as u32;

    let mut pieces = Vec::with_capacity(piece_count as usize * 20);
    for i in 0..piece_count {
        pieces.extend_from_slice(&Sha1::digest(i.to_be_bytes()));
    }

    TorrentFixture {
        announce: "http://bttracker.debian.org:6969/announce".to_string(),
        comment: "\"Debian CD from cdimage.debian.org\"".to_string(),
        created_by: "mktorrent 1.1".to_string(),
        creation_date: 1707570148,
        httpseeds: vec![
            "https://cdimage.debian.org/cdimage/release/12.5.0/amd64/iso-cd/debian-12.5.0-amd64-netinst.iso".to_string(),
            "https://cdimage.debian.org/cdimage/archive/12.5.0/amd64/iso-cd/debian-12.5.0-amd64-netinst.iso".to_string(),
        ],
        info: InfoFixture {
            length,
            name: "debian-12.5.0-amd64-netinst.iso".to_string(),
            piece_length,
            pieces,
        },
        url_list: vec!["https://cdimage.debian.org/cdimage/release/".to_string()],
    }
}

pub fn encode(torrent: &TorrentFixture) -> Vec<u8> {
    serde_bencode::to_bytes(torrent).unwrap()
}

pub fn debian_bytes() -> Vec<u8> {
    encode(&debian())
}
