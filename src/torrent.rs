use crate::bencode::aot::decode_metainfo;
use crate::bencode::error::{DecodeError, ErrorKind};
use anyhow::{Context, Result};
use sha1::{Digest, Sha1};
use std::path::Path;

/// The info dictionary of a single file torrent.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Info<'a> {
    /// suggested name of the file
    pub name: &'a [u8],
    /// length of the file in bytes
    pub length: u64,
    /// number of bytes in each piece
    pub piece_length: u64,
    /// concatenation of the 20-byte SHA1 hash of every piece
    pub pieces: &'a [u8],
}

impl<'a> Info<'a> {
    pub fn piece_hashes(&self) -> impl Iterator<Item = &'a [u8; 20]> {
        self.pieces
            .chunks_exact(20)
            .filter_map(|chunk| chunk.try_into().ok())
    }

    pub fn piece_count(&self) -> usize {
        self.pieces.len() / 20
    }
}

/// The fields of a .torrent file needed to announce to a tracker.
///
/// Every byte field borrows from the input it was decoded from, so a
/// `MetaInfo` cannot outlive that buffer.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MetaInfo<'a> {
    /// the announce URL of the tracker
    pub announce: Option<&'a [u8]>,
    /// (optional) free-form textual comments of the author
    pub comment: Option<&'a [u8]>,
    /// exact encoded bytes of the info dictionary, `d` through `e`
    pub info_dict: Option<&'a [u8]>,
    pub info: Info<'a>,
}

impl<'a> MetaInfo<'a> {
    pub fn from_bytes(bytes: &'a [u8]) -> Result<Self, DecodeError> {
        let mut meta = MetaInfo::default();
        decode_metainfo(&mut meta, bytes)?;
        Ok(meta)
    }

    /// The tracker URL, or `NoAnnounce` if the file did not carry one.
    pub fn announce(&self) -> Result<&'a [u8], DecodeError> {
        self.announce
            .ok_or_else(|| DecodeError::new(ErrorKind::NoAnnounce, 0, None))
    }

    /// SHA1 of the raw info dictionary, as sent to trackers and peers.
    pub fn info_hash(&self) -> Option<[u8; 20]> {
        let info_dict = self.info_dict?;
        let mut hasher = Sha1::new();
        hasher.update(info_dict);
        Some(hasher.finalize().into())
    }
}

/// Reads a whole .torrent file into memory.
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)
        .with_context(|| format!("failed to read torrent file {}", path.display()))?;
    log::debug!("read {} bytes from {}", bytes.len(), path.display());
    Ok(bytes)
}
