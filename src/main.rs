use anyhow::{anyhow, Context, Result};
use clap::Parser;
use quickmeta::torrent::{self, MetaInfo};
use quickmeta::DecodeError;
use quickmeta::tracker::http::{build_announce_url, AnnounceEvent, AnnounceRequest, URL_BUFFER_LEN};
use quickmeta::utils;

#[derive(Parser, Debug)]
struct Cli {
    #[clap(short, long, help = "path to *.torrent file")]
    file: String,
    #[clap(short, long, default_value = "6881")]
    port: u16,
    #[clap(short, long, default_value = "50", help = "number of peers to ask for")]
    numwant: u64,
    #[clap(short, long, default_value = "started", help = "stopped, started or completed")]
    event: AnnounceEvent,
    #[clap(long, default_value = "0")]
    uploaded: u64,
    #[clap(long, default_value = "0")]
    downloaded: u64,
    #[clap(long, help = "bytes left to download, defaults to the torrent length")]
    left: Option<u64>,
}

/// Names the file and shows the bytes around the failure, caret under the
/// offending byte.
fn decode_context(file: &str, err: &DecodeError, bytes: &[u8]) -> String {
    let (snippet, caret) = err.excerpt(bytes);
    format!("failed to decode {}\n{}\n{}", file, snippet, caret)
}

fn main() -> Result<()> {
    let args = Cli::parse();
    log::debug!("{:?}", args);

    let bytes = torrent::read_file(&args.file)?;

    let meta = match MetaInfo::from_bytes(&bytes) {
        Ok(meta) => meta,
        Err(err) => {
            let context = decode_context(&args.file, &err, &bytes);
            return Err(err).context(context);
        }
    };

    let announce = meta.announce()?;
    let info_hash = meta
        .info_hash()
        .ok_or_else(|| anyhow!("{} has no info dictionary", args.file))?;
    log::info!(
        "decoded {} ({} bytes, {} pieces)",
        String::from_utf8_lossy(meta.info.name),
        meta.info.length,
        meta.info.piece_count()
    );

    let mut req = AnnounceRequest::new(info_hash, utils::generate_peer_id(), args.port);
    req.set_uploaded(args.uploaded);
    req.set_downloaded(args.downloaded);
    req.set_left(args.left.unwrap_or(meta.info.length));
    req.set_numwant(args.numwant);
    req.set_event(args.event);

    let mut buf = [0u8; URL_BUFFER_LEN];
    let url = build_announce_url(&mut buf, announce, &req)
        .ok_or_else(|| anyhow!("announce url does not fit in {} bytes", URL_BUFFER_LEN))?;

    println!("{}", String::from_utf8_lossy(url));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_failure_shows_excerpt() {
        let bytes = b"d8:announce3:fooxe";
        let err = MetaInfo::from_bytes(bytes).unwrap_err();
        let context = decode_context("bad.torrent", &err, bytes);
        assert_eq!(
            context,
            "failed to decode bad.torrent\nounce3:fooxe\n          ^"
        );

        // the decode error itself stays the cause
        let report = format!("{:#}", Err::<(), _>(err).context(context).unwrap_err());
        assert!(report.starts_with("failed to decode bad.torrent\n"));
        assert!(report.ends_with("error decoding bencode object: confusion"));
    }
}
