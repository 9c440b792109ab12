use rand::Rng;

/// Azureus-style client prefix: client "QM", version 0.1.0.0
pub const PEER_ID_PREFIX: &[u8; 8] = b"-QM0100-";

pub fn generate_peer_id() -> [u8; 20] {
    let mut peer_id = [0u8; 20];
    peer_id[..8].copy_from_slice(PEER_ID_PREFIX);
    let mut rng = rand::thread_rng();
    rng.fill(&mut peer_id[8..]);
    peer_id
}
