/// Worst case size of an escaped 20-byte identifier: every byte as `%XX`.
pub const MAX_ESCAPED_LEN: usize = 60;

const UPPER_HEX: &[u8; 16] = b"0123456789ABCDEF";

/// Query-escapes a 20-byte info hash or peer id into `dst`.
///
/// Alphanumerics and `-_.~` are copied, a space becomes `+`, every other
/// byte becomes `%XX`. Returns the number of bytes written, between 20 and
/// [`MAX_ESCAPED_LEN`]. `dst` must hold at least `MAX_ESCAPED_LEN` bytes.
pub fn escape_identifier(dst: &mut [u8], src: &[u8; 20]) -> usize {
    let mut j = 0;
    for &c in src {
        match c {
            b' ' => {
                dst[j] = b'+';
                j += 1;
            }
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                dst[j] = c;
                j += 1;
            }
            _ => {
                dst[j] = b'%';
                dst[j + 1] = UPPER_HEX[(c >> 4) as usize];
                dst[j + 2] = UPPER_HEX[(c & 15) as usize];
                j += 3;
            }
        }
    }
    j
}
