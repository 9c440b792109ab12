use super::term::STRING_DELIMITER;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScanError {
    #[error("string length is not followed by ':'")]
    MissingDelimiter,
    #[error("string length does not fit in the remaining input")]
    LengthOutOfRange,
}

/// Scans an optional `-` followed by a run of ascii digits.
///
/// Returns the value and the number of bytes consumed. Overflow wraps
/// instead of panicking, bencode lengths are expected to fit in an i64.
pub fn scan_integer(bytes: &[u8]) -> (i64, usize) {
    let mut value: i64 = 0;
    let mut i = 0;
    let negative = bytes.first() == Some(&b'-');
    if negative {
        i += 1;
    }

    while let Some(&c) = bytes.get(i) {
        let digit = c.wrapping_sub(b'0');
        if digit >= 10 {
            break;
        }
        value = value.wrapping_mul(10).wrapping_add(digit as i64);
        i += 1;
    }

    if negative {
        value = value.wrapping_neg();
    }
    (value, i)
}

/// Scans `<length>:<bytes>` and returns a view of the string body together
/// with the total number of bytes consumed.
pub fn scan_length_prefixed_string(bytes: &[u8]) -> Result<(&[u8], usize), ScanError> {
    let (length, digits) = scan_integer(bytes);

    if bytes.get(digits) != Some(&STRING_DELIMITER) {
        return Err(ScanError::MissingDelimiter);
    }

    let start = digits + 1;
    let length = usize::try_from(length).map_err(|_| ScanError::LengthOutOfRange)?;
    if length > bytes.len() - start {
        return Err(ScanError::LengthOutOfRange);
    }

    Ok((&bytes[start..start + length], start + length))
}
