//! Base-10 rendering of unsigned integers into caller buffers.

const DIGIT_PAIRS: &[u8; 200] = b"\
0001020304050607080910111213141516171819\
2021222324252627282930313233343536373839\
4041424344454647484950515253545556575859\
6061626364656667686970717273747576777879\
8081828384858687888990919293949596979899";

/// Number of digits in the base-10 rendering of `x`.
pub fn decimal_length(x: u64) -> usize {
    let mut n = 1;
    let mut power: u64 = 10;
    while x >= power {
        n += 1;
        power = match power.checked_mul(10) {
            Some(next) => next,
            None => break,
        };
    }
    n
}

/// Writes `x` in base 10 at the start of `dst`, two digits per division.
///
/// Returns the number of bytes written, always `decimal_length(x)`. Panics
/// if `dst` is shorter than that.
pub fn write_decimal(dst: &mut [u8], x: u64) -> usize {
    let mut scratch = [0u8; 20];
    let mut i = scratch.len();

    let mut rest = x;
    while rest >= 100 {
        let pair = (rest % 100) as usize * 2;
        rest /= 100;
        i -= 2;
        scratch[i] = DIGIT_PAIRS[pair];
        scratch[i + 1] = DIGIT_PAIRS[pair + 1];
    }

    let pair = rest as usize * 2;
    i -= 1;
    scratch[i] = DIGIT_PAIRS[pair + 1];
    if rest >= 10 {
        i -= 1;
        scratch[i] = DIGIT_PAIRS[pair];
    }

    let digits = &scratch[i..];
    dst[..digits.len()].copy_from_slice(digits);
    digits.len()
}
