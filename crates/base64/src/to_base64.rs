//! Standard base64 encoding.

use crate::constants::{ALPHABET_BYTES, PAD};

/// Two-symbol lookup: a 12-bit value maps to the pair of alphabet bytes
/// encoding its high and low sextets.
static PAIRS: [[u8; 2]; 4096] = {
    let mut table = [[0u8; 2]; 4096];
    let mut i = 0;
    while i < 4096 {
        table[i][0] = ALPHABET_BYTES[i >> 6];
        table[i][1] = ALPHABET_BYTES[i & 0b11_1111];
        i += 1;
    }
    table
};

/// Length of the padded encoding of `len` input bytes.
///
/// ```
/// assert_eq!(text_codec_base64::encoded_len(0), 0);
/// assert_eq!(text_codec_base64::encoded_len(4), 8);
/// ```
pub const fn encoded_len(len: usize) -> usize {
    len.div_ceil(3) * 4
}

fn push_pair(out: &mut String, v: usize) {
    let [a, b] = PAIRS[v];
    out.push(a as char);
    out.push(b as char);
}

/// Encodes a byte slice to a standard base64 string with `=` padding.
///
/// # Example
///
/// ```
/// use text_codec_base64::to_base64;
///
/// assert_eq!(to_base64(b"hello world"), "aGVsbG8gd29ybGQ=");
/// assert_eq!(to_base64(b""), "");
/// ```
pub fn to_base64(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(encoded_len(bytes.len()));

    let mut chunks = bytes.chunks_exact(3);
    for chunk in &mut chunks {
        let (o1, o2, o3) = (chunk[0] as usize, chunk[1] as usize, chunk[2] as usize);
        push_pair(&mut out, (o1 << 4) | (o2 >> 4));
        push_pair(&mut out, ((o2 & 0b1111) << 8) | o3);
    }

    match *chunks.remainder() {
        [] => {}
        [o1] => {
            push_pair(&mut out, (o1 as usize) << 4);
            out.push(PAD);
            out.push(PAD);
        }
        [o1, o2] => {
            push_pair(&mut out, ((o1 as usize) << 4) | ((o2 as usize) >> 4));
            out.push(ALPHABET_BYTES[((o2 & 0b1111) as usize) << 2] as char);
            out.push(PAD);
        }
        _ => unreachable!("chunks_exact(3) leaves at most two bytes"),
    }

    out
}
