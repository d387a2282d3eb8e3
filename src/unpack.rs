use byteorder::ReadBytesExt;

use crate::error::{Error, Result};
use crate::tag::{LITERAL_TAG, TAG_TABLE, ZERO_TAG};
use crate::WORD_SIZE;

/// Decode a complete packed payload, appending the unpacked bytes onto `dst`
/// and returning the buffer.
///
/// Decoding stops cleanly when `src` is exhausted at a tag boundary; running
/// out of input anywhere else is an error. On error the whole buffer is
/// dropped, so `dst` never comes back half-written. The destination follows
/// the same take-and-return reuse contract as `pack`.
pub fn unpack(mut dst: Vec<u8>, mut src: &[u8]) -> Result<Vec<u8>> {
    while let Ok(tag) = src.read_u8() {
        match tag {
            ZERO_TAG => {
                let run = src.read_u8().map_err(|_| Error::UnexpectedEnd {
                    step: "decode zero-run count",
                    actual: 0,
                    expected: 1,
                })? as usize;
                dst.resize(dst.len() + WORD_SIZE * (run + 1), 0);
            }
            LITERAL_TAG => {
                if src.len() < WORD_SIZE {
                    return Err(Error::UnexpectedEnd {
                        step: "decode literal word",
                        actual: src.len(),
                        expected: WORD_SIZE,
                    });
                }
                let (w, rest) = src.split_at(WORD_SIZE);
                dst.extend_from_slice(w);
                src = rest;

                let run = src.read_u8().map_err(|_| Error::UnexpectedEnd {
                    step: "decode literal-run count",
                    actual: 0,
                    expected: 1,
                })? as usize;
                let len = WORD_SIZE * run;
                if src.len() < len {
                    return Err(Error::UnexpectedEnd {
                        step: "decode literal run",
                        actual: src.len(),
                        expected: len,
                    });
                }
                let (body, rest) = src.split_at(len);
                dst.extend_from_slice(body);
                src = rest;
            }
            tag => {
                let info = &TAG_TABLE[tag as usize];
                let count = info.count as usize;
                if src.len() < count {
                    return Err(Error::UnexpectedEnd {
                        step: "decode word bytes",
                        actual: src.len(),
                        expected: count,
                    });
                }
                let mut w = [0; WORD_SIZE];
                for (&pos, &b) in info.offsets[..count].iter().zip(src.iter()) {
                    w[pos as usize] = b;
                }
                dst.extend_from_slice(&w);
                src = &src[count..];
            }
        }
    }
    Ok(dst)
}
