use crate::tag::{tag_of, LITERAL_TAG, ZERO_TAG};
use crate::{MAX_RUN_WORDS, WORD_SIZE};

fn word(src: &[u8], i: usize) -> &[u8] {
    &src[i * WORD_SIZE..(i + 1) * WORD_SIZE]
}

/// A literal run keeps going while the next word has at most one zero byte.
fn extends_literal_run(w: &[u8]) -> bool {
    tag_of(w).count_ones() as usize >= WORD_SIZE - 1
}

/// Append the packed encoding of `src` onto `dst` and return the buffer.
///
/// The destination is taken by value and handed back so one allocation can be
/// reused across calls: `buf.clear()` between uses keeps the capacity.
///
/// # Panics
///
/// Panics if `src.len()` is not a multiple of [`WORD_SIZE`](crate::WORD_SIZE).
/// Packed data always covers whole words, so an unaligned input is a bug in
/// the caller, not a recoverable condition.
pub fn pack(mut dst: Vec<u8>, src: &[u8]) -> Vec<u8> {
    assert!(
        src.len() % WORD_SIZE == 0,
        "unpacked length {} is not a multiple of the {}-byte word size",
        src.len(),
        WORD_SIZE
    );
    let words = src.len() / WORD_SIZE;
    // Worst case is a tag and a run count per word on top of the payload.
    dst.reserve(src.len() + 2 * words);

    let mut i = 0;
    while i < words {
        let w = word(src, i);
        let tag = tag_of(w);
        dst.push(tag);
        i += 1;
        match tag {
            ZERO_TAG => {
                let mut run = 0;
                while run < MAX_RUN_WORDS - 1
                    && i + run < words
                    && tag_of(word(src, i + run)) == ZERO_TAG
                {
                    run += 1;
                }
                dst.push(run as u8);
                i += run;
            }
            LITERAL_TAG => {
                dst.extend_from_slice(w);
                let mut run = 0;
                while run < MAX_RUN_WORDS - 1
                    && i + run < words
                    && extends_literal_run(word(src, i + run))
                {
                    run += 1;
                }
                dst.push(run as u8);
                dst.extend_from_slice(&src[i * WORD_SIZE..(i + run) * WORD_SIZE]);
                i += run;
            }
            _ => {
                dst.extend(w.iter().filter(|&&b| b != 0));
            }
        }
    }
    dst
}
