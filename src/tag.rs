use crate::WORD_SIZE;

/// Tag byte for an all-zero word. Followed by one byte giving the number of
/// additional zero words in the run.
pub(crate) const ZERO_TAG: u8 = 0x00;

/// Tag byte for a word with no zero bytes. Followed by the eight literal bytes
/// of the word and one byte giving the number of additional uncompressed words.
pub(crate) const LITERAL_TAG: u8 = 0xFF;

/// Decode-side description of one tag value.
#[derive(Clone, Copy, Debug)]
pub(crate) struct TagInfo {
    /// Number of literal bytes that follow the tag.
    pub count: u8,
    /// Word positions those bytes occupy, in the order they appear on the
    /// wire. Only the first `count` entries are meaningful.
    pub offsets: [u8; WORD_SIZE],
}

/// One entry per tag value, so the decoders never branch on individual bits.
pub(crate) static TAG_TABLE: [TagInfo; 256] = build_table();

const fn build_table() -> [TagInfo; 256] {
    let mut table = [TagInfo {
        count: 0,
        offsets: [0; WORD_SIZE],
    }; 256];
    let mut tag = 0;
    while tag < 256 {
        let mut count = 0;
        let mut offsets = [0u8; WORD_SIZE];
        let mut bit = 0;
        while bit < WORD_SIZE {
            if tag & (1 << bit) != 0 {
                offsets[count as usize] = bit as u8;
                count += 1;
            }
            bit += 1;
        }
        table[tag] = TagInfo { count, offsets };
        tag += 1;
    }
    table
}

/// Compute the tag for an unpacked word: bit *i* is set iff byte *i* is
/// nonzero.
pub(crate) fn tag_of(word: &[u8]) -> u8 {
    debug_assert_eq!(word.len(), WORD_SIZE);
    let mut tag = 0;
    for (bit, &b) in word.iter().enumerate() {
        if b != 0 {
            tag |= 1 << bit;
        }
    }
    tag
}
