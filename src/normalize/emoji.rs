// Emoji stripping.
//
// Covers the pictographic blocks, dingbats, regional-indicator flags and the
// joiners/selectors that glue emoji sequences together. Anything this misses
// is non-ASCII and gets caught by the later non-ASCII strip.

/// Remove every emoji character (and emoji sequence glue) from `text`.
pub fn strip_emoji(text: &str) -> String {
    text.chars().filter(|&c| !is_emoji(c)).collect()
}

/// Whether `c` belongs to an emoji block or is part of an emoji sequence.
pub fn is_emoji(c: char) -> bool {
    matches!(
        c as u32,
        0x1F000..=0x1FAFF     // pictographs, emoticons, transport, flags, symbols
            | 0x2600..=0x27BF // misc symbols, dingbats
            | 0x2300..=0x23FF // misc technical (watch, hourglass, media keys)
            | 0x2B00..=0x2BFF // arrows and stars
            | 0x2190..=0x21FF // arrows
            | 0x25AA..=0x25FE // geometric shapes used as emoji
            | 0x2934..=0x2935
            | 0x3030
            | 0x303D
            | 0x3297
            | 0x3299
            | 0x00A9
            | 0x00AE
            | 0x203C
            | 0x2049
            | 0x2122
            | 0x2139
            | 0x24C2
            | 0x200D          // zero-width joiner
            | 0x20E3          // combining keycap
            | 0xFE0E..=0xFE0F // variation selectors
            | 0xE0020..=0xE007F // tag sequences
    )
}
