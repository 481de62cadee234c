// Lexical cleaning — markup, digits, punctuation, elongation and emoji.
//
// Each stage is a plain `&str -> String` transform. The order they run in is
// fixed by `clean()` and matters: digit-bearing tokens are removed before
// punctuation is split off, and elongated runs are collapsed both before and
// after emoji removal.

use std::sync::LazyLock;

use regex_lite::Regex;

use super::emoji::strip_emoji;

static SPACE_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" +").expect("valid regex"));
static NON_ASCII: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\x00-\x7F]+").expect("valid regex"));
static NON_ALPHA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z\s]").expect("valid regex"));

/// Run the full lexical cleaning sequence on a raw review.
pub fn clean(text: &str) -> String {
    let text = strip_markup(text);
    let text = remove_digit_tokens(&text);
    let text = strip_punctuation(&text);
    let text = collapse_spaces(&text);
    let text = collapse_repeats(&text);
    let text = strip_emoji(&text);
    collapse_repeats(&text)
}

/// Drop `<br />` markup and doubled newlines, and turn ellipsis characters
/// into spaces.
pub fn strip_markup(text: &str) -> String {
    text.replace("<br />", "")
        .replace("\n\n", "")
        .replace('\u{2026}', " ")
}

/// Replace every word-character run that contains a digit with a space.
///
/// The whole run goes, not just the digits: "12pm" and "b4" disappear
/// entirely while the surrounding punctuation is left for the next stage.
/// Only decimal digits count; superscripts and vulgar fractions do not.
pub fn remove_digit_tokens(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut run = String::new();

    for c in text.chars() {
        if is_word_char(c) {
            run.push(c);
        } else {
            flush_run(&mut run, &mut out);
            out.push(c);
        }
    }
    flush_run(&mut run, &mut out);
    out
}

fn flush_run(run: &mut String, out: &mut String) {
    if run.chars().any(|c| c.is_ascii_digit()) {
        out.push(' ');
    } else {
        out.push_str(run);
    }
    run.clear();
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Lowercase, then replace each ASCII punctuation character with a space.
pub fn strip_punctuation(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_punctuation() { ' ' } else { c })
        .collect()
}

/// Collapse runs of spaces into one.
pub fn collapse_spaces(text: &str) -> String {
    SPACE_RUNS.replace_all(text, " ").into_owned()
}

/// Collapse runs of three or more identical characters inside each word down
/// to a single character ("soooo" -> "so", "coffee" untouched).
///
/// Words are re-joined with single spaces, so any other whitespace (lone
/// newlines, tabs, leading/trailing space) is normalized away here too.
pub fn collapse_repeats(text: &str) -> String {
    text.split_whitespace()
        .map(collapse_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn collapse_word(word: &str) -> String {
    let chars: Vec<char> = word.chars().collect();
    let mut out = String::with_capacity(word.len());
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        let mut j = i;
        while j < chars.len() && chars[j] == c {
            j += 1;
        }
        let run = j - i;
        if run >= 3 {
            out.push(c);
        } else {
            for _ in 0..run {
                out.push(c);
            }
        }
        i = j;
    }
    out
}

/// Replace any run of non-ASCII characters with a space.
pub fn strip_non_ascii(text: &str) -> String {
    NON_ASCII.replace_all(text, " ").into_owned()
}

/// Delete every character that is neither an ASCII letter nor whitespace.
pub fn strip_non_alpha(text: &str) -> String {
    NON_ALPHA.replace_all(text, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_markup() {
        assert_eq!(strip_markup("great<br />food\n\nhere"), "greatfoodhere");
        assert_eq!(strip_markup("wait\u{2026}what"), "wait what");
    }

    #[test]
    fn test_digit_tokens_removed_whole() {
        assert_eq!(remove_digit_tokens("open 24hrs daily"), "open   daily");
        assert_eq!(remove_digit_tokens("b4 lunch!"), "  lunch!");
        assert_eq!(remove_digit_tokens("$15 tip"), "$  tip");
    }

    #[test]
    fn test_numeric_symbols_are_not_digits() {
        assert_eq!(
            remove_digit_tokens("area\u{b2} \u{bd}cup b4"),
            "area\u{b2} \u{bd}cup  "
        );
    }

    #[test]
    fn test_punctuation_becomes_space() {
        assert_eq!(strip_punctuation("Wow!Great,Food."), "wow great food ");
        assert_eq!(strip_punctuation("don't"), "don t");
    }

    #[test]
    fn test_collapse_spaces() {
        assert_eq!(collapse_spaces("a   b  c"), "a b c");
        // Only spaces collapse; newlines survive this stage
        assert_eq!(collapse_spaces("a \n  b"), "a \n b");
    }

    #[test]
    fn test_collapse_repeats_keeps_double_letters() {
        assert_eq!(collapse_repeats("soooo gooood"), "so god");
        assert_eq!(collapse_repeats("coffee  bottle\nbeer"), "coffee bottle beer");
        assert_eq!(collapse_repeats("yummmmy"), "yumy");
    }

    #[test]
    fn test_clean_sequence() {
        assert_eq!(
            clean("The food was SOOOO good!!<br />Paid $20 \u{1F600}\u{1F600}"),
            "the food was so good paid"
        );
    }

    #[test]
    fn test_elongation_reexposed_by_emoji_is_collapsed() {
        // "so😀o😀o" has no 3-run until the emoji are gone
        assert_eq!(clean("so\u{1F600}o\u{1F600}o"), "so");
    }

    #[test]
    fn test_clean_empty() {
        assert_eq!(clean(""), "");
        assert_eq!(clean("1234 !!! \u{1F600}\u{1F600}"), "");
    }

    #[test]
    fn test_non_ascii_and_non_alpha() {
        assert_eq!(strip_non_ascii("caf\u{e9} ok"), "caf  ok");
        assert_eq!(strip_non_alpha("ab_c d-e\tf"), "abc de\tf");
    }
}
