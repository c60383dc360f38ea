use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Sentence terminator followed by one or more spaces. Newlines do not split.
    static ref SENTENCE_BREAK: Regex = Regex::new(r"[.!?] +").unwrap();
}

/// Split `text` after every terminator that is followed by spaces.
/// The terminator stays with the preceding sentence; the spaces are dropped.
fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    for m in SENTENCE_BREAK.find_iter(text) {
        // terminators are single-byte ASCII
        sentences.push(&text[start..m.start() + 1]);
        start = m.end();
    }
    sentences.push(&text[start..]);
    sentences
}

/// Remove sentences that were already seen, keeping first occurrences in order.
///
/// Matching is exact after trimming: sentences that differ only in case or
/// punctuation are both kept. Survivors are joined with a blank line.
pub fn remove_repetition(text: &str) -> String {
    let mut seen = HashSet::new();
    let unique: Vec<&str> = split_sentences(text.trim())
        .into_iter()
        .map(str::trim)
        .filter(|sentence| seen.insert(*sentence))
        .collect();
    unique.join("\n\n")
}

/// Drop lines that are empty or whitespace only.
pub fn drop_blank_lines(text: &str) -> String {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_exact_duplicate_sentence() {
        assert_eq!(
            remove_repetition("Hi there. Hi there. Bye."),
            "Hi there.\n\nBye."
        );
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(remove_repetition(""), "");
        assert_eq!(remove_repetition("   \n  "), "");
    }

    #[test]
    fn keeps_first_occurrence_order() {
        assert_eq!(remove_repetition("B. A. B."), "B.\n\nA.");
    }

    #[test]
    fn single_unterminated_sentence_is_one_segment() {
        assert_eq!(remove_repetition("just a fragment"), "just a fragment");
    }

    #[test]
    fn near_duplicates_are_kept() {
        assert_eq!(
            remove_repetition("Hello world. hello world. Hello world!"),
            "Hello world.\n\nhello world.\n\nHello world!"
        );
    }

    #[test]
    fn splits_on_every_terminator_kind_and_space_runs() {
        assert_eq!(
            remove_repetition("Really?   Yes!  Really? Ok."),
            "Really?\n\nYes!\n\nOk."
        );
    }

    #[test]
    fn newline_after_terminator_does_not_split() {
        assert_eq!(remove_repetition("One.\nOne."), "One.\nOne.");
    }

    #[test]
    fn surrounding_whitespace_is_ignored_for_matching() {
        assert_eq!(remove_repetition("  Same.  Same.  "), "Same.");
    }

    #[test]
    fn drop_blank_lines_collapses_paragraph_breaks() {
        assert_eq!(drop_blank_lines("a\n\nb\n   \nc"), "a\nb\nc");
        assert_eq!(drop_blank_lines(""), "");
    }
}
