//! Hook (Emphasis) Classification
//!
//! Decides which caption segments get emphasis styling. Short-form
//! viewers decide within the first seconds whether to keep watching,
//! so opening/closing words, numbers, and charged vocabulary are
//! rendered in the louder hook style.
//!
//! Classification is a pure function of `(text, index, total)`; rules
//! are evaluated in a fixed order and the first match wins. Positional
//! rules come before lexical ones so that short function words in hook
//! position are still emphasized, and the length-based catch-all runs
//! last so it never overrides an explicit lexicon, digit, or
//! punctuation match.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Curated hook vocabulary. Matched against lowercased,
/// punctuation-stripped words.
static HOOK_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        // Attention grabbers
        "secret", "shocking", "amazing", "incredible", "insane", "crazy",
        "unbelievable", "wow", "stop", "wait", "listen", "look", "warning",
        "alert",
        // Quantities
        "million", "billion", "thousand", "hundred", "double", "triple",
        "every", "nothing", "everything",
        // Emotional words
        "love", "hate", "fear", "scared", "terrifying", "heartbreaking",
        "hilarious", "furious", "obsessed",
        // Superlatives
        "best", "worst", "biggest", "smallest", "fastest", "strongest",
        "ultimate", "perfect", "greatest",
        // Action / reveal verbs
        "revealed", "reveal", "exposed", "expose", "discovered", "discover",
        "caught", "busted", "leaked", "unlocked", "destroyed",
        // Mystery / intrigue
        "hidden", "mystery", "unknown", "forbidden", "banned", "illegal",
        "truth", "lie", "lies", "conspiracy",
        // Money / success
        "money", "rich", "wealthy", "free", "profit", "success", "winner",
        "winning", "broke", "cash", "fortune",
    ]
    .into_iter()
    .collect()
});

/// Common long words that the length catch-all must not flag
static LONG_WORD_STOPLIST: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "because", "through", "without", "between", "something", "anything",
    ]
    .into_iter()
    .collect()
});

/// Classifies a caption segment's text as hook or not.
///
/// `index` is the segment's position within the clip's segment list and
/// `total` is that list's length. Lexical rules (lexicon, length) apply
/// per whitespace-separated word, so a phrase is a hook when any of its
/// words qualifies.
pub fn is_hook_text(text: &str, index: usize, total: usize) -> bool {
    // 1-3. Positional emphasis: opening, second, and closing segments of
    //      clips long enough for position to carry meaning.
    if index == 0 && total > 3 {
        return true;
    }
    if index == 1 && total > 5 {
        return true;
    }
    if total > 3 && index + 1 == total {
        return true;
    }

    // 4. Numbers draw the eye
    if text.chars().any(|c| c.is_ascii_digit()) {
        return true;
    }

    // 5. Exclamations and questions
    let trimmed = text.trim();
    if trimmed.ends_with('!') || trimmed.ends_with('?') {
        return true;
    }

    // 6. Curated lexicon match
    let words: Vec<String> = trimmed.split_whitespace().map(clean_word).collect();
    if words.iter().any(|w| HOOK_WORDS.contains(w.as_str())) {
        return true;
    }

    // 7. Long-word catch-all, minus everyday long words
    words
        .iter()
        .any(|w| w.chars().count() >= 6 && !LONG_WORD_STOPLIST.contains(w.as_str()))
}

/// Lowercases a word and strips punctuation, keeping only alphanumerics
fn clean_word(word: &str) -> String {
    word.chars()
        .filter(|c| c.is_alphanumeric())
        .collect::<String>()
        .to_lowercase()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Positional Rule Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_opening_word_emphasized_in_longer_clips() {
        assert!(is_hook_text("the", 0, 4));
        // Too few segments for position to matter
        assert!(!is_hook_text("the", 0, 3));
    }

    #[test]
    fn test_second_word_emphasized_in_long_clips() {
        assert!(is_hook_text("and", 1, 6));
        assert!(!is_hook_text("and", 1, 5));
    }

    #[test]
    fn test_closing_word_emphasized_in_longer_clips() {
        assert!(is_hook_text("end", 3, 4));
        assert!(!is_hook_text("end", 2, 3));
    }

    // -------------------------------------------------------------------------
    // Lexical Rule Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_digits_are_hooks() {
        assert!(is_hook_text("100", 2, 5));
        assert!(is_hook_text("top5", 2, 5));
    }

    #[test]
    fn test_terminal_punctuation_is_hook() {
        assert!(is_hook_text("what?", 2, 5));
        assert!(is_hook_text("go!", 2, 5));
        assert!(!is_hook_text("go.", 2, 2));
    }

    #[test]
    fn test_lexicon_match_is_case_and_punctuation_insensitive() {
        assert!(is_hook_text("SHOCKING", 1, 3));
        assert!(is_hook_text("secret,", 1, 3));
        assert!(is_hook_text("wow", 1, 3));
    }

    #[test]
    fn test_lexicon_match_applies_per_word_in_phrases() {
        assert!(is_hook_text("SHOCKING reveal", 1, 2));
    }

    #[test]
    fn test_long_words_are_hooks() {
        assert!(is_hook_text("extraordinary", 2, 3));
    }

    #[test]
    fn test_stoplist_blocks_long_word_catch_all() {
        assert!(!is_hook_text("because", 2, 3));
        assert!(!is_hook_text("through", 2, 3));
        assert!(!is_hook_text("without", 2, 3));
        assert!(!is_hook_text("between", 2, 3));
        assert!(!is_hook_text("something", 2, 3));
        assert!(!is_hook_text("anything", 2, 3));
    }

    #[test]
    fn test_short_plain_words_are_not_hooks() {
        assert!(!is_hook_text("the", 2, 3));
        assert!(!is_hook_text("hello", 1, 2));
        assert!(!is_hook_text("Hello world", 0, 2));
    }

    // -------------------------------------------------------------------------
    // Precedence Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_digit_first_word_is_hook_regardless_of_which_rule_fires() {
        // Both the positional rule and the digit rule apply; either way
        // the outcome is a hook.
        assert!(is_hook_text("5", 0, 5));
    }

    #[test]
    fn test_stoplist_word_in_hook_position_is_still_emphasized() {
        // Positional rules run before the lexical stoplist is consulted.
        assert!(is_hook_text("because", 0, 5));
    }
}
