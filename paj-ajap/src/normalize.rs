//! English input normalization
//!
//! Lowercases, expands contractions, removes punctuation other than
//! apostrophes and hyphens, and collapses whitespace.

use regex::{Captures, Regex};
use std::sync::LazyLock;

static WORD_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\w']+").expect("valid word-run regex"));
static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s'-]").expect("valid punctuation regex"));
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Expansion of a whole contraction form, if it is one
pub fn expand_contraction(word: &str) -> Option<&'static str> {
    let expanded = match word {
        "i'm" | "im" => "i am",
        "i'll" => "i will",
        "i've" => "i have",
        "i'd" => "i did",
        "you're" => "you are",
        "you'll" => "you will",
        "you've" => "you have",
        "we're" => "we are",
        "we'll" => "we will",
        "they're" => "they are",
        "they'll" => "they will",
        "it's" => "it is",
        "that's" => "that is",
        "there's" => "there is",
        "don't" | "dont" => "do not",
        "doesn't" | "doesnt" => "does not",
        "didn't" | "didnt" => "did not",
        "isn't" | "isnt" => "is not",
        "aren't" | "arent" => "are not",
        "wasn't" => "was not",
        "weren't" => "were not",
        "won't" | "wont" => "will not",
        "can't" | "cant" => "can not",
        "couldn't" => "could not",
        "shouldn't" => "should not",
        "wouldn't" => "would not",
        "haven't" => "have not",
        "hasn't" => "has not",
        "wanna" => "want",
        "gonna" => "will",
        "gotta" => "need",
        _ => return None,
    };
    Some(expanded)
}

/// Replace every contraction in one pass over runs of word characters and apostrophes
///
/// Quote marks around a word (`'don't'`) are kept and do not block the match.
pub fn expand_contractions(text: &str) -> String {
    WORD_RUN
        .replace_all(text, |caps: &Captures| {
            let run = &caps[0];
            let core = run.trim_matches('\'');
            match expand_contraction(core) {
                Some(expanded) => {
                    let leading = &run[..run.len() - run.trim_start_matches('\'').len()];
                    let trailing = &run[run.trim_end_matches('\'').len()..];
                    format!("{}{}{}", leading, expanded, trailing)
                }
                None => run.to_string(),
            }
        })
        .into_owned()
}

/// Normalize English input for dictionary lookup
///
/// # Example
///
/// ```ignore
/// assert_eq!(normalize_english("  I'm HAPPY!! "), "i am happy");
/// ```
pub fn normalize_english(text: &str) -> String {
    let lowered = text.trim().to_lowercase();
    let expanded = expand_contractions(&lowered);
    let stripped = DISALLOWED.replace_all(&expanded, "");
    WHITESPACE.replace_all(&stripped, " ").trim().to_string()
}
