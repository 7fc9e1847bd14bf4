//! English suffix detectors
//!
//! Each detector looks at one lowercase word and reports whether a suffix
//! was found and which stem to try in the dictionary instead. The rules are
//! deliberately blunt (the silent-e re-insertion turns "playing" into
//! "playe"); the translator only uses a stem when the dictionary knows it.

const VOWELS: &str = "aeiou";

/// Outcome of one suffix detector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inflection {
    pub matched: bool,
    pub stem: String,
}

impl Inflection {
    fn matched(stem: impl Into<String>) -> Self {
        Self {
            matched: true,
            stem: stem.into(),
        }
    }

    fn unmatched(word: &str) -> Self {
        Self {
            matched: false,
            stem: word.to_string(),
        }
    }

    /// The stem, if this detector matched
    pub fn candidate(&self) -> Option<&str> {
        self.matched.then_some(self.stem.as_str())
    }
}

/// All detector results for one word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub plural: Inflection,
    pub progressive: Inflection,
    pub past: Inflection,
    pub adverb: Inflection,
    pub comparative: Inflection,
}

impl Analysis {
    /// Candidate stems in lookup precedence order, skipping detectors that did not match
    pub fn stems(&self) -> impl Iterator<Item = &str> {
        [
            &self.plural,
            &self.progressive,
            &self.past,
            &self.adverb,
            &self.comparative,
        ]
        .into_iter()
        .filter_map(Inflection::candidate)
    }
}

/// Run every detector over `word`
pub fn analyze(word: &str) -> Analysis {
    Analysis {
        plural: detect_plural(word),
        progressive: detect_progressive(word),
        past: detect_past(word),
        adverb: detect_adverb(word),
        comparative: detect_comparative(word),
    }
}

fn char_len(word: &str) -> usize {
    word.chars().count()
}

fn is_vowel(c: char) -> bool {
    VOWELS.contains(c)
}

/// Strip an ASCII suffix known to be present
fn strip<'a>(word: &'a str, suffix: &str) -> &'a str {
    word.strip_suffix(suffix).unwrap_or(word)
}

/// Drop one letter of a trailing doubled consonant ("runn" -> "run")
fn undouble(stem: &str) -> Option<String> {
    let mut tail = stem.chars().rev();
    match (tail.next(), tail.next()) {
        (Some(last), Some(before)) if last == before && !is_vowel(last) => {
            let mut undoubled = stem.to_string();
            undoubled.pop();
            Some(undoubled)
        }
        _ => None,
    }
}

/// Undo consonant doubling, or re-insert a silent e after a consonant ("mak" -> "make")
fn repair_stem(stem: &str) -> String {
    if let Some(undoubled) = undouble(stem) {
        return undoubled;
    }
    match stem.chars().last() {
        Some(last) if !is_vowel(last) => format!("{}e", stem),
        _ => stem.to_string(),
    }
}

/// Plural nouns: "stories" -> "story", "wolves" -> "wolf", "boxes" -> "box", "cats" -> "cat"
pub fn detect_plural(word: &str) -> Inflection {
    let len = char_len(word);
    if len <= 2 {
        return Inflection::unmatched(word);
    }
    if word.ends_with("ies") && len > 4 {
        return Inflection::matched(format!("{}y", strip(word, "ies")));
    }
    if word.ends_with("ves") && len > 4 {
        return Inflection::matched(format!("{}f", strip(word, "ves")));
    }
    if ["ses", "xes", "zes", "shes", "ches"]
        .iter()
        .any(|suffix| word.ends_with(suffix))
    {
        return Inflection::matched(strip(word, "es"));
    }
    if word.ends_with('s') && !word.ends_with("ss") && !word.ends_with("us") {
        return Inflection::matched(strip(word, "s"));
    }
    Inflection::unmatched(word)
}

/// Progressive "-ing": "running" -> "run", "making" -> "make"
pub fn detect_progressive(word: &str) -> Inflection {
    if !word.ends_with("ing") || char_len(word) <= 4 {
        return Inflection::unmatched(word);
    }
    Inflection::matched(repair_stem(strip(word, "ing")))
}

/// Past "-ed": "cried" -> "cry", "stopped" -> "stop", "baked" -> "bake"
pub fn detect_past(word: &str) -> Inflection {
    if !word.ends_with("ed") || char_len(word) <= 3 {
        return Inflection::unmatched(word);
    }
    if word.ends_with("ied") {
        return Inflection::matched(format!("{}y", strip(word, "ied")));
    }
    let stem = strip(word, "ed");
    if let Some(undoubled) = undouble(stem) {
        return Inflection::matched(undoubled);
    }
    if word.ends_with("eed") {
        return Inflection::matched(stem);
    }
    Inflection::matched(repair_stem(stem))
}

/// Adverbs "-ly": "quickly" -> "quick"
pub fn detect_adverb(word: &str) -> Inflection {
    if word.ends_with("ly") && char_len(word) > 3 {
        return Inflection::matched(strip(word, "ly"));
    }
    Inflection::unmatched(word)
}

/// Comparatives and agent nouns "-er": "bigger" -> "big", "maker" -> "make"
pub fn detect_comparative(word: &str) -> Inflection {
    if word.ends_with("er") && char_len(word) > 3 {
        return Inflection::matched(repair_stem(strip(word, "er")));
    }
    Inflection::unmatched(word)
}

/// English plural of a gloss: "box" -> "boxes", "story" -> "stories", "boy" -> "boys"
pub fn pluralize_english(word: &str) -> String {
    if ["s", "x", "z", "ch", "sh"]
        .iter()
        .any(|suffix| word.ends_with(suffix))
    {
        return format!("{}es", word);
    }
    let mut tail = word.chars().rev();
    if let (Some('y'), Some(before)) = (tail.next(), tail.next()) {
        if !is_vowel(before) {
            return format!("{}ies", strip(word, "y"));
        }
    }
    format!("{}s", word)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stem_of(inflection: Inflection) -> Option<String> {
        inflection.matched.then_some(inflection.stem)
    }

    #[test]
    fn test_plural_rules() {
        assert_eq!(stem_of(detect_plural("stories")), Some("story".into()));
        assert_eq!(stem_of(detect_plural("wolves")), Some("wolf".into()));
        assert_eq!(stem_of(detect_plural("buses")), Some("bus".into()));
        assert_eq!(stem_of(detect_plural("boxes")), Some("box".into()));
        assert_eq!(stem_of(detect_plural("dishes")), Some("dish".into()));
        assert_eq!(stem_of(detect_plural("churches")), Some("church".into()));
        assert_eq!(stem_of(detect_plural("boys")), Some("boy".into()));
        assert_eq!(stem_of(detect_plural("cats")), Some("cat".into()));
    }

    #[test]
    fn test_plural_short_ies_falls_through_to_s() {
        assert_eq!(stem_of(detect_plural("ties")), Some("tie".into()));
    }

    #[test]
    fn test_plural_non_matches() {
        assert_eq!(detect_plural("is"), Inflection::unmatched("is"));
        assert!(!detect_plural("glass").matched);
        assert!(!detect_plural("cactus").matched);
        assert!(!detect_plural("boy").matched);
    }

    #[test]
    fn test_progressive_rules() {
        assert_eq!(stem_of(detect_progressive("running")), Some("run".into()));
        assert_eq!(stem_of(detect_progressive("making")), Some("make".into()));
        assert_eq!(stem_of(detect_progressive("playing")), Some("playe".into()));
        assert_eq!(stem_of(detect_progressive("seeing")), Some("see".into()));
        assert!(!detect_progressive("king").matched);
        assert!(!detect_progressive("sing").matched);
    }

    #[test]
    fn test_past_rules() {
        assert_eq!(stem_of(detect_past("cried")), Some("cry".into()));
        assert_eq!(stem_of(detect_past("stopped")), Some("stop".into()));
        assert_eq!(stem_of(detect_past("baked")), Some("bake".into()));
        assert_eq!(stem_of(detect_past("played")), Some("playe".into()));
        assert_eq!(stem_of(detect_past("agreed")), Some("agre".into()));
        assert!(!detect_past("bed").matched);
        assert!(!detect_past("walk").matched);
    }

    #[test]
    fn test_adverb_rule() {
        assert_eq!(stem_of(detect_adverb("quickly")), Some("quick".into()));
        assert!(!detect_adverb("fly").matched);
    }

    #[test]
    fn test_comparative_rule() {
        assert_eq!(stem_of(detect_comparative("bigger")), Some("big".into()));
        assert_eq!(stem_of(detect_comparative("maker")), Some("make".into()));
        assert_eq!(stem_of(detect_comparative("taller")), Some("tal".into()));
        assert!(!detect_comparative("her").matched);
    }

    #[test]
    fn test_non_ascii_words_do_not_panic() {
        let analysis = analyze("þonjing");
        assert_eq!(analysis.progressive.stem, "þonje");
        assert!(!analyze("ф").plural.matched);
    }

    #[test]
    fn test_analysis_stem_order() {
        let analysis = analyze("cooked");
        let stems: Vec<&str> = analysis.stems().collect();
        assert_eq!(stems, vec!["cooke"]);

        let stems: Vec<String> = analyze("rings").stems().map(String::from).collect();
        assert_eq!(stems, vec!["ring".to_string()]);
    }

    #[test]
    fn test_pluralize_english() {
        assert_eq!(pluralize_english("boy"), "boys");
        assert_eq!(pluralize_english("story"), "stories");
        assert_eq!(pluralize_english("day"), "days");
        assert_eq!(pluralize_english("box"), "boxes");
        assert_eq!(pluralize_english("bus"), "buses");
        assert_eq!(pluralize_english("church"), "churches");
        assert_eq!(pluralize_english("wish"), "wishes");
        assert_eq!(pluralize_english("hand"), "hands");
    }
}
