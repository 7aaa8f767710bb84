//! Part-of-speech tagging
//!
//! A lexicon-and-suffix tagger. Closed-class words (determiners, pronouns,
//! prepositions, auxiliaries...) are looked up in the model lexicon; open-class
//! words are tagged from capitalization, suffixes and the previous tag, with
//! [`PosTag::Noun`] as the default.
//!
//! Models are process-wide, immutable, and built on first use. Only an
//! English model is bundled; [`TaggerModel::for_language`] returns `None`
//! for any other language.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

use super::stopwords::StopwordFilter;
use super::tokenizer::Tokenizer;
use crate::types::{PosTag, Token};

static ENGLISH: Lazy<TaggerModel> = Lazy::new(TaggerModel::english);

const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "each", "every", "some", "any", "no",
    "all", "both", "either", "neither", "another", "such", "many", "much", "few", "several",
    "most", "more", "less", "least", "other",
];

const PRONOUNS: &[&str] = &[
    "i", "me", "my", "mine", "myself", "you", "your", "yours", "yourself", "yourselves", "he",
    "him", "his", "himself", "she", "her", "hers", "herself", "it", "its", "itself", "we", "us",
    "our", "ours", "ourselves", "they", "them", "their", "theirs", "themselves", "who", "whom",
    "whose", "which", "what", "whatever", "whoever", "someone", "something", "anyone",
    "anything", "everyone", "everything", "nobody", "nothing", "one",
];

const PREPOSITIONS: &[&str] = &[
    "of", "in", "on", "at", "by", "for", "with", "from", "into", "onto", "about", "above",
    "across", "after", "against", "along", "among", "around", "before", "behind", "below",
    "beneath", "beside", "between", "beyond", "during", "except", "inside", "near", "off",
    "outside", "over", "past", "since", "through", "throughout", "toward", "towards", "under",
    "underneath", "until", "upon", "within", "without", "via", "per", "like", "despite",
];

const CONJUNCTIONS: &[&str] = &[
    "and", "or", "but", "nor", "so", "yet", "because", "although", "though", "while",
    "whereas", "if", "unless", "whether", "than", "as", "when", "where", "whenever",
    "wherever", "however", "therefore", "moreover", "furthermore", "nevertheless", "thus",
    "hence",
];

const AUXILIARIES: &[&str] = &[
    "is", "are", "was", "were", "be", "been", "being", "am", "has", "have", "had", "having",
    "do", "does", "did", "will", "would", "shall", "should", "can", "could", "may", "might",
    "must", "ought",
];

const PARTICLES: &[&str] = &["to", "not"];

const ADVERBS: &[&str] = &[
    "very", "also", "often", "always", "never", "sometimes", "usually", "too", "quite",
    "rather", "almost", "already", "still", "just", "only", "even", "then", "now", "here",
    "there", "again", "soon", "well", "ever", "once", "twice", "instead", "together", "away",
    "approximately", "roughly",
];

const VERBS: &[&str] = &[
    "make", "makes", "made", "use", "uses", "used", "take", "takes", "took", "taken", "give",
    "gives", "gave", "given", "get", "gets", "got", "go", "goes", "went", "gone", "come",
    "comes", "came", "see", "sees", "saw", "seen", "know", "knows", "knew", "known", "find",
    "finds", "found", "think", "thinks", "thought", "become", "becomes", "became", "keep",
    "keeps", "kept", "help", "helps", "show", "shows", "shown", "mean", "means", "meant",
    "include", "includes", "contain", "contains", "produce", "produces", "require",
    "requires", "allow", "allows", "provide", "provides", "form", "forms", "occur", "occurs",
    "lead", "leads", "led", "run", "runs", "ran", "sat", "sit", "sits", "let", "lets", "put",
    "puts", "say", "says", "said", "tell", "tells", "told", "remain", "remains", "seem",
    "seems", "depend", "depends", "utilize", "utilizes", "convert", "converts", "explain",
    "explains", "describe", "describes", "affect", "affects", "absorb", "absorbs", "release",
    "releases", "store", "stores", "study", "studies", "learn", "learns", "learnt",
];

const ADJECTIVES: &[&str] = &[
    "important", "key", "main", "primary", "essential", "critical", "significant",
    "fundamental", "new", "old", "good", "bad", "great", "small", "large", "big", "high",
    "low", "long", "short", "early", "late", "young", "different", "same", "similar", "able",
    "simple", "complex", "common", "major", "minor", "first", "last", "next", "own", "whole",
    "certain", "clear", "easy", "hard", "free", "full", "real", "true", "false", "general",
    "specific", "basic", "human", "natural", "social", "public", "strong", "weak", "fast",
    "slow", "green", "red", "blue", "black", "white",
];

/// Suffixes that mark adjectives in open-class words.
const ADJECTIVE_SUFFIXES: &[&str] = &[
    "ous", "ful", "ive", "able", "ible", "ical", "less", "ish", "ic", "ial", "ary",
];

/// Suffixes that mark nouns in open-class words.
const NOUN_SUFFIXES: &[&str] = &[
    "tion", "sion", "ment", "ness", "ity", "ism", "ance", "ence", "ship", "hood", "ist",
    "ogy", "sis", "ure", "age", "dom",
];

/// Immutable tagging resources for one language.
#[derive(Debug)]
pub struct TaggerModel {
    language: &'static str,
    lexicon: FxHashMap<&'static str, PosTag>,
    stopwords: StopwordFilter,
}

impl TaggerModel {
    /// The shared model for `language`, loading it on first use.
    pub fn for_language(language: &str) -> Option<&'static TaggerModel> {
        match language.to_lowercase().as_str() {
            "en" | "english" => Some(&*ENGLISH),
            _ => None,
        }
    }

    fn english() -> Self {
        let mut lexicon = FxHashMap::default();
        // later groups win on overlap, so the most specific go last
        let groups: [(&[&str], PosTag); 9] = [
            (VERBS, PosTag::Verb),
            (ADJECTIVES, PosTag::Adjective),
            (ADVERBS, PosTag::Adverb),
            (PREPOSITIONS, PosTag::Preposition),
            (CONJUNCTIONS, PosTag::Conjunction),
            (DETERMINERS, PosTag::Determiner),
            (PRONOUNS, PosTag::Pronoun),
            (AUXILIARIES, PosTag::Auxiliary),
            (PARTICLES, PosTag::Particle),
        ];
        for (words, tag) in groups {
            for &word in words {
                lexicon.insert(word, tag);
            }
        }

        Self {
            language: "en",
            lexicon,
            stopwords: StopwordFilter::new("en"),
        }
    }

    /// ISO code of the model's language.
    pub fn language(&self) -> &'static str {
        self.language
    }

    /// Stopword list matching the model's language.
    pub fn stopwords(&self) -> &StopwordFilter {
        &self.stopwords
    }

    fn lookup(&self, lower: &str) -> Option<PosTag> {
        self.lexicon.get(lower).copied()
    }
}

/// A token with its assigned tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedToken {
    pub token: Token,
    pub pos: PosTag,
}

/// Tags tokens using a [`TaggerModel`].
#[derive(Debug, Clone, Copy)]
pub struct PosTagger<'m> {
    model: &'m TaggerModel,
    tokenizer: Tokenizer,
}

impl<'m> PosTagger<'m> {
    pub fn new(model: &'m TaggerModel) -> Self {
        Self {
            model,
            tokenizer: Tokenizer::new(),
        }
    }

    /// Tokenize and tag `text`.
    pub fn tag(&self, text: &str) -> Vec<TaggedToken> {
        let mut out: Vec<TaggedToken> = Vec::new();
        let mut sentence_start = true;
        let mut prev = None;

        for token in self.tokenizer.tokenize(text) {
            let pos = if token.is_word() {
                self.tag_word(&token.text, prev, sentence_start)
            } else {
                PosTag::Punctuation
            };

            if pos == PosTag::Punctuation {
                if matches!(token.text.as_str(), "." | "!" | "?") {
                    sentence_start = true;
                    prev = None;
                }
            } else {
                sentence_start = false;
                prev = Some(pos);
            }

            out.push(TaggedToken { token, pos });
        }

        out
    }

    fn tag_word(&self, word: &str, prev: Option<PosTag>, sentence_start: bool) -> PosTag {
        if word.chars().all(|c| c.is_numeric() || c == '-' || c == '\'') {
            return PosTag::Numeral;
        }

        let lower = word.to_lowercase();
        if let Some(pos) = self.model.lookup(&lower) {
            return pos;
        }

        let capitalized = word.chars().next().is_some_and(char::is_uppercase);
        if capitalized && !sentence_start {
            return PosTag::ProperNoun;
        }

        let guessed = guess_open_class(&lower, prev);
        if capitalized && guessed == PosTag::Noun {
            PosTag::ProperNoun
        } else {
            guessed
        }
    }
}

/// Guess the tag of an open-class word from its suffix and the previous tag.
fn guess_open_class(lower: &str, prev: Option<PosTag>) -> PosTag {
    let len = lower.chars().count();
    let after_nominal_modifier = matches!(
        prev,
        Some(PosTag::Determiner | PosTag::Adjective | PosTag::Preposition)
    );

    if len > 4 && lower.ends_with("ly") {
        return PosTag::Adverb;
    }
    if len > 4 && lower.ends_with("ing") {
        return if after_nominal_modifier {
            PosTag::Noun
        } else {
            PosTag::Verb
        };
    }
    if len > 4 && lower.ends_with("ed") {
        return if prev == Some(PosTag::Determiner) {
            PosTag::Adjective
        } else {
            PosTag::Verb
        };
    }
    if NOUN_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
        return PosTag::Noun;
    }
    if len > 4 && ADJECTIVE_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
        return PosTag::Adjective;
    }
    if matches!(prev, Some(PosTag::Auxiliary | PosTag::Particle)) && !lower.ends_with('s') {
        return PosTag::Verb;
    }
    if prev == Some(PosTag::Pronoun) && lower.ends_with('s') && !lower.ends_with("ss") {
        return PosTag::Verb;
    }
    PosTag::Noun
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(text: &str) -> Vec<(String, PosTag)> {
        let model = TaggerModel::for_language("en").unwrap();
        PosTagger::new(model)
            .tag(text)
            .into_iter()
            .map(|t| (t.token.text, t.pos))
            .collect()
    }

    fn tag_of(text: &str, word: &str) -> PosTag {
        tags(text)
            .into_iter()
            .find(|(w, _)| w == word)
            .map(|(_, p)| p)
            .unwrap()
    }

    #[test]
    fn test_model_availability() {
        assert!(TaggerModel::for_language("en").is_some());
        assert!(TaggerModel::for_language("English").is_some());
        assert!(TaggerModel::for_language("fr").is_none());
    }

    #[test]
    fn test_model_is_shared() {
        let a = TaggerModel::for_language("en").unwrap();
        let b = TaggerModel::for_language("english").unwrap();
        assert!(std::ptr::eq(a, b));
        assert_eq!(a.language(), "en");
    }

    #[test]
    fn test_closed_class_words() {
        let text = "The cell is in the body";
        assert_eq!(tag_of(text, "The"), PosTag::Determiner);
        assert_eq!(tag_of(text, "is"), PosTag::Auxiliary);
        assert_eq!(tag_of(text, "in"), PosTag::Preposition);
    }

    #[test]
    fn test_open_class_nouns() {
        let text = "The chloroplast captures sunlight during photosynthesis.";
        assert_eq!(tag_of(text, "chloroplast"), PosTag::Noun);
        assert_eq!(tag_of(text, "photosynthesis"), PosTag::Noun);
        assert_eq!(tag_of(text, "sunlight"), PosTag::Noun);
    }

    #[test]
    fn test_proper_nouns() {
        let text = "Scientists in Europe studied Darwin closely.";
        assert_eq!(tag_of(text, "Europe"), PosTag::ProperNoun);
        assert_eq!(tag_of(text, "Darwin"), PosTag::ProperNoun);
        assert_eq!(tag_of(text, "closely"), PosTag::Adverb);
        assert_eq!(tag_of(text, "studied"), PosTag::Verb);
    }

    #[test]
    fn test_sentence_initial_capital_uses_suffix() {
        assert_eq!(tag_of("Quickly the water evaporates.", "Quickly"), PosTag::Adverb);
        assert_eq!(tag_of("Mitochondria produce energy.", "Mitochondria"), PosTag::ProperNoun);
    }

    #[test]
    fn test_context_rules() {
        assert_eq!(tag_of("Plants need to grow.", "grow"), PosTag::Verb);
        assert_eq!(tag_of("It produces oxygen.", "produces"), PosTag::Verb);
        assert_eq!(tag_of("The learning was slow.", "learning"), PosTag::Noun);
        assert_eq!(tag_of("Cells keep dividing.", "dividing"), PosTag::Verb);
    }

    #[test]
    fn test_punctuation_and_numbers() {
        let text = "About 42 cells, roughly.";
        assert_eq!(tag_of(text, "42"), PosTag::Numeral);
        assert_eq!(tag_of(text, ","), PosTag::Punctuation);
    }

    #[test]
    fn test_empty_text() {
        assert!(tags("").is_empty());
    }
}
