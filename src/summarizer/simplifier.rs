//! Sentence simplification
//!
//! Best-effort surface reduction of a sentence. Rules run in order:
//!
//! 1. drop everything from the first `,` or `;` up to the next `.` (or the end)
//! 2. drop parenthetical asides `( ... )`
//! 3. drop discourse connectives (however, although, despite, ...)
//! 4. replace verbose phrasing ("is able to" -> "can", "utilize" -> "use",
//!    "approximately" -> "~")
//! 5. collapse whitespace and trim

use once_cell::sync::Lazy;
use regex::Regex;

use crate::nlp::tokenizer::normalize_whitespace;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("static regex compile")
}

static TRAILING_CLAUSE: Lazy<Regex> = Lazy::new(|| compile(r"[,;][^.]*"));
static PARENTHETICAL: Lazy<Regex> = Lazy::new(|| compile(r"\(.*?\)"));
static CONNECTIVES: Lazy<Regex> = Lazy::new(|| {
    compile(r"(?i)\b(however|although|despite|nevertheless|furthermore|moreover)\b")
});

/// Verbose constructs and their terse replacements.
static REPLACEMENTS: Lazy<[(Regex, &'static str); 3]> = Lazy::new(|| {
    [
        (compile(r"(?i)\b(is|are|was|were)\s+able to\b"), "can"),
        (compile(r"(?i)\b(utilize|utilizes|utilized)\b"), "use"),
        (compile(r"(?i)\b(approximately|roughly|about)\b"), "~"),
    ]
});

/// Rewrites sentences into shorter, more direct forms.
#[derive(Debug, Clone, Copy, Default)]
pub struct SentenceSimplifier;

impl SentenceSimplifier {
    pub fn new() -> Self {
        Self
    }

    /// Simplify one sentence. May return an empty string.
    pub fn simplify(&self, sentence: &str) -> String {
        let text = TRAILING_CLAUSE.replace_all(sentence, "");
        let text = PARENTHETICAL.replace_all(&text, "");
        let mut text = CONNECTIVES.replace_all(&text, "").into_owned();

        for (pattern, replacement) in REPLACEMENTS.iter() {
            text = pattern.replace_all(&text, *replacement).into_owned();
        }

        normalize_whitespace(&text)
    }
}

/// Uppercase the first character, leaving the rest untouched.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn simplify(s: &str) -> String {
        SentenceSimplifier::new().simplify(s)
    }

    #[test]
    fn test_trailing_clause_removed() {
        assert_eq!(
            simplify("This is important, however it is complex (see note)"),
            "This is important"
        );
        assert_eq!(simplify("Cells divide; tissues grow"), "Cells divide");
    }

    #[test]
    fn test_clause_stops_at_period() {
        assert_eq!(simplify("Cells divide, often. Tissues grow"), "Cells divide. Tissues grow");
    }

    #[test]
    fn test_parenthetical_removed() {
        assert_eq!(
            simplify("The nucleus (a membrane-bound organelle) stores DNA"),
            "The nucleus stores DNA"
        );
        assert_eq!(simplify("A (b) c (d) e"), "A c e");
    }

    #[test]
    fn test_connectives_removed() {
        assert_eq!(simplify("Moreover the cell grows"), "the cell grows");
        assert_eq!(simplify("It grows FURTHERMORE it splits"), "It grows it splits");
        // whole words only
        assert_eq!(simplify("Despiteful words"), "Despiteful words");
    }

    #[test]
    fn test_lexical_replacements() {
        assert_eq!(simplify("Plants are able to make food"), "Plants can make food");
        assert_eq!(simplify("Birds Were  Able to fly"), "Birds can fly");
        assert_eq!(simplify("Muscles utilize glucose"), "Muscles use glucose");
        assert_eq!(simplify("It takes approximately ten minutes"), "It takes ~ ten minutes");
        assert_eq!(simplify("Roughly half survive"), "~ half survive");
        assert_eq!(simplify("This is about cells"), "This is ~ cells");
    }

    #[test]
    fn test_entirely_removed_sentence() {
        assert_eq!(simplify("(just an aside)"), "");
        assert_eq!(simplify(", all clause"), "");
        assert_eq!(simplify(""), "");
    }

    #[test]
    fn test_idempotent_on_simplified_output() {
        let inputs = [
            "This is important, however it is complex (see note)",
            "Plants are able to utilize roughly all sunlight",
            "Moreover the nucleus (a vault) stores DNA; it also copies it",
        ];
        for input in inputs {
            let once = simplify(input);
            assert_eq!(simplify(&once), once);
        }
    }

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("the cell"), "The cell");
        assert_eq!(capitalize_first("~ half"), "~ half");
        assert_eq!(capitalize_first("élan"), "Élan");
        assert_eq!(capitalize_first(""), "");
    }
}
