pub mod bullets;
pub mod care;
pub mod garment;
pub mod keywords;

use std::sync::LazyLock;

use regex::Regex;

static SIBILANT_END_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(ch|sh|[sxz])$").unwrap());
static WS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// One row of a classifier table: any of `keys` maps the text to `label`.
pub struct PhraseRule<L> {
    pub keys: &'static [&'static str],
    pub label: L,
}

/// A compiled, ordered rule table. The first rule with a matching key wins.
pub struct PhraseTable<L> {
    rules: Vec<(Vec<Regex>, L)>,
}

impl<L: Copy> PhraseTable<L> {
    pub fn compile(rules: &[PhraseRule<L>]) -> Self {
        let rules = rules
            .iter()
            .map(|rule| (rule.keys.iter().map(|k| flexible_phrase(k)).collect(), rule.label))
            .collect();
        PhraseTable { rules }
    }

    pub fn first_match(&self, text: &str) -> Option<L> {
        self.rules
            .iter()
            .find(|(patterns, _)| patterns.iter().any(|re| re.is_match(text)))
            .map(|(_, label)| *label)
    }
}

/// Case-insensitive, word-bounded pattern for `phrase`. Internal whitespace
/// also accepts `-` and `_`, and a plural suffix is optional (`es` after a
/// sibilant, `s` otherwise).
pub fn flexible_phrase(phrase: &str) -> Regex {
    let escaped = regex::escape(phrase);
    let body = WS_RE.replace_all(&escaped, r"[-_\s]+");
    let suffix = if SIBILANT_END_RE.is_match(phrase) {
        "(?:es)?"
    } else {
        "(?:s)?"
    };
    // Escaped literals always form a valid pattern.
    Regex::new(&format!(r"(?i)\b{}{}\b", body, suffix)).unwrap()
}

/// Word-bounded pattern for a keyword stem where each space or hyphen may be
/// a space, a hyphen, or nothing at all (`eco-friendly` ~ `eco friendly` ~ `ecofriendly`).
pub fn keyword_stem(stem: &str) -> Regex {
    let body = stem
        .to_lowercase()
        .split(|c: char| c == '-' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"[-\s]?");
    Regex::new(&format!(r"(?i)\b{}\b", body)).unwrap()
}
