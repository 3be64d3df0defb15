use std::sync::LazyLock;

use regex::Regex;

use super::keyword_stem;

pub const RECYCLE_STEMS: &[&str] = &["recycle", "recyclable", "recycled"];
pub const REUSE_STEMS: &[&str] = &["reuse", "reusable", "reused"];
pub const SUSTAINABILITY_STEMS: &[&str] = &[
    "sustainable",
    "sustainably",
    "sustainability",
    "biodegradable",
    "compostable",
    "organic",
    "carbon neutral",
    "ethically sourced",
    "ethically made",
    "vegan",
    "eco-friendly",
    "eco-conscious",
    "fair trade",
    "zero-waste",
    "upcycled",
    "plant-based",
    "renewable",
    "low-impact",
];

static PUNCT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s]|_").unwrap());

static RECYCLE: LazyLock<KeywordSet> = LazyLock::new(|| KeywordSet::new(RECYCLE_STEMS));
static REUSE: LazyLock<KeywordSet> = LazyLock::new(|| KeywordSet::new(REUSE_STEMS));
static SUSTAINABILITY: LazyLock<KeywordSet> =
    LazyLock::new(|| KeywordSet::new(SUSTAINABILITY_STEMS));

/// A vocabulary of keyword stems, one word-bounded pattern per stem.
pub struct KeywordSet {
    patterns: Vec<Regex>,
}

impl KeywordSet {
    pub fn new(stems: &[&str]) -> Self {
        KeywordSet {
            patterns: stems.iter().map(|s| keyword_stem(s)).collect(),
        }
    }

    /// `text` should already be passed through [`normalize`].
    pub fn any_in(&self, text: &str) -> bool {
        self.patterns.iter().any(|re| re.is_match(text))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeywordFlags {
    pub recycled: bool,
    pub reused: bool,
    pub sustainable: bool,
}

/// Drop punctuation and underscores, lower-case the rest.
pub fn normalize(text: &str) -> String {
    PUNCT_RE.replace_all(text, "").to_lowercase()
}

pub fn scan(text: &str) -> KeywordFlags {
    let text = normalize(text);
    KeywordFlags {
        recycled: RECYCLE.any_in(&text),
        reused: REUSE.any_in(&text),
        sustainable: SUSTAINABILITY.any_in(&text),
    }
}
