pub mod bullets;
pub mod facts;
pub mod heading;

use crate::page::SourceDocument;
use crate::parser::record::FactTable;

/// Raw fragments pulled from one page, before any classification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragments {
    pub title: Option<String>,
    pub byline: Option<String>,
    pub facts: FactTable,
    pub about: Vec<String>,
    pub feature_bullets: Option<Vec<String>>,
    pub description: Option<String>,
}

pub fn extract_all<D: SourceDocument>(doc: &D) -> Fragments {
    Fragments {
        title: heading::title(doc),
        byline: heading::byline(doc),
        facts: facts::extract(doc),
        about: bullets::about(doc),
        feature_bullets: bullets::feature_bullets(doc),
        description: heading::description(doc),
    }
}
