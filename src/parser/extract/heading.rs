use std::sync::LazyLock;

use regex::Regex;

use crate::page::{non_empty, PageNode, SourceDocument};

const TITLE_ID: &str = "productTitle";
const BYLINE_ID: &str = "bylineInfo";
const DESCRIPTION_SELECTOR: &str = "#productDescription span";

static BRAND_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)^(?:brand:\s*|visit the )?(.*?)(?: store)?$").unwrap());

pub fn title<D: SourceDocument>(doc: &D) -> Option<String> {
    doc.by_id(TITLE_ID).and_then(|n| n.fragment())
}

pub fn byline<D: SourceDocument>(doc: &D) -> Option<String> {
    doc.by_id(BYLINE_ID).and_then(|n| n.fragment())
}

pub fn description<D: SourceDocument>(doc: &D) -> Option<String> {
    doc.select_first(DESCRIPTION_SELECTOR)
        .and_then(|n| n.fragment())
}

/// "Visit the Acme Store" / "Brand: Acme" → "Acme".
pub fn normalize_brand(byline: &str) -> Option<String> {
    let byline = byline.trim();
    let brand = BRAND_RE
        .captures(byline)
        .and_then(|c| c.get(1))
        .map_or(byline, |m| m.as_str());
    non_empty(brand.trim().to_string())
}
