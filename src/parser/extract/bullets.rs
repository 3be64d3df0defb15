use tracing::debug;

use crate::page::{PageNode, SourceDocument};

const SECTION_HEADER_SELECTOR: &str = "h3.product-facts-title";
const ABOUT_HEADER_TEXT: &str = "about this item";
const LIST_ITEM_SELECTOR: &str = "li span.a-list-item";
const FEATURE_BULLET_SELECTOR: &str = "#feature-bullets ul li span.a-list-item";

/// Items of the "About this item" list. Empty when the header is missing or
/// is not immediately followed by a `<ul>`.
pub fn about<D: SourceDocument>(doc: &D) -> Vec<String> {
    let header = doc
        .select_all(SECTION_HEADER_SELECTOR)
        .into_iter()
        .find(|h| h.text().to_lowercase().contains(ABOUT_HEADER_TEXT));
    let Some(header) = header else {
        debug!("No \"About this item\" header");
        return Vec::new();
    };

    match header.next_element_sibling() {
        Some(list) if list.tag() == "ul" => list
            .select_all(LIST_ITEM_SELECTOR)
            .iter()
            .filter_map(|item| item.fragment())
            .collect(),
        _ => {
            debug!("\"About this item\" header is not followed by a list");
            Vec::new()
        }
    }
}

/// Bullets of the untitled feature section, or `None` when the section is
/// missing or has no non-empty bullet.
pub fn feature_bullets<D: SourceDocument>(doc: &D) -> Option<Vec<String>> {
    let bullets: Vec<String> = doc
        .select_all(FEATURE_BULLET_SELECTOR)
        .iter()
        .filter_map(|item| item.fragment())
        .collect();
    if bullets.is_empty() {
        debug!("No feature bullets");
        None
    } else {
        Some(bullets)
    }
}
