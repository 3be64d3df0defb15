//! Read-only view over a product page.
//!
//! The extractors only ever need four things from a page: look a node up by
//! id, run a CSS selector, read trimmed text, and step to the next element
//! sibling. `SourceDocument`/`PageNode` capture exactly that, and `HtmlPage`
//! implements them on top of `scraper`.

use scraper::{ElementRef, Html, Selector};
use tracing::warn;

pub trait PageNode: Copy {
    /// Text content with surrounding whitespace removed.
    fn text(&self) -> String;
    /// Lower-case tag name (`ul`, `h3`, ...).
    fn tag(&self) -> &str;
    fn next_element_sibling(&self) -> Option<Self>;
    /// Descendants matching `selector`, in document order.
    fn select_all(&self, selector: &str) -> Vec<Self>;

    fn select_first(&self, selector: &str) -> Option<Self> {
        self.select_all(selector).into_iter().next()
    }

    /// Trimmed text, or `None` when the node holds only whitespace.
    fn fragment(&self) -> Option<String> {
        non_empty(self.text())
    }
}

pub trait SourceDocument {
    type Node<'a>: PageNode
    where
        Self: 'a;

    fn by_id(&self, id: &str) -> Option<Self::Node<'_>>;
    fn select_all(&self, selector: &str) -> Vec<Self::Node<'_>>;

    fn select_first(&self, selector: &str) -> Option<Self::Node<'_>> {
        self.select_all(selector).into_iter().next()
    }
}

/// A parsed HTML document.
pub struct HtmlPage {
    html: Html,
}

impl HtmlPage {
    pub fn parse(source: &str) -> Self {
        HtmlPage {
            html: Html::parse_document(source),
        }
    }
}

impl SourceDocument for HtmlPage {
    type Node<'a> = HtmlNode<'a>;

    fn by_id(&self, id: &str) -> Option<HtmlNode<'_>> {
        self.html
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .find(|el| el.value().id() == Some(id))
            .map(HtmlNode)
    }

    fn select_all(&self, selector: &str) -> Vec<HtmlNode<'_>> {
        match parse_selector(selector) {
            Some(sel) => self.html.select(&sel).map(HtmlNode).collect(),
            None => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct HtmlNode<'a>(ElementRef<'a>);

impl PageNode for HtmlNode<'_> {
    fn text(&self) -> String {
        self.0.text().collect::<String>().trim().to_string()
    }

    fn tag(&self) -> &str {
        self.0.value().name()
    }

    fn next_element_sibling(&self) -> Option<Self> {
        self.0
            .next_siblings()
            .find_map(ElementRef::wrap)
            .map(HtmlNode)
    }

    fn select_all(&self, selector: &str) -> Vec<Self> {
        match parse_selector(selector) {
            Some(sel) => self.0.select(&sel).map(HtmlNode).collect(),
            None => Vec::new(),
        }
    }
}

fn parse_selector(selector: &str) -> Option<Selector> {
    match Selector::parse(selector) {
        Ok(sel) => Some(sel),
        Err(e) => {
            warn!("Ignoring invalid selector {:?}: {}", selector, e);
            None
        }
    }
}

pub(crate) fn non_empty(text: String) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
