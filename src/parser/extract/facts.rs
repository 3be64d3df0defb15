use tracing::debug;

use crate::page::{PageNode, SourceDocument};
use crate::parser::record::FactTable;

const ROW_SELECTOR: &str = "ul.a-nostyle > li";
const LABEL_SELECTOR: &str = "div.a-col-left span.a-color-base";
const VALUE_SELECTOR: &str = "div.a-col-right";

/// Product-facts rows as an ordered table. Rows without a label or without a
/// value are skipped; a repeated label keeps its first position and its last value.
pub fn extract<D: SourceDocument>(doc: &D) -> FactTable {
    let mut facts = FactTable::new();
    for row in doc.select_all(ROW_SELECTOR) {
        let Some(label) = row.select_first(LABEL_SELECTOR).and_then(|n| n.fragment()) else {
            continue;
        };
        match row.select_first(VALUE_SELECTOR).and_then(|n| n.fragment()) {
            Some(value) => facts.insert(label, value),
            None => debug!("Fact {:?} has no value, skipping", label),
        }
    }
    facts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::HtmlPage;

    fn row(label: &str, value: &str) -> String {
        format!(
            r#"<li><div class="a-col-left"><span class="a-color-base">{}</span></div><div class="a-col-right">{}</div></li>"#,
            label, value
        )
    }

    #[test]
    fn rows_in_document_order() {
        let html = format!(
            r#"<ul class="a-nostyle">{}{}{}</ul>"#,
            row("Fabric type", "100% Cotton"),
            row("Care instructions", " Machine Wash "),
            row("Origin", "Imported"),
        );
        let facts = extract(&HtmlPage::parse(&html));
        let entries: Vec<_> = facts.iter().collect();
        assert_eq!(
            entries,
            vec![
                ("Fabric type", "100% Cotton"),
                ("Care instructions", "Machine Wash"),
                ("Origin", "Imported"),
            ]
        );
    }

    #[test]
    fn duplicate_label_last_write_wins() {
        let html = format!(
            r#"<ul class="a-nostyle">{}{}{}</ul>"#,
            row("Fabric type", "Cotton"),
            row("Origin", "Imported"),
            row("Fabric type", "Linen"),
        );
        let facts = extract(&HtmlPage::parse(&html));
        assert_eq!(facts.len(), 2);
        assert_eq!(facts.iter().next(), Some(("Fabric type", "Linen")));
    }

    #[test]
    fn unlabeled_and_empty_rows_skipped() {
        let html = format!(
            r#"<ul class="a-nostyle"><li><div class="a-col-right">orphan</div></li>{}{}</ul>"#,
            row("  ", "blank label"),
            row("Closure", ""),
        );
        assert!(extract(&HtmlPage::parse(&html)).is_empty());
    }

    #[test]
    fn no_fact_list_is_empty() {
        assert!(extract(&HtmlPage::parse("<ul><li>plain</li></ul>")).is_empty());
    }
}
