//! Directory mode: every saved page in a folder, one JSON line per page.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use tracing::warn;

use crate::page::HtmlPage;
use crate::parser::process_page;
use crate::parser::record::ProductRecord;

const CHUNK_SIZE: usize = 500;

pub fn extract_file(path: &Path) -> Result<ProductRecord> {
    let html = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(process_page(&HtmlPage::parse(&html)))
}

/// `.html` files directly inside `dir`, sorted by path.
pub fn list_pages(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut pages: Vec<PathBuf> = fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory {}", dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("html")))
        .collect();
    pages.sort();
    Ok(pages)
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchCounts {
    pub pages: usize,
    pub named: usize,
    pub sustainable: usize,
    pub failed: usize,
}

impl BatchCounts {
    pub fn print(&self) {
        eprintln!(
            "Extracted {} pages ({} named, {} sustainable-looking, {} unreadable).",
            self.pages, self.named, self.sustainable, self.failed,
        );
    }
}

/// Extract `pages` in parallel chunks and write `{"file", "record"}` lines to
/// `out` in input order. Unreadable pages are counted and skipped.
pub fn process_pages<W: Write>(pages: &[PathBuf], mut out: W) -> Result<BatchCounts> {
    let pb = ProgressBar::new(pages.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec})")?
            .progress_chars("#>-"),
    );

    let mut counts = BatchCounts::default();

    for chunk in pages.chunks(CHUNK_SIZE) {
        let results: Vec<_> = chunk
            .par_iter()
            .map(|path| (path, extract_file(path)))
            .collect();

        for (path, result) in results {
            let file = path.file_name().map(|n| n.to_string_lossy().into_owned());
            match result {
                Ok(record) => {
                    counts.pages += 1;
                    counts.named += usize::from(record.name.is_some());
                    counts.sustainable += usize::from(record.sustainable);
                    let line = serde_json::json!({ "file": file, "record": record });
                    writeln!(out, "{}", line)?;
                }
                Err(e) => {
                    counts.failed += 1;
                    pb.suspend(|| warn!("{:#}", e));
                }
            }
        }
        pb.inc(chunk.len() as u64);
    }

    out.flush()?;
    pb.finish_and_clear();
    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for name in ["feature_bullets", "denim_jacket"] {
            fs::copy(
                format!("tests/fixtures/{}.html", name),
                dir.path().join(format!("{}.html", name)),
            )
            .unwrap();
        }
        fs::write(dir.path().join("notes.txt"), "not a page").unwrap();
        dir
    }

    #[test]
    fn lists_only_html_sorted() {
        let dir = page_dir();
        let names: Vec<_> = list_pages(dir.path())
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["denim_jacket.html", "feature_bullets.html"]);
    }

    #[test]
    fn writes_one_json_line_per_page() {
        let dir = page_dir();
        let pages = list_pages(dir.path()).unwrap();
        let mut out = Vec::new();
        let counts = process_pages(&pages, &mut out).unwrap();

        assert_eq!(
            counts,
            BatchCounts { pages: 2, named: 2, sustainable: 2, failed: 0 }
        );
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["file"], "denim_jacket.html");
        assert_eq!(lines[0]["record"]["type"], "jacket");
        assert_eq!(lines[1]["file"], "feature_bullets.html");
        assert_eq!(lines[1]["record"]["name"], "Women's Ribbed Tank Top");
    }

    #[test]
    fn unreadable_page_is_counted_and_skipped() {
        let dir = page_dir();
        let mut pages = list_pages(dir.path()).unwrap();
        pages.insert(0, dir.path().join("missing.html"));
        let mut out = Vec::new();
        let counts = process_pages(&pages, &mut out).unwrap();

        assert_eq!(counts.failed, 1);
        assert_eq!(counts.pages, 2);
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 2);
    }
}
