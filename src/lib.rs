//! Product-page attribute extraction for sustainability scoring.
//!
//! `parser::process_page` is the whole core: synchronous, side-effect free,
//! and safe to run on many pages at once. `batch` runs it over a directory.
//! `session`, `settings` and `transport` are the thin layer that ships
//! records to the scoring service.

pub mod batch;
pub mod page;
pub mod parser;
pub mod session;
pub mod settings;
pub mod transport;

pub use page::{HtmlPage, PageNode, SourceDocument};
pub use parser::process_page;
pub use parser::record::ProductRecord;
