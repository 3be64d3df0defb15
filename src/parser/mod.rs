pub mod classify;
pub mod extract;
pub mod record;

use tracing::debug;

use crate::page::SourceDocument;
use extract::Fragments;
use record::{ProductRecord, CARE_LABEL};

/// Three-stage pipeline: page → fragments → classified values → record.
pub fn process_page<D: SourceDocument>(doc: &D) -> ProductRecord {
    assemble(extract::extract_all(doc))
}

/// Build the record from extracted fragments. Keyword flags are computed
/// last, over every textual field of the finished record.
pub fn assemble(fragments: Fragments) -> ProductRecord {
    let Fragments {
        title,
        byline,
        mut facts,
        about,
        feature_bullets,
        description,
    } = fragments;

    let garment = title
        .as_deref()
        .map(classify::garment::classify)
        .unwrap_or_default();
    let brand = byline.as_deref().and_then(extract::heading::normalize_brand);

    let feature_bullets = feature_bullets.map(|bullets| {
        let classified = classify::bullets::classify_all(&bullets);
        for (label, value) in classified.fact_entries() {
            if !facts.insert_missing(label, value) {
                debug!("Keeping page value for {:?} over feature bullets", label);
            }
        }
        classified
    });

    let (wash, dry) = match facts.get(CARE_LABEL) {
        Some(care) => classify::care::refine(care),
        None => (None, None),
    };

    let mut record = ProductRecord {
        name: title,
        garment,
        brand,
        facts,
        about,
        feature_bullets,
        description,
        wash,
        dry,
        recycled: false,
        reused: false,
        sustainable: false,
    };

    let flags = classify::keywords::scan(&record.searchable_text());
    record.recycled = flags.recycled;
    record.reused = flags.reused;
    record.sustainable = flags.sustainable;

    debug!(
        name = ?record.name,
        garment = record.garment.as_str(),
        facts = record.facts.len(),
        about = record.about.len(),
        "Assembled product record"
    );
    record
}
