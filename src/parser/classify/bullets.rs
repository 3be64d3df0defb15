use std::sync::LazyLock;

use regex::Regex;

use crate::parser::record::ClassifiedBullets;

static STRIP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s%-]").unwrap());

// Optional percentage before the fiber. Only known fiber qualifiers may sit
// in between ("100% organic cotton"), so "20% more room, cotton" stays "cotton".
static FABRIC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:\d{1,3}%\s*(?:(?:organic|recycled|pima|supima|merino|egyptian|combed|ringspun|virgin)\s+){0,2})?(?:cotton|polyester|spandex|nylon|rayon|wool|silk|linen|hemp|jute|leather|acrylic|viscose|denim|elastane)\b",
    )
    .unwrap()
});
static CARE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:machine[\s-]?wash(?:able)?|hand[\s-]?wash(?: only)?|dry[\s-]?clean(?: only)?|tumble[\s-]?dry|line[\s-]?dry|do not bleach)\b",
    )
    .unwrap()
});
static ORIGIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:made in [\p{L}\s]+|imported)\b").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Fabric,
    Care,
    Origin,
    Other,
}

/// Bucket for a single bullet plus the text it contributes: the matched
/// phrase for fabric/care/origin, the untouched bullet for `Other`.
pub fn classify_bullet(bullet: &str) -> (Bucket, String) {
    let clean = STRIP_RE.replace_all(bullet, "").to_lowercase();

    let families = [
        (Bucket::Fabric, &*FABRIC_RE),
        (Bucket::Care, &*CARE_RE),
        (Bucket::Origin, &*ORIGIN_RE),
    ];
    for (bucket, re) in families {
        if let Some(m) = re.find(&clean) {
            return (bucket, m.as_str().trim().to_string());
        }
    }
    (Bucket::Other, bullet.to_string())
}

pub fn classify_all<S: AsRef<str>>(bullets: &[S]) -> ClassifiedBullets {
    let mut out = ClassifiedBullets::default();
    for bullet in bullets {
        let (bucket, text) = classify_bullet(bullet.as_ref());
        match bucket {
            Bucket::Fabric => out.fabric.push(text),
            Bucket::Care => out.care.push(text),
            Bucket::Origin => out.origin.push(text),
            Bucket::Other => out.other.push(text),
        }
    }
    out
}
