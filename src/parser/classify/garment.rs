use std::sync::LazyLock;

use super::{PhraseRule, PhraseTable};
use crate::parser::record::GarmentType;

/// Ranked by specificity, not exhaustive. Jacket-family keys sit above the
/// jeans rule so that "denim jacket" is a jacket while plain "denim" is jeans.
pub const GARMENT_RULES: &[PhraseRule<GarmentType>] = &[
    PhraseRule { keys: &["blouse"], label: GarmentType::Blouse },
    PhraseRule {
        keys: &[
            "jacket", "blazer", "windbreaker", "parka", "anorak",
            "coat", "overcoat", "trench coat",
            "hoodie", "hooded sweatshirt", "sweatshirt",
            "vest", "suit", "business suit", "blazer suit", "tuxedo",
        ],
        label: GarmentType::Jacket,
    },
    PhraseRule { keys: &["jeans", "denim"], label: GarmentType::Jeans },
    PhraseRule { keys: &["skirt", "miniskirt", "maxiskirt"], label: GarmentType::Skirt },
    PhraseRule { keys: &["sweater", "jumper", "cardigan"], label: GarmentType::Sweater },
    PhraseRule {
        keys: &["dress", "gown", "one-piece", "jumpsuit", "overalls"],
        label: GarmentType::Dress,
    },
    PhraseRule {
        keys: &[
            "t-shirt", "tshirt", "tee", "tee shirt", "graphic tee", "v-neck tee",
            "tank top", "sleeveless top",
        ],
        label: GarmentType::TShirt,
    },
    PhraseRule {
        keys: &["shirt", "button-down shirt", "button up", "collared shirt", "dress shirt"],
        label: GarmentType::Shirt,
    },
    PhraseRule {
        keys: &["trousers", "pants", "slacks", "leggings", "sweatpants", "jogger"],
        label: GarmentType::Trousers,
    },
    PhraseRule { keys: &["short", "cutoffs"], label: GarmentType::Short },
];

static GARMENT_TABLE: LazyLock<PhraseTable<GarmentType>> =
    LazyLock::new(|| PhraseTable::compile(GARMENT_RULES));

/// Garment category for a product title; `GarmentType::default()` when nothing matches.
pub fn classify(title: &str) -> GarmentType {
    GARMENT_TABLE.first_match(title).unwrap_or_default()
}
