use std::sync::LazyLock;

use super::{PhraseRule, PhraseTable};
use crate::parser::record::{DryInstruction, WashInstruction};

// Temperature-specific rules come before the generic "machine wash" key,
// otherwise "machine wash hot" would resolve to the cold label.
pub const WASH_RULES: &[PhraseRule<WashInstruction>] = &[
    PhraseRule { keys: &["machine wash hot", "wash hot"], label: WashInstruction::MachineWashHot },
    PhraseRule { keys: &["machine wash warm", "wash warm"], label: WashInstruction::MachineWashWarm },
    PhraseRule {
        keys: &["machine wash cold", "machine washable", "machine wash", "wash cold"],
        label: WashInstruction::MachineWashCold,
    },
    PhraseRule { keys: &["dry clean"], label: WashInstruction::DryClean },
    PhraseRule { keys: &["hand wash"], label: WashInstruction::HandWash },
];

pub const DRY_RULES: &[PhraseRule<DryInstruction>] = &[
    PhraseRule { keys: &["line dry", "air dry", "lay flat to dry"], label: DryInstruction::LineDry },
    PhraseRule {
        keys: &["tumble dry medium", "tumble dry high"],
        label: DryInstruction::TumbleDryMedium,
    },
    PhraseRule {
        keys: &["tumble dry low", "tumble dry", "dryer", "machine dry", "machine dryable"],
        label: DryInstruction::TumbleDryLow,
    },
    PhraseRule { keys: &["dry clean"], label: DryInstruction::DryClean },
];

static WASH_TABLE: LazyLock<PhraseTable<WashInstruction>> =
    LazyLock::new(|| PhraseTable::compile(WASH_RULES));
static DRY_TABLE: LazyLock<PhraseTable<DryInstruction>> =
    LazyLock::new(|| PhraseTable::compile(DRY_RULES));

/// Resolve wash and dry instructions independently from raw care text.
pub fn refine(care_text: &str) -> (Option<WashInstruction>, Option<DryInstruction>) {
    (WASH_TABLE.first_match(care_text), DRY_TABLE.first_match(care_text))
}
