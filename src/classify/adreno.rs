// glplatform/src/classify/adreno.rs
//
//! Qualcomm Adreno series.

use super::{Rule, RuleSet};
use crate::chip_class::{ChipClass, GpuFamily};

pub(crate) static RULES: RuleSet = RuleSet {
    family: GpuFamily::Adreno,
    rules: &[Rule::Matches(series)],
};

/// Classifies an Adreno renderer string such as `"Adreno (TM) 330"`.
///
/// Text that does not mention Adreno at all is not this family's hardware and yields
/// `UnknownChipClass`, as opposed to `UnknownAdreno` for an unrecognized Adreno model.
pub fn classify(renderer: &str) -> ChipClass {
    if !renderer.contains("Adreno") {
        return ChipClass::UnknownChipClass;
    }
    RULES.classify(renderer)
}

// The model number is the third space-separated token.
fn series(renderer: &str) -> Option<ChipClass> {
    let model: u32 = renderer.split(' ').nth(2)?.parse().ok()?;
    match model {
        100..=199 => Some(ChipClass::Adreno1XX),
        200..=299 => Some(ChipClass::Adreno2XX),
        300..=399 => Some(ChipClass::Adreno3XX),
        400..=499 => Some(ChipClass::Adreno4XX),
        500..=599 => Some(ChipClass::Adreno5XX),
        _ => None,
    }
}
