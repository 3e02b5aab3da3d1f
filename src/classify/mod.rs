// glplatform/src/classify/mod.rs
//
//! Chipset classifiers: map renderer or chipset text to a `ChipClass`.
//!
//! Each vendor family has an ordered table of rules. The first rule that recognizes the text
//! decides the class; when none does, the family's `Unknown*` class is returned. Literal
//! codenames come before numeric model ranges because model numbers are reused across eras.

use crate::chip_class::{ChipClass, GpuFamily};
use crate::extract::Pattern;

mod adreno;
mod intel;
mod nvidia;
mod radeon;

pub use self::adreno::classify as adreno;
pub use self::intel::classify as intel;
pub use self::nvidia::classify as nvidia;
pub use self::radeon::classify as radeon;

/// A single classification rule.
pub(crate) enum Rule {
    /// The text contains any of the given names.
    AnyOf(&'static [&'static str], ChipClass),
    /// The text carries a model code matching the pattern; the code decides the class.
    ///
    /// A match ends the search even when the code is out of every known range.
    Code(Pattern, fn(u32) -> ChipClass),
    /// Any other test.
    Matches(fn(&str) -> Option<ChipClass>),
}

impl Rule {
    pub(crate) fn apply(&self, text: &str) -> Option<ChipClass> {
        match *self {
            Rule::AnyOf(names, chip_class) => {
                if names.iter().any(|name| text.contains(name)) {
                    Some(chip_class)
                } else {
                    None
                }
            }
            Rule::Code(pattern, map) => pattern.code(text).map(map),
            Rule::Matches(test) => test(text),
        }
    }
}

/// The ordered rules for one vendor family.
pub(crate) struct RuleSet {
    pub(crate) family: GpuFamily,
    pub(crate) rules: &'static [Rule],
}

impl RuleSet {
    pub(crate) fn classify(&self, text: &str) -> ChipClass {
        self.rules
            .iter()
            .find_map(|rule| rule.apply(text))
            .unwrap_or_else(|| self.family.unknown_chip_class())
    }
}
