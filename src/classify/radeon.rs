// glplatform/src/classify/radeon.rs
//
//! ATI/AMD Radeon generations.

use super::{Rule, RuleSet};
use crate::chip_class::{ChipClass, GpuFamily};
use crate::extract::Pattern;

pub(crate) static RULES: RuleSet = RuleSet {
    family: GpuFamily::Radeon,
    rules: &[
        Rule::AnyOf(&["R100", "RV100", "RS100"], ChipClass::R100),
        Rule::AnyOf(
            &["RV200", "RS200", "R200", "RV250", "RS300", "RV280"],
            ChipClass::R200,
        ),
        Rule::AnyOf(
            &["R300", "R350", "R360", "RV350", "RV370", "RV380"],
            ChipClass::R300,
        ),
        Rule::AnyOf(
            &[
                "R420", "R423", "R430", "R480", "R481", "RV410", "RS400", "RC410", "RS480",
                "RS482", "RS600", "RS690", "RS740",
            ],
            ChipClass::R400,
        ),
        Rule::AnyOf(
            &["RV515", "R520", "RV530", "R580", "RV560", "RV570"],
            ChipClass::R500,
        ),
        Rule::AnyOf(
            &["R600", "RV610", "RV630", "RV670", "RV620", "RV635", "RS780", "RS880"],
            ChipClass::R600,
        ),
        Rule::AnyOf(
            &["R700", "RV770", "RV730", "RV710", "RV740"],
            ChipClass::R700,
        ),
        // EVERGREEN is not a chipset, but older R600G releases report it.
        Rule::AnyOf(
            &["EVERGREEN", "CEDAR", "REDWOOD", "JUNIPER", "CYPRESS", "HEMLOCK", "PALM"],
            ChipClass::Evergreen,
        ),
        Rule::AnyOf(
            &["SUMO", "SUMO2", "BARTS", "TURKS", "CAICOS", "CAYMAN"],
            ChipClass::NorthernIslands,
        ),
        Rule::Code(Pattern::HdModel, hd_model),
        Rule::Code(Pattern::XModel, x_model),
        Rule::Code(Pattern::FourDigits, bare_model),
    ],
};

/// Classifies Radeon chipset or renderer text.
pub fn classify(chipset: &str) -> ChipClass {
    RULES.classify(chipset)
}

// HD 2xxx through HD 6xxx.
fn hd_model(id: u32) -> ChipClass {
    match id {
        // Palm
        6250 | 6310 => ChipClass::Evergreen,
        6000..=6999 => ChipClass::NorthernIslands,
        5000..=5999 => ChipClass::Evergreen,
        4000..=4999 => ChipClass::R700,
        2000..=3999 => ChipClass::R600,
        _ => ChipClass::UnknownRadeon,
    }
}

// X200 through X1xxx.
fn x_model(id: u32) -> ChipClass {
    match id {
        1300.. => ChipClass::R500,
        700..=999 | 1200..=1299 => ChipClass::R400,
        300..=699 | 1000..=1199 => ChipClass::R300,
        _ => ChipClass::UnknownRadeon,
    }
}

// 7xxx, 8xxx, 9xxx and the 2100 IGP.
fn bare_model(id: u32) -> ChipClass {
    match id {
        7000..=7999 => ChipClass::R100,
        8000..=9499 => ChipClass::R200,
        9500.. => ChipClass::R300,
        2100 => ChipClass::R400,
        _ => ChipClass::UnknownRadeon,
    }
}
