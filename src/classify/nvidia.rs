// glplatform/src/classify/nvidia.rs
//
//! NVIDIA generations.

use super::{Rule, RuleSet};
use crate::chip_class::{ChipClass, GpuFamily};
use crate::extract::Pattern;

pub(crate) static RULES: RuleSet = RuleSet {
    family: GpuFamily::NVidia,
    rules: &[
        Rule::Code(Pattern::NvCode, nv_code),
        Rule::AnyOf(&["GeForce2", "GeForce 256"], ChipClass::NV10),
        Rule::AnyOf(&["GeForce3"], ChipClass::NV20),
        Rule::Matches(geforce4),
        // GeForce FX, 6, 7, 8 and 9 series.
        Rule::Code(Pattern::GeForceFourDigits, four_digit_model),
        // GeForce 100 through 500 series.
        Rule::Code(Pattern::GeForceThreeDigits, three_digit_model),
    ],
};

/// Classifies NVIDIA chipset or renderer text.
pub fn classify(chipset: &str) -> ChipClass {
    RULES.classify(chipset)
}

fn nv_code(id: u32) -> ChipClass {
    match id & 0xf0 {
        0x00 | 0x10 => ChipClass::NV10,
        0x20 => ChipClass::NV20,
        0x30 => ChipClass::NV30,
        0x40 | 0x60 => ChipClass::NV40,
        0x50 | 0x80 | 0x90 | 0xa0 => ChipClass::G80,
        _ => ChipClass::UnknownNVidia,
    }
}

// The GeForce4 MX parts are NV1x chips sold under the GeForce4 name.
fn geforce4(chipset: &str) -> Option<ChipClass> {
    const MX_MODELS: [&str; 5] = ["MX 420", "MX 440", "MX 460", "MX 4000", "PCX 4300"];

    if !chipset.contains("GeForce4") {
        return None;
    }
    if MX_MODELS.iter().any(|model| chipset.contains(model)) {
        Some(ChipClass::NV10)
    } else {
        Some(ChipClass::NV20)
    }
}

fn four_digit_model(id: u32) -> ChipClass {
    match id {
        0..=5999 => ChipClass::NV30,
        6000..=7999 => ChipClass::NV40,
        _ => ChipClass::G80,
    }
}

fn three_digit_model(id: u32) -> ChipClass {
    match id {
        400..=599 => ChipClass::GF100,
        100..=399 => ChipClass::G80,
        _ => ChipClass::UnknownNVidia,
    }
}
