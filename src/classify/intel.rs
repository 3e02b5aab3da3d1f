// glplatform/src/classify/intel.rs
//
//! Intel integrated graphics generations, named the way Mesa's i915/i965 drivers report them.

use super::{Rule, RuleSet};
use crate::chip_class::{ChipClass, GpuFamily};

pub(crate) static RULES: RuleSet = RuleSet {
    family: GpuFamily::Intel,
    rules: &[
        // GL 1.3
        Rule::AnyOf(&["845G", "830M", "852GM/855GM", "865G"], ChipClass::I8XX),
        // GL 1.4, SM 2.0. The 965Q and 946GZ are GMA 3000 parts but the driver treats them
        // as this generation.
        Rule::AnyOf(
            &[
                "915G", "E7221G", "915GM", "945G", "945GM", "945GME", "Q33", "Q35", "G33",
                "965Q", "946GZ", "IGD",
            ],
            ChipClass::I915,
        ),
        // GL 2.0, SM 3.0
        Rule::AnyOf(
            &[
                "965G",
                "G45/G43",
                "965GM",
                "965GME/GLE",
                "GM45",
                "Q45/Q43",
                "G41",
                "B43",
                "Ironlake",
            ],
            ChipClass::I965,
        ),
        Rule::AnyOf(&["Sandybridge"], ChipClass::SandyBridge),
        Rule::AnyOf(&["Ivybridge"], ChipClass::IvyBridge),
        Rule::AnyOf(&["Haswell"], ChipClass::Haswell),
    ],
};

/// Classifies Intel chipset or renderer text.
pub fn classify(chipset: &str) -> ChipClass {
    RULES.classify(chipset)
}
