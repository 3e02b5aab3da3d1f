// glplatform/src/identify.rs
//
//! Works out which driver produced a context, and which chipset it runs on.
//!
//! The decision is an ordered table of rules, each pairing a test on the identification
//! strings with the action that identifies the driver. The first rule whose test passes
//! decides; the last rule accepts anything and sorts out the community (Mesa/Gallium) drivers.

use crate::chip_class::ChipClass;
use crate::classify;
use crate::driver::Driver;
use crate::info::{self, GLStrings};
use crate::version::VersionNumber;

use log::debug;

const CATALYST_VENDOR: &str = "ATI Technologies Inc.";
const NVIDIA_VENDOR: &str = "NVIDIA Corporation";
const QUALCOMM_VENDOR: &str = "Qualcomm";
const SWRAST_RENDERER: &str = "Software Rasterizer";
const VIRTUALBOX_VENDOR: &str = "Humper";
const VIRTUALBOX_RENDERER: &str = "Chromium";
const R300G_VENDOR: &str = "X.Org R300 Project";
const R600G_VENDOR: &str = "X.Org";
const NOUVEAU_VENDOR: &str = "nouveau";
const VMWARE_VENDOR: &str = "VMware, Inc.";

// Renderer substrings that identify R600G among the drivers reporting the X.Org vendor.
const R600G_CHIPSETS: [&str; 19] = [
    "R6", "R7", "RV6", "RV7", "RS780", "RS880", "CEDAR", "REDWOOD", "JUNIPER", "CYPRESS",
    "HEMLOCK", "PALM", "EVERGREEN", "SUMO", "SUMO2", "BARTS", "TURKS", "CAICOS", "CAYMAN",
];

// Newer Gallium drivers no longer report their version, but it is at least this.
const MINIMUM_GALLIUM_VERSION: VersionNumber = VersionNumber::new(0, 4, 0);

const UNKNOWN_CHIPSET: &str = "Unknown";

/// What the driver identifier concluded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identification {
    pub driver: Driver,
    pub chip_class: ChipClass,
    /// The text the chipset classifier worked from, or `"Unknown"`.
    pub chipset: String,
    /// The version of a proprietary or virtual machine driver; 0 otherwise.
    pub driver_version: VersionNumber,
    /// The Gallium version of a community driver; 0 otherwise.
    pub gallium_version: VersionNumber,
}

impl Identification {
    fn new(driver: Driver, chip_class: ChipClass, chipset: &str) -> Identification {
        Identification {
            driver,
            chip_class,
            chipset: chipset.to_owned(),
            driver_version: VersionNumber::ZERO,
            gallium_version: VersionNumber::ZERO,
        }
    }

    fn unknown() -> Identification {
        Identification::new(Driver::Unknown, ChipClass::UnknownChipClass, UNKNOWN_CHIPSET)
    }
}

struct DriverRule {
    name: &'static str,
    applies: fn(&GLStrings) -> bool,
    identify: fn(&GLStrings) -> Identification,
}

static DRIVER_RULES: [DriverRule; 8] = [
    DriverRule {
        name: "Mesa classic Radeon",
        applies: |strings| strings.renderer.starts_with("Mesa DRI R"),
        identify: mesa_classic_radeon,
    },
    DriverRule {
        name: "Intel",
        applies: |strings| strings.renderer.contains("Intel"),
        identify: intel,
    },
    DriverRule {
        name: "Catalyst",
        applies: |strings| strings.vendor == CATALYST_VENDOR,
        identify: catalyst,
    },
    DriverRule {
        name: "NVIDIA",
        applies: |strings| strings.vendor == NVIDIA_VENDOR,
        identify: nvidia,
    },
    DriverRule {
        name: "Qualcomm",
        applies: |strings| strings.vendor == QUALCOMM_VENDOR,
        identify: |strings| {
            let chip_class = classify::adreno(&strings.renderer);
            Identification::new(Driver::Qualcomm, chip_class, &strings.renderer)
        },
    },
    DriverRule {
        name: "Software rasterizer",
        applies: |strings| strings.renderer == SWRAST_RENDERER,
        identify: |_| {
            Identification::new(Driver::Swrast, ChipClass::UnknownChipClass, UNKNOWN_CHIPSET)
        },
    },
    DriverRule {
        name: "VirtualBox",
        applies: |strings| {
            strings.vendor == VIRTUALBOX_VENDOR && strings.renderer == VIRTUALBOX_RENDERER
        },
        identify: virtualbox,
    },
    DriverRule {
        name: "Community",
        applies: |_| true,
        identify: community,
    },
];

/// Identifies the driver and chip class from the identification strings.
///
/// This never fails: strings that no rule recognizes yield `Driver::Unknown` and
/// `ChipClass::UnknownChipClass`.
pub fn identify(strings: &GLStrings) -> Identification {
    let rule = match DRIVER_RULES.iter().find(|rule| (rule.applies)(strings)) {
        Some(rule) => rule,
        None => return Identification::unknown(),
    };
    let identification = (rule.identify)(strings);
    debug!(
        "{} rule identified renderer {:?} as driver {} on {} ({:?})",
        rule.name,
        strings.renderer,
        identification.driver,
        identification.chip_class,
        identification.chipset
    );
    identification
}

// Sample renderer string: "Mesa DRI R600 (RV740 94B3) 20090101 x86/MMX/SSE2 TCL DRI2"
fn mesa_classic_radeon(strings: &GLStrings) -> Identification {
    let tokens: Vec<&str> = strings.renderer.split(' ').collect();
    let driver = match tokens.get(2).copied() {
        Some("R100") => Driver::R100,
        Some("R200") => Driver::R200,
        Some("R300") => Driver::R300C,
        Some("R600") => Driver::R600C,
        _ => Driver::Unknown,
    };

    // Strip the leading '(' from the chipset token.
    let chipset = match tokens.get(3) {
        Some(token) => {
            let mut chars = token.chars();
            chars.next();
            chars.as_str()
        }
        None => "",
    };
    Identification::new(driver, classify::radeon(chipset), chipset)
}

// Sample renderer string: "Mesa DRI Mobile Intel® GM45 Express Chipset GEM 20100328 2010Q1"
fn intel(strings: &GLStrings) -> Identification {
    let chipset = if strings.renderer.starts_with("Intel(R) Integrated Graphics Device") {
        "IGD"
    } else {
        strings.renderer.as_str()
    };
    Identification::new(Driver::Intel, classify::intel(chipset), chipset)
}

// The driver version is the first token of the version string, or the second when the
// third is parenthesized.
fn catalyst(strings: &GLStrings) -> Identification {
    let mut identification = Identification::new(
        Driver::Catalyst,
        classify::radeon(&strings.renderer),
        &strings.renderer,
    );
    let tokens = strings.version_tokens();
    let version_token = if tokens.get(2).map_or(false, |token| token.starts_with('(')) {
        tokens.get(1)
    } else {
        tokens.first()
    };
    identification.driver_version = version_token.map_or(VersionNumber::ZERO, VersionNumber::parse);
    identification
}

// Sample version string: "4.5.0 NVIDIA 361.45"
fn nvidia(strings: &GLStrings) -> Identification {
    let mut identification = Identification::new(
        Driver::NVidia,
        classify::nvidia(&strings.renderer),
        &strings.renderer,
    );
    identification.driver_version = info::token_after(&strings.version_tokens(), "NVIDIA")
        .map_or(VersionNumber::ZERO, VersionNumber::parse);
    identification
}

fn virtualbox(strings: &GLStrings) -> Identification {
    let mut identification =
        Identification::new(Driver::VirtualBox, ChipClass::UnknownChipClass, UNKNOWN_CHIPSET);
    identification.driver_version =
        info::token_after(&strings.version_tokens(), VIRTUALBOX_RENDERER)
            .map_or(VersionNumber::ZERO, VersionNumber::parse);
    identification
}

struct CommunityRule {
    driver: Driver,
    applies: fn(&GLStrings, &str) -> bool,
    classify: Option<fn(&str) -> ChipClass>,
}

static COMMUNITY_RULES: [CommunityRule; 6] = [
    CommunityRule {
        driver: Driver::R300G,
        applies: |strings, _| strings.vendor == R300G_VENDOR,
        classify: Some(classify::radeon),
    },
    CommunityRule {
        driver: Driver::R600G,
        applies: |strings, _| {
            strings.vendor == R600G_VENDOR
                && R600G_CHIPSETS.iter().any(|chipset| strings.renderer.contains(chipset))
        },
        classify: Some(classify::radeon),
    },
    CommunityRule {
        driver: Driver::Nouveau,
        applies: |strings, _| strings.vendor == NOUVEAU_VENDOR,
        classify: Some(classify::nvidia),
    },
    CommunityRule {
        driver: Driver::Softpipe,
        applies: |strings, chipset| strings.vendor == VMWARE_VENDOR && chipset == "softpipe",
        classify: None,
    },
    CommunityRule {
        driver: Driver::Llvmpipe,
        applies: |strings, chipset| strings.vendor == VMWARE_VENDOR && chipset == "llvmpipe",
        classify: None,
    },
    CommunityRule {
        driver: Driver::VMware,
        applies: |strings, chipset| strings.vendor == VMWARE_VENDOR && chipset.contains("SVGA3D"),
        classify: None,
    },
];

// Sample renderer string: "Gallium 0.4 on AMD RV740"
fn community(strings: &GLStrings) -> Identification {
    let tokens: Vec<&str> = strings.renderer.split(' ').collect();
    let (chipset, gallium_version) = if strings.renderer.contains("Gallium") {
        let gallium_version = tokens.get(1).map_or(VersionNumber::ZERO, VersionNumber::parse);
        let chipset = match tokens.get(3).copied() {
            Some("AMD") | Some("ATI") => tokens.get(4).copied(),
            chipset => chipset,
        };
        (chipset.unwrap_or(""), gallium_version)
    } else {
        (tokens[0], MINIMUM_GALLIUM_VERSION)
    };

    let mut identification = match COMMUNITY_RULES
        .iter()
        .find(|rule| (rule.applies)(strings, chipset))
    {
        Some(rule) => {
            let chip_class = rule
                .classify
                .map_or(ChipClass::UnknownChipClass, |classifier| classifier(chipset));
            Identification::new(rule.driver, chip_class, chipset)
        }
        None => Identification::new(Driver::Unknown, ChipClass::UnknownChipClass, chipset),
    };
    identification.gallium_version = gallium_version;
    identification
}
