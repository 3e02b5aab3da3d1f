// glplatform/src/chip_class.rs
//
//! GPU generations, grouped by vendor family.

use crate::error::Error;

use std::fmt::{self, Display, Formatter};
use std::ops::RangeInclusive;
use std::str::FromStr;

/// The hardware generation of a GPU.
///
/// Each vendor family occupies a contiguous range of values that ends with that family's
/// `Unknown*` class, so "generation at least X" is an ordinary comparison and family
/// membership is a range check. Do not reorder the variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u32)]
pub enum ChipClass {
    // Radeon
    /// DX7 (2000)
    R100 = 0,
    /// DX8.1, SM 1.4 (2001)
    R200,
    /// DX9, SM 2.0 (2002)
    R300,
    /// DX9, SM 2.0b (2004)
    R400,
    /// DX9, SM 3.0 (2005)
    R500,
    /// DX10, SM 4.0 (2007)
    R600,
    /// DX10.1, SM 4.1 (2008)
    R700,
    /// DX11, SM 5.0 (2009)
    Evergreen,
    /// DX11, SM 5.0 (2010)
    NorthernIslands,
    UnknownRadeon = 999,

    // NVIDIA
    /// GL1.2, DX7 (1999)
    NV10 = 1000,
    /// GL1.3, DX8 (2001)
    NV20,
    /// GL1.5, DX9 (2003)
    NV30,
    /// GL2.0, DX9c (2004)
    NV40,
    /// GL3.3, DX10 (2007)
    G80,
    /// GL4.0, DX11 (2010)
    GF100,
    UnknownNVidia = 1999,

    // Intel
    /// GL1.3, DX8? (2001)
    I8XX = 2000,
    /// GL1.4/1.5, DX9/DX9c (2004)
    I915,
    /// GL2.0, DX9c (2006)
    I965,
    /// GL3.1, DX10.1 (2010)
    SandyBridge,
    /// GL4.0, DX11 (2012)
    IvyBridge,
    /// GL4.0, DX11.1 (2013)
    Haswell,
    UnknownIntel = 2999,

    // Qualcomm
    Adreno1XX = 3000,
    Adreno2XX,
    Adreno3XX,
    Adreno4XX,
    Adreno5XX,
    UnknownAdreno = 3999,

    UnknownChipClass = 99999,
}

/// The vendor families that have their own range of chip classes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GpuFamily {
    Radeon,
    NVidia,
    Intel,
    Adreno,
}

impl GpuFamily {
    pub const ALL: [GpuFamily; 4] =
        [GpuFamily::Radeon, GpuFamily::NVidia, GpuFamily::Intel, GpuFamily::Adreno];

    /// The chip classes belonging to this family, from its oldest generation up to its
    /// `Unknown*` sentinel.
    pub fn chip_classes(self) -> RangeInclusive<ChipClass> {
        match self {
            GpuFamily::Radeon => ChipClass::R100..=ChipClass::UnknownRadeon,
            GpuFamily::NVidia => ChipClass::NV10..=ChipClass::UnknownNVidia,
            GpuFamily::Intel => ChipClass::I8XX..=ChipClass::UnknownIntel,
            GpuFamily::Adreno => ChipClass::Adreno1XX..=ChipClass::UnknownAdreno,
        }
    }

    /// The class assigned to hardware of this family that no rule recognizes.
    pub fn unknown_chip_class(self) -> ChipClass {
        *self.chip_classes().end()
    }
}

impl ChipClass {
    /// Every chip class, in order.
    pub const ALL: [ChipClass; 31] = [
        ChipClass::R100,
        ChipClass::R200,
        ChipClass::R300,
        ChipClass::R400,
        ChipClass::R500,
        ChipClass::R600,
        ChipClass::R700,
        ChipClass::Evergreen,
        ChipClass::NorthernIslands,
        ChipClass::UnknownRadeon,
        ChipClass::NV10,
        ChipClass::NV20,
        ChipClass::NV30,
        ChipClass::NV40,
        ChipClass::G80,
        ChipClass::GF100,
        ChipClass::UnknownNVidia,
        ChipClass::I8XX,
        ChipClass::I915,
        ChipClass::I965,
        ChipClass::SandyBridge,
        ChipClass::IvyBridge,
        ChipClass::Haswell,
        ChipClass::UnknownIntel,
        ChipClass::Adreno1XX,
        ChipClass::Adreno2XX,
        ChipClass::Adreno3XX,
        ChipClass::Adreno4XX,
        ChipClass::Adreno5XX,
        ChipClass::UnknownAdreno,
        ChipClass::UnknownChipClass,
    ];

    /// Returns the vendor family this class belongs to, if any.
    pub fn family(self) -> Option<GpuFamily> {
        GpuFamily::ALL
            .iter()
            .copied()
            .find(|family| family.chip_classes().contains(&self))
    }

    #[inline]
    pub fn is_radeon(self) -> bool {
        GpuFamily::Radeon.chip_classes().contains(&self)
    }

    #[inline]
    pub fn is_nvidia(self) -> bool {
        GpuFamily::NVidia.chip_classes().contains(&self)
    }

    #[inline]
    pub fn is_intel(self) -> bool {
        GpuFamily::Intel.chip_classes().contains(&self)
    }

    #[inline]
    pub fn is_adreno(self) -> bool {
        GpuFamily::Adreno.chip_classes().contains(&self)
    }

    /// Returns the stable display name of this class.
    ///
    /// Every `Unknown*` class is displayed as `"Unknown"`.
    pub fn name(self) -> &'static str {
        match self {
            ChipClass::R100 => "R100",
            ChipClass::R200 => "R200",
            ChipClass::R300 => "R300",
            ChipClass::R400 => "R400",
            ChipClass::R500 => "R500",
            ChipClass::R600 => "R600",
            ChipClass::R700 => "R700",
            ChipClass::Evergreen => "EVERGREEN",
            ChipClass::NorthernIslands => "NI",
            ChipClass::NV10 => "NV10",
            ChipClass::NV20 => "NV20",
            ChipClass::NV30 => "NV30",
            ChipClass::NV40 => "NV40/G70",
            ChipClass::G80 => "G80/G90",
            ChipClass::GF100 => "GF100",
            ChipClass::I8XX => "i830/i835",
            ChipClass::I915 => "i915/i945",
            ChipClass::I965 => "i965",
            ChipClass::SandyBridge => "SandyBridge",
            ChipClass::IvyBridge => "IvyBridge",
            ChipClass::Haswell => "Haswell",
            ChipClass::Adreno1XX => "Adreno 1xx series",
            ChipClass::Adreno2XX => "Adreno 2xx series",
            ChipClass::Adreno3XX => "Adreno 3xx series",
            ChipClass::Adreno4XX => "Adreno 4xx series",
            ChipClass::Adreno5XX => "Adreno 5xx series",
            ChipClass::UnknownRadeon
            | ChipClass::UnknownNVidia
            | ChipClass::UnknownIntel
            | ChipClass::UnknownAdreno
            | ChipClass::UnknownChipClass => "Unknown",
        }
    }
}

impl Display for ChipClass {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

impl FromStr for ChipClass {
    type Err = Error;

    /// Parses a display name. `"Unknown"` yields `UnknownChipClass`.
    fn from_str(name: &str) -> Result<ChipClass, Error> {
        if name == "Unknown" {
            return Ok(ChipClass::UnknownChipClass);
        }
        ChipClass::ALL
            .iter()
            .copied()
            .find(|chip_class| chip_class.name() == name)
            .ok_or(Error::UnknownChipClass)
    }
}
