// glplatform/src/driver.rs
//
//! The driver stacks that can back an OpenGL context.

use crate::error::Error;

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// The software stack that renders for a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Driver {
    /// Mesa classic driver for R100 hardware.
    R100,
    /// Mesa classic driver for R200 hardware.
    R200,
    /// Mesa classic driver for R300 to R500 hardware.
    R300C,
    /// Gallium driver for R300 to R500 hardware.
    R300G,
    /// Mesa classic driver for R600 and later hardware.
    R600C,
    /// Gallium driver for R600 and later hardware.
    R600G,
    /// Reverse-engineered driver for NVIDIA hardware.
    Nouveau,
    Intel,
    /// The proprietary NVIDIA driver.
    NVidia,
    /// The proprietary AMD driver.
    Catalyst,
    /// Mesa's classic software rasterizer.
    Swrast,
    /// Gallium reference software rasterizer.
    Softpipe,
    /// Gallium JIT-compiled software rasterizer.
    Llvmpipe,
    /// VirtualBox guest acceleration.
    VirtualBox,
    /// VMware guest acceleration.
    VMware,
    Qualcomm,
    Unknown,
}

impl Driver {
    /// Every driver, in order.
    pub const ALL: [Driver; 17] = [
        Driver::R100,
        Driver::R200,
        Driver::R300C,
        Driver::R300G,
        Driver::R600C,
        Driver::R600G,
        Driver::Nouveau,
        Driver::Intel,
        Driver::NVidia,
        Driver::Catalyst,
        Driver::Swrast,
        Driver::Softpipe,
        Driver::Llvmpipe,
        Driver::VirtualBox,
        Driver::VMware,
        Driver::Qualcomm,
        Driver::Unknown,
    ];

    /// Returns true for the drivers that rasterize on the CPU.
    #[inline]
    pub fn is_software_emulation(self) -> bool {
        matches!(self, Driver::Swrast | Driver::Softpipe | Driver::Llvmpipe)
    }

    /// Returns true for the drivers that pass rendering through to a virtual machine host.
    #[inline]
    pub fn is_virtual_machine(self) -> bool {
        matches!(self, Driver::VirtualBox | Driver::VMware)
    }

    /// Returns the stable display name of this driver.
    pub fn name(self) -> &'static str {
        match self {
            Driver::R100 => "Radeon",
            Driver::R200 => "R200",
            Driver::R300C => "R300C",
            Driver::R300G => "R300G",
            Driver::R600C => "R600C",
            Driver::R600G => "R600G",
            Driver::Nouveau => "Nouveau",
            Driver::Intel => "Intel",
            Driver::NVidia => "NVIDIA",
            Driver::Catalyst => "Catalyst",
            Driver::Swrast => "Software rasterizer",
            Driver::Softpipe => "softpipe",
            Driver::Llvmpipe => "LLVMpipe",
            Driver::VirtualBox => "VirtualBox (Chromium)",
            Driver::VMware => "VMware (SVGA3D)",
            Driver::Qualcomm => "Qualcomm",
            Driver::Unknown => "Unknown",
        }
    }
}

impl Display for Driver {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

impl FromStr for Driver {
    type Err = Error;

    fn from_str(name: &str) -> Result<Driver, Error> {
        Driver::ALL
            .iter()
            .copied()
            .find(|driver| driver.name() == name)
            .ok_or(Error::UnknownDriver)
    }
}
