// glplatform/src/platform.rs
//
//! The detected OpenGL platform.

use crate::chip_class::ChipClass;
use crate::driver::Driver;
use crate::identify;
use crate::info::{self, GLStrings, SystemVersions};
use crate::quirks::{self, Features};
use crate::report::Report;
use crate::version::VersionNumber;

use glow::HasContext;
use log::debug;
use std::collections::HashSet;

/// Everything known about the OpenGL implementation behind a context.
///
/// A platform is detected once and never changes afterwards, so it can be shared freely
/// between threads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GLPlatform {
    strings: GLStrings,
    gl_version: VersionNumber,
    glsl_version: VersionNumber,
    mesa_version: VersionNumber,
    gallium_version: VersionNumber,
    driver_version: VersionNumber,
    server_version: VersionNumber,
    kernel_version: VersionNumber,
    driver: Driver,
    chip_class: ChipClass,
    chipset: String,
    features: Features,
}

impl GLPlatform {
    /// Detects the platform from identification strings and system versions.
    pub fn detect(strings: &GLStrings, system: &SystemVersions) -> GLPlatform {
        let mut strings = strings.clone();

        // The shading language version only means something where shaders are advertised.
        if !strings.has_shader_extensions() {
            strings.shading_language_version.clear();
        }

        let gl_version = VersionNumber::parse(&strings.version);
        let glsl_version = VersionNumber::parse(&strings.shading_language_version);
        let mesa_version = info::token_after(&strings.version_tokens(), "Mesa")
            .map_or(VersionNumber::ZERO, VersionNumber::parse);

        let identification = identify::identify(&strings);
        let features = quirks::resolve(identification.driver, identification.chip_class, &strings);

        debug!(
            "Detected OpenGL {} ({}) with driver {} on {}",
            gl_version, strings.renderer, identification.driver, identification.chip_class
        );

        GLPlatform {
            gl_version,
            glsl_version,
            mesa_version,
            gallium_version: identification.gallium_version,
            driver_version: identification.driver_version,
            server_version: system.server,
            kernel_version: system.kernel,
            driver: identification.driver,
            chip_class: identification.chip_class,
            chipset: identification.chipset,
            features,
            strings,
        }
    }

    /// Queries the context current on this thread and detects its platform.
    pub fn detect_from_gl<Gl>(gl: &Gl, server_version: VersionNumber) -> GLPlatform
    where
        Gl: HasContext,
    {
        let system = SystemVersions::current().with_server_version(server_version);
        GLPlatform::detect(&GLStrings::from_gl(gl), &system)
    }

    // Identification strings

    #[inline]
    pub fn gl_vendor_string(&self) -> &str {
        &self.strings.vendor
    }

    #[inline]
    pub fn gl_renderer_string(&self) -> &str {
        &self.strings.renderer
    }

    #[inline]
    pub fn gl_version_string(&self) -> &str {
        &self.strings.version
    }

    /// The shading language version string; empty when the context has no shader support.
    #[inline]
    pub fn gl_shading_language_version_string(&self) -> &str {
        &self.strings.shading_language_version
    }

    #[inline]
    pub fn extensions(&self) -> &HashSet<String> {
        &self.strings.extensions
    }

    #[inline]
    pub fn has_extension(&self, extension: &str) -> bool {
        self.strings.extensions.contains(extension)
    }

    // Versions

    /// The OpenGL (or OpenGL ES) version of the context.
    #[inline]
    pub fn gl_version(&self) -> VersionNumber {
        self.gl_version
    }

    /// The GLSL version, or 0 when GLSL is not advertised.
    #[inline]
    pub fn glsl_version(&self) -> VersionNumber {
        self.glsl_version
    }

    /// The Mesa version, or 0 for drivers that are not built on Mesa.
    #[inline]
    pub fn mesa_version(&self) -> VersionNumber {
        self.mesa_version
    }

    /// The Gallium version, or 0 for drivers that are not built on Gallium.
    #[inline]
    pub fn gallium_version(&self) -> VersionNumber {
        self.gallium_version
    }

    /// The windowing server version, or 0 when unknown.
    #[inline]
    pub fn server_version(&self) -> VersionNumber {
        self.server_version
    }

    /// The Linux kernel version, or 0 on other systems.
    #[inline]
    pub fn kernel_version(&self) -> VersionNumber {
        self.kernel_version
    }

    /// The driver version: the Mesa version for Mesa drivers, otherwise the version the
    /// proprietary or virtual machine driver reported.
    pub fn driver_version(&self) -> VersionNumber {
        if self.is_mesa_driver() {
            self.mesa_version
        } else {
            self.driver_version
        }
    }

    /// The version reported by a proprietary or virtual machine driver, or 0.
    #[inline]
    pub fn proprietary_driver_version(&self) -> VersionNumber {
        self.driver_version
    }

    // Classification

    #[inline]
    pub fn driver(&self) -> Driver {
        self.driver
    }

    #[inline]
    pub fn chip_class(&self) -> ChipClass {
        self.chip_class
    }

    /// The chipset text the classifier worked from, or `"Unknown"`.
    #[inline]
    pub fn chipset(&self) -> &str {
        &self.chipset
    }

    #[inline]
    pub fn is_mesa_driver(&self) -> bool {
        !self.mesa_version.is_zero()
    }

    #[inline]
    pub fn is_gallium_driver(&self) -> bool {
        !self.gallium_version.is_zero()
    }

    #[inline]
    pub fn is_radeon(&self) -> bool {
        self.chip_class.is_radeon()
    }

    #[inline]
    pub fn is_nvidia(&self) -> bool {
        self.chip_class.is_nvidia()
    }

    #[inline]
    pub fn is_intel(&self) -> bool {
        self.chip_class.is_intel()
    }

    #[inline]
    pub fn is_adreno(&self) -> bool {
        self.chip_class.is_adreno()
    }

    #[inline]
    pub fn is_virtualbox(&self) -> bool {
        self.driver == Driver::VirtualBox
    }

    #[inline]
    pub fn is_vmware(&self) -> bool {
        self.driver == Driver::VMware
    }

    #[inline]
    pub fn is_software_emulation(&self) -> bool {
        self.driver.is_software_emulation()
    }

    // Features

    #[inline]
    pub fn features(&self) -> Features {
        self.features
    }

    /// Returns true if every flag in `features` is set. An empty set is never supported.
    pub fn supports(&self, features: Features) -> bool {
        !features.is_empty() && self.features.contains(features)
    }

    /// Looks up a feature by its flag name, such as `"LIMITED_GLSL"`.
    ///
    /// Names that are not flags of `Features` are not supported.
    pub fn supports_named(&self, name: &str) -> bool {
        Features::from_name(name).map_or(false, |feature| self.supports(feature))
    }

    #[inline]
    pub fn is_loose_binding(&self) -> bool {
        self.features.contains(Features::LOOSE_BINDING)
    }

    #[inline]
    pub fn is_virtual_machine(&self) -> bool {
        self.features.contains(Features::VIRTUAL_MACHINE)
    }

    #[inline]
    pub fn prefer_buffer_sub_data(&self) -> bool {
        self.features.contains(Features::PREFER_BUFFER_SUB_DATA)
    }

    #[inline]
    pub fn is_gles(&self) -> bool {
        self.features.contains(Features::GLES)
    }

    /// Builds the human-readable diagnostic report for this platform.
    pub fn report(&self) -> Report {
        Report::new(self)
    }
}
