// glplatform/src/quirks.rs
//
//! Derives the capability flags and driver workarounds for an identified platform.

use crate::chip_class::ChipClass;
use crate::driver::Driver;
use crate::info::GLStrings;

use bitflags::bitflags;
use log::debug;

bitflags! {
    /// Capabilities and quirks of the detected platform.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Features: u16 {
        /// The driver does not need resources bound strictly before use.
        const LOOSE_BINDING          = 0x0001;
        /// GLSL shaders can be used.
        const GLSL                   = 0x0002;
        /// GLSL is supported, but the hardware is too limited for anything complex.
        const LIMITED_GLSL           = 0x0004;
        /// Non-power-of-two textures are supported.
        const TEXTURE_NPOT           = 0x0008;
        /// Non-power-of-two textures are supported with restrictions on mipmaps and wrapping.
        const LIMITED_NPOT           = 0x0010;
        /// The driver is a virtual machine passthrough.
        const VIRTUAL_MACHINE        = 0x0020;
        /// `glBufferSubData` is preferred over mapping buffers.
        const PREFER_BUFFER_SUB_DATA = 0x0040;
        /// The context is an OpenGL ES context.
        const GLES                   = 0x0080;
    }
}

/// Resolves the feature set for a driver and chip class.
///
/// The rules run in a fixed order and later ones may tighten what earlier ones allowed.
/// OpenGL ES always ends up with full shader support, whatever the hardware generation.
pub fn resolve(driver: Driver, chip_class: ChipClass, strings: &GLStrings) -> Features {
    let gles = strings.is_gles();

    let mut features = Features::empty();
    features.set(Features::GLES, gles);
    features.set(Features::GLSL, strings.has_shader_extensions());
    features.set(Features::TEXTURE_NPOT, strings.has_npot_extension());

    if chip_class.is_radeon() {
        // R200 technically has a programmable pipeline, but SM 1.4 is too limited to be of use.
        if chip_class < ChipClass::R300 {
            features.remove(Features::GLSL);
        }

        if chip_class < ChipClass::R600 {
            match driver {
                // Catalyst falls back to software for these.
                Driver::Catalyst => features.remove(Features::TEXTURE_NPOT),
                Driver::R300G => {
                    let npot = features.contains(Features::TEXTURE_NPOT);
                    features.set(Features::LIMITED_NPOT, npot);
                }
                _ => {}
            }
            let glsl = features.contains(Features::GLSL);
            features.set(Features::LIMITED_GLSL, glsl);
        }

        if driver == Driver::R600G || (driver == Driver::R600C && strings.renderer.contains("DRI2"))
        {
            features.insert(Features::LOOSE_BINDING);
        }
    }

    if chip_class.is_nvidia() {
        if driver == Driver::NVidia {
            // High likelihood of software emulation.
            if chip_class < ChipClass::NV40 {
                features.remove(Features::GLSL);
            }
            features.insert(Features::LOOSE_BINDING | Features::PREFER_BUFFER_SUB_DATA);
        }

        let npot = features.contains(Features::TEXTURE_NPOT);
        features.set(Features::LIMITED_NPOT, npot && chip_class < ChipClass::NV40);
        let glsl = features.contains(Features::GLSL);
        features.set(Features::LIMITED_GLSL, glsl && chip_class < ChipClass::G80);
    }

    if chip_class.is_intel() {
        if chip_class < ChipClass::I915 {
            features.remove(Features::GLSL);
        }
        let glsl = features.contains(Features::GLSL);
        features.set(Features::LIMITED_GLSL, glsl && chip_class < ChipClass::I965);
        // https://bugs.freedesktop.org/show_bug.cgi?id=80349#c1
        features.remove(Features::LOOSE_BINDING);
    }

    if driver.is_software_emulation() {
        features.remove(Features::LIMITED_GLSL);
        // Only llvmpipe compiles shaders; the other rasterizers have no GLSL.
        features.set(Features::GLSL, driver == Driver::Llvmpipe);
    }

    // Unknown hardware: assume it is capable rather than disabling everything.
    if chip_class == ChipClass::UnknownChipClass && driver == Driver::Unknown {
        features.insert(Features::GLSL);
    }

    if driver.is_virtual_machine() {
        features.insert(Features::VIRTUAL_MACHINE);
    }

    // A context could not have been created if the implementation lacked shaders.
    if gles {
        features.insert(Features::GLSL);
        features.remove(Features::LIMITED_GLSL);
    }

    debug!("Resolved features for {} on {}: {:?}", driver, chip_class, features);
    features
}
