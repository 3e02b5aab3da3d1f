// glplatform/src/info.rs
//
//! The identification strings and system versions that detection works from.

use crate::version::{self, VersionNumber};

use glow::HasContext;
use std::collections::HashSet;

const SHADER_EXTENSIONS: [&str; 3] = [
    "GL_ARB_shader_objects",
    "GL_ARB_fragment_shader",
    "GL_ARB_vertex_shader",
];

const NPOT_EXTENSION: &str = "GL_ARB_texture_non_power_of_two";

/// The strings an OpenGL implementation identifies itself with.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GLStrings {
    /// `GL_VENDOR`
    pub vendor: String,
    /// `GL_RENDERER`
    pub renderer: String,
    /// `GL_VERSION`
    pub version: String,
    /// `GL_SHADING_LANGUAGE_VERSION`, if it was queried.
    pub shading_language_version: String,
    /// `GL_EXTENSIONS`, one entry per extension name.
    pub extensions: HashSet<String>,
}

impl GLStrings {
    /// Creates the strings from already-queried text. `extensions` is the space-separated
    /// `GL_EXTENSIONS` string.
    pub fn new<V, R, S>(vendor: V, renderer: R, version: S, extensions: &str) -> GLStrings
    where
        V: Into<String>,
        R: Into<String>,
        S: Into<String>,
    {
        GLStrings {
            vendor: vendor.into(),
            renderer: renderer.into(),
            version: version.into(),
            shading_language_version: String::new(),
            extensions: extensions
                .split(' ')
                .filter(|extension| !extension.is_empty())
                .map(str::to_owned)
                .collect(),
        }
    }

    /// Creates the strings from raw bytes, replacing invalid UTF-8.
    pub fn from_bytes(
        vendor: &[u8],
        renderer: &[u8],
        version: &[u8],
        extensions: &[u8],
    ) -> GLStrings {
        GLStrings::new(
            String::from_utf8_lossy(vendor),
            String::from_utf8_lossy(renderer),
            String::from_utf8_lossy(version),
            &String::from_utf8_lossy(extensions),
        )
    }

    /// Sets the shading language version string.
    pub fn with_shading_language_version<S>(mut self, shading_language_version: S) -> GLStrings
    where
        S: Into<String>,
    {
        self.shading_language_version = shading_language_version.into();
        self
    }

    /// Queries the strings from the context current on this thread.
    ///
    /// The shading language version is only queried when the context can run shaders at
    /// all, as older implementations raise an error for it otherwise.
    pub fn from_gl<Gl>(gl: &Gl) -> GLStrings
    where
        Gl: HasContext,
    {
        let mut strings = unsafe {
            GLStrings {
                vendor: gl.get_parameter_string(glow::VENDOR),
                renderer: gl.get_parameter_string(glow::RENDERER),
                version: gl.get_parameter_string(glow::VERSION),
                shading_language_version: String::new(),
                extensions: gl.supported_extensions().clone(),
            }
        };
        if strings.has_shader_extensions() {
            strings.shading_language_version =
                unsafe { gl.get_parameter_string(glow::SHADING_LANGUAGE_VERSION) };
        }
        strings
    }

    /// Returns true if the version string announces an OpenGL ES context.
    pub fn is_gles(&self) -> bool {
        self.version.starts_with("OpenGL ES")
    }

    /// Returns true if the context advertises shader support: always on OpenGL ES, otherwise
    /// when all of the ARB shader extensions are present.
    pub fn has_shader_extensions(&self) -> bool {
        self.is_gles()
            || SHADER_EXTENSIONS
                .iter()
                .all(|extension| self.extensions.contains(*extension))
    }

    /// Returns true if the context advertises non-power-of-two textures: always on OpenGL ES,
    /// otherwise through the ARB extension.
    pub fn has_npot_extension(&self) -> bool {
        self.is_gles() || self.extensions.contains(NPOT_EXTENSION)
    }

    /// Returns the tokens of the version string, split on single spaces.
    pub(crate) fn version_tokens(&self) -> Vec<&str> {
        self.version.split(' ').collect()
    }
}

/// Versions of the system components around the OpenGL implementation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SystemVersions {
    /// The operating system kernel version; 0 when not running on Linux.
    pub kernel: VersionNumber,
    /// The windowing server version; 0 when unknown.
    pub server: VersionNumber,
}

impl SystemVersions {
    /// Queries the kernel version of the running system. The server version is left unknown.
    pub fn current() -> SystemVersions {
        SystemVersions {
            kernel: version::kernel_version(),
            server: VersionNumber::ZERO,
        }
    }

    /// Sets the windowing server version.
    pub fn with_server_version(mut self, server: VersionNumber) -> SystemVersions {
        self.server = server;
        self
    }
}

/// Returns the token following the first occurrence of `marker` in `tokens`, if both exist.
pub(crate) fn token_after<'a>(tokens: &[&'a str], marker: &str) -> Option<&'a str> {
    let index = tokens.iter().position(|token| *token == marker)?;
    tokens.get(index + 1).copied()
}
