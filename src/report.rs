// glplatform/src/report.rs
//
//! A human-readable summary of a detected platform.

use crate::platform::GLPlatform;
use crate::quirks::Features;

use std::fmt::{self, Display, Formatter};

const LABEL_WIDTH: usize = 40;

/// The diagnostic report: label/value lines in a fixed order.
///
/// `Display` writes one line per entry, the label padded to 40 columns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    lines: Vec<(&'static str, String)>,
}

impl Report {
    pub fn new(platform: &GLPlatform) -> Report {
        let glsl = platform.supports(Features::GLSL);
        let mut lines = vec![
            ("OpenGL vendor string:", platform.gl_vendor_string().to_owned()),
            ("OpenGL renderer string:", platform.gl_renderer_string().to_owned()),
            ("OpenGL version string:", platform.gl_version_string().to_owned()),
        ];

        if glsl {
            lines.push((
                "OpenGL shading language version string:",
                platform.gl_shading_language_version_string().to_owned(),
            ));
        }

        lines.push(("Driver:", platform.driver().to_string()));
        if !platform.is_mesa_driver() {
            lines.push(("Driver version:", platform.proprietary_driver_version().to_string()));
        }

        lines.push(("GPU class:", platform.chip_class().to_string()));
        lines.push(("OpenGL version:", platform.gl_version().to_string()));

        if glsl {
            lines.push(("GLSL version:", platform.glsl_version().to_string()));
        }
        if platform.is_mesa_driver() {
            lines.push(("Mesa version:", platform.mesa_version().to_string()));
        }
        if !platform.server_version().is_zero() {
            lines.push(("X server version:", platform.server_version().to_string()));
        }
        if !platform.kernel_version().is_zero() {
            lines.push(("Linux kernel version:", platform.kernel_version().to_string()));
        }

        lines.push(("Requires strict binding:", yes_no(!platform.is_loose_binding()).to_owned()));
        lines.push((
            "GLSL shaders:",
            level(glsl, platform.supports(Features::LIMITED_GLSL)).to_owned(),
        ));
        lines.push((
            "Texture NPOT support:",
            level(
                platform.supports(Features::TEXTURE_NPOT),
                platform.supports(Features::LIMITED_NPOT),
            )
            .to_owned(),
        ));
        lines.push(("Virtual Machine:", yes_no(platform.is_virtual_machine()).to_owned()));

        Report { lines }
    }

    /// The label/value pairs, in report order.
    pub fn lines(&self) -> &[(&'static str, String)] {
        &self.lines
    }

    /// Returns the value of the first line with the given label.
    pub fn value(&self, label: &str) -> Option<&str> {
        self.lines
            .iter()
            .find(|(line_label, _)| *line_label == label)
            .map(|(_, value)| value.as_str())
    }
}

impl Display for Report {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        for (label, value) in &self.lines {
            writeln!(formatter, "{:<width$}{}", label, value, width = LABEL_WIDTH)?;
        }
        Ok(())
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

fn level(supported: bool, limited: bool) -> &'static str {
    match (supported, limited) {
        (false, _) => "no",
        (true, true) => "limited",
        (true, false) => "yes",
    }
}
