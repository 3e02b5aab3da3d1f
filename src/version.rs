// glplatform/src/version.rs
//
//! Version numbers as reported by OpenGL implementations and the kernel.

use crate::error::Error;

use std::fmt::{self, Display, Formatter};
use std::str::{self, FromStr};

/// A `major.minor.patch` version packed into a single integer.
///
/// The major number occupies the high 32 bits, the minor number the next 16 and the patch
/// number the low 16, so comparing packed values is the same as comparing the triples
/// lexicographically.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VersionNumber(u64);

impl VersionNumber {
    /// Version 0.0.0, which stands for "no information".
    pub const ZERO: VersionNumber = VersionNumber(0);

    /// Creates a version number from its components.
    #[inline]
    pub const fn new(major: u32, minor: u16, patch: u16) -> VersionNumber {
        VersionNumber(((major as u64) << 32) | ((minor as u64) << 16) | patch as u64)
    }

    /// Reconstructs a version number from its packed representation.
    #[inline]
    pub const fn from_packed(packed: u64) -> VersionNumber {
        VersionNumber(packed)
    }

    /// Returns the packed representation.
    #[inline]
    pub const fn packed(self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn major(self) -> u32 {
        (self.0 >> 32) as u32
    }

    #[inline]
    pub const fn minor(self) -> u16 {
        (self.0 >> 16) as u16
    }

    #[inline]
    pub const fn patch(self) -> u16 {
        self.0 as u16
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Extracts a version number from arbitrary text, such as `"4.5.0 NVIDIA 361.45"`.
    ///
    /// Everything before the first digit is skipped, then digits and dots are consumed. The
    /// first three dot-separated components become major, minor and patch. Missing or
    /// unparsable components are 0, and text without any digit yields version 0.0.0.
    pub fn parse<S>(text: &S) -> VersionNumber
    where
        S: AsRef<[u8]> + ?Sized,
    {
        let text = text.as_ref();
        let start = match text.iter().position(u8::is_ascii_digit) {
            Some(start) => start,
            None => return VersionNumber::ZERO,
        };
        let end = text[start..]
            .iter()
            .position(|&byte| byte != b'.' && !byte.is_ascii_digit())
            .map_or(text.len(), |length| start + length);

        let mut components = text[start..end].split(|&byte| byte == b'.');
        let mut next = || {
            components
                .next()
                .and_then(|component| str::from_utf8(component).ok())
        };
        let major = next().and_then(|c| c.parse::<u32>().ok()).unwrap_or(0);
        let minor = next().and_then(|c| c.parse::<u16>().ok()).unwrap_or(0);
        let patch = next().and_then(|c| c.parse::<u16>().ok()).unwrap_or(0);
        VersionNumber::new(major, minor, patch)
    }
}

impl Display for VersionNumber {
    /// Writes `major.minor`, followed by `.patch` when the patch number is non-zero.
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "{}.{}", self.major(), self.minor())?;
        if self.patch() != 0 {
            write!(formatter, ".{}", self.patch())?;
        }
        Ok(())
    }
}

impl FromStr for VersionNumber {
    type Err = Error;

    /// Strictly parses the canonical `major.minor[.patch]` form written by `Display`.
    fn from_str(text: &str) -> Result<VersionNumber, Error> {
        let components: Vec<&str> = text.split('.').collect();
        if components.len() < 2 || components.len() > 3 {
            return Err(Error::MalformedVersion);
        }
        if components
            .iter()
            .any(|component| component.is_empty() || !component.bytes().all(|b| b.is_ascii_digit()))
        {
            return Err(Error::MalformedVersion);
        }

        let major = components[0].parse().map_err(|_| Error::MalformedVersion)?;
        let minor = components[1].parse().map_err(|_| Error::MalformedVersion)?;
        let patch = match components.get(2) {
            Some(patch) => patch.parse().map_err(|_| Error::MalformedVersion)?,
            None => 0,
        };
        Ok(VersionNumber::new(major, minor, patch))
    }
}

/// Returns the running Linux kernel version, or 0.0.0 on any other system.
#[cfg(linux)]
pub fn kernel_version() -> VersionNumber {
    use std::ffi::CStr;
    use std::mem;

    unsafe {
        let mut name: libc::utsname = mem::zeroed();
        if libc::uname(&mut name) != 0 {
            return VersionNumber::ZERO;
        }
        if CStr::from_ptr(name.sysname.as_ptr()).to_bytes() != b"Linux" {
            return VersionNumber::ZERO;
        }
        VersionNumber::parse(CStr::from_ptr(name.release.as_ptr()).to_bytes())
    }
}

/// Returns the running Linux kernel version, or 0.0.0 on any other system.
#[cfg(not(linux))]
pub fn kernel_version() -> VersionNumber {
    VersionNumber::ZERO
}
