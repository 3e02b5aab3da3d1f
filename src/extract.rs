// glplatform/src/extract.rs
//
//! Pulls numeric model codes out of descriptive renderer strings.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref HD_MODEL: Regex = Regex::new(r"HD (?P<code>[0-9]{4})").unwrap();
    static ref X_MODEL: Regex = Regex::new(r"X(?P<code>[0-9]{3,4})").unwrap();
    static ref FOUR_DIGITS: Regex = Regex::new(r"\b(?P<code>[0-9]{4})\b").unwrap();
    static ref NV_CODE: Regex = Regex::new(r"\bNV(?P<code>[0-9A-F]{2})\b").unwrap();
    static ref GEFORCE_FOUR_DIGITS: Regex =
        Regex::new(r"GeForce (?:FX |PCX |Go )?(?P<code>[0-9]{4})(?:M|\b)").unwrap();
    static ref GEFORCE_THREE_DIGITS: Regex =
        Regex::new(r"GeForce (?:G |GT |GTX |GTS )?(?P<code>[0-9]{3})(?:M|\b)").unwrap();
}

/// A model-code pattern that the chipset classifiers look for.
///
/// Each pattern matches at the first position scanning left to right; the classifiers decide
/// the order in which patterns are tried.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pattern {
    /// `HD` followed by a space and 4 digits, as in `"Radeon HD 4850"`.
    HdModel,
    /// `X` followed by 3 or 4 digits, as in `"Radeon X1950"`.
    XModel,
    /// A word-bounded group of exactly 4 digits, as in `"Radeon 9600"`.
    FourDigits,
    /// `NV` followed by 2 hexadecimal digits, as in `"NV4A"`.
    NvCode,
    /// `GeForce`, an optional tier and 4 digits with an optional `M` suffix.
    GeForceFourDigits,
    /// `GeForce`, an optional tier and 3 digits with an optional `M` suffix.
    GeForceThreeDigits,
}

impl Pattern {
    fn regex(self) -> &'static Regex {
        match self {
            Pattern::HdModel => &*HD_MODEL,
            Pattern::XModel => &*X_MODEL,
            Pattern::FourDigits => &*FOUR_DIGITS,
            Pattern::NvCode => &*NV_CODE,
            Pattern::GeForceFourDigits => &*GEFORCE_FOUR_DIGITS,
            Pattern::GeForceThreeDigits => &*GEFORCE_THREE_DIGITS,
        }
    }

    fn radix(self) -> u32 {
        match self {
            Pattern::NvCode => 16,
            _ => 10,
        }
    }

    /// Returns the first substring of `text` matching this pattern.
    pub fn find(self, text: &str) -> Option<&str> {
        self.regex().find(text).map(|found| found.as_str())
    }

    /// Returns the model code carried by the first match in `text`, with any prefix, tier or
    /// suffix stripped.
    pub fn code(self, text: &str) -> Option<u32> {
        let captures = self.regex().captures(text)?;
        let code = captures.name("code")?.as_str();
        u32::from_str_radix(code, self.radix()).ok()
    }
}
