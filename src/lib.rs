// glplatform/src/lib.rs
//
//! Identifies the OpenGL driver stack and GPU generation behind a context.
//!
//! OpenGL implementations only describe themselves through free-form vendor, renderer and
//! version strings. This crate turns those strings into a driver (`Driver`), an ordered
//! hardware generation (`ChipClass`) and a set of capability flags and workarounds
//! (`Features`) that rendering code can consult instead of tripping over known driver bugs.
//!
//! Detection is a single synchronous pass that never fails: anything unrecognized yields an
//! `Unknown` classification and permissive defaults.

pub mod classify;
pub mod error;
pub use crate::error::Error;

mod chip_class;
pub use crate::chip_class::{ChipClass, GpuFamily};

mod context;
pub use crate::context::PlatformContext;

mod driver;
pub use crate::driver::Driver;

mod extract;
pub use crate::extract::Pattern;

mod identify;
pub use crate::identify::{identify, Identification};

mod info;
pub use crate::info::{GLStrings, SystemVersions};

mod platform;
pub use crate::platform::GLPlatform;

mod quirks;
pub use crate::quirks::{resolve as resolve_features, Features};

mod report;
pub use crate::report::Report;

mod version;
pub use crate::version::{kernel_version, VersionNumber};
