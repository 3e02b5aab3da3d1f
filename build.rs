// glplatform/build.rs
//
//! The `glplatform` build script.

use cfg_aliases::cfg_aliases;

fn main() {
    // Setup aliases for #[cfg] checks
    cfg_aliases! {
        // Targets whose kernel identifies itself as Linux through `uname`.
        linux: { any(target_os = "linux", target_os = "android") },
    }
}
