// glplatform/src/context.rs
//
//! Holds the detected platform for the lifetime of a context.

use crate::platform::GLPlatform;

use log::debug;
use std::sync::{Arc, Mutex};

/// Owns at most one detected `GLPlatform`.
///
/// Detection runs on the first `initialize()`; later calls hand out the same platform until
/// `teardown()` releases it, after which the next `initialize()` detects afresh. This is how
/// a renderer re-detects after its OpenGL context has been recreated.
#[derive(Debug, Default)]
pub struct PlatformContext {
    platform: Mutex<Option<Arc<GLPlatform>>>,
}

impl PlatformContext {
    /// Creates an uninitialized context.
    pub const fn new() -> PlatformContext {
        PlatformContext { platform: Mutex::new(None) }
    }

    /// Returns the platform, running `detect` first if there is none yet.
    pub fn initialize<F>(&self, detect: F) -> Arc<GLPlatform>
    where
        F: FnOnce() -> GLPlatform,
    {
        let mut slot = self.platform.lock().unwrap();
        match *slot {
            Some(ref platform) => {
                debug!("Reusing detected platform ({})", platform.driver());
                platform.clone()
            }
            None => {
                let detected = Arc::new(detect());
                debug!("Initialized platform ({})", detected.driver());
                *slot = Some(detected.clone());
                detected
            }
        }
    }

    /// Returns the platform, if one has been detected.
    pub fn platform(&self) -> Option<Arc<GLPlatform>> {
        self.platform.lock().unwrap().clone()
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.platform.lock().unwrap().is_some()
    }

    /// Releases the platform. Returns true if there was one.
    ///
    /// Readers still holding the `Arc` keep their snapshot; it is only dropped from here.
    pub fn teardown(&self) -> bool {
        let released = self.platform.lock().unwrap().take();
        if released.is_some() {
            debug!("Tore down platform");
        }
        released.is_some()
    }
}
