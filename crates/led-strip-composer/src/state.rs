//! Shared strip state for external observation
//!
//! Provides a way to observe the engine's current state from outside
//! without direct access to the engine instance.

use core::sync::atomic::{AtomicBool, AtomicU8, AtomicU32, Ordering};

use crate::{
    animation::AnimationKind,
    models::{AnimationOutcome, StripSnapshot},
};

const IDLE: u8 = 0;

/// Shared strip state that can be observed from outside the engine
///
/// Uses atomics for lock-free thread-safe access.
/// The engine updates this state, and external code can read it.
pub struct SharedState {
    /// Running animation kind, 0 when idle
    animation: AtomicU8,
    /// Total frames committed by the engine
    frames: AtomicU32,
    /// Last finished run outcome, 0 when nothing finished yet
    last_outcome: AtomicU8,
    /// Whether a transport is attached
    hardware: AtomicBool,
}

impl SharedState {
    /// Create a new shared state with default values
    pub const fn new() -> Self {
        Self {
            animation: AtomicU8::new(IDLE),
            frames: AtomicU32::new(0),
            last_outcome: AtomicU8::new(0),
            hardware: AtomicBool::new(false),
        }
    }

    // === Read methods (for external observation) ===

    /// Get the running animation, `None` when idle
    pub fn animation(&self) -> Option<AnimationKind> {
        AnimationKind::from_raw(self.animation.load(Ordering::Acquire))
    }

    /// Check if an animation is running
    pub fn is_running(&self) -> bool {
        self.animation.load(Ordering::Acquire) != IDLE
    }

    /// Get total committed frames
    pub fn frames(&self) -> u32 {
        self.frames.load(Ordering::Relaxed)
    }

    /// Get the outcome of the last finished run
    pub fn last_outcome(&self) -> Option<AnimationOutcome> {
        AnimationOutcome::from_raw(self.last_outcome.load(Ordering::Relaxed))
    }

    /// Check if commits reach hardware
    pub fn hardware(&self) -> bool {
        self.hardware.load(Ordering::Relaxed)
    }

    /// Capture all fields at once
    pub fn snapshot(&self) -> StripSnapshot {
        StripSnapshot {
            animation: self.animation(),
            frames: self.frames(),
            last_outcome: self.last_outcome(),
            hardware: self.hardware(),
        }
    }

    // === Write methods (for engine to update) ===

    pub(crate) fn set_running(&self, kind: AnimationKind) {
        self.animation.store(kind as u8, Ordering::Release);
    }

    pub(crate) fn set_idle(&self) {
        self.animation.store(IDLE, Ordering::Release);
    }

    pub(crate) fn set_frames(&self, frames: u32) {
        self.frames.store(frames, Ordering::Relaxed);
    }

    pub(crate) fn set_last_outcome(&self, outcome: AnimationOutcome) {
        self.last_outcome.store(outcome.as_raw(), Ordering::Relaxed);
    }

    pub(crate) fn set_hardware(&self, hardware: bool) {
        self.hardware.store(hardware, Ordering::Relaxed);
    }
}

impl Default for SharedState {
    fn default() -> Self {
        Self::new()
    }
}
