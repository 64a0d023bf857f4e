#![cfg_attr(not(test), no_std)]

//! LED strip composer - single-animation supervisor
//!
//! Architecture layers:
//! - `driver` - Hardware abstraction ([`LedDriver`] trait + adapters)
//! - `color` - RGB type and the hue wheel
//! - `frame` - Per-pixel buffer with commit to the transport
//! - `routine` - Animation algorithms (fills, rainbows, strobes, sweeps)
//! - `engine` - Supervisor owning the frame buffer, one animation at a time
//! - `state` - Shared state for external observation
//!
//! The engine is generic over `LedDriver`, allowing different hardware backends.

pub mod animation;
pub mod color;
pub mod driver;
pub mod engine;
pub mod frame;
pub mod models;
pub mod routine;
pub mod state;

// Animation exports
pub use animation::{Animation, AnimationKind, StripCommand};

// Color exports
pub use color::{Rgb, wheel};

// Driver exports
pub use driver::{DriverError, LedDriver, SmartLedsDriver};

// Engine exports
pub use engine::{
    AnimationEngine, AnimationEngineConfig, CommandChannel, CommandReceiver,
    CommandSender, ReportChannel, ReportReceiver, ReportSender,
};

// Frame exports
pub use frame::FrameBuffer;

pub use models::{AnimationOutcome, AnimationReport, StripSnapshot};
pub use routine::AnimationTimings;
pub use state::SharedState;
