//! Infrastructure layer - Port implementations
//!
//! This module contains concrete implementations of the application layer ports
//! using the host's transports and the animation engine.

pub mod drivers;
pub mod services;
pub mod tasks;
pub mod types;
