pub mod strip;

pub use strip::*;
