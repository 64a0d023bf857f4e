mod strip;

pub use strip::LedStripUsecases;
