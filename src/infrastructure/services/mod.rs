mod strip;

pub use strip::{LedStripService, ReportSlot, init_strip_service};
