use super::ports::LedStripUsecasesPort;

/// Type alias for the strip usecases port reference
pub type LedStripUsecasesPortRef = &'static dyn LedStripUsecasesPort;
