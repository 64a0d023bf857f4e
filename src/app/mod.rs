mod usecases;

pub use usecases::LedStripUsecases;
