mod http;

pub use http::LedStripHttpController;
