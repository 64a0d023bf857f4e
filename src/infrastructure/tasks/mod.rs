mod strip;

pub use strip::{record_report, strip_engine_task, strip_report_task};
