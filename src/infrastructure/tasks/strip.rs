use led_strip_composer::{AnimationOutcome, AnimationReport, ReportReceiver};

use crate::infrastructure::{services::ReportSlot, types::StripEngine};

/// Task for running the animation engine.
/// It owns the frame buffer and executes commands from the command channel.
#[embassy_executor::task]
pub async fn strip_engine_task(mut engine: StripEngine) {
    engine.run().await;
}

/// Task draining finished animation reports so no outcome goes unobserved
#[embassy_executor::task]
pub async fn strip_report_task(
    reports: ReportReceiver<'static>,
    slot: &'static ReportSlot,
) {
    loop {
        let report = reports.receive().await;
        record_report(slot, report);
    }
}

/// Log a finished run and keep it for status queries
pub fn record_report(slot: &ReportSlot, report: AnimationReport) {
    match report.outcome {
        AnimationOutcome::Failed(e) => log::warn!(
            "strip: {} failed after {} frames: {:?}",
            report.kind.as_str(),
            report.frames,
            e
        ),
        outcome => log::info!(
            "strip: {} {} after {} frames",
            report.kind.as_str(),
            outcome.as_str(),
            report.frames
        ),
    }
    slot.store(report);
}
