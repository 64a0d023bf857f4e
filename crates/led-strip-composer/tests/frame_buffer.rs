mod common;

use common::{BLACK, FailingDriver, RED, RecordingDriver, is_solid};
use led_strip_composer::{FrameBuffer, SharedState};

#[test]
fn commit_pushes_current_pixels() {
    let driver = RecordingDriver::default();
    let log = driver.log();
    let mut frame: FrameBuffer<'_, RecordingDriver, 8> = FrameBuffer::new(driver, 4);

    frame.set_pixel(0, RED);
    frame.set_pixel(3, RED);
    frame.commit().unwrap();

    let frames = log.borrow();
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0], vec![RED, BLACK, BLACK, RED]);
    assert_eq!(frame.transport_writes(), 1);
}

#[test]
fn clear_blacks_out_and_commits() {
    let driver = RecordingDriver::default();
    let log = driver.log();
    let mut frame: FrameBuffer<'_, RecordingDriver, 8> = FrameBuffer::new(driver, 8);

    frame.fill(RED);
    frame.clear().unwrap();

    assert!(is_solid(frame.pixels(), BLACK));
    assert_eq!(log.borrow().len(), 1);
    assert!(is_solid(&log.borrow()[0], BLACK));
}

#[test]
fn simulated_commit_never_reaches_a_driver() {
    let mut frame: FrameBuffer<'_, RecordingDriver, 8> = FrameBuffer::simulated(8);

    frame.fill(RED);
    frame.commit().unwrap();
    frame.clear().unwrap();

    assert!(!frame.has_transport());
    assert_eq!(frame.frames(), 2);
    assert_eq!(frame.transport_writes(), 0);
}

#[test]
fn led_count_is_clamped_to_capacity() {
    let frame: FrameBuffer<'_, RecordingDriver, 4> = FrameBuffer::simulated(10);

    assert_eq!(frame.led_count(), 4);
    assert_eq!(frame.pixels().len(), 4);
}

#[test]
fn empty_strip_commits_empty_frames() {
    let driver = RecordingDriver::default();
    let log = driver.log();
    let mut frame: FrameBuffer<'_, RecordingDriver, 4> = FrameBuffer::new(driver, 0);

    frame.fill(RED);
    frame.commit().unwrap();

    assert!(log.borrow()[0].is_empty());
}

#[test]
#[should_panic(expected = "out of range")]
fn set_pixel_past_the_end_panics() {
    let mut frame: FrameBuffer<'_, RecordingDriver, 8> = FrameBuffer::simulated(4);

    frame.set_pixel(4, RED);
}

#[test]
fn failed_commit_is_not_a_frame() {
    let mut frame: FrameBuffer<'_, FailingDriver, 4> =
        FrameBuffer::new(FailingDriver::failing_on(2), 4);

    frame.commit().unwrap();
    assert!(frame.commit().is_err());
    frame.commit().unwrap();

    assert_eq!(frame.frames(), 2);
    assert_eq!(frame.transport_writes(), 2);
}

#[test]
fn observed_state_follows_every_commit() {
    let state = SharedState::new();
    let mut frame: FrameBuffer<'_, RecordingDriver, 4> = FrameBuffer::simulated(4);

    frame.commit().unwrap();
    frame.observe(&state);
    assert_eq!(state.frames(), 1);

    frame.fill(RED);
    frame.commit().unwrap();
    assert_eq!(state.frames(), 2);
    frame.clear().unwrap();
    assert_eq!(state.frames(), 3);
}
