mod common;

use common::{BLUE, RED, RecordingStrip};
use embassy_time::Duration;
use led_strip_composer::{Animation, StripCommand};
use led_strip_controller::{
    app::LedStripUsecases,
    domain::ports::{InvalidInput, LedStripReader, LedStripUsecasesPort, StripError},
};

fn play(animation: Animation) -> StripCommand {
    StripCommand::Play(animation)
}

#[test]
fn animations_are_forwarded_to_strip() {
    let strip = RecordingStrip::new(30);
    let usecases = LedStripUsecases::new(&strip);

    usecases.turn_on(RED);
    usecases.rainbow();
    usecases.rainbow_ascending();
    usecases.rainbow_descending();
    usecases.random_color();

    assert_eq!(
        strip.commands(),
        vec![
            play(Animation::Solid(RED)),
            play(Animation::Rainbow),
            play(Animation::RainbowAscending),
            play(Animation::RainbowDescending),
            play(Animation::RandomColor),
        ]
    );
}

#[test]
fn stop_and_turn_off_clear_while_freeze_keeps_frame() {
    let strip = RecordingStrip::new(30);
    let usecases = LedStripUsecases::new(&strip);

    usecases.turn_off();
    usecases.stop();
    usecases.freeze();

    assert_eq!(
        strip.commands(),
        vec![
            StripCommand::TurnOff,
            StripCommand::TurnOff,
            StripCommand::Cancel
        ]
    );
}

#[test]
fn strobes_carry_their_timings() {
    let strip = RecordingStrip::new(30);
    let usecases = LedStripUsecases::new(&strip);

    usecases.strobe(5).unwrap();
    usecases.strobe_controlled(2, 50, 150).unwrap();
    usecases.random_strobe(1).unwrap();

    assert_eq!(
        strip.commands(),
        vec![
            play(Animation::Strobe {
                duration: Duration::from_secs(5)
            }),
            play(Animation::StrobeControlled {
                duration: Duration::from_secs(2),
                on_time: Duration::from_millis(50),
                off_time: Duration::from_millis(150),
            }),
            play(Animation::RandomStrobe {
                duration: Duration::from_secs(1)
            }),
        ]
    );
}

#[test]
fn zero_duration_is_rejected_before_scheduling() {
    let strip = RecordingStrip::new(30);
    let usecases = LedStripUsecases::new(&strip);

    let expected = Err(StripError::InvalidInput(InvalidInput::ZeroDuration));
    assert_eq!(usecases.strobe(0), expected);
    assert_eq!(usecases.strobe_controlled(0, 10, 10), expected);
    assert_eq!(usecases.random_strobe(0), expected);
    assert!(strip.commands().is_empty());
}

#[test]
fn knight_rider_length_is_bounded_by_strip() {
    let strip = RecordingStrip::new(10);
    let usecases = LedStripUsecases::new(&strip);

    assert_eq!(
        usecases.knight_rider(BLUE, 1, 11),
        Err(StripError::InvalidInput(InvalidInput::SweepTooLong {
            length: 11,
            number_of_leds: 10,
        }))
    );
    assert_eq!(
        usecases.knight_rider(BLUE, 1, 0),
        Err(StripError::InvalidInput(InvalidInput::ZeroSweepLength))
    );
    assert!(strip.commands().is_empty());

    usecases.knight_rider(BLUE, 0, 10).unwrap();
    assert_eq!(
        strip.commands(),
        vec![play(Animation::KnightRider {
            color: BLUE,
            loops: 0,
            length: 10,
        })]
    );
}

#[test]
fn reader_delegates_to_strip() {
    let strip = RecordingStrip::new(42);
    let usecases = LedStripUsecases::new(&strip);

    assert_eq!(usecases.number_of_leds(), 42);
    let status = usecases.status();
    assert_eq!(status.number_of_leds, 42);
    assert!(!status.is_running());
}
