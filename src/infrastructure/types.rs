use led_strip_composer::AnimationEngine;

use crate::{
    app::LedStripUsecases,
    config::LED_COUNT_MAX,
    infrastructure::{drivers::StripDriver, services::LedStripService},
};

pub type StripEngine = AnimationEngine<'static, StripDriver, LED_COUNT_MAX>;

pub type LedStripUsecasesImpl = LedStripUsecases<LedStripService<'static>>;
