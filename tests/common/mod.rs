#![allow(dead_code)]

use twinkle::prelude::*;

pub const FRAME_MS: u64 = 16;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn screen() -> Screen {
    init_logging();
    Screen::with_config(ScreenConfig::default().size(400.0, 600.0).seed(2024))
}

/// Tick at 60 fps until nothing is running, calling `sample` after every
/// frame including the last. Returns the number of frames ticked.
pub fn run_to_idle(screen: &mut Screen, clock: &ManualClock, mut sample: impl FnMut(&Screen)) -> usize {
    let mut frames = 0;
    loop {
        let animating = screen.tick(clock.now());
        sample(screen);
        frames += 1;
        if !animating {
            return frames;
        }
        assert!(frames < 10_000, "animations never settled");
        clock.advance_ms(FRAME_MS);
    }
}

pub fn float(screen: &Screen, id: ViewId, property: Property) -> f32 {
    screen
        .tree()
        .get(id)
        .and_then(|view| view.property(property).as_float())
        .unwrap_or(f32::NAN)
}

pub fn star_float(screen: &Screen, property: Property) -> f32 {
    float(screen, screen.star(), property)
}

pub fn background(screen: &Screen) -> Color {
    screen
        .container_view()
        .map(View::background)
        .unwrap_or_default()
}
