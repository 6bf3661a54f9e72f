//! Presses every button once, then lets a few shower stars fall, driving the
//! screen from the wall clock at roughly 60 fps.
//!
//! Run with `RUST_LOG=debug` to follow each animation.

use std::time::Duration;

use twinkle::prelude::*;
use twinkle::reactive::take_frame_request;

fn main() {
    env_logger::init();

    let clock = SystemClock::new();
    let mut screen = Screen::with_config(ScreenConfig::default().size(360.0, 640.0));

    // Log every button state change
    let _watchers: Vec<Effect> = screen
        .buttons()
        .iter()
        .map(|button| {
            let kind = button.kind();
            let enabled = button.enabled();
            create_effect(move || {
                log::info!(
                    "{} button {}",
                    kind.label(),
                    if enabled.get() { "enabled" } else { "disabled" }
                );
            })
        })
        .collect();

    for kind in ButtonKind::ALL {
        screen.click(kind);
    }

    let mut frames = 0u32;
    let mut showers_left = 5;
    loop {
        if frames % 20 == 0 && showers_left > 0 {
            screen.shower();
            showers_left -= 1;
        }

        let animating = screen.tick(clock.now());
        frames += 1;

        if frames % 30 == 0 {
            if let Some(star) = screen.star_view() {
                let t = star.transform();
                let background = screen
                    .container_view()
                    .map(|container| container.background())
                    .unwrap_or_default();
                log::info!(
                    "frame {}: rotation {:.1}, translate ({:.1}, {:.1}), scale {:.2}, alpha {:.2}, background #{:08X}, {} views",
                    frames,
                    t.rotation,
                    t.translate.0,
                    t.translate.1,
                    t.scale.0,
                    star.alpha(),
                    background.to_argb(),
                    screen.tree().len()
                );
            }
        }

        if !animating && showers_left == 0 && !take_frame_request() {
            break;
        }
        std::thread::sleep(Duration::from_millis(16));
    }

    log::info!(
        "all animations settled after {} frames ({:.2?})",
        frames,
        clock.now()
    );
}
