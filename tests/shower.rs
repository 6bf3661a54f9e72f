mod common;

use std::collections::HashMap;
use std::time::Duration;

use common::*;
use twinkle::prelude::*;
use twinkle::screen::{SHOWER_MAX_DURATION_MS, SHOWER_MAX_SCALE, SHOWER_MIN_SCALE};

fn spawned(screen: &Screen) -> Vec<ViewId> {
    screen.tree().children(screen.container())[1..].to_vec()
}

#[test]
fn test_each_shower_adds_one_star_and_all_are_cleaned_up() {
    let mut screen = screen();
    let clock = ManualClock::new();

    for invocation in 1..=100 {
        let before = screen.tree().len();
        screen.shower().expect("shower never disables itself");
        assert_eq!(screen.tree().len(), before + 1);
        assert_eq!(spawned(&screen).len(), invocation);

        let star = *spawned(&screen).last().expect("just spawned");
        let scale = float(&screen, star, Property::ScaleX);
        assert!((SHOWER_MIN_SCALE..=SHOWER_MAX_SCALE).contains(&scale));
        assert_eq!(float(&screen, star, Property::ScaleY), scale);
    }
    assert!(screen.button(ButtonKind::Shower).is_enabled());

    let frames = run_to_idle(&mut screen, &clock, |_| {});

    assert!(frames as u64 * FRAME_MS <= SHOWER_MAX_DURATION_MS as u64 + 2 * FRAME_MS);
    assert!(spawned(&screen).is_empty());
    assert_eq!(screen.tree().len(), 2);
    assert_eq!(screen.tree().children(screen.container()), &[screen.star()]);
}

#[test]
fn test_staggered_showers_are_removed_in_bounded_time() {
    let mut screen = screen();
    let clock = ManualClock::new();
    let deadline = Duration::from_millis(SHOWER_MAX_DURATION_MS as u64 + 2 * FRAME_MS);
    let mut spawned_at: HashMap<ViewId, Duration> = HashMap::new();

    for frame in 0..600u64 {
        if frame % 5 == 0 && spawned_at.len() < 100 {
            screen.shower();
            let star = *spawned(&screen).last().expect("just spawned");
            spawned_at.insert(star, clock.now());
        }
        screen.tick(clock.now());

        for star in spawned(&screen) {
            let age = clock.now() - spawned_at[&star];
            assert!(age <= deadline, "{:?} outlived its fall", star);
        }
        clock.advance_ms(FRAME_MS);
    }

    assert_eq!(spawned_at.len(), 100);
    run_to_idle(&mut screen, &clock, |_| {});
    assert!(spawned(&screen).is_empty());
}

#[test]
fn test_star_falls_from_above_to_below_while_spinning() {
    let mut screen = screen();
    let clock = ManualClock::new();
    let container_height = screen
        .container_view()
        .map(|v| v.size().height)
        .unwrap_or_default();
    let container_width = screen
        .container_view()
        .map(|v| v.size().width)
        .unwrap_or_default();

    screen.shower();
    let star = spawned(&screen)[0];
    let start = screen.tree().get(star).map(View::visual_bounds).unwrap_or_default();
    assert!(start.bottom() <= 1e-3, "starts above the top edge");
    let center_x = start.x + start.width / 2.0;
    assert!((0.0..=container_width).contains(&center_x));

    let mut falls = Vec::new();
    let mut spins = Vec::new();
    let mut last_bounds = start;
    run_to_idle(&mut screen, &clock, |s| {
        if let Some(view) = s.tree().get(star) {
            falls.push(float(s, star, Property::TranslationY));
            spins.push(float(s, star, Property::Rotation));
            last_bounds = view.visual_bounds();
        }
    });

    assert!(!screen.tree().contains(star));
    assert!(falls.windows(2).all(|w| w[1] >= w[0]));
    assert!(spins.windows(2).all(|w| w[1] >= w[0]));
    assert!(spins.iter().all(|r| (0.0..1080.0).contains(r)));

    // Quadratic ease-in: the second half of the fall covers more ground
    let first = falls[0];
    let last = *falls.last().unwrap_or(&first);
    let middle = falls[falls.len() / 2];
    assert!(last - middle > middle - first);
    // The last frame before removal is close to the bottom edge
    assert!(last_bounds.y > 0.9 * container_height);
}

#[test]
fn test_star_is_removed_on_the_frame_its_fall_ends() {
    let mut screen = screen();
    let handle = screen.shower().expect("shower never disables itself");
    let star = spawned(&screen)[0];

    screen.tick(Duration::ZERO);
    assert!(screen.tree().contains(star));
    assert!(!handle.is_finished());

    screen.tick(Duration::from_millis(SHOWER_MAX_DURATION_MS as u64));
    assert!(handle.is_finished());
    assert!(!screen.tree().contains(star));
    assert!(screen.is_idle());
}
