//! The demo screen: one star, six buttons, six canned animations.
//!
//! Every button press builds an [`Animation`] with fixed parameters and hands
//! it to the screen's [`Scheduler`]. The host drives the screen by calling
//! [`Screen::tick`] once per frame.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::animation::{
    Animation, AnimationHandle, RepeatMode, Scheduler, TimingFunction, Track,
};
use crate::asset;
use crate::button::{Button, ButtonKind};
use crate::color::Color;
use crate::view::{Property, Size, View, ViewId, ViewTree};

/// Smallest random scale of a shower star
pub const SHOWER_MIN_SCALE: f32 = 0.1;
/// Largest random scale of a shower star
pub const SHOWER_MAX_SCALE: f32 = 1.6;
/// Shortest fall, in milliseconds
pub const SHOWER_MIN_DURATION_MS: f32 = 500.0;
/// Longest fall, in milliseconds (exclusive)
pub const SHOWER_MAX_DURATION_MS: f32 = 2000.0;
/// Upper bound (exclusive) of a shower star's spin, in degrees
pub const SHOWER_MAX_ROTATION: f32 = 1080.0;

#[derive(Debug, Clone)]
pub struct ScreenConfig {
    /// Size of the container holding the star
    pub width: f32,
    pub height: f32,
    /// Overrides the star glyph's intrinsic size
    pub star_size: Option<Size>,
    pub background_color: Color,
    /// Seed for the shower's random placement; entropy when unset
    pub seed: Option<u64>,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 600.0,
            star_size: None,
            background_color: Color::BLACK,
            seed: None,
        }
    }
}

impl ScreenConfig {
    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn star_size(mut self, size: Size) -> Self {
        self.star_size = Some(size);
        self
    }

    pub fn background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Screen controller binding the buttons to animations of the star.
pub struct Screen {
    tree: ViewTree,
    scheduler: Scheduler,
    container: ViewId,
    star: ViewId,
    buttons: Vec<Button>,
    rng: StdRng,
}

impl Screen {
    pub fn new() -> Self {
        Self::with_config(ScreenConfig::default())
    }

    pub fn with_config(config: ScreenConfig) -> Self {
        let star_size = config.star_size.unwrap_or_else(asset::star_size);

        let mut tree = ViewTree::new();
        let container = tree.insert(
            View::new("container", Size::new(config.width, config.height))
                .with_background(config.background_color),
            None,
        );
        let star = tree.insert(
            View::new("star", star_size).with_origin(
                (config.width - star_size.width) / 2.0,
                (config.height - star_size.height) / 2.0,
            ),
            Some(container),
        );

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        log::info!(
            "screen ready: container {}x{}, star {}x{}",
            config.width,
            config.height,
            star_size.width,
            star_size.height
        );

        Self {
            tree,
            scheduler: Scheduler::new(),
            container,
            star,
            buttons: ButtonKind::ALL.iter().map(|&kind| Button::new(kind)).collect(),
            rng,
        }
    }

    /// Handle a tap. Disabled buttons ignore it and return `None`.
    pub fn click(&mut self, kind: ButtonKind) -> Option<AnimationHandle> {
        let button = &self.buttons[kind.index()];
        if !button.is_enabled() {
            log::debug!("{} is disabled, ignoring click", kind.label());
            return None;
        }

        let animation = match kind {
            ButtonKind::Rotate => self.rotater(),
            ButtonKind::Translate => self.translater(),
            ButtonKind::Scale => self.scaler(),
            ButtonKind::Fade => self.fader(),
            ButtonKind::Colorize => self.colorizer(),
            ButtonKind::Shower => self.shower_star(),
        };
        Some(self.scheduler.start(animation, &mut self.tree))
    }

    pub fn rotate(&mut self) -> Option<AnimationHandle> {
        self.click(ButtonKind::Rotate)
    }

    pub fn translate(&mut self) -> Option<AnimationHandle> {
        self.click(ButtonKind::Translate)
    }

    pub fn scale(&mut self) -> Option<AnimationHandle> {
        self.click(ButtonKind::Scale)
    }

    pub fn fade(&mut self) -> Option<AnimationHandle> {
        self.click(ButtonKind::Fade)
    }

    pub fn colorize(&mut self) -> Option<AnimationHandle> {
        self.click(ButtonKind::Colorize)
    }

    pub fn shower(&mut self) -> Option<AnimationHandle> {
        self.click(ButtonKind::Shower)
    }

    fn rotater(&self) -> Animation {
        Animation::new(1000.0)
            .label("rotate")
            .track(Track::to(self.star, Property::Rotation, 0.0).from(-360.0))
            .disable_during(self.button(ButtonKind::Rotate))
    }

    fn translater(&self) -> Animation {
        Animation::new(1000.0)
            .label("translate")
            .track(Track::to(self.star, Property::TranslationX, 200.0))
            .repeat(1, RepeatMode::Reverse)
            .disable_during(self.button(ButtonKind::Translate))
    }

    fn scaler(&self) -> Animation {
        // Both axes ride one timeline so they never drift apart
        Animation::new(2000.0)
            .label("scale")
            .track(Track::to(self.star, Property::ScaleX, 4.0))
            .track(Track::to(self.star, Property::ScaleY, 4.0))
            .repeat(1, RepeatMode::Reverse)
            .disable_during(self.button(ButtonKind::Scale))
    }

    fn fader(&self) -> Animation {
        Animation::new(1000.0)
            .label("fade")
            .track(Track::to(self.star, Property::Alpha, 0.0))
            .repeat(1, RepeatMode::Reverse)
            .disable_during(self.button(ButtonKind::Fade))
    }

    fn colorizer(&self) -> Animation {
        let parent = self.tree.parent(self.star).unwrap_or(self.container);
        Animation::new(2000.0)
            .label("colorize")
            .track(Track::to(parent, Property::BackgroundColor, Color::RED).from(Color::BLACK))
            .repeat(1, RepeatMode::Reverse)
            .disable_during(self.button(ButtonKind::Colorize))
    }

    /// Spawn a star above the container and build its fall.
    fn shower_star(&mut self) -> Animation {
        let container_size = self.view_size(self.container);
        let base = self.view_size(self.star);

        let scale = self.rng.random_range(SHOWER_MIN_SCALE..=SHOWER_MAX_SCALE);
        let scaled = base.scaled(scale);
        // Scaling pivots on the center, so the visual top sits this far below
        // the layout top.
        let pivot_offset = (base.height - scaled.height) / 2.0;
        // Centered anywhere across the width, so it may hang off either edge
        let x = self.rng.random::<f32>() * container_size.width - base.width / 2.0;
        let fall_from = -scaled.height - pivot_offset;
        let fall_to = container_size.height + scaled.height - pivot_offset;
        let spin = self.rng.random_range(0.0..SHOWER_MAX_ROTATION);
        let duration_ms = self
            .rng
            .random_range(SHOWER_MIN_DURATION_MS..SHOWER_MAX_DURATION_MS);

        let mut view = View::new("shower-star", base);
        view.set_property(Property::ScaleX, scale.into());
        view.set_property(Property::ScaleY, scale.into());
        view.set_property(Property::TranslationX, x.into());
        view.set_property(Property::TranslationY, fall_from.into());
        let star = self.tree.insert(view, Some(self.container));

        log::debug!(
            "shower star {:?}: scale {:.2}, x {:.1}, spin {:.0}, {:.0} ms",
            star,
            scale,
            x,
            spin,
            duration_ms
        );

        Animation::new(duration_ms)
            .label("shower")
            .timing(TimingFunction::EaseIn)
            .track(Track::to(star, Property::TranslationY, fall_to).from(fall_from))
            .track(
                Track::to(star, Property::Rotation, spin)
                    .from(0.0)
                    .timing(TimingFunction::Linear),
            )
            .on_end(move |tree| {
                tree.remove(star);
            })
    }

    fn view_size(&self, id: ViewId) -> Size {
        self.tree.get(id).map(View::size).unwrap_or_default()
    }

    /// Advance all animations to the frame time `now`.
    ///
    /// Returns true while any animation is still running.
    pub fn tick(&mut self, now: Duration) -> bool {
        self.scheduler.tick(now, &mut self.tree)
    }

    pub fn is_idle(&self) -> bool {
        self.scheduler.is_idle()
    }

    pub fn button(&self, kind: ButtonKind) -> &Button {
        &self.buttons[kind.index()]
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    pub fn tree(&self) -> &ViewTree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut ViewTree {
        &mut self.tree
    }

    pub fn container(&self) -> ViewId {
        self.container
    }

    pub fn star(&self) -> ViewId {
        self.star
    }

    pub fn star_view(&self) -> Option<&View> {
        self.tree.get(self.star)
    }

    pub fn container_view(&self) -> Option<&View> {
        self.tree.get(self.container)
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> Screen {
        Screen::with_config(ScreenConfig::default().size(300.0, 500.0).seed(7))
    }

    #[test]
    fn test_new_screen_layout() {
        let screen = screen();
        assert_eq!(screen.tree().len(), 2);
        assert_eq!(screen.tree().children(screen.container()), &[screen.star()]);
        assert_eq!(screen.buttons().len(), 6);
        assert!(screen.buttons().iter().all(Button::is_enabled));

        let star = screen.star_view().map(|v| (v.origin(), v.size()));
        assert_eq!(star, Some(((126.0, 226.0), Size::new(48.0, 48.0))));
        assert_eq!(
            screen.container_view().map(View::background),
            Some(Color::BLACK)
        );
    }

    #[test]
    fn test_disabled_button_ignores_clicks() {
        let mut screen = screen();
        assert!(screen.rotate().is_some());
        assert!(!screen.button(ButtonKind::Rotate).is_enabled());
        assert!(screen.rotate().is_none());
        assert_eq!(screen.scheduler.running_count(), 1);
    }

    #[test]
    fn test_shower_does_not_disable_its_button() {
        let mut screen = screen();
        assert!(screen.shower().is_some());
        assert!(screen.shower().is_some());
        assert!(screen.button(ButtonKind::Shower).is_enabled());
        assert_eq!(screen.tree().children(screen.container()).len(), 3);
    }

    #[test]
    fn test_shower_star_starts_above_container() {
        let mut screen = screen();
        screen.shower();
        let spawned = screen.tree().children(screen.container())[1];
        let bounds = screen.tree().get(spawned).map(View::visual_bounds);
        assert!(bounds.is_some_and(|b| b.bottom() <= 1e-3));
    }

    #[test]
    fn test_star_size_override() {
        let screen = Screen::with_config(ScreenConfig::default().star_size(Size::new(10.0, 20.0)));
        assert_eq!(screen.star_view().map(View::size), Some(Size::new(10.0, 20.0)));
    }
}
