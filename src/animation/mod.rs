mod animatable;
mod animator;
mod scheduler;
mod timing;

pub use animatable::Animatable;
pub use animator::{AdvanceResult, Animator, Progress};
pub use scheduler::{AnimationHandle, Scheduler};
pub use timing::TimingFunction;

use crate::button::Button;
use crate::view::{Property, PropertyValue, ViewId, ViewTree};

/// Callback run against the view tree when an animation starts or ends.
pub type Hook = Box<dyn FnOnce(&mut ViewTree)>;

/// What happens when an iteration finishes and repeats remain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RepeatMode {
    /// Jump back to the start value and play forward again
    #[default]
    Restart,
    /// Play backwards towards the start value
    Reverse,
}

/// One property of one view moving between two values.
#[derive(Clone, Debug)]
pub struct Track {
    pub target: ViewId,
    pub property: Property,
    /// Start value; read from the view when the animation starts if unset
    pub from: Option<PropertyValue>,
    pub to: PropertyValue,
    /// Overrides the animation's timing function for this track
    pub timing: Option<TimingFunction>,
}

impl Track {
    /// Animate `property` of `target` from its current value to `to`.
    pub fn to(target: ViewId, property: Property, to: impl Into<PropertyValue>) -> Self {
        Self {
            target,
            property,
            from: None,
            to: to.into(),
            timing: None,
        }
    }

    /// Set an explicit start value
    pub fn from(mut self, from: impl Into<PropertyValue>) -> Self {
        self.from = Some(from.into());
        self
    }

    /// Use a timing function for this track only
    pub fn timing(mut self, timing: TimingFunction) -> Self {
        self.timing = Some(timing);
        self
    }
}

/// Description of a property animation: what moves, for how long, and what
/// runs around it.
///
/// All tracks share one clock, so properties animated together stay in
/// lockstep.
pub struct Animation {
    pub(crate) label: String,
    pub(crate) tracks: Vec<Track>,
    /// Duration of one iteration in milliseconds
    pub(crate) duration_ms: f32,
    pub(crate) repeat_count: u32,
    pub(crate) repeat_mode: RepeatMode,
    pub(crate) timing: TimingFunction,
    pub(crate) start_hooks: Vec<Hook>,
    pub(crate) end_hooks: Vec<Hook>,
}

impl Animation {
    /// Create an animation whose single iteration lasts `duration_ms`
    pub fn new(duration_ms: f32) -> Self {
        Self {
            label: String::from("animation"),
            tracks: Vec::new(),
            duration_ms,
            repeat_count: 0,
            repeat_mode: RepeatMode::Restart,
            timing: TimingFunction::default(),
            start_hooks: Vec::new(),
            end_hooks: Vec::new(),
        }
    }

    /// Name used in log output
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn track(mut self, track: Track) -> Self {
        self.tracks.push(track);
        self
    }

    /// Play `count` extra iterations after the first
    pub fn repeat(mut self, count: u32, mode: RepeatMode) -> Self {
        self.repeat_count = count;
        self.repeat_mode = mode;
        self
    }

    /// Set the timing function
    pub fn timing(mut self, timing: TimingFunction) -> Self {
        self.timing = timing;
        self
    }

    /// Run `hook` when the animation is started
    pub fn on_start<F>(mut self, hook: F) -> Self
    where
        F: FnOnce(&mut ViewTree) + 'static,
    {
        self.start_hooks.push(Box::new(hook));
        self
    }

    /// Run `hook` once the last iteration has finished
    pub fn on_end<F>(mut self, hook: F) -> Self
    where
        F: FnOnce(&mut ViewTree) + 'static,
    {
        self.end_hooks.push(Box::new(hook));
        self
    }

    /// Keep `button` disabled while the animation runs.
    pub fn disable_during(self, button: &Button) -> Self {
        let on_start = button.enabled_signal();
        let on_end = button.enabled_signal();
        self.on_start(move |_| on_start.set(false))
            .on_end(move |_| on_end.set(true))
    }

    pub fn duration_ms(&self) -> f32 {
        self.duration_ms
    }

    /// Duration of all iterations together
    pub fn total_duration_ms(&self) -> f32 {
        self.duration_ms * (self.repeat_count as f32 + 1.0)
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }
}

impl std::fmt::Debug for Animation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Animation")
            .field("label", &self.label)
            .field("tracks", &self.tracks)
            .field("duration_ms", &self.duration_ms)
            .field("repeat_count", &self.repeat_count)
            .field("repeat_mode", &self.repeat_mode)
            .field("timing", &self.timing)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::button::ButtonKind;
    use crate::view::{Size, View};

    #[test]
    fn test_total_duration_counts_repeats() {
        let animation = Animation::new(1000.0).repeat(1, RepeatMode::Reverse);
        assert_eq!(animation.duration_ms(), 1000.0);
        assert_eq!(animation.total_duration_ms(), 2000.0);
    }

    #[test]
    fn test_track_builder() {
        let mut tree = ViewTree::new();
        let star = tree.insert(View::new("star", Size::new(10.0, 10.0)), None);

        let track = Track::to(star, Property::Rotation, 0.0)
            .from(-360.0)
            .timing(TimingFunction::Linear);
        assert_eq!(track.from, Some(PropertyValue::Float(-360.0)));
        assert_eq!(track.to, PropertyValue::Float(0.0));
        assert!(matches!(track.timing, Some(TimingFunction::Linear)));
    }

    #[test]
    fn test_disable_during_installs_paired_hooks() {
        let button = Button::new(ButtonKind::Rotate);
        let mut animation = Animation::new(100.0).disable_during(&button);
        let mut tree = ViewTree::new();

        assert_eq!(animation.start_hooks.len(), 1);
        assert_eq!(animation.end_hooks.len(), 1);

        for hook in animation.start_hooks.drain(..) {
            hook(&mut tree);
        }
        assert!(!button.is_enabled());
        for hook in animation.end_hooks.drain(..) {
            hook(&mut tree);
        }
        assert!(button.is_enabled());
    }
}
