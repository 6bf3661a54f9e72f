use super::{Animatable, Animation, Hook, RepeatMode, TimingFunction};
use crate::view::{Property, PropertyValue, ViewId, ViewTree};

/// Result of advancing an animation, indicating whether the value changed
#[derive(Debug, Clone, PartialEq)]
pub enum AdvanceResult<T> {
    /// Value did not change (same fraction as the previous frame)
    NoChange,
    /// Value changed to a new value
    Changed(T),
}

impl<T> AdvanceResult<T> {
    /// Returns true if the value changed
    pub fn is_changed(&self) -> bool {
        matches!(self, AdvanceResult::Changed(_))
    }
}

/// Position of an animation on its timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Progress {
    /// Raw fraction (before easing) of the current iteration, already
    /// flipped for reversed iterations
    Running(f32),
    /// All iterations are done; 1.0 rests on the end values, 0.0 on the start
    Finished(f32),
}

impl Progress {
    pub fn is_finished(&self) -> bool {
        matches!(self, Progress::Finished(_))
    }
}

/// A track with its start value pinned down.
#[derive(Debug, Clone)]
struct ResolvedTrack {
    target: ViewId,
    property: Property,
    from: PropertyValue,
    to: PropertyValue,
    timing: Option<TimingFunction>,
}

impl ResolvedTrack {
    fn value_at(&self, progress: Progress, default_timing: &TimingFunction) -> PropertyValue {
        match progress {
            Progress::Finished(fraction) if fraction <= 0.0 => self.from,
            Progress::Finished(_) => self.to,
            Progress::Running(fraction) => {
                let eased = self
                    .timing
                    .as_ref()
                    .unwrap_or(default_timing)
                    .evaluate(fraction);
                PropertyValue::lerp(&self.from, &self.to, eased)
            }
        }
    }
}

/// Runtime state of one started [`Animation`].
///
/// Values are a pure function of elapsed time; the scheduler decides when to
/// sample.
pub struct Animator {
    label: String,
    tracks: Vec<ResolvedTrack>,
    duration_ms: f32,
    repeat_count: u32,
    repeat_mode: RepeatMode,
    timing: TimingFunction,
    end_hooks: Vec<Hook>,
    /// Progress sampled on the previous frame, for change detection
    prev_progress: Option<Progress>,
}

impl Animator {
    /// Pin start values, reading them from `tree` where the animation left
    /// them open. Start hooks are returned to the caller, which decides when
    /// to run them.
    pub fn new(animation: Animation, tree: &ViewTree) -> (Self, Vec<Hook>) {
        let Animation {
            label,
            tracks,
            duration_ms,
            repeat_count,
            repeat_mode,
            timing,
            start_hooks,
            end_hooks,
        } = animation;

        let tracks = tracks
            .into_iter()
            .filter_map(|track| {
                let from = match track.from {
                    Some(from) => from,
                    None => match tree.get(track.target) {
                        Some(view) => view.property(track.property),
                        None => {
                            log::warn!(
                                "{}: target view {:?} is gone, dropping {:?} track",
                                label,
                                track.target,
                                track.property
                            );
                            return None;
                        }
                    },
                };
                Some(ResolvedTrack {
                    target: track.target,
                    property: track.property,
                    from,
                    to: track.to,
                    timing: track.timing,
                })
            })
            .collect();

        let animator = Self {
            label,
            tracks,
            duration_ms,
            repeat_count,
            repeat_mode,
            timing,
            end_hooks,
            prev_progress: None,
        };
        (animator, start_hooks)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn total_duration_ms(&self) -> f32 {
        self.duration_ms * (self.repeat_count as f32 + 1.0)
    }

    /// Where on the timeline `elapsed_ms` falls.
    pub fn progress_at(&self, elapsed_ms: f32) -> Progress {
        if self.duration_ms <= 0.0 || elapsed_ms >= self.total_duration_ms() {
            return Progress::Finished(self.final_fraction());
        }

        let elapsed_ms = elapsed_ms.max(0.0);
        let iteration = ((elapsed_ms / self.duration_ms).floor() as u32).min(self.repeat_count);
        let local = ((elapsed_ms - iteration as f32 * self.duration_ms) / self.duration_ms)
            .clamp(0.0, 1.0);

        if self.repeat_mode == RepeatMode::Reverse && iteration % 2 == 1 {
            Progress::Running(1.0 - local)
        } else {
            Progress::Running(local)
        }
    }

    fn final_fraction(&self) -> f32 {
        if self.repeat_mode == RepeatMode::Reverse && self.repeat_count % 2 == 1 {
            0.0
        } else {
            1.0
        }
    }

    /// Value of every track at `elapsed_ms`.
    pub fn values_at(&self, elapsed_ms: f32) -> Vec<(ViewId, Property, PropertyValue)> {
        let progress = self.progress_at(elapsed_ms);
        self.tracks
            .iter()
            .map(|track| {
                (
                    track.target,
                    track.property,
                    track.value_at(progress, &self.timing),
                )
            })
            .collect()
    }

    /// Value of one property of one view at `elapsed_ms`, if animated here.
    pub fn value_at(
        &self,
        target: ViewId,
        property: Property,
        elapsed_ms: f32,
    ) -> Option<PropertyValue> {
        let progress = self.progress_at(elapsed_ms);
        self.tracks
            .iter()
            .find(|track| track.target == target && track.property == property)
            .map(|track| track.value_at(progress, &self.timing))
    }

    /// Sample the timeline at `elapsed_ms` and write the values into `tree`.
    ///
    /// Views removed mid-flight are skipped.
    pub fn advance(&mut self, elapsed_ms: f32, tree: &mut ViewTree) -> AdvanceResult<Progress> {
        let progress = self.progress_at(elapsed_ms);
        if self.prev_progress == Some(progress) {
            return AdvanceResult::NoChange;
        }
        self.prev_progress = Some(progress);

        for track in &self.tracks {
            let value = track.value_at(progress, &self.timing);
            match tree.get_mut(track.target) {
                Some(view) => view.set_property(track.property, value),
                None => log::debug!(
                    "{}: skipping {:?} on removed view {:?}",
                    self.label,
                    track.property,
                    track.target
                ),
            }
        }
        AdvanceResult::Changed(progress)
    }

    /// Check if the last sampled frame was before the end of the timeline
    pub fn is_animating(&self) -> bool {
        !matches!(self.prev_progress, Some(Progress::Finished(_)))
    }

    /// Hand out the end hooks; subsequent calls return nothing.
    pub fn take_end_hooks(&mut self) -> Vec<Hook> {
        std::mem::take(&mut self.end_hooks)
    }
}
