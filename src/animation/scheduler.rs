//! Frame-driven animation driver.
//!
//! The scheduler owns every running [`Animator`]. The host calls
//! [`Scheduler::tick`] once per frame with the frame timestamp; each tick
//! samples all animations, writes their values into the view tree, and
//! completes the ones whose timeline has run out.
//!
//! Completion is reported through [`AnimationHandle`], which can be polled or
//! given callbacks, so callers never depend on frame timing to learn that an
//! animation is over.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use super::{AdvanceResult, Animation, Animator};
use crate::reactive::{batch, request_frame};
use crate::view::ViewTree;

#[derive(Default)]
struct HandleState {
    finished: Cell<bool>,
    callbacks: RefCell<Vec<Box<dyn FnOnce()>>>,
}

impl HandleState {
    fn finish(&self) {
        self.finished.set(true);
        let callbacks = std::mem::take(&mut *self.callbacks.borrow_mut());
        for callback in callbacks {
            callback();
        }
    }
}

/// Completion signal for a started animation.
#[derive(Clone)]
pub struct AnimationHandle {
    id: u64,
    state: Rc<HandleState>,
}

impl AnimationHandle {
    pub fn id(&self) -> u64 {
        self.id
    }

    /// True once the end hooks have run
    pub fn is_finished(&self) -> bool {
        self.state.finished.get()
    }

    /// Call `f` when the animation finishes, or right away if it already has.
    pub fn on_finish<F: FnOnce() + 'static>(&self, f: F) {
        if self.is_finished() {
            f();
        } else {
            self.state.callbacks.borrow_mut().push(Box::new(f));
        }
    }
}

impl std::fmt::Debug for AnimationHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimationHandle")
            .field("id", &self.id)
            .field("finished", &self.is_finished())
            .finish()
    }
}

struct Running {
    id: u64,
    animator: Animator,
    /// Timestamp of the first frame that sampled this animation
    started_at: Option<Duration>,
    state: Rc<HandleState>,
}

#[derive(Default)]
pub struct Scheduler {
    running: Vec<Running>,
    next_id: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start `animation`. Start hooks run before this returns; the timeline
    /// begins at the next [`tick`](Self::tick).
    pub fn start(&mut self, animation: Animation, tree: &mut ViewTree) -> AnimationHandle {
        let (animator, start_hooks) = Animator::new(animation, tree);
        let id = self.next_id;
        self.next_id += 1;

        log::debug!(
            "starting animation #{} '{}' ({} ms total)",
            id,
            animator.label(),
            animator.total_duration_ms()
        );

        batch(|| {
            for hook in start_hooks {
                hook(tree);
            }
        });

        let state = Rc::new(HandleState::default());
        self.running.push(Running {
            id,
            animator,
            started_at: None,
            state: state.clone(),
        });
        request_frame();

        AnimationHandle { id, state }
    }

    /// Advance every running animation to `now`.
    ///
    /// Returns true while any animation is still running.
    pub fn tick(&mut self, now: Duration, tree: &mut ViewTree) -> bool {
        for running in &mut self.running {
            let started_at = *running.started_at.get_or_insert(now);
            let elapsed_ms = (now.saturating_sub(started_at).as_secs_f64() * 1000.0) as f32;
            if let AdvanceResult::Changed(progress) = running.animator.advance(elapsed_ms, tree) {
                log::trace!(
                    "animation #{} at {:.1} ms: {:?}",
                    running.id,
                    elapsed_ms,
                    progress
                );
            }
        }

        let mut completed = Vec::new();
        let mut index = 0;
        while index < self.running.len() {
            if self.running[index].animator.is_animating() {
                index += 1;
            } else {
                completed.push(self.running.remove(index));
            }
        }

        batch(|| {
            for mut done in completed {
                for hook in done.animator.take_end_hooks() {
                    hook(tree);
                }
                log::debug!(
                    "animation #{} '{}' finished",
                    done.id,
                    done.animator.label()
                );
                done.state.finish();
            }
        });

        let animating = !self.running.is_empty();
        if animating {
            request_frame();
        }
        animating
    }

    pub fn is_idle(&self) -> bool {
        self.running.is_empty()
    }

    pub fn running_count(&self) -> usize {
        self.running.len()
    }
}
