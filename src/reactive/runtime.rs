use std::cell::RefCell;
use std::collections::HashSet;

thread_local! {
    static RUNTIME: RefCell<Runtime> = RefCell::new(Runtime::new());
}

pub type SignalId = usize;
pub type EffectId = usize;

type EffectCallback = Box<dyn FnMut()>;

/// Dependency graph between signals and effects for the current thread.
///
/// Effect callbacks are taken out of the runtime while they run, so an effect
/// may freely read and write signals without re-borrowing the runtime.
#[derive(Default)]
pub struct Runtime {
    current_effect: Option<EffectId>,
    pending_effects: Vec<EffectId>,
    effect_callbacks: Vec<Option<EffectCallback>>,
    effect_alive: Vec<bool>,
    effect_dependencies: Vec<HashSet<SignalId>>,
    signal_subscribers: Vec<HashSet<EffectId>>,
    batch_depth: usize,
    flushing: bool,
}

impl Runtime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate_signal(&mut self) -> SignalId {
        self.signal_subscribers.push(HashSet::new());
        self.signal_subscribers.len() - 1
    }

    pub fn allocate_effect(&mut self, callback: EffectCallback) -> EffectId {
        self.effect_callbacks.push(Some(callback));
        self.effect_alive.push(true);
        self.effect_dependencies.push(HashSet::new());
        self.effect_callbacks.len() - 1
    }

    pub fn track_read(&mut self, signal_id: SignalId) {
        // The signal may belong to another thread's runtime
        if signal_id >= self.signal_subscribers.len() {
            return;
        }

        if let Some(effect_id) = self.current_effect {
            self.signal_subscribers[signal_id].insert(effect_id);
            self.effect_dependencies[effect_id].insert(signal_id);
        }
    }

    /// Queue the subscribers of a signal. Returns true when the caller should
    /// flush right away (not inside a batch or an ongoing flush).
    pub fn notify_write(&mut self, signal_id: SignalId) -> bool {
        if signal_id >= self.signal_subscribers.len() {
            return false;
        }

        for &effect_id in &self.signal_subscribers[signal_id] {
            if !self.pending_effects.contains(&effect_id) {
                self.pending_effects.push(effect_id);
            }
        }

        self.batch_depth == 0 && !self.flushing && !self.pending_effects.is_empty()
    }

    pub fn dispose_effect(&mut self, effect_id: EffectId) {
        let deps = std::mem::take(&mut self.effect_dependencies[effect_id]);
        for signal_id in deps {
            if signal_id < self.signal_subscribers.len() {
                self.signal_subscribers[signal_id].remove(&effect_id);
            }
        }
        self.effect_callbacks[effect_id] = None;
        self.effect_alive[effect_id] = false;
        self.pending_effects.retain(|&id| id != effect_id);
    }

    /// Detach an effect from its old dependencies and hand out its callback.
    fn begin_effect(&mut self, effect_id: EffectId) -> Option<(EffectCallback, Option<EffectId>)> {
        let callback = self.effect_callbacks.get_mut(effect_id)?.take()?;
        let old_deps = std::mem::take(&mut self.effect_dependencies[effect_id]);
        for signal_id in old_deps {
            self.signal_subscribers[signal_id].remove(&effect_id);
        }
        let prev_effect = self.current_effect.replace(effect_id);
        Some((callback, prev_effect))
    }

    fn end_effect(
        &mut self,
        effect_id: EffectId,
        callback: EffectCallback,
        prev_effect: Option<EffectId>,
    ) {
        self.current_effect = prev_effect;
        // Disposed while running: let the callback drop
        if self.effect_alive[effect_id] {
            self.effect_callbacks[effect_id] = Some(callback);
        }
    }
}

pub fn with_runtime<F, R>(f: F) -> R
where
    F: FnOnce(&mut Runtime) -> R,
{
    RUNTIME.with(|rt| f(&mut rt.borrow_mut()))
}

/// Try to access the runtime. Returns `None` when it is already borrowed.
pub fn try_with_runtime<F, R>(f: F) -> Option<R>
where
    F: FnOnce(&mut Runtime) -> R,
{
    RUNTIME.with(|rt| rt.try_borrow_mut().ok().map(|mut runtime| f(&mut runtime)))
}

/// Run one effect with dependency tracking.
pub fn run_effect(effect_id: EffectId) {
    let Some((mut callback, prev_effect)) = with_runtime(|rt| rt.begin_effect(effect_id)) else {
        return;
    };
    callback();
    with_runtime(|rt| rt.end_effect(effect_id, callback, prev_effect));
}

/// Run pending effects until none are left.
pub fn flush_effects() {
    let already_flushing = with_runtime(|rt| std::mem::replace(&mut rt.flushing, true));
    if already_flushing {
        return;
    }
    while let Some(effect_id) = with_runtime(|rt| {
        if rt.pending_effects.is_empty() {
            None
        } else {
            Some(rt.pending_effects.remove(0))
        }
    }) {
        run_effect(effect_id);
    }
    with_runtime(|rt| rt.flushing = false);
}

/// Run `f` with effect notifications deferred until it returns.
pub fn batch<F, R>(f: F) -> R
where
    F: FnOnce() -> R,
{
    with_runtime(|rt| rt.batch_depth += 1);
    let result = f();
    let flush = with_runtime(|rt| {
        rt.batch_depth -= 1;
        rt.batch_depth == 0 && !rt.pending_effects.is_empty()
    });
    if flush {
        flush_effects();
    }
    result
}
