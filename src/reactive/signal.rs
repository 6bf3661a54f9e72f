use std::sync::{Arc, RwLock};

use super::invalidation::request_frame;
use super::runtime::{flush_effects, try_with_runtime, with_runtime, SignalId};

struct SignalInner<T> {
    id: SignalId,
    value: RwLock<T>,
}

/// A reactive signal that can be read and written from any thread.
///
/// When a signal's value changes, effects that read it are re-run on the
/// thread that created them.
///
/// # Thread Safety
/// Values can be read and written from any thread. Effect notification only
/// happens on the owning thread; writes from elsewhere still request a frame,
/// so a host loop polling the signal sees the new value.
pub struct Signal<T> {
    inner: Arc<SignalInner<T>>,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> Signal<T> {
    pub fn new(value: T) -> Self {
        let id = with_runtime(|rt| rt.allocate_signal());
        Self {
            inner: Arc::new(SignalInner {
                id,
                value: RwLock::new(value),
            }),
        }
    }

    /// Read-only handle sharing this signal's value.
    pub fn read_only(&self) -> ReadSignal<T> {
        ReadSignal {
            inner: self.inner.clone(),
        }
    }

    fn notify(&self) {
        if try_with_runtime(|rt| rt.notify_write(self.inner.id)).unwrap_or(false) {
            flush_effects();
        }
        request_frame();
    }
}

impl<T: Clone> Signal<T> {
    pub fn get(&self) -> T {
        try_with_runtime(|rt| rt.track_read(self.inner.id));
        self.get_untracked()
    }

    pub fn get_untracked(&self) -> T {
        self.inner
            .value
            .read()
            .expect("signal lock poisoned")
            .clone()
    }
}

impl<T: PartialEq> Signal<T> {
    /// Sets the signal's value, only triggering updates if the value actually changed.
    pub fn set(&self, value: T) {
        let Ok(mut guard) = self.inner.value.write() else {
            return; // Lock poisoned, skip update silently
        };
        if *guard != value {
            *guard = value;
            drop(guard);
            self.notify();
        }
    }
}

impl<T: PartialEq + Clone> Signal<T> {
    /// Updates the signal's value using a closure, only triggering updates if the value changed.
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut T),
    {
        let Ok(mut guard) = self.inner.value.write() else {
            return; // Lock poisoned, skip update silently
        };
        let old_value = guard.clone();
        f(&mut *guard);
        if *guard != old_value {
            drop(guard);
            self.notify();
        }
    }
}

impl<T> Signal<T> {
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        try_with_runtime(|rt| rt.track_read(self.inner.id));
        self.with_untracked(f)
    }

    pub fn with_untracked<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&self.inner.value.read().expect("signal lock poisoned"))
    }
}

/// Read-only handle to a signal.
pub struct ReadSignal<T> {
    inner: Arc<SignalInner<T>>,
}

impl<T> Clone for ReadSignal<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: Clone> ReadSignal<T> {
    pub fn get(&self) -> T {
        try_with_runtime(|rt| rt.track_read(self.inner.id));
        self.get_untracked()
    }

    pub fn get_untracked(&self) -> T {
        self.inner
            .value
            .read()
            .expect("signal lock poisoned")
            .clone()
    }
}

pub fn create_signal<T>(value: T) -> Signal<T> {
    Signal::new(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_signal_and_get() {
        let signal = create_signal(42);
        assert_eq!(signal.get(), 42);
    }

    #[test]
    fn test_set_updates_value() {
        let signal = create_signal(10);
        signal.set(20);
        assert_eq!(signal.get(), 20);
    }

    #[test]
    fn test_update_with_closure() {
        let signal = create_signal(5);
        signal.update(|v| *v += 10);
        assert_eq!(signal.get(), 15);
    }

    #[test]
    fn test_with_for_borrowing() {
        let signal = create_signal(String::from("hello"));
        let length = signal.with(|s| s.len());
        assert_eq!(length, 5);
    }

    #[test]
    fn test_read_only_handle_follows_writes() {
        let signal = create_signal(7);
        let read = signal.read_only();

        assert_eq!(read.get(), 7);
        signal.set(14);
        assert_eq!(read.get(), 14);
        assert_eq!(read.clone().get_untracked(), 14);
    }

    #[test]
    fn test_clone_shares_underlying_value() {
        let signal1 = create_signal(50);
        let signal2 = signal1.clone();

        signal1.set(75);
        assert_eq!(signal2.get(), 75);

        signal2.set(100);
        assert_eq!(signal1.get(), 100);
    }

    #[test]
    fn test_set_from_background_thread() {
        let signal = create_signal(false);
        let remote = signal.clone();
        std::thread::spawn(move || remote.set(true))
            .join()
            .expect("writer thread panicked");
        assert!(signal.get());
    }
}
