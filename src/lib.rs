//! A single-screen property animation demo.
//!
//! Six buttons each start one canned animation of a star: rotation,
//! translation, scaling, fading, a background color transition and a
//! "shower" of falling stars. Animations are sampled from pure functions of
//! elapsed time; the host owns the frame loop and calls [`Screen::tick`].
//!
//! ```ignore
//! let clock = SystemClock::new();
//! let mut screen = Screen::new();
//! screen.rotate();
//! while screen.tick(clock.now()) {
//!     std::thread::sleep(Duration::from_millis(16));
//! }
//! ```

pub mod animation;
pub mod asset;
pub mod button;
pub mod clock;
pub mod color;
pub mod reactive;
pub mod screen;
pub mod view;

pub use screen::{Screen, ScreenConfig};

pub mod prelude {
    pub use crate::animation::{
        Animatable, Animation, AnimationHandle, RepeatMode, Scheduler, TimingFunction, Track,
    };
    pub use crate::button::{Button, ButtonKind};
    pub use crate::clock::{FrameClock, ManualClock, SystemClock};
    pub use crate::color::Color;
    pub use crate::reactive::{batch, create_effect, create_signal, Effect, ReadSignal, Signal};
    pub use crate::view::{Property, PropertyValue, Rect, Size, View, ViewId, ViewTree};
    pub use crate::{Screen, ScreenConfig};
}
