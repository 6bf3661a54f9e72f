//! Frame requests from reactive writes and animation starts.
//!
//! The host loop polls [`take_frame_request`] to decide whether anything
//! needs a tick; signals and the animation scheduler raise the flag.

use std::sync::atomic::{AtomicBool, Ordering};

/// Global flag to indicate a frame is requested
static FRAME_REQUESTED: AtomicBool = AtomicBool::new(false);

/// Request that the host loop process a frame
pub fn request_frame() {
    FRAME_REQUESTED.store(true, Ordering::Relaxed);
}

/// Check if a frame has been requested and clear the flag
pub fn take_frame_request() -> bool {
    FRAME_REQUESTED.swap(false, Ordering::Relaxed)
}
