use crate::reactive::{create_signal, ReadSignal, Signal};

/// The six buttons of the demo screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonKind {
    Rotate,
    Translate,
    Scale,
    Fade,
    Colorize,
    Shower,
}

impl ButtonKind {
    pub const ALL: [ButtonKind; 6] = [
        ButtonKind::Rotate,
        ButtonKind::Translate,
        ButtonKind::Scale,
        ButtonKind::Fade,
        ButtonKind::Colorize,
        ButtonKind::Shower,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ButtonKind::Rotate => "rotate",
            ButtonKind::Translate => "translate",
            ButtonKind::Scale => "scale",
            ButtonKind::Fade => "fade",
            ButtonKind::Colorize => "colorize",
            ButtonKind::Shower => "shower",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// A push button whose only state is whether it accepts clicks.
#[derive(Clone)]
pub struct Button {
    kind: ButtonKind,
    enabled: Signal<bool>,
}

impl Button {
    pub fn new(kind: ButtonKind) -> Self {
        Self {
            kind,
            enabled: create_signal(true),
        }
    }

    pub fn kind(&self) -> ButtonKind {
        self.kind
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.get()
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.set(enabled);
    }

    /// Observable enabled state, for effects and renderers.
    pub fn enabled(&self) -> ReadSignal<bool> {
        self.enabled.read_only()
    }

    pub(crate) fn enabled_signal(&self) -> Signal<bool> {
        self.enabled.clone()
    }
}

impl std::fmt::Debug for Button {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Button")
            .field("kind", &self.kind)
            .field("enabled", &self.enabled.get_untracked())
            .finish()
    }
}
