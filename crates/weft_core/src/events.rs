//! Keyboard input events
//!
//! Hosts translate their platform key events into [`KeyEvent`] before handing
//! them to a component. Key codes follow the same numbering the layout layer
//! uses for `KEY_DOWN` events (8 = Backspace, 37..40 = arrows, ...).

/// Key codes understood by weft components
pub mod key_codes {
    pub const BACKSPACE: u32 = 8;
    pub const TAB: u32 = 9;
    pub const ENTER: u32 = 13;
    pub const ESCAPE: u32 = 27;
    pub const END: u32 = 35;
    pub const HOME: u32 = 36;
    pub const ARROW_UP: u32 = 38;
    pub const ARROW_DOWN: u32 = 40;
}

/// Modifier keys held during a key event
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    /// Whether shift modifier is held
    pub shift: bool,
    /// Whether ctrl modifier is held
    pub ctrl: bool,
    /// Whether alt modifier is held
    pub alt: bool,
    /// Whether meta modifier is held (Cmd on macOS, Win on Windows)
    pub meta: bool,
}

impl Modifiers {
    /// No modifiers held
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    /// Only alt held
    pub const ALT: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
        alt: true,
        meta: false,
    };

    /// Only shift held
    pub const SHIFT: Modifiers = Modifiers {
        shift: true,
        ctrl: false,
        alt: false,
        meta: false,
    };
}

/// A key-down event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    /// Key code (see [`key_codes`])
    pub key_code: u32,
    /// Modifier state at the time of the event
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// Create a key event without modifiers
    pub fn new(key_code: u32) -> Self {
        Self {
            key_code,
            modifiers: Modifiers::NONE,
        }
    }

    /// Create a key event with modifiers
    pub fn with_modifiers(key_code: u32, modifiers: Modifiers) -> Self {
        Self {
            key_code,
            modifiers,
        }
    }

    /// Alt + key shorthand
    pub fn alt(key_code: u32) -> Self {
        Self::with_modifiers(key_code, Modifiers::ALT)
    }
}

/// What the host should do after a component consumed a key event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The component handled the key; suppress default handling
    Handled,
    /// The component did not use the key
    Ignored,
    /// The component let go of focus; the host should move focus onward
    MoveFocus,
}
