//! Key bindings for the presentation widgets.
//!
//! Right arrow advances, left arrow goes back, space toggles autoplay on
//! surfaces that support it and Escape closes the lightbox. The gallery also
//! listens for Ctrl+K (Cmd+K on macOS) to focus its search box.

use crate::navigator::NavCommand;

/// Keys the widgets react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Space,
    Escape,
    Char(char),
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_dom(key: &str) -> Self {
        match key {
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            " " | "Spacebar" => Key::Space,
            "Escape" | "Esc" => Key::Escape,
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Key::Char(ch),
                    _ => Key::Other,
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
    pub alt: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInput {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyInput {
    pub fn plain(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::default(),
        }
    }

    pub fn with_modifiers(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }
}

impl From<Key> for KeyInput {
    fn from(key: Key) -> Self {
        Self::plain(key)
    }
}

/// Host platform, used to pick the search shortcut modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Platform {
    MacOs,
    #[default]
    Other,
}

impl Platform {
    /// Classify a `navigator.platform`-style string.
    pub fn detect(platform: &str) -> Self {
        if platform.to_uppercase().contains("MAC") {
            Platform::MacOs
        } else {
            Platform::Other
        }
    }

    fn shortcut_modifier(&self, modifiers: &Modifiers) -> bool {
        match self {
            Platform::MacOs => modifiers.meta,
            Platform::Other => modifiers.ctrl,
        }
    }
}

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Navigate(NavCommand),
    Close,
    FocusSearch,
}

/// Which bindings a widget listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyBindings {
    pub toggle_autoplay: bool,
    pub close: bool,
    pub search_shortcut: Option<Platform>,
}

impl KeyBindings {
    /// Arrow navigation, plus space when the carousel supports autoplay.
    pub fn carousel(supports_autoplay: bool) -> Self {
        Self {
            toggle_autoplay: supports_autoplay,
            ..Self::default()
        }
    }

    /// Arrow navigation and Escape to close.
    pub fn lightbox() -> Self {
        Self {
            close: true,
            ..Self::default()
        }
    }

    /// Lightbox bindings plus the search shortcut.
    pub fn gallery(platform: Platform) -> Self {
        Self {
            search_shortcut: Some(platform),
            ..Self::lightbox()
        }
    }

    pub fn resolve(&self, input: &KeyInput) -> Option<InputAction> {
        if let Some(platform) = self.search_shortcut
            && let Key::Char(ch) = input.key
            && ch.eq_ignore_ascii_case(&'k')
            && platform.shortcut_modifier(&input.modifiers)
        {
            return Some(InputAction::FocusSearch);
        }

        match input.key {
            Key::ArrowRight => Some(InputAction::Navigate(NavCommand::Next)),
            Key::ArrowLeft => Some(InputAction::Navigate(NavCommand::Previous)),
            Key::Space if self.toggle_autoplay => {
                Some(InputAction::Navigate(NavCommand::TOGGLE_AUTOPLAY))
            }
            Key::Escape if self.close => Some(InputAction::Close),
            _ => None,
        }
    }
}
