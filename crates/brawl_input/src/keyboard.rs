//! Keyboard adapter.
//!
//! Hosts report a key as its numeric code plus its location on the keyboard
//! (0 standard, 1 left, 2 right). The pair is written `"<code>-<location>"`
//! and resolved to a human-readable key name through a fixed table; bindings
//! map key names to actions.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::action::{ActionKey, Edge};
use crate::error::InputError;
use crate::router::{Router, StateContext};

/// `"<code>-<location>"` to key name.
const KEY_CODES: &[(&str, &str)] = &[
    ("8-0", "BACKSPACE"),
    ("9-0", "TAB"),
    ("13-0", "RETURN"),
    ("16-1", "SHIFT_LEFT"),
    ("16-2", "SHIFT_RIGHT"),
    ("17-1", "COMMAND_LEFT"),
    ("17-2", "COMMAND_RIGHT"),
    ("18-1", "OPTION_LEFT"),
    ("18-2", "OPTION_RIGHT"),
    ("19-0", "PAUSE"),
    ("20-0", "CAPS_LOCK"),
    ("27-0", "ESC"),
    ("32-0", "SPACE"),
    ("33-0", "PAGE_UP"),
    ("34-0", "PAGE_DOWN"),
    ("35-0", "END"),
    ("36-0", "HOME"),
    ("37-0", "LEFT"),
    ("38-0", "UP"),
    ("39-0", "RIGHT"),
    ("40-0", "DOWN"),
    ("45-0", "INSERT"),
    ("46-0", "DELETE"),
    ("48-0", "0"),
    ("49-0", "1"),
    ("50-0", "2"),
    ("51-0", "3"),
    ("52-0", "4"),
    ("53-0", "5"),
    ("54-0", "6"),
    ("55-0", "7"),
    ("56-0", "8"),
    ("57-0", "9"),
    ("65-0", "A"),
    ("66-0", "B"),
    ("67-0", "C"),
    ("68-0", "D"),
    ("69-0", "E"),
    ("70-0", "F"),
    ("71-0", "G"),
    ("72-0", "H"),
    ("73-0", "I"),
    ("74-0", "J"),
    ("75-0", "K"),
    ("76-0", "L"),
    ("77-0", "M"),
    ("78-0", "N"),
    ("79-0", "O"),
    ("80-0", "P"),
    ("81-0", "Q"),
    ("82-0", "R"),
    ("83-0", "S"),
    ("84-0", "T"),
    ("85-0", "U"),
    ("86-0", "V"),
    ("87-0", "W"),
    ("88-0", "X"),
    ("89-0", "Y"),
    ("90-0", "Z"),
    ("91-0", "WINDOWS_LEFT"),
    ("91-1", "CTRL_LEFT"),
    ("91-2", "CTRL_RIGHT"),
    ("92-0", "WINDOWS_RIGHT"),
    ("96-0", "NUMPAD_0"),
    ("97-0", "NUMPAD_1"),
    ("98-0", "NUMPAD_2"),
    ("99-0", "NUMPAD_3"),
    ("100-0", "NUMPAD_4"),
    ("101-0", "NUMPAD_5"),
    ("102-0", "NUMPAD_6"),
    ("103-0", "NUMPAD_7"),
    ("104-0", "NUMPAD_8"),
    ("105-0", "NUMPAD_9"),
    ("106-0", "NUMPAD_MULTIPLY"),
    ("107-0", "NUMPAD_ADD"),
    ("109-0", "NUMPAD_SUBTRACT"),
    ("110-0", "NUMPAD_DECIMAL"),
    ("111-0", "NUMPAD_DIVIDE"),
    ("112-0", "F1"),
    ("113-0", "F2"),
    ("114-0", "F3"),
    ("115-0", "F4"),
    ("116-0", "F5"),
    ("117-0", "F6"),
    ("118-0", "F7"),
    ("119-0", "F8"),
    ("120-0", "F9"),
    ("186-0", ";"),
    ("187-0", "="),
    ("188-0", ","),
    ("189-0", "-"),
    ("190-0", "."),
    ("191-0", "/"),
    ("192-0", "`"),
    ("219-0", "["),
    ("220-0", "\\"),
    ("221-0", "]"),
    ("222-0", "'"),
];

/// Resolve `"<code>-<location>"` to a key name.
#[must_use]
pub fn lookup(code: &str) -> Option<&'static str> {
    KEY_CODES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

/// Resolve a key name back to its `"<code>-<location>"`.
#[must_use]
pub fn reverse_lookup(name: &str) -> Option<&'static str> {
    KEY_CODES
        .iter()
        .find(|(_, n)| *n == name)
        .map(|(code, _)| *code)
}

/// One key-to-action binding, by key name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBinding {
    pub key: String,
    pub action: ActionKey,
}

impl KeyBinding {
    #[must_use]
    pub fn new(key: impl Into<String>, action: ActionKey) -> Self {
        Self {
            key: key.into(),
            action,
        }
    }

    /// The default layout: WASD to move, J/K to attack, space to jump.
    #[must_use]
    pub fn defaults() -> Vec<KeyBinding> {
        [
            ("A", ActionKey::Left),
            ("D", ActionKey::Right),
            ("W", ActionKey::Up),
            ("S", ActionKey::Down),
            ("J", ActionKey::Punch),
            ("K", ActionKey::Kick),
            ("SPACE", ActionKey::Jump),
            ("SHIFT_LEFT", ActionKey::Crouch),
            ("ESC", ActionKey::Menu),
            ("F1", ActionKey::Debug),
        ]
        .into_iter()
        .map(|(key, action)| KeyBinding::new(key, action))
        .collect()
    }
}

/// Turns raw key events into routed actions.
#[derive(Debug, Clone)]
pub struct KeyboardAdapter {
    actions: HashMap<&'static str, ActionKey>,
}

impl KeyboardAdapter {
    /// Build an adapter from bindings. Fails on a key name the table does
    /// not know.
    pub fn new(bindings: &[KeyBinding]) -> Result<Self, InputError> {
        let mut actions = HashMap::with_capacity(bindings.len());
        for binding in bindings {
            let code = reverse_lookup(&binding.key)
                .ok_or_else(|| InputError::UnknownKey(binding.key.clone()))?;
            if let Some(previous) = actions.insert(code, binding.action) {
                warn!(key = %binding.key, %previous, action = %binding.action, "key rebound");
            }
        }
        debug!(bindings = actions.len(), "keyboard adapter ready");
        Ok(Self { actions })
    }

    #[must_use]
    pub fn action_for(&self, code: u32, location: u32) -> Option<ActionKey> {
        self.actions.get(format!("{code}-{location}").as_str()).copied()
    }

    /// Route a raw key event. Returns `true` if the host should swallow it.
    pub fn handle<T>(
        &self,
        router: &Router<T>,
        target: &mut T,
        edge: Edge,
        code: u32,
        location: u32,
        context: Option<&dyn StateContext>,
    ) -> bool {
        match self.action_for(code, location) {
            Some(action) => router.trigger_event(target, edge, action, context, &[]),
            None => false,
        }
    }
}

impl Default for KeyboardAdapter {
    fn default() -> Self {
        let actions = KeyBinding::defaults()
            .into_iter()
            .filter_map(|binding| reverse_lookup(&binding.key).map(|code| (code, binding.action)))
            .collect();
        Self { actions }
    }
}
