//! Abstract input actions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// A game action, independent of the device that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionKey {
    Left,
    Right,
    Up,
    Down,
    Punch,
    Kick,
    Jump,
    Crouch,
    Menu,
    Debug,
    /// Analog stick; the angle travels in the event arguments.
    Directional,
}

impl ActionKey {
    pub const ALL: [ActionKey; 11] = [
        ActionKey::Left,
        ActionKey::Right,
        ActionKey::Up,
        ActionKey::Down,
        ActionKey::Punch,
        ActionKey::Kick,
        ActionKey::Jump,
        ActionKey::Crouch,
        ActionKey::Menu,
        ActionKey::Debug,
        ActionKey::Directional,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ActionKey::Left => "LEFT",
            ActionKey::Right => "RIGHT",
            ActionKey::Up => "UP",
            ActionKey::Down => "DOWN",
            ActionKey::Punch => "PUNCH",
            ActionKey::Kick => "KICK",
            ActionKey::Jump => "JUMP",
            ActionKey::Crouch => "CROUCH",
            ActionKey::Menu => "MENU",
            ActionKey::Debug => "DEBUG",
            ActionKey::Directional => "DIRECTIONAL",
        }
    }
}

impl fmt::Display for ActionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ActionKey {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActionKey::ALL
            .into_iter()
            .find(|key| key.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| InputError::UnknownAction(s.to_string()))
    }
}

/// Whether an action was pressed or released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    Press,
    Release,
}

impl Edge {
    #[must_use]
    pub fn is_press(self) -> bool {
        self == Edge::Press
    }
}
