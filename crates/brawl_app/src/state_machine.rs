//! Top-level game flow.
//!
//! The game moves between a fixed set of states through named transitions.
//! The current state gates which input bindings run.

use std::fmt;

use brawl_input::StateContext;
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameState {
    Loading,
    Menu,
    Starting,
    Playing,
    Help,
    Won,
    Lost,
}

impl GameState {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            GameState::Loading => "loading",
            GameState::Menu => "menu",
            GameState::Starting => "starting",
            GameState::Playing => brawl_input::PLAYING,
            GameState::Help => brawl_input::HELP,
            GameState::Won => "won",
            GameState::Lost => "lost",
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transition {
    /// Assets are loaded.
    Ready,
    /// New game from the menu.
    Start,
    /// Load a level.
    Load,
    /// Play the loaded level.
    Play,
    /// Pause to show a help topic.
    Help,
    Resume,
    Lose,
    Quit,
    Win,
    /// Back to the menu after a game ends.
    Finish,
}

impl Transition {
    fn sources(self) -> &'static [GameState] {
        use GameState::*;
        match self {
            Transition::Ready => &[Loading],
            Transition::Start => &[Menu],
            Transition::Load => &[Starting, Playing],
            Transition::Play => &[Loading],
            Transition::Help => &[Loading, Playing],
            Transition::Resume => &[GameState::Help],
            Transition::Lose | Transition::Quit | Transition::Win => &[Playing],
            Transition::Finish => &[Won, Lost],
        }
    }

    fn target(self) -> GameState {
        match self {
            Transition::Ready | Transition::Finish => GameState::Menu,
            Transition::Start => GameState::Starting,
            Transition::Load => GameState::Loading,
            Transition::Play | Transition::Resume => GameState::Playing,
            Transition::Help => GameState::Help,
            Transition::Lose | Transition::Quit => GameState::Lost,
            Transition::Win => GameState::Won,
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("cannot {transition:?} from {from}")]
pub struct InvalidTransition {
    pub transition: Transition,
    pub from: GameState,
}

#[derive(Debug, Clone)]
pub struct GameStateMachine {
    state: GameState,
}

impl GameStateMachine {
    /// Start in [`GameState::Loading`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: GameState::Loading,
        }
    }

    #[must_use]
    pub fn current(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub fn can(&self, transition: Transition) -> bool {
        transition.sources().contains(&self.state)
    }

    /// Apply `transition`, returning the new state.
    pub fn fire(&mut self, transition: Transition) -> Result<GameState, InvalidTransition> {
        if !self.can(transition) {
            return Err(InvalidTransition {
                transition,
                from: self.state,
            });
        }
        let from = self.state;
        self.state = transition.target();
        info!(?transition, %from, to = %self.state, "game state changed");
        Ok(self.state)
    }
}

impl Default for GameStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl StateContext for GameStateMachine {
    fn state(&self) -> &str {
        self.state.as_str()
    }
}
