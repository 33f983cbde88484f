//! Wires the world, game states, and input into scheduler callbacks.

use std::collections::VecDeque;

use brawl_entity::SpriteFrame;
use brawl_input::{
    Edge, InputError, KeyboardAdapter, Router, movement_router, release_all, reverse_lookup,
};
use brawl_loop::{FrameInfo, TickInfo};
use tracing::{debug, info, warn};

use crate::config::{GameConfig, ScriptedKey};
use crate::state_machine::{GameState, GameStateMachine, Transition};
use crate::world::World;

/// Everything the scheduler callbacks operate on.
pub struct Game {
    pub world: World,
    pub states: GameStateMachine,
    router: Router<World>,
    keyboard: KeyboardAdapter,
    script: VecDeque<ScriptedKey>,
    sprites: Vec<SpriteFrame>,
    overloads: u64,
}

impl Game {
    /// Build a game from config and move it straight into play.
    pub fn new(config: &GameConfig) -> Result<Self, InputError> {
        let keyboard = KeyboardAdapter::new(&config.bindings)?;

        let mut script = config.script.clone();
        if let Some(unknown) = script.iter().find(|k| reverse_lookup(&k.key).is_none()) {
            return Err(InputError::UnknownKey(unknown.key.clone()));
        }
        script.sort_by(|a, b| a.at_ms.total_cmp(&b.at_ms));

        let viewport = brawl_entity::Viewport::new(config.width, config.height);
        let mut states = GameStateMachine::new();
        if let Err(err) = states.fire(Transition::Play) {
            warn!(%err, "could not enter play");
        }

        Ok(Self {
            world: World::new(viewport, config.seed, config.npcs),
            states,
            router: movement_router(),
            keyboard,
            script: script.into(),
            sprites: Vec::new(),
            overloads: 0,
        })
    }

    /// Scheduler update callback. Actors only move while playing.
    pub fn update(&mut self, tick: &TickInfo) {
        if self.states.current() == GameState::Playing {
            self.world.tick(tick);
        }
    }

    /// Scheduler render callback. Captures sprites, then delivers input
    /// that arrived before the next frame.
    pub fn end_frame(&mut self, frame: &FrameInfo) {
        self.sprites = self.world.sprites();
        if self.world.debug_enabled() {
            if let Some(snapshot) = self.world.debug_snapshot() {
                info!(
                    fps = frame.fps,
                    facing = ?snapshot.facing,
                    moving = snapshot.moving,
                    running = snapshot.running,
                    crouching = snapshot.crouching,
                    stunned = snapshot.stunned,
                    jumping = snapshot.jumping,
                    x = snapshot.x,
                    y = snapshot.y,
                    "player"
                );
            }
        }
        self.deliver_input(frame.now);
    }

    /// Scheduler panic callback.
    pub fn on_overload(&mut self) {
        self.overloads += 1;
        debug!(overloads = self.overloads, "world resynchronised");
    }

    /// Route one key by name through the keyboard adapter. Returns `true`
    /// if a binding handled it.
    pub fn press_key(&mut self, name: &str, edge: Edge) -> bool {
        let Some((code, location)) = reverse_lookup(name).and_then(parse_code) else {
            warn!(key = name, "key has no code");
            return false;
        };
        self.keyboard.handle(
            &self.router,
            &mut self.world,
            edge,
            code,
            location,
            Some(&self.states),
        )
    }

    #[must_use]
    pub fn sprites(&self) -> &[SpriteFrame] {
        &self.sprites
    }

    #[must_use]
    pub fn overloads(&self) -> u64 {
        self.overloads
    }

    fn deliver_input(&mut self, now: f64) {
        self.world.set_now(now);
        while self.script.front().is_some_and(|key| key.at_ms <= now) {
            let Some(key) = self.script.pop_front() else {
                break;
            };
            let handled = self.press_key(&key.key, key.edge);
            debug!(key = %key.key, edge = ?key.edge, handled, "scripted key");
        }

        if self.world.take_menu_request() {
            let transition = match self.states.current() {
                GameState::Help => Transition::Resume,
                _ => Transition::Help,
            };
            match self.states.fire(transition) {
                // Releases are filtered outside play, so drop held input now.
                Ok(GameState::Help) => release_all(&mut self.world),
                Ok(_) => {}
                Err(err) => warn!(%err, "menu ignored"),
            }
        }
    }
}

fn parse_code(code: &str) -> Option<(u32, u32)> {
    let (code, location) = code.split_once('-')?;
    Some((code.parse().ok()?, location.parse().ok()?))
}
