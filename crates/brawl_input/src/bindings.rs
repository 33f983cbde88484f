//! Standard movement subscriptions.
//!
//! [`movement_router`] builds a [`Router`] that drives the player's
//! [`MovementState`] from discrete direction keys, an analog stick, and the
//! action buttons. Every movement binding only runs while the game is in
//! the [`PLAYING`] state; the menu action also works from [`HELP`].

use brawl_movement::{Direction, MovementState, Timestamp};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::action::{ActionKey, Edge};
use crate::router::{Router, StateRequirement};

/// The state movement bindings require.
pub const PLAYING: &str = "playing";

/// The state the menu action toggles into and out of.
pub const HELP: &str = "help";

/// Which actions are currently held down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeldKeys {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub punch: bool,
    pub kick: bool,
    pub jump: bool,
    pub crouch: bool,
}

impl HeldKeys {
    /// Mark `key` as held or released. Keys without a held state are ignored.
    pub fn set(&mut self, key: ActionKey, held: bool) {
        let slot = match key {
            ActionKey::Left => &mut self.left,
            ActionKey::Right => &mut self.right,
            ActionKey::Up => &mut self.up,
            ActionKey::Down => &mut self.down,
            ActionKey::Punch => &mut self.punch,
            ActionKey::Kick => &mut self.kick,
            ActionKey::Jump => &mut self.jump,
            ActionKey::Crouch => &mut self.crouch,
            ActionKey::Menu | ActionKey::Debug | ActionKey::Directional => return,
        };
        *slot = held;
    }

    /// Compass angle of the held direction keys. Opposing keys cancel.
    #[must_use]
    pub fn angle(&self) -> Option<f32> {
        let x = i8::from(self.right) - i8::from(self.left);
        let y = i8::from(self.up) - i8::from(self.down);
        Direction::from_axes(x, y).map(Direction::angle)
    }

    /// Returns `true` if any direction key is down.
    #[must_use]
    pub fn any_direction(&self) -> bool {
        self.left || self.right || self.up || self.down
    }
}

/// A target the movement bindings can drive.
pub trait Controllable {
    /// Movement state of the controlled actor, if one exists.
    fn movement(&mut self) -> Option<&mut MovementState>;

    fn held_keys(&mut self) -> &mut HeldKeys;

    /// Current time in milliseconds.
    fn now_ms(&self) -> Timestamp;

    fn toggle_debug(&mut self);

    /// Called when the menu action is pressed.
    fn menu(&mut self) {}
}

fn steer_from_keys<T: Controllable>(key: ActionKey) -> impl Fn(&mut T, Edge, &[f32]) {
    move |target: &mut T, edge: Edge, _: &[f32]| {
        let keys = target.held_keys();
        keys.set(key, edge.is_press());
        let angle = keys.angle();
        let cancelled = angle.is_none() && keys.any_direction();
        let now = target.now_ms();
        if let Some(movement) = target.movement() {
            if cancelled {
                // Opposing keys are still down; nothing was let go.
                movement.halt();
            } else {
                movement.steer(angle, now);
            }
        }
    }
}

/// Let go of every held key and stop the controlled actor.
///
/// Hosts call this when leaving the state the movement bindings require,
/// since releases that arrive outside it are filtered out.
pub fn release_all<T: Controllable>(target: &mut T) {
    *target.held_keys() = HeldKeys::default();
    let now = target.now_ms();
    if let Some(movement) = target.movement() {
        if movement.moving {
            movement.steer(None, now);
        }
        movement.crouch(false);
        movement.punch(false, now);
        movement.kick(false, now);
    }
    debug!("held keys released");
}

fn steer_from_stick<T: Controllable>(target: &mut T, edge: Edge, args: &[f32]) {
    let angle = match edge {
        Edge::Press => args.first().copied(),
        Edge::Release => None,
    };
    let now = target.now_ms();
    if let Some(movement) = target.movement() {
        movement.steer(angle, now);
    }
}

fn jump<T: Controllable>(target: &mut T, edge: Edge, _: &[f32]) {
    let keys = target.held_keys();
    let already_fired = keys.jump;
    keys.jump = edge.is_press();
    if let Some(movement) = target.movement() {
        movement.jump(edge.is_press(), already_fired);
    }
}

fn crouch<T: Controllable>(target: &mut T, edge: Edge, _: &[f32]) {
    target.held_keys().crouch = edge.is_press();
    if let Some(movement) = target.movement() {
        movement.crouch(edge.is_press());
    }
}

fn punch<T: Controllable>(target: &mut T, edge: Edge, _: &[f32]) {
    target.held_keys().punch = edge.is_press();
    let now = target.now_ms();
    if let Some(movement) = target.movement() {
        movement.punch(edge.is_press(), now);
    }
}

fn kick<T: Controllable>(target: &mut T, edge: Edge, _: &[f32]) {
    target.held_keys().kick = edge.is_press();
    let now = target.now_ms();
    if let Some(movement) = target.movement() {
        movement.kick(edge.is_press(), now);
    }
}

/// Build the router with the standard movement, action, menu, and debug
/// bindings.
#[must_use]
pub fn movement_router<T: Controllable + 'static>() -> Router<T> {
    let playing = || StateRequirement::exactly(PLAYING);
    let mut router = Router::new();

    for key in [ActionKey::Left, ActionKey::Right, ActionKey::Up, ActionKey::Down] {
        router.subscribe(key, playing(), steer_from_keys::<T>(key));
    }
    router.subscribe(ActionKey::Directional, playing(), steer_from_stick::<T>);
    router.subscribe(ActionKey::Jump, playing(), jump::<T>);
    router.subscribe(ActionKey::Crouch, playing(), crouch::<T>);
    router.subscribe(ActionKey::Punch, playing(), punch::<T>);
    router.subscribe(ActionKey::Kick, playing(), kick::<T>);
    let menu_states = StateRequirement::one_of([PLAYING, HELP]);
    router.subscribe(ActionKey::Menu, menu_states, |target: &mut T, edge, _| {
        if edge.is_press() {
            target.menu();
        }
    });
    router.subscribe(ActionKey::Debug, StateRequirement::Any, |target: &mut T, edge, _| {
        if edge.is_press() {
            target.toggle_debug();
            debug!("debug toggled");
        }
    });
    router
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::StateContext;
    use brawl_movement::{Facing, Guided};

    #[derive(Default)]
    struct Pad {
        movement: MovementState,
        keys: HeldKeys,
        now: Timestamp,
        debug: bool,
        menus: u32,
    }

    impl Controllable for Pad {
        fn movement(&mut self) -> Option<&mut MovementState> {
            Some(&mut self.movement)
        }

        fn held_keys(&mut self) -> &mut HeldKeys {
            &mut self.keys
        }

        fn now_ms(&self) -> Timestamp {
            self.now
        }

        fn toggle_debug(&mut self) {
            self.debug = !self.debug;
        }

        fn menu(&mut self) {
            self.menus += 1;
        }
    }

    struct State(&'static str);

    impl StateContext for State {
        fn state(&self) -> &str {
            self.0
        }
    }

    const PLAY: State = State(PLAYING);

    fn press(router: &Router<Pad>, pad: &mut Pad, key: ActionKey) -> bool {
        router.trigger_event(pad, Edge::Press, key, Some(&PLAY), &[])
    }

    fn release(router: &Router<Pad>, pad: &mut Pad, key: ActionKey) -> bool {
        router.trigger_event(pad, Edge::Release, key, Some(&PLAY), &[])
    }

    #[test]
    fn test_held_keys_angle() {
        let mut keys = HeldKeys::default();
        assert_eq!(keys.angle(), None);
        keys.set(ActionKey::Up, true);
        keys.set(ActionKey::Left, true);
        assert_eq!(keys.angle(), Some(135.0));
        keys.set(ActionKey::Right, true);
        assert_eq!(keys.angle(), Some(90.0));
        keys.set(ActionKey::Up, false);
        assert_eq!(keys.angle(), None);
    }

    #[test]
    fn test_direction_keys_combine() {
        let router = movement_router::<Pad>();
        let mut pad = Pad::default();
        assert!(press(&router, &mut pad, ActionKey::Down));
        assert!(press(&router, &mut pad, ActionKey::Right));
        assert!(pad.movement.moving);
        assert_eq!(pad.movement.direction, -45.0);

        release(&router, &mut pad, ActionKey::Down);
        assert_eq!(pad.movement.direction, 0.0);
        release(&router, &mut pad, ActionKey::Right);
        assert!(!pad.movement.moving);
        assert_eq!(pad.movement.direction, 0.0);
    }

    #[test]
    fn test_cancelled_keys_do_not_count_as_a_tap() {
        let router = movement_router::<Pad>();
        let mut pad = Pad::default();
        press(&router, &mut pad, ActionKey::Right);
        pad.now = 20;
        press(&router, &mut pad, ActionKey::Left);
        assert!(!pad.movement.moving);
        pad.now = 60;
        release(&router, &mut pad, ActionKey::Left);
        assert!(pad.movement.moving);
        assert!(!pad.movement.running);
        assert_eq!(pad.movement.facing, Facing::Right);
    }

    #[test]
    fn test_release_all_clears_latched_input() {
        let router = movement_router::<Pad>();
        let mut pad = Pad::default();
        press(&router, &mut pad, ActionKey::Right);
        press(&router, &mut pad, ActionKey::Crouch);
        press(&router, &mut pad, ActionKey::Punch);
        release_all(&mut pad);
        assert_eq!(pad.keys, HeldKeys::default());
        assert!(!pad.movement.moving);
        assert!(!pad.movement.crouching);
        assert_eq!(pad.movement.punching, None);

        // A release filtered out while paused no longer matters.
        let help = State(HELP);
        assert!(!router.trigger_event(&mut pad, Edge::Release, ActionKey::Right, Some(&help), &[]));
        assert!(!pad.movement.moving);
    }

    #[test]
    fn test_tap_to_run_through_router() {
        let router = movement_router::<Pad>();
        let mut pad = Pad::default();
        press(&router, &mut pad, ActionKey::Left);
        pad.now = 40;
        release(&router, &mut pad, ActionKey::Left);
        pad.now = 90;
        press(&router, &mut pad, ActionKey::Left);
        assert!(pad.movement.running);
        assert_eq!(pad.movement.facing, Facing::Left);
    }

    #[test]
    fn test_bindings_require_playing() {
        let router = movement_router::<Pad>();
        let mut pad = Pad::default();
        let menu = State("menu");
        assert!(!router.trigger_event(&mut pad, Edge::Press, ActionKey::Right, Some(&menu), &[]));
        assert!(!pad.movement.moving);
        assert!(!pad.keys.right);
    }

    #[test]
    fn test_held_jump_fires_once() {
        let router = movement_router::<Pad>();
        let mut pad = Pad::default();
        press(&router, &mut pad, ActionKey::Jump);
        assert_eq!(pad.movement.guided, Guided::Jump);
        pad.movement.land();

        // Auto-repeat while held must not start a second jump.
        press(&router, &mut pad, ActionKey::Jump);
        assert_eq!(pad.movement.jumping, 0);

        release(&router, &mut pad, ActionKey::Jump);
        press(&router, &mut pad, ActionKey::Jump);
        assert_eq!(pad.movement.jumping, pad.movement.jump_speed);
    }

    #[test]
    fn test_stick_angle_and_release() {
        let router = movement_router::<Pad>();
        let mut pad = Pad::default();
        let handled = router.trigger_event(
            &mut pad,
            Edge::Press,
            ActionKey::Directional,
            Some(&PLAY),
            &[200.0],
        );
        assert!(handled);
        assert_eq!(pad.movement.direction, 200.0);
        assert_eq!(pad.movement.facing, Facing::Left);
        release(&router, &mut pad, ActionKey::Directional);
        assert!(!pad.movement.moving);
    }

    #[test]
    fn test_attacks_and_crouch() {
        let router = movement_router::<Pad>();
        let mut pad = Pad::default();
        pad.now = 7;
        press(&router, &mut pad, ActionKey::Punch);
        press(&router, &mut pad, ActionKey::Kick);
        assert_eq!(pad.movement.punching, Some(7));
        assert_eq!(pad.movement.kicking, None);
        release(&router, &mut pad, ActionKey::Punch);
        assert_eq!(pad.movement.punching, None);

        press(&router, &mut pad, ActionKey::Crouch);
        assert!(pad.movement.crouching);
        assert!(pad.keys.crouch);
    }

    #[test]
    fn test_debug_works_in_any_state_and_menu_is_gated() {
        let router = movement_router::<Pad>();
        let mut pad = Pad::default();
        let menu = State("menu");
        assert!(router.trigger_event(&mut pad, Edge::Press, ActionKey::Debug, Some(&menu), &[]));
        assert!(pad.debug);
        assert!(!router.trigger_event(&mut pad, Edge::Press, ActionKey::Menu, Some(&menu), &[]));
        assert!(press(&router, &mut pad, ActionKey::Menu));
        let help = State(HELP);
        assert!(router.trigger_event(&mut pad, Edge::Press, ActionKey::Menu, Some(&help), &[]));
        assert_eq!(pad.menus, 2);
    }
}
