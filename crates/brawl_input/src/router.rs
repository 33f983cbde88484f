//! State-gated action dispatch.
//!
//! A [`Router`] maps each [`ActionKey`] to an ordered list of subscribers.
//! Each subscriber may require the game to be in a particular state; when
//! the caller supplies a [`StateContext`], subscribers whose requirement
//! does not match are skipped.

use std::collections::HashMap;

use tracing::trace;

use crate::action::{ActionKey, Edge};

/// Anything that can report the current game state by name.
pub trait StateContext {
    fn state(&self) -> &str;
}

/// The game states a subscriber is willing to run in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StateRequirement {
    #[default]
    Any,
    Exactly(String),
    OneOf(Vec<String>),
}

impl StateRequirement {
    /// Require a single state.
    #[must_use]
    pub fn exactly(state: impl Into<String>) -> Self {
        Self::Exactly(state.into())
    }

    /// Require any of the given states.
    #[must_use]
    pub fn one_of<I, S>(states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::OneOf(states.into_iter().map(Into::into).collect())
    }

    #[must_use]
    pub fn matches(&self, state: &str) -> bool {
        match self {
            StateRequirement::Any => true,
            StateRequirement::Exactly(required) => required == state,
            StateRequirement::OneOf(allowed) => allowed.iter().any(|s| s == state),
        }
    }
}

/// Callback run for a routed action: `(target, edge, args)`.
pub type Handler<T> = Box<dyn Fn(&mut T, Edge, &[f32])>;

struct Subscriber<T> {
    requirement: StateRequirement,
    handler: Handler<T>,
}

/// Dispatches actions to subscribers operating on a target of type `T`.
pub struct Router<T> {
    subscribers: HashMap<ActionKey, Vec<Subscriber<T>>>,
}

impl<T> Router<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            subscribers: HashMap::new(),
        }
    }

    /// Add a subscriber for `key`. Subscribers run in subscription order.
    pub fn subscribe<F>(&mut self, key: ActionKey, requirement: StateRequirement, handler: F)
    where
        F: Fn(&mut T, Edge, &[f32]) + 'static,
    {
        self.subscribers.entry(key).or_default().push(Subscriber {
            requirement,
            handler: Box::new(handler),
        });
    }

    /// Number of subscribers registered for `key`.
    #[must_use]
    pub fn subscriber_count(&self, key: ActionKey) -> usize {
        self.subscribers.get(&key).map_or(0, Vec::len)
    }

    /// Route one action.
    ///
    /// When `context` is `Some`, subscribers whose requirement does not
    /// match its state are skipped. Returns `true` if at least one handler
    /// ran, which hosts use to decide whether to swallow the raw event.
    pub fn trigger_event(
        &self,
        target: &mut T,
        edge: Edge,
        key: ActionKey,
        context: Option<&dyn StateContext>,
        args: &[f32],
    ) -> bool {
        let Some(subscribers) = self.subscribers.get(&key) else {
            trace!(%key, "no subscribers");
            return false;
        };

        let mut handled = false;
        for subscriber in subscribers {
            if let Some(context) = context {
                if !subscriber.requirement.matches(context.state()) {
                    continue;
                }
            }
            (subscriber.handler)(target, edge, args);
            handled = true;
        }
        trace!(%key, ?edge, handled, "action routed");
        handled
    }
}

impl<T> Default for Router<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for Router<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let counts: HashMap<ActionKey, usize> = self
            .subscribers
            .iter()
            .map(|(key, subs)| (*key, subs.len()))
            .collect();
        f.debug_struct("Router").field("subscribers", &counts).finish()
    }
}
