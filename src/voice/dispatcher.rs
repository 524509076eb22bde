//! CommandDispatcher - applies matched commands to the bound actor.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use tracing::{info, warn};

use crate::{Command, MatchResult};

use super::history::CommandHistory;
use super::ports::{Actor, StatusSink};

/// Translates match results into actor calls.
///
/// The actor is held weakly: the game owns it and may drop it at any time,
/// after which dispatch degrades to acknowledgment only.
pub struct CommandDispatcher {
    actor: Option<Weak<RefCell<dyn Actor>>>,
    history: CommandHistory,
    ephemeral_display: Duration,
}

impl CommandDispatcher {
    pub fn new(ephemeral_display: Duration) -> Self {
        Self {
            actor: None,
            history: CommandHistory::default(),
            ephemeral_display,
        }
    }

    /// Bind (or replace) the actor commands are applied to
    pub fn bind_actor<A: Actor + 'static>(&mut self, actor: &Rc<RefCell<A>>) {
        let actor: Rc<RefCell<dyn Actor>> = actor.clone();
        self.actor = Some(Rc::downgrade(&actor));
    }

    pub fn unbind_actor(&mut self) {
        self.actor = None;
    }

    /// Whether a live actor is currently bound
    pub fn has_actor(&self) -> bool {
        self.actor
            .as_ref()
            .is_some_and(|actor| actor.strong_count() > 0)
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    /// Apply `result` to the actor `repeat_count` times, in order.
    ///
    /// The acknowledgment message and history entry are produced whether or
    /// not an actor is bound.
    pub fn dispatch(&mut self, result: &MatchResult, sink: &mut dyn StatusSink) {
        match self.actor.as_ref().and_then(Weak::upgrade) {
            Some(actor) => {
                info!(
                    "Executing command: {} ({} times)",
                    result.command, result.repeat_count
                );
                let mut actor = actor.borrow_mut();
                for _ in 0..result.repeat_count {
                    apply(&mut *actor, result.command);
                }
            }
            None => {
                warn!(
                    "No actor bound, skipping command: {} ({} times)",
                    result.command, result.repeat_count
                );
            }
        }

        sink.on_ephemeral_message(&result.label(), self.ephemeral_display);
        self.history.push(result);
    }
}

fn apply(actor: &mut dyn Actor, command: Command) {
    match command {
        Command::Left => actor.steer_left(),
        Command::Right => actor.steer_right(),
        Command::Accelerate => actor.accelerate(),
        Command::Brake => actor.brake(),
        Command::Turnback => actor.turn_back(),
    }
}
