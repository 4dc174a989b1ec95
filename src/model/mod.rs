//! The observer layer around the engine.
//!
//! The engine core is pure: `advance` returns a new state and reports the
//! winner, nothing more. This thin model wraps a current state and
//! dispatches notifications after each successful move — first a
//! move-made event to every observer, then a game-over event when the new
//! state has a winner. UI and logging layers subscribe here instead of
//! polling.

use std::rc::Rc;

use thiserror::Error;

use crate::core::{GameError, Move, Player};
use crate::state::{GameSetup, GameState};

/// What just happened to the model.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// A move was applied; the current state has changed.
    MoveMade,
    /// The current state has a non-empty winner set.
    GameOver,
}

/// A subscriber to model changes.
pub trait Observer {
    /// Called with the state *after* the change and the kind of change.
    fn on_model_changed(&self, state: &GameState, event: Event);
}

/// Observer registration errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ModelError {
    /// The observer is already registered.
    #[error("observer is already registered")]
    AlreadyRegistered,
    /// The observer was never registered.
    #[error("observer is not registered")]
    NotRegistered,
}

/// A game model: the current state plus its observers.
pub struct Model {
    state: GameState,
    observers: Vec<Rc<dyn Observer>>,
}

impl Model {
    /// Build a model over a freshly constructed game.
    pub fn new(
        setup: GameSetup,
        mr_x: Player,
        detectives: Vec<Player>,
    ) -> Result<Self, GameError> {
        Ok(Self {
            state: GameState::build(setup, mr_x, detectives)?,
            observers: Vec::new(),
        })
    }

    /// The current state of the game.
    #[must_use]
    pub fn current(&self) -> &GameState {
        &self.state
    }

    /// The registered observers, in registration order.
    #[must_use]
    pub fn observers(&self) -> &[Rc<dyn Observer>] {
        &self.observers
    }

    /// Register an observer. Each observer may be registered once.
    pub fn register(&mut self, observer: Rc<dyn Observer>) -> Result<(), ModelError> {
        if self.observers.iter().any(|o| Rc::ptr_eq(o, &observer)) {
            return Err(ModelError::AlreadyRegistered);
        }
        self.observers.push(observer);
        Ok(())
    }

    /// Unregister a previously registered observer.
    pub fn unregister(&mut self, observer: &Rc<dyn Observer>) -> Result<(), ModelError> {
        let position = self
            .observers
            .iter()
            .position(|o| Rc::ptr_eq(o, observer))
            .ok_or(ModelError::NotRegistered)?;
        self.observers.remove(position);
        Ok(())
    }

    /// Apply a chosen move and notify observers.
    ///
    /// On success every observer receives [`Event::MoveMade`], then
    /// [`Event::GameOver`] if the new state has a winner. On failure the
    /// model is unchanged and nobody is notified.
    pub fn choose_move(&mut self, mv: Move) -> Result<(), GameError> {
        self.state = self.state.advance(mv)?;
        for observer in &self.observers {
            observer.on_model_changed(&self.state, Event::MoveMade);
        }
        if !self.state.winner().is_empty() {
            for observer in &self.observers {
                observer.on_model_changed(&self.state, Event::GameOver);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Colour, Piece, Tickets};
    use crate::network::{Network, NodeId, Transport};
    use std::cell::RefCell;
    use std::sync::Arc;

    struct Recorder {
        events: RefCell<Vec<Event>>,
    }

    impl Recorder {
        fn new() -> Rc<Self> {
            Rc::new(Self {
                events: RefCell::new(Vec::new()),
            })
        }
    }

    impl Observer for Recorder {
        fn on_model_changed(&self, _state: &GameState, event: Event) {
            self.events.borrow_mut().push(event);
        }
    }

    fn model() -> Model {
        let mut network = Network::new();
        network.link(NodeId::new(1), NodeId::new(2), &[Transport::Taxi]);
        network.link(NodeId::new(2), NodeId::new(3), &[Transport::Taxi]);
        Model::new(
            GameSetup::new(Arc::new(network), vec![false; 10]),
            Player::new(
                Piece::MrX,
                NodeId::new(1),
                Tickets::new().with(crate::core::Ticket::Taxi, 5),
            ),
            vec![Player::new(
                Piece::Detective(Colour::Red),
                NodeId::new(3),
                Tickets::new().with(crate::core::Ticket::Taxi, 5),
            )],
        )
        .unwrap()
    }

    #[test]
    fn test_register_twice_fails() {
        let mut model = model();
        let recorder = Recorder::new();

        assert!(model.register(recorder.clone()).is_ok());
        assert_eq!(
            model.register(recorder.clone()).err(),
            Some(ModelError::AlreadyRegistered)
        );
        assert_eq!(model.observers().len(), 1);
    }

    #[test]
    fn test_unregister_unknown_fails() {
        let mut model = model();
        let recorder: Rc<dyn Observer> = Recorder::new();

        assert_eq!(model.unregister(&recorder).err(), Some(ModelError::NotRegistered));
    }

    #[test]
    fn test_move_made_notification() {
        let mut model = model();
        let recorder = Recorder::new();
        model.register(recorder.clone()).unwrap();

        let mv = *model.current().available_moves().iter().next().unwrap();
        model.choose_move(mv).unwrap();

        assert_eq!(*recorder.events.borrow(), vec![Event::MoveMade]);
    }

    #[test]
    fn test_failed_move_notifies_nobody() {
        let mut model = model();
        let recorder = Recorder::new();
        model.register(recorder.clone()).unwrap();

        let mv = *model.current().available_moves().iter().next().unwrap();
        model.choose_move(mv).unwrap();
        // Replaying the same fugitive move is now illegal.
        assert!(model.choose_move(mv).is_err());

        assert_eq!(*recorder.events.borrow(), vec![Event::MoveMade]);
    }

    #[test]
    fn test_unregistered_observer_stops_receiving() {
        let mut model = model();
        let recorder = Recorder::new();
        let handle: Rc<dyn Observer> = recorder.clone();
        model.register(recorder.clone()).unwrap();
        model.unregister(&handle).unwrap();

        let mv = *model.current().available_moves().iter().next().unwrap();
        model.choose_move(mv).unwrap();

        assert!(recorder.events.borrow().is_empty());
    }
}
