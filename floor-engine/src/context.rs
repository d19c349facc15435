//! Command context - the working copy actions run against
//!
//! Holds a private copy of the floor state plus the events recorded so far.
//! Recording an event applies it to the working copy immediately, so within
//! a batch every later selection observes earlier assignments. The manager
//! commits the working copy back to the store only if at least one event
//! was recorded.

use shared::floor::{FloorEvent, FloorEventPayload, FloorEventType, FloorState};

use crate::appliers::{EventAction, EventApplier};

pub struct CommandContext {
    state: FloorState,
    events: Vec<FloorEvent>,
    now: i64,
}

impl CommandContext {
    pub fn new(state: FloorState, now: i64) -> Self {
        Self {
            state,
            events: Vec::new(),
            now,
        }
    }

    /// Timestamp the current action runs at (Unix milliseconds).
    pub fn now(&self) -> i64 {
        self.now
    }

    /// The working state, including the effects of all recorded events.
    pub fn state(&self) -> &FloorState {
        &self.state
    }

    pub fn events(&self) -> &[FloorEvent] {
        &self.events
    }

    /// Record an event: allocate the next sequence number, apply the event
    /// to the working state, and retain it for the commit log.
    pub fn record(&mut self, event_type: FloorEventType, payload: FloorEventPayload) -> u64 {
        let sequence = self.state.last_sequence + 1;
        let event = FloorEvent::new(sequence, self.now, event_type, payload);

        let applier: EventAction = (&event).into();
        applier.apply(&mut self.state, &event);
        self.state.last_sequence = sequence;

        self.events.push(event);
        sequence
    }

    pub fn into_parts(self) -> (FloorState, Vec<FloorEvent>) {
        (self.state, self.events)
    }
}
