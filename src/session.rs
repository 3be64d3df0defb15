//! Request state for callers that submit records to the scoring service.
//!
//! At most one submission is in flight per `Session`; a second `begin` while
//! one is running is rejected, never queued.

use std::sync::Mutex;

use crate::transport::TransportError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Idle,
    InFlight,
}

#[derive(Debug)]
pub struct Session {
    state: Mutex<State>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Session {
            state: Mutex::new(State::Idle),
        }
    }

    pub fn state(&self) -> State {
        *self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Idle → InFlight. The returned guard moves the session back to Idle when dropped.
    pub fn begin(&self) -> Result<InFlight<'_>, TransportError> {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        match *state {
            State::InFlight => Err(TransportError::Busy),
            State::Idle => {
                *state = State::InFlight;
                Ok(InFlight { session: self })
            }
        }
    }
}

#[must_use = "the session returns to idle as soon as the guard is dropped"]
pub struct InFlight<'a> {
    session: &'a Session,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        *self.session.state.lock().unwrap_or_else(|e| e.into_inner()) = State::Idle;
    }
}
