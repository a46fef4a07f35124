//! Registry of independent game sessions.
//!
//! Each session owns its own [`Engine`] behind its own lock, so a cell
//! click on one session runs to completion before the next call on that
//! session begins, while other sessions proceed independently.

use crate::display::GameDisplay;
use crate::games::tictactoe::Engine;
use derive_more::{Display, Error};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info, instrument, warn};

/// Unique identifier for a game session.
pub type SessionId = String;

/// Session registry error.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum SessionError {
    /// A session with this id is already registered.
    #[display("Session already exists: {}", id)]
    AlreadyExists {
        /// Offending session id.
        id: SessionId,
    },
    /// No session with this id.
    #[display("Session not found: {}", id)]
    NotFound {
        /// Requested session id.
        id: SessionId,
    },
    /// A thread panicked while holding a lock.
    #[display("Session lock poisoned: {}", id)]
    Poisoned {
        /// Session whose lock was poisoned.
        id: SessionId,
    },
}

type SharedEngine<D> = Arc<Mutex<Engine<D>>>;

/// Manages all game sessions.
#[derive(Debug)]
pub struct SessionManager<D: GameDisplay> {
    sessions: Arc<Mutex<HashMap<SessionId, SharedEngine<D>>>>,
}

impl<D: GameDisplay> Clone for SessionManager<D> {
    fn clone(&self) -> Self {
        Self {
            sessions: Arc::clone(&self.sessions),
        }
    }
}

impl<D: GameDisplay> SessionManager<D> {
    /// Creates a new session manager.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating session manager");
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    fn registry(
        &self,
    ) -> Result<MutexGuard<'_, HashMap<SessionId, SharedEngine<D>>>, SessionError> {
        self.sessions
            .lock()
            .map_err(|_| SessionError::Poisoned {
                id: "<registry>".to_string(),
            })
    }

    /// Creates a new session in the setup phase.
    #[instrument(skip(self, display))]
    pub fn create_session(&self, id: SessionId, display: D) -> Result<SessionId, SessionError> {
        let mut sessions = self.registry()?;

        if sessions.contains_key(&id) {
            warn!(session_id = %id, "Session already exists");
            return Err(SessionError::AlreadyExists { id });
        }

        sessions.insert(id.clone(), Arc::new(Mutex::new(Engine::new(display))));
        info!(session_id = %id, "Created new session");
        Ok(id)
    }

    /// Runs `f` against a session's engine while holding that session's lock.
    #[instrument(skip(self, f))]
    pub fn with_session<T>(
        &self,
        id: &str,
        f: impl FnOnce(&mut Engine<D>) -> T,
    ) -> Result<T, SessionError> {
        // Release the registry lock before taking the session lock.
        let engine = {
            let sessions = self.registry()?;
            let found = sessions.get(id).cloned();
            found.ok_or_else(|| {
                debug!(session_id = id, "Session not found");
                SessionError::NotFound { id: id.to_string() }
            })?
        };

        let mut engine = engine.lock().map_err(|_| {
            warn!(session_id = id, "Session lock poisoned");
            SessionError::Poisoned { id: id.to_string() }
        })?;
        Ok(f(&mut *engine))
    }

    /// Removes a session.
    #[instrument(skip(self))]
    pub fn remove_session(&self, id: &str) -> Result<(), SessionError> {
        let mut sessions = self.registry()?;
        match sessions.remove(id) {
            Some(_) => {
                info!(session_id = id, "Removed session");
                Ok(())
            }
            None => Err(SessionError::NotFound { id: id.to_string() }),
        }
    }

    /// Lists all active session IDs.
    #[instrument(skip(self))]
    pub fn list_sessions(&self) -> Result<Vec<SessionId>, SessionError> {
        let sessions = self.registry()?;
        let mut ids: Vec<_> = sessions.keys().cloned().collect();
        ids.sort();
        debug!(count = ids.len(), "Listed sessions");
        Ok(ids)
    }
}

impl<D: GameDisplay> Default for SessionManager<D> {
    fn default() -> Self {
        Self::new()
    }
}
