//! Keyed, ordered store of the grid's actions.

use std::sync::{Arc, RwLock};

use log::debug;

use crate::error::ActionGridError;

use super::action::{Action, RefreshHook};

/// The set of actions rendered in the action column, in registration order.
pub(crate) struct ActionRegistry<T> {
    actions: Arc<RwLock<Vec<Action<T>>>>,
    refresh: RefreshHook,
}

impl<T> ActionRegistry<T> {
    pub(crate) fn new(actions: Arc<RwLock<Vec<Action<T>>>>, refresh: RefreshHook) -> Self {
        Self { actions, refresh }
    }

    /// Register a new action under `key` and return its handle.
    pub(crate) fn add_action(&self, key: &str) -> Result<Action<T>, ActionGridError> {
        if key.is_empty() {
            return Err(ActionGridError::EmptyKey);
        }
        let action = Action::new(key, Arc::clone(&self.refresh));
        if let Ok(mut guard) = self.actions.write() {
            if guard.iter().any(|a| a.key() == key) {
                return Err(ActionGridError::DuplicateAction(key.to_string()));
            }
            debug!("adding action \"{key}\"");
            guard.push(action.clone());
        }
        (self.refresh)();
        Ok(action)
    }

    /// Snapshot of all actions, in registration order.
    pub(crate) fn actions(&self) -> Vec<Action<T>> {
        self.actions.read().map(|g| g.clone()).unwrap_or_default()
    }

    /// Find an action by key.
    pub(crate) fn action_by_key(&self, key: &str) -> Option<Action<T>> {
        self.actions
            .read()
            .ok()
            .and_then(|g| g.iter().find(|a| a.key() == key).cloned())
    }

    /// Remove an action by handle.
    pub(crate) fn remove_action(&self, action: &Action<T>) -> Result<(), ActionGridError> {
        let removed = self
            .actions
            .write()
            .map(|mut guard| {
                let Some(index) = guard.iter().position(|a| a == action) else {
                    return false;
                };
                debug!("removing action \"{}\"", action.key());
                guard.remove(index);
                true
            })
            .unwrap_or(false);
        if !removed {
            return Err(ActionGridError::ActionNotFound(action.key().to_string()));
        }
        (self.refresh)();
        Ok(())
    }

    /// Remove an action by key.
    pub(crate) fn remove_action_by_key(&self, key: &str) -> Result<(), ActionGridError> {
        let action = self
            .action_by_key(key)
            .ok_or_else(|| ActionGridError::ActionNotFound(key.to_string()))?;
        self.remove_action(&action)
    }

    /// Remove all actions.
    pub(crate) fn remove_all_actions(&self) {
        if let Ok(mut guard) = self.actions.write() {
            guard.clear();
        }
        (self.refresh)();
    }

    /// Number of registered actions.
    pub(crate) fn len(&self) -> usize {
        self.actions.read().map(|g| g.len()).unwrap_or(0)
    }
}
