//! Undo/redo history with uncommitted drafts.
//!
//! DESIGN
//! ======
//! `History<T>` keeps `past`, `present`, `future` and `last_committed`.
//! `present` is what the editor shows; `last_committed` is the most recent
//! checkpoint. They differ while a gesture is writing draft frames through
//! [`History::update_without_history`]. The next [`History::set_state`]
//! pushes `last_committed` (not the draft) onto `past`, so a whole drag
//! collapses into a single undo step.
//!
//! `future` is only ever filled by undo/redo. Any commit clears it.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use std::collections::VecDeque;

use tracing::debug;

/// Past/present/future history over snapshots of `T`.
#[derive(Debug, Clone)]
pub struct History<T> {
    past: Vec<T>,
    present: T,
    future: VecDeque<T>,
    last_committed: T,
}

impl<T: Clone + PartialEq> History<T> {
    /// Start a history whose only checkpoint is `initial`.
    #[must_use]
    pub fn new(initial: T) -> Self {
        Self { past: Vec::new(), present: initial.clone(), future: VecDeque::new(), last_committed: initial }
    }

    /// The current (possibly uncommitted) state.
    #[must_use]
    pub fn present(&self) -> &T {
        &self.present
    }

    /// The most recent committed checkpoint.
    #[must_use]
    pub fn last_committed(&self) -> &T {
        &self.last_committed
    }

    /// Whether `present` holds draft changes not yet committed.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.present != self.last_committed
    }

    /// Commit `next` as a new checkpoint.
    ///
    /// A no-op when `next` equals `present` and nothing is pending, so
    /// re-committing the same state never creates an empty undo entry.
    /// Returns whether a checkpoint was created.
    pub fn set_state(&mut self, next: T) -> bool {
        if next == self.present && !self.is_dirty() {
            return false;
        }
        let previous = std::mem::replace(&mut self.last_committed, next.clone());
        self.past.push(previous);
        self.present = next;
        self.future.clear();
        debug!(past = self.past.len(), "history: commit");
        true
    }

    /// Commit the result of applying `update` to `present`.
    pub fn set_state_with<F>(&mut self, update: F) -> bool
    where
        F: FnOnce(&T) -> T,
    {
        let next = update(&self.present);
        self.set_state(next)
    }

    /// Replace `present` without touching the checkpoints.
    pub fn update_without_history(&mut self, next: T) {
        self.present = next;
    }

    /// Replace `present` with the result of applying `update` to it, without
    /// touching the checkpoints.
    pub fn update_without_history_with<F>(&mut self, update: F)
    where
        F: FnOnce(&T) -> T,
    {
        let next = update(&self.present);
        self.present = next;
    }

    /// Step back one checkpoint. Returns false when there is nothing to undo.
    ///
    /// Any uncommitted draft in `present` is discarded.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.past.pop() else {
            return false;
        };
        let current = std::mem::replace(&mut self.last_committed, previous.clone());
        self.future.push_front(current);
        self.present = previous;
        debug!(past = self.past.len(), future = self.future.len(), "history: undo");
        true
    }

    /// Step forward one checkpoint. Returns false when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.future.pop_front() else {
            return false;
        };
        let current = std::mem::replace(&mut self.last_committed, next.clone());
        self.past.push(current);
        self.present = next;
        debug!(past = self.past.len(), future = self.future.len(), "history: redo");
        true
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Drop every checkpoint, keeping `present` as the only one.
    pub fn clear_history(&mut self) {
        self.past.clear();
        self.future.clear();
        self.last_committed = self.present.clone();
    }

    /// Number of undo steps available.
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.past.len()
    }

    /// Number of redo steps available.
    #[must_use]
    pub fn redo_depth(&self) -> usize {
        self.future.len()
    }
}

impl<T: Clone + PartialEq + Default> Default for History<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
