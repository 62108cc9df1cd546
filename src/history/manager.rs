use std::collections::VecDeque;
use crate::core::snapshot::Snapshot;
use crate::core::store::BitmapStore;

pub const DEFAULT_HISTORY_CAPACITY: usize = 20;

/// Bounded undo/redo over full bitmap snapshots.
///
/// `past` starts with the blank state and never drops below one entry;
/// every other entry is a checkpoint taken right before an action.
pub struct HistoryManager {
    past: VecDeque<Snapshot>,
    future: Vec<Snapshot>,
    capacity: usize,
}

impl HistoryManager {
    pub fn new(initial: Snapshot, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let mut past = VecDeque::with_capacity(capacity + 1);
        past.push_back(initial);
        Self { past, future: Vec::new(), capacity }
    }

    pub fn capacity(&self) -> usize { self.capacity }
    pub fn past_len(&self) -> usize { self.past.len() }
    pub fn future_len(&self) -> usize { self.future.len() }
    pub fn can_undo(&self) -> bool { self.past.len() > 1 }
    pub fn can_redo(&self) -> bool { !self.future.is_empty() }

    fn push_past(&mut self, snapshot: Snapshot) {
        self.past.push_back(snapshot);
        while self.past.len() > self.capacity {
            self.past.pop_front();
        }
    }

    /// Call once per discrete action, before it mutates the store.
    pub fn record_checkpoint(&mut self, store: &BitmapStore) {
        self.push_past(store.read());
        self.future.clear();
        log::debug!("checkpoint recorded ({} in history)", self.past.len());
    }

    pub fn undo(&mut self, store: &mut BitmapStore) -> bool {
        if !self.can_undo() { return false; }
        let Some(previous) = self.past.pop_back() else { return false };
        self.future.push(store.read());
        store.write(&previous);
        log::debug!("undo ({} past, {} future)", self.past.len(), self.future.len());
        true
    }

    pub fn redo(&mut self, store: &mut BitmapStore) -> bool {
        let Some(next) = self.future.pop() else { return false };
        self.push_past(store.read());
        store.write(&next);
        log::debug!("redo ({} past, {} future)", self.past.len(), self.future.len());
        true
    }
}
