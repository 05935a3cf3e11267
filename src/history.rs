/// Bounded undo/redo log of full state snapshots.
///
/// Every entry is an independent clone of the state it was taken from, so
/// nothing stored here aliases the caller's live value.
#[derive(Clone, Debug)]
pub struct History<T: Clone> {
    past: Vec<T>,
    future: Vec<T>,
    max_size: usize,
}

impl<T: Clone> History<T> {
    pub fn new(max_size: usize) -> Self {
        Self {
            past: Vec::new(),
            future: Vec::new(),
            max_size,
        }
    }

    /// Record a snapshot of `state` as the most recent entry. Clears the redo stack.
    pub fn push(&mut self, state: &T) {
        self.future.clear();
        self.past.push(state.clone());

        // Trim oldest entries if we exceed max size
        if self.past.len() > self.max_size {
            let overflow = self.past.len() - self.max_size;
            self.past.drain(..overflow);
        }
    }

    /// Undo: move the most recent snapshot onto the redo stack and return it.
    pub fn undo(&mut self) -> Option<T> {
        let snapshot = self.past.pop()?;
        self.future.push(snapshot.clone());
        Some(snapshot)
    }

    /// Redo: move the most recent undone snapshot back onto the undo stack and return it.
    pub fn redo(&mut self) -> Option<T> {
        let snapshot = self.future.pop()?;
        self.past.push(snapshot.clone());
        Some(snapshot)
    }

    /// Most recent snapshot on the undo stack, without moving it.
    pub fn last(&self) -> Option<&T> {
        self.past.last()
    }

    /// Undo stack, oldest first.
    pub fn undo_entries(&self) -> &[T] {
        &self.past
    }

    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.past.len()
    }

    pub fn redo_len(&self) -> usize {
        self.future.len()
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }
}
