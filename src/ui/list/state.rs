use crate::mvi::State;

/// Selection within the habit list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListState {
    pub selected: usize,
    pub len: usize,
}

impl State for ListState {}

impl ListState {
    pub fn new(len: usize) -> Self {
        Self { selected: 0, len }
    }

    /// Selected row, or `None` for an empty list.
    pub fn selection(&self) -> Option<usize> {
        (self.len > 0).then_some(self.selected)
    }
}
