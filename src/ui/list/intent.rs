use crate::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListIntent {
    MoveUp,
    MoveDown,
    /// The habit collection changed size; keep the selection in range.
    Resize { len: usize },
}

impl Intent for ListIntent {}
