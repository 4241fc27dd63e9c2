use crate::mvi::Reducer;
use crate::ui::list::intent::ListIntent;
use crate::ui::list::state::ListState;

pub struct ListReducer;

impl Reducer for ListReducer {
    type State = ListState;
    type Intent = ListIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ListIntent::MoveUp if state.len > 0 => ListState {
                selected: if state.selected == 0 {
                    state.len - 1
                } else {
                    state.selected - 1
                },
                ..state
            },
            ListIntent::MoveDown if state.len > 0 => ListState {
                selected: if state.selected + 1 >= state.len {
                    0
                } else {
                    state.selected + 1
                },
                ..state
            },
            ListIntent::MoveUp | ListIntent::MoveDown => state,
            ListIntent::Resize { len } => ListState {
                selected: state.selected.min(len.saturating_sub(1)),
                len,
            },
        }
    }
}
