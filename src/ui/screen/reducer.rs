use crate::ui::mvi::Reducer;
use crate::ui::screen::intent::ScreenIntent;
use crate::ui::screen::state::ScreenState;

pub struct ScreenReducer;

impl Reducer for ScreenReducer {
    type State = ScreenState;
    type Intent = ScreenIntent;

    // Both transitions land in the same target regardless of the current
    // screen, so the prior state is dropped.
    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ScreenIntent::SelectProduct { product } => ScreenState::Detail { product },
            ScreenIntent::GoBack => ScreenState::Cart,
        }
    }
}
