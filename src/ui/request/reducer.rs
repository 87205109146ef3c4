use crate::ui::mvi::Reducer;

use super::intent::RequestIntent;
use super::state::RequestState;

pub struct RequestReducer;

impl Reducer for RequestReducer {
    type State = RequestState;
    type Intent = RequestIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            RequestIntent::Dispatch => RequestState::Loading { animation_tick: 0 },

            RequestIntent::AnimationTick => match state {
                RequestState::Loading { animation_tick } => RequestState::Loading {
                    animation_tick: animation_tick.wrapping_add(1),
                },
                other => other,
            },

            // Completions apply in arrival order, whatever the current state.
            RequestIntent::Resolve { summary } => RequestState::Success { summary },

            RequestIntent::Reject { message } => RequestState::Failed { message },
        }
    }
}
