use crate::{AppState, Effect, Msg, Phase};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::IdeaChanged(text) => {
            // Free-form prose, stored verbatim.
            state.set_idea(text);
            Vec::new()
        }
        Msg::SubmitClicked => {
            // The reentrancy guard lives here, not in the control surface:
            // a submit while an attempt is in flight is a no-op even if the
            // shell fails to disable its input.
            if state.phase() == Phase::InFlight {
                return (state, Vec::new());
            }
            let attempt = state.begin_attempt();
            vec![Effect::StartProvision { attempt }]
        }
        Msg::ProvisionProgress { attempt, stage } => {
            state.apply_progress(attempt, stage);
            Vec::new()
        }
        Msg::ProvisionDone { attempt, outcome } => {
            state.apply_outcome(attempt, outcome);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
