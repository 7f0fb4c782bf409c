use super::{
    action::{Action, UpdateResult},
    command::Command,
    features,
    state::AppState,
};

type FeatureUpdate = fn(&mut AppState, &Action) -> UpdateResult;

const FEATURES: [FeatureUpdate; 5] = [
    features::navigation::update,
    features::session::update,
    features::suggestions::update,
    features::visibility::update,
    features::dictation::update,
];

pub fn update(state: &mut AppState, action: Action) -> Option<Command> {
    for feature in FEATURES {
        if let UpdateResult::Handled(command) = feature(state, &action) {
            return command;
        }
    }
    tracing::trace!(?action, "unhandled action");
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_action_lands_somewhere() {
        let mut state = AppState::default();
        for action in [
            Action::Tick,
            Action::Resize(80, 24),
            Action::ScrollToBottom,
            Action::DismissSuggestions,
            Action::StopDictation,
        ] {
            assert_eq!(update(&mut state, action), None);
        }
    }

    #[test]
    fn test_quit_sets_flag() {
        let mut state = AppState::default();
        update(&mut state, Action::Quit);
        assert!(state.should_quit);
    }
}
