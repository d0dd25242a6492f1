use std::mem;

use rubber_core::{InputSymbol, Message};

use crate::state::Settings;

pub(crate) mod handler;

#[derive(Debug, derive_more::From)]
pub(crate) enum Action {
    Input(InputSymbol),
    Ui(UiAction),
    Settings(SettingsAction),
}

#[derive(Debug)]
pub(crate) enum UiAction {
    OpenModal(ModalRequest),
    CloseModal,
}

#[derive(Debug)]
pub(crate) enum SettingsAction {
    UpdateSettings(Settings),
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub(crate) enum ModalRequest {
    Message(Message),
    Settings,
}

#[derive(Debug, Default)]
pub(crate) struct ActionRequestQueue {
    actions: Vec<Action>,
}

impl ActionRequestQueue {
    pub(crate) fn request(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub(crate) fn take_all(&mut self) -> Vec<Action> {
        mem::take(&mut self.actions)
    }
}

#[cfg(test)]
mod tests {
    use rubber_core::InputSymbol;

    use super::{Action, ActionRequestQueue, UiAction};

    #[test]
    fn take_all_returns_actions_and_clears_queue() {
        let mut queue = ActionRequestQueue::default();
        queue.request(InputSymbol::digit("1").into());
        queue.request(UiAction::CloseModal.into());

        let drained = queue.take_all();
        assert_eq!(drained.len(), 2);
        assert!(matches!(&drained[0], Action::Input(InputSymbol::Digit(d)) if d == "1"));
        assert!(matches!(drained[1], Action::Ui(UiAction::CloseModal)));

        let drained_again = queue.take_all();
        assert!(drained_again.is_empty());
    }
}
