use crate::{action::ModalRequest, audio::CuePlayer};

// UiState holds ephemeral UI-only state (modal, audio output). It is not persisted.
#[derive(Debug)]
pub(crate) struct UiState {
    pub(crate) active_modal: Option<ModalRequest>,
    pub(crate) cue_player: Box<dyn CuePlayer>,
}

impl UiState {
    #[must_use]
    pub(crate) fn new(cue_player: Box<dyn CuePlayer>) -> Self {
        Self {
            active_modal: None,
            cue_player,
        }
    }
}
