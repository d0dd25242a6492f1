use rubber_core::{Cue, Feedback, InputSymbol, Message};

use crate::{
    action::{Action, ActionRequestQueue, ModalRequest, SettingsAction, UiAction},
    audio::CuePlayer,
    state::{AppState, Settings, UiState},
};

pub(crate) fn handle_all(
    app_state: &mut AppState,
    ui_state: &mut UiState,
    action_queue: &mut ActionRequestQueue,
) {
    for action in action_queue.take_all() {
        handle(app_state, ui_state, action);
    }
}

pub(crate) fn handle(app_state: &mut AppState, ui_state: &mut UiState, action: Action) {
    match action {
        // A key queued in the same frame as the one that opened a modal.
        Action::Input(symbol) if ui_state.active_modal.is_some() => {
            log::debug!("modal is open, ignoring input: {symbol}");
        }
        Action::Input(symbol) => handle_input(app_state, ui_state, symbol),
        Action::Ui(UiAction::OpenModal(modal_request)) => {
            log::debug!("open modal: {modal_request:?}");
            ui_state.active_modal = Some(modal_request);
        }
        Action::Ui(UiAction::CloseModal) => {
            log::debug!("close modal");
            ui_state.active_modal = None;
        }
        Action::Settings(SettingsAction::UpdateSettings(settings)) => {
            app_state.settings = settings;
        }
    }
}

fn handle_input(app_state: &mut AppState, ui_state: &mut UiState, symbol: InputSymbol) {
    let AppState {
        code_entry,
        settings,
    } = app_state;
    let UiState {
        active_modal,
        cue_player,
    } = ui_state;

    let sink = FeedbackSink {
        settings,
        cue_player: &mut **cue_player,
        active_modal,
    };
    code_entry.handle_input(symbol, sink);
}

// Routes state machine side effects to the audio output and the modal slot.
struct FeedbackSink<'a> {
    settings: &'a Settings,
    cue_player: &'a mut dyn CuePlayer,
    active_modal: &'a mut Option<ModalRequest>,
}

impl Feedback for FeedbackSink<'_> {
    fn play_cue(&mut self, cue: Cue) {
        if !self.settings.sound.enabled {
            return;
        }
        if let Err(err) = self.cue_player.play(cue) {
            log::warn!("failed to play cue `{cue}`: {err}");
        }
    }

    fn present_message(&mut self, message: Message) {
        log::debug!("present message: {}", message.title);
        *self.active_modal = Some(ModalRequest::Message(message));
    }
}
