use crate::{
    state::{AppState, UiState},
    ui::{game_screen::GameScreenViewModel, keypad::KeypadViewModel, modal::SettingsViewModel},
};

#[must_use]
pub(crate) fn build_game_screen_view_model(
    app_state: &AppState,
    ui_state: &UiState,
) -> GameScreenViewModel {
    let enabled = ui_state.active_modal.is_none();
    let hit_area = app_state.settings.keypad.hit_area();
    GameScreenViewModel::new(KeypadViewModel::new(enabled, hit_area))
}

#[must_use]
pub(crate) fn build_settings_view_model(app_state: &AppState) -> SettingsViewModel {
    SettingsViewModel::new(app_state.settings.clone())
}

#[cfg(test)]
mod tests {
    use rubber_core::Cue;

    use super::build_game_screen_view_model;
    use crate::{
        action::ModalRequest,
        audio::{AudioError, CuePlayer},
        state::{AppState, UiState},
    };

    #[derive(Debug)]
    struct SilentCuePlayer;

    impl CuePlayer for SilentCuePlayer {
        fn play(&mut self, _cue: Cue) -> Result<(), AudioError> {
            Ok(())
        }
    }

    #[test]
    fn keypad_is_disabled_while_modal_is_open() {
        let app_state = AppState::default();
        let mut ui_state = UiState::new(Box::new(SilentCuePlayer));

        let vm = build_game_screen_view_model(&app_state, &ui_state);
        assert!(vm.keypad_vm.control_state().accepts_hits());

        ui_state.active_modal = Some(ModalRequest::Settings);
        let vm = build_game_screen_view_model(&app_state, &ui_state);
        assert!(!vm.keypad_vm.control_state().accepts_hits());
    }
}
