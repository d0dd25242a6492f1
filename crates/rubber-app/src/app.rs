//! Rubber application UI.
//!
//! # Design Notes
//! - One screen: a 3x4 keypad centered in the window.
//! - Mouse/touch input on the keypad, plus keyboard shortcuts for every key.
//! - A modal shows the clue for an accepted code; keypad input is blocked
//!   until it is dismissed.

use eframe::{
    App, CreationContext, Frame,
    egui::{CentralPanel, Context},
};
use rubber_core::SolutionTable;

use crate::{
    action::{self, ActionRequestQueue},
    audio::{self, BundledCuePlayer},
    state::{AppState, UiState},
    ui, view_model_builder,
};

#[derive(Debug)]
pub struct RubberApp {
    app_state: AppState,
    ui_state: UiState,
}

impl RubberApp {
    #[must_use]
    pub fn new(_cc: &CreationContext<'_>) -> Self {
        let sound_dir = audio::default_sound_dir();
        log::info!("loading sound cues from {}", sound_dir.display());
        Self {
            app_state: AppState::new(SolutionTable::builtin()),
            ui_state: UiState::new(Box::new(BundledCuePlayer::new(sound_dir))),
        }
    }
}

impl App for RubberApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let mut action_queue = ActionRequestQueue::default();

        if self.ui_state.active_modal.is_none() {
            ctx.input(|i| {
                ui::input::handle_input(i, &mut action_queue);
                action::handler::handle_all(
                    &mut self.app_state,
                    &mut self.ui_state,
                    &mut action_queue,
                );
            });
        }

        let game_screen_vm =
            view_model_builder::build_game_screen_view_model(&self.app_state, &self.ui_state);

        CentralPanel::default().show(ctx, |ui| {
            ui::game_screen::show(ui, &game_screen_vm, &mut action_queue);
        });

        if let Some(modal_request) = &self.ui_state.active_modal {
            let settings_vm = view_model_builder::build_settings_view_model(&self.app_state);
            ui::modal::show(ctx, &mut action_queue, modal_request, &settings_vm);
        }

        action::handler::handle_all(&mut self.app_state, &mut self.ui_state, &mut action_queue);
    }
}
