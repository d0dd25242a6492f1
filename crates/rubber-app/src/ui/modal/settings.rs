use eframe::egui::{Context, Id, Slider, Ui};

use super::dialogs::{DialogResult, show_dialog};
use crate::{
    action::{ActionRequestQueue, SettingsAction, UiAction},
    state::{KeypadSettings, Settings},
    ui::icon,
};

#[derive(Debug, Clone)]
pub(crate) struct SettingsViewModel {
    settings: Settings,
}

impl SettingsViewModel {
    #[must_use]
    pub(crate) fn new(settings: Settings) -> Self {
        Self { settings }
    }
}

pub(crate) fn show(ctx: &Context, vm: &SettingsViewModel, action_queue: &mut ActionRequestQueue) {
    let mut settings = vm.settings.clone();

    let DialogResult { should_close } = show_dialog(
        ctx,
        Id::new("settings_dialog"),
        format!("{} Settings", icon::GEAR),
        |ui: &mut Ui| {
            ui.checkbox(
                &mut settings.sound.enabled,
                format!("{} Play sound cues", icon::SPEAKER),
            );
            let mut side = settings.keypad.min_target_side();
            let slider = Slider::new(&mut side, KeypadSettings::MIN_TARGET_SIDE_RANGE)
                .step_by(5.0)
                .text("Minimum touch target");
            if ui.add(slider).changed() {
                settings.keypad.set_min_target_side(side);
            }
        },
        |ui: &mut Ui| {
            if ui.button(format!("{} Done", icon::CHECK)).clicked() {
                ui.close();
            }
        },
    );

    if settings != vm.settings {
        action_queue.request(SettingsAction::UpdateSettings(settings).into());
    }
    if should_close {
        action_queue.request(UiAction::CloseModal.into());
    }
}
