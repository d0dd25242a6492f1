use eframe::egui::Ui;
use egui_extras::{Size, StripBuilder};

use super::keypad;
use crate::{
    action::ActionRequestQueue,
    ui::{
        keypad::{KEYPAD_UNITS, KeypadViewModel},
        layout::LayoutScale,
    },
};

#[derive(Debug, Clone)]
pub(crate) struct GameScreenViewModel {
    pub(crate) keypad_vm: KeypadViewModel,
}

impl GameScreenViewModel {
    #[must_use]
    pub(crate) fn new(keypad_vm: KeypadViewModel) -> Self {
        Self { keypad_vm }
    }
}

pub(crate) fn show(ui: &mut Ui, vm: &GameScreenViewModel, action_queue: &mut ActionRequestQueue) {
    let cell_size = KEYPAD_UNITS.fit_cell_size(ui.available_size(), LayoutScale::SPACING_FACTOR);
    let scale = LayoutScale::new(cell_size);
    let width = cell_size * KEYPAD_UNITS.width + scale.spacing.x * (KEYPAD_UNITS.width - 1.0);
    let height = cell_size * KEYPAD_UNITS.height + scale.spacing.y * (KEYPAD_UNITS.height - 1.0);

    StripBuilder::new(ui)
        .size(Size::remainder())
        .size(Size::exact(width))
        .size(Size::remainder())
        .horizontal(|mut strip| {
            strip.empty();
            strip.cell(|ui| {
                StripBuilder::new(ui)
                    .size(Size::remainder())
                    .size(Size::exact(height))
                    .size(Size::remainder())
                    .vertical(|mut strip| {
                        strip.empty();
                        strip.cell(|ui| {
                            keypad::show(ui, &vm.keypad_vm, &scale, action_queue);
                        });
                        strip.empty();
                    });
            });
            strip.empty();
        });
}
