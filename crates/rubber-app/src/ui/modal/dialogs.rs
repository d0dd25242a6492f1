use eframe::egui::{Context, Id, Modal, Response, RichText, Sides, Ui};
use rubber_core::Message;

use crate::{
    action::{ActionRequestQueue, UiAction},
    ui::icon,
};

pub(super) struct DialogResult {
    pub(super) should_close: bool,
}

pub(super) fn show_dialog<Heading, Body, Buttons>(
    ctx: &Context,
    id: Id,
    heading: Heading,
    body: Body,
    buttons: Buttons,
) -> DialogResult
where
    Heading: Into<RichText>,
    Body: FnOnce(&mut Ui),
    Buttons: FnOnce(&mut Ui),
{
    let modal = Modal::new(id).show(ctx, |ui| {
        ui.heading(heading);
        ui.add_space(4.0);

        body(ui);
        ui.add_space(8.0);

        Sides::new().show(ui, |_ui| {}, buttons);
    });

    DialogResult {
        should_close: modal.should_close(),
    }
}

fn request_focus_if_none(ui: &Ui, response: &Response) {
    if ui.memory(|memory| memory.focused().is_none()) {
        response.request_focus();
    }
}

fn primary_button(ui: &mut Ui, label: String) -> Response {
    let response = ui.button(label);
    request_focus_if_none(ui, &response);
    response
}

pub(crate) fn show_message(ctx: &Context, action_queue: &mut ActionRequestQueue, message: &Message) {
    let DialogResult { should_close } = show_dialog(
        ctx,
        Id::new("message_dialog"),
        message.title.as_str(),
        |ui: &mut Ui| {
            ui.label(message.body.as_str());
        },
        |ui: &mut Ui| {
            let close = primary_button(ui, format!("{} Close", icon::CHECK));
            if close.clicked() {
                ui.close();
            }
        },
    );

    if should_close {
        action_queue.request(UiAction::CloseModal.into());
    }
}
