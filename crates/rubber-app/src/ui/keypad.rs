use eframe::egui::{Align2, FontId, Pos2, Rect, Sense, Stroke, StrokeKind, Ui, Vec2};
use rubber_core::{ControlFlags, ControlState, HitArea, InputSymbol, Point, Size};

use crate::{
    action::ActionRequestQueue,
    ui::layout::{ComponentUnits, LayoutScale},
};

/// A keypad control, tagged with the symbol it produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum KeypadKey {
    Digit(u8),
    Clear,
    Submit,
}

impl KeypadKey {
    const DIGIT_LABELS: [&'static str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

    #[must_use]
    pub(crate) fn label(self) -> &'static str {
        match self {
            Self::Digit(d) => Self::DIGIT_LABELS[usize::from(d % 10)],
            Self::Clear => InputSymbol::CLEAR_LABEL,
            Self::Submit => InputSymbol::SUBMIT_LABEL,
        }
    }

    #[must_use]
    pub(crate) fn symbol(self) -> InputSymbol {
        match self {
            Self::Digit(_) => InputSymbol::digit(self.label()),
            Self::Clear => InputSymbol::Clear,
            Self::Submit => InputSymbol::Submit,
        }
    }
}

pub(crate) const KEYPAD_LAYOUT: [[KeypadKey; 3]; 4] = {
    use KeypadKey::{Clear, Digit, Submit};
    [
        [Digit(1), Digit(2), Digit(3)],
        [Digit(4), Digit(5), Digit(6)],
        [Digit(7), Digit(8), Digit(9)],
        [Clear, Digit(0), Submit],
    ]
};

pub(crate) const KEYPAD_UNITS: ComponentUnits = ComponentUnits::new(3.0, 4.0);

#[derive(Debug, Clone)]
pub(crate) struct KeypadViewModel {
    enabled: bool,
    hit_area: HitArea,
}

impl KeypadViewModel {
    #[must_use]
    pub(crate) fn new(enabled: bool, hit_area: HitArea) -> Self {
        Self { enabled, hit_area }
    }

    #[must_use]
    pub(crate) fn control_state(&self) -> ControlState {
        let mut flags = ControlFlags::empty();
        flags.set(ControlFlags::INTERACTION_DISABLED, !self.enabled);
        ControlState {
            flags,
            opacity: 1.0,
        }
    }
}

pub(crate) fn show(
    ui: &mut Ui,
    vm: &KeypadViewModel,
    scale: &LayoutScale,
    action_queue: &mut ActionRequestQueue,
) {
    let cell_size = scale.cell_size();
    let spacing = scale.spacing;
    let size = Vec2::new(
        cell_size * KEYPAD_UNITS.width + spacing.x * (KEYPAD_UNITS.width - 1.0),
        cell_size * KEYPAD_UNITS.height + spacing.y * (KEYPAD_UNITS.height - 1.0),
    );
    let (rect, _response) = ui.allocate_exact_size(size, Sense::hover());
    let state = vm.control_state();

    for (y, row) in (0u8..).zip(&KEYPAD_LAYOUT) {
        for (x, key) in (0u8..).zip(row) {
            let xf = f32::from(x);
            let yf = f32::from(y);
            let cell_min = rect.min
                + Vec2::new(
                    (cell_size + spacing.x) * xf,
                    (cell_size + spacing.y) * yf,
                );
            let cell_rect = Rect::from_min_size(cell_min, Vec2::splat(cell_size));
            let key_rect = Rect::from_center_size(cell_rect.center(), Vec2::splat(scale.key_size));

            if show_key(ui, vm, &state, *key, key_rect) {
                action_queue.request(key.symbol().into());
            }
        }
    }
}

// Draws one key and returns `true` if it was activated.
fn show_key(
    ui: &mut Ui,
    vm: &KeypadViewModel,
    state: &ControlState,
    key: KeypadKey,
    key_rect: Rect,
) -> bool {
    let id = ui.id().with(("keypad_key", key.label()));
    let bounds = to_hit_rect(key_rect);
    let sense = if state.accepts_hits() {
        Sense::click()
    } else {
        Sense::hover()
    };
    let hit_rect = to_egui_rect(vm.hit_area.expanded_bounds(bounds));
    let response = ui.interact(hit_rect, id, sense);

    let visuals = ui.style().interact(&response);
    let painter = ui.painter();
    painter.rect(
        key_rect,
        visuals.corner_radius,
        visuals.bg_fill,
        Stroke::new(1.0, visuals.bg_stroke.color),
        StrokeKind::Inside,
    );
    painter.text(
        key_rect.center(),
        Align2::CENTER_CENTER,
        key.label(),
        FontId::proportional(key_rect.height() * 0.5),
        visuals.text_color(),
    );

    if !response.clicked() {
        return false;
    }
    // Keyboard activation has no pointer position.
    response.interact_pointer_pos().is_none_or(|pos| {
        vm.hit_area
            .hit_test(bounds, state, Point::new(pos.x, pos.y))
    })
}

fn to_hit_rect(rect: Rect) -> rubber_core::Rect {
    rubber_core::Rect::from_origin_size(
        Point::new(rect.min.x, rect.min.y),
        Size::new(rect.width(), rect.height()),
    )
}

fn to_egui_rect(rect: rubber_core::Rect) -> Rect {
    Rect::from_min_size(
        Pos2::new(rect.min_x(), rect.min_y()),
        Vec2::new(rect.size.width, rect.size.height),
    )
}
