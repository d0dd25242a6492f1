use eframe::egui::{Event, InputState, Key, Modifiers};

use crate::{
    action::{Action, ActionRequestQueue, ModalRequest, UiAction},
    ui::keypad::KeypadKey,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Keypad(KeypadKey),
    OpenSettings,
}

impl Command {
    fn into_action(self) -> Action {
        match self {
            Self::Keypad(key) => key.symbol().into(),
            Self::OpenSettings => UiAction::OpenModal(ModalRequest::Settings).into(),
        }
    }
}

struct Trigger {
    key: Key,
    command: bool,
}

struct Shortcut {
    trigger: Trigger,
    command: Command,
}

impl Shortcut {
    const fn new(key: Key, command_modifier: bool, command: Command) -> Self {
        Self {
            trigger: Trigger {
                key,
                command: command_modifier,
            },
            command,
        }
    }

    const fn command(key: Key, command: Command) -> Self {
        Self::new(key, true, command)
    }

    const fn plain(key: Key, command: Command) -> Self {
        Self::new(key, false, command)
    }

    const fn keypad(key: Key, keypad_key: KeypadKey) -> Self {
        Self::plain(key, Command::Keypad(keypad_key))
    }
}

const SHORTCUTS: [Shortcut; 15] = [
    Shortcut::command(Key::Comma, Command::OpenSettings),
    Shortcut::keypad(Key::Enter, KeypadKey::Submit),
    Shortcut::keypad(Key::Backspace, KeypadKey::Clear),
    Shortcut::keypad(Key::Delete, KeypadKey::Clear),
    Shortcut::keypad(Key::E, KeypadKey::Clear),
    Shortcut::keypad(Key::Num0, KeypadKey::Digit(0)),
    Shortcut::keypad(Key::Num1, KeypadKey::Digit(1)),
    Shortcut::keypad(Key::Num2, KeypadKey::Digit(2)),
    Shortcut::keypad(Key::Num3, KeypadKey::Digit(3)),
    Shortcut::keypad(Key::Num4, KeypadKey::Digit(4)),
    Shortcut::keypad(Key::Num5, KeypadKey::Digit(5)),
    Shortcut::keypad(Key::Num6, KeypadKey::Digit(6)),
    Shortcut::keypad(Key::Num7, KeypadKey::Digit(7)),
    Shortcut::keypad(Key::Num8, KeypadKey::Digit(8)),
    Shortcut::keypad(Key::Num9, KeypadKey::Digit(9)),
];

impl Trigger {
    // `modifiers.command` is true when Ctrl (Windows/Linux) or Cmd (Mac) is pressed
    fn matches(&self, key: Key, modifiers: Modifiers) -> bool {
        self.key == key && self.command == modifiers.command
    }
}

fn find_command(key: Key, modifiers: Modifiers) -> Option<Command> {
    SHORTCUTS
        .iter()
        .find(|shortcut| shortcut.trigger.matches(key, modifiers))
        .map(|shortcut| shortcut.command)
}

// Every key press becomes one action, in the order it was typed.
pub(crate) fn handle_input(i: &InputState, action_queue: &mut ActionRequestQueue) {
    for event in &i.events {
        let Event::Key {
            key,
            pressed: true,
            modifiers,
            ..
        } = event
        else {
            continue;
        };
        if let Some(command) = find_command(*key, *modifiers) {
            action_queue.request(command.into_action());
        }
    }
}

#[cfg(test)]
mod tests {
    use eframe::egui::{Context, Event, Key, Modifiers, RawInput};
    use rubber_core::InputSymbol;

    use super::{Command, SHORTCUTS, handle_input};
    use crate::{
        action::{Action, ActionRequestQueue, ModalRequest, UiAction},
        ui::keypad::{KEYPAD_LAYOUT, KeypadKey},
    };

    fn key_event(key: Key, pressed: bool, modifiers: Modifiers) -> Event {
        Event::Key {
            key,
            physical_key: None,
            pressed,
            repeat: false,
            modifiers,
        }
    }

    fn press(key: Key) -> Event {
        key_event(key, true, Modifiers::NONE)
    }

    fn run_frame(events: Vec<Event>) -> Vec<Action> {
        let ctx = Context::default();
        let raw = RawInput {
            events,
            ..RawInput::default()
        };
        let mut queue = ActionRequestQueue::default();
        let _ = ctx.run(raw, |ctx| ctx.input(|i| handle_input(i, &mut queue)));
        queue.take_all()
    }

    fn symbols(actions: &[Action]) -> Vec<InputSymbol> {
        actions
            .iter()
            .map(|action| match action {
                Action::Input(symbol) => symbol.clone(),
                other => panic!("expected input action, got {other:?}"),
            })
            .collect()
    }

    #[test]
    fn every_keypad_key_has_a_plain_shortcut() {
        for key in KEYPAD_LAYOUT.iter().flatten() {
            assert!(
                SHORTCUTS
                    .iter()
                    .any(|s| !s.trigger.command && s.command == Command::Keypad(*key)),
                "no shortcut for {key:?}"
            );
        }
    }

    #[test]
    fn shortcut_triggers_are_unique() {
        for (i, a) in SHORTCUTS.iter().enumerate() {
            for b in &SHORTCUTS[i + 1..] {
                assert!(
                    a.trigger.key != b.trigger.key || a.trigger.command != b.trigger.command,
                    "duplicate trigger {:?}",
                    a.trigger.key
                );
            }
        }
    }

    #[test]
    fn commands_map_to_actions() {
        assert!(matches!(
            Command::Keypad(KeypadKey::Submit).into_action(),
            Action::Input(InputSymbol::Submit)
        ));
        assert!(matches!(
            Command::Keypad(KeypadKey::Digit(3)).into_action(),
            Action::Input(InputSymbol::Digit(d)) if d == "3"
        ));
        assert!(matches!(
            Command::OpenSettings.into_action(),
            Action::Ui(UiAction::OpenModal(ModalRequest::Settings))
        ));
    }

    #[test]
    fn keys_in_one_frame_are_queued_in_typing_order() {
        let actions = run_frame(vec![press(Key::Num2), press(Key::Num1)]);
        assert_eq!(
            symbols(&actions),
            [InputSymbol::digit("2"), InputSymbol::digit("1")]
        );
    }

    #[test]
    fn repeated_key_in_one_frame_is_not_collapsed() {
        let actions = run_frame(vec![press(Key::Num0), press(Key::Num0)]);
        assert_eq!(
            symbols(&actions),
            [InputSymbol::digit("0"), InputSymbol::digit("0")]
        );
    }

    #[test]
    fn digit_then_enter_in_one_frame_submits_after_the_digit() {
        let actions = run_frame(vec![press(Key::Num7), press(Key::Enter)]);
        assert_eq!(
            symbols(&actions),
            [InputSymbol::digit("7"), InputSymbol::Submit]
        );
    }

    #[test]
    fn releases_and_unbound_keys_are_ignored() {
        let actions = run_frame(vec![
            key_event(Key::Num4, false, Modifiers::NONE),
            press(Key::A),
            key_event(Key::Num4, true, Modifiers::COMMAND),
            press(Key::Backspace),
        ]);
        assert_eq!(symbols(&actions), [InputSymbol::Clear]);
    }

    #[test]
    fn command_comma_opens_settings() {
        let actions = run_frame(vec![key_event(Key::Comma, true, Modifiers::COMMAND)]);
        assert_eq!(actions.len(), 1);
        assert!(matches!(
            actions[0],
            Action::Ui(UiAction::OpenModal(ModalRequest::Settings))
        ));
    }
}
