use super::*;
use crate::ui::state::SwipeDirection;

pub(super) fn handle_question_key(key: KeyEvent, state: &mut AppState) {
    match state.step() {
        Step::Hunger | Step::Healthiness | Step::Temperature | Step::Spice => match key.code {
            KeyCode::Enter => state.next(),
            // Number keys set the spice dial directly
            KeyCode::Char(c @ '0'..='5') if state.step() == Step::Spice => {
                state.set_spice(c as u8 - b'0');
            }
            code => {
                state.adjust_slider(code);
            }
        },
        Step::Budget | Step::Vibe => match key.code {
            KeyCode::Left | KeyCode::Up | KeyCode::BackTab => state.move_cursor(false),
            KeyCode::Right | KeyCode::Down | KeyCode::Tab => state.move_cursor(true),
            KeyCode::Char(' ') => state.pick(state.cursor),
            KeyCode::Enter => state.next(),
            _ => {}
        },
        Step::Social => match key.code {
            KeyCode::Right => state.swipe(SwipeDirection::Right),
            KeyCode::Left => state.swipe(SwipeDirection::Left),
            KeyCode::Enter => state.next(),
            _ => {}
        },
        Step::Landing | Step::Results => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(state: &mut AppState, code: KeyCode) {
        handle_question_key(
            KeyEvent {
                code,
                modifiers: KeyModifiers::NONE,
                kind: KeyEventKind::Press,
                state: KeyEventState::NONE,
            },
            state,
        );
    }

    #[test]
    fn test_digit_sets_spice_only_on_spice_stage() {
        let mut state = AppState::new();
        state.start();
        press(&mut state, KeyCode::Char('4'));
        assert_eq!(state.flow.answers().spice, Some(2));

        while state.step() != Step::Spice {
            state.pick(state.cursor);
            state.next();
        }
        press(&mut state, KeyCode::Char('4'));
        assert_eq!(state.flow.answers().spice, Some(4));
    }

    #[test]
    fn test_social_needs_a_right_swipe() {
        let mut state = AppState::new();
        state.start();
        while state.step() != Step::Social {
            state.pick(state.cursor);
            state.next();
        }
        press(&mut state, KeyCode::Left);
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.step(), Step::Social);
        press(&mut state, KeyCode::Right);
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.step(), Step::Vibe);
    }
}
