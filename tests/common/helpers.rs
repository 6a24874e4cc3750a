#![allow(dead_code)]

use eatnow::quiz::{Budget, CompleteAnswers, Social, Step, Vibe};
use eatnow::ui::AppState;
use eatnow::ui::state::SwipeDirection;
use ratatui::{Terminal, backend::TestBackend};

pub fn sample_answers() -> CompleteAnswers {
    CompleteAnswers {
        hunger: 80.0,
        budget: Budget::Moderate,
        healthiness: 70.0,
        temperature: 90.0,
        spice: 4,
        social: Social::Date,
        vibe: Vibe::Stressed,
    }
}

/// Walk the quiz to the results stage, picking the highlighted option on
/// choice stages and the top card on the social stage
pub fn walk_to_results(state: &mut AppState) {
    state.start();
    while state.step() != Step::Results {
        state.pick(state.cursor);
        if state.step() == Step::Social && state.flow.answers().social.is_none() {
            state.swipe(SwipeDirection::Right);
        }
        state.next();
    }
}

/// Draw one frame and return the screen as text, one line per row
pub fn render_text(state: &mut AppState, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|frame| eatnow::ui::screens::render(frame, state))
        .unwrap();
    let buffer = terminal.backend().buffer().clone();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}
