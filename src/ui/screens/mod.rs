// Per-stage screens; drawing is a function of AppState only

use crate::quiz::Step;
use crate::ui::components::{Footer, render_button};
use crate::ui::state::{AppState, ResultsState};
use crate::ui::widgets::StageProgress;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Paragraph, Widget},
};

mod choices;
mod landing;
mod results;
mod sliders;
mod social;

pub use choices::ChoiceScreen;
pub use landing::LandingScreen;
pub use results::ResultsScreen;
pub use sliders::SliderScreen;
pub use social::SocialScreen;

/// Widest the stage body gets on large terminals
const BODY_MAX_WIDTH: u16 = 72;

pub fn render(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();
    let step = state.step();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Progress bar
            Constraint::Length(1), // Spacer
            Constraint::Length(2), // Title + prompt
            Constraint::Min(0),    // Stage body
            Constraint::Length(1), // Next button
            Constraint::Length(1), // Footer
        ])
        .split(area);

    if let Some((current, total)) = step.progress() {
        StageProgress::new(current, total).render(chunks[0], frame.buffer_mut());
    }

    state.hit.clear();
    let body = centered(chunks[3], BODY_MAX_WIDTH);

    match step {
        Step::Landing => LandingScreen::render(frame, chunks[2].union(body), state),
        Step::Hunger | Step::Healthiness | Step::Temperature | Step::Spice => {
            render_heading(frame, chunks[2], step);
            SliderScreen::render(frame, body, state);
        }
        Step::Budget | Step::Vibe => {
            render_heading(frame, chunks[2], step);
            ChoiceScreen::render(frame, body, state);
        }
        Step::Social => {
            render_heading(frame, chunks[2], step);
            SocialScreen::render(frame, body, state);
        }
        Step::Results => ResultsScreen::render(frame, chunks[2].union(body), state),
    }

    if step.is_question() {
        let enabled = state.flow.can_advance();
        let label = if enabled {
            "Next →"
        } else {
            "Select an option first"
        };
        render_button(label, "Enter", enabled, chunks[4], frame.buffer_mut());
    }

    let result_ready = matches!(state.results, ResultsState::Ready(_));
    Footer::for_step(step, result_ready).render(chunks[5], frame.buffer_mut());
}

fn render_heading(frame: &mut Frame, area: Rect, step: Step) {
    let lines = vec![
        Line::styled(
            step.title(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(step.prompt(), Style::default().fg(Color::Gray)),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Horizontally centered slice of `area`, at most `width` wide
pub(crate) fn centered(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    pub(super) fn draw(state: &mut AppState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(frame, state)).unwrap();
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

    #[test]
    fn test_centered_clamps_to_area() {
        let area = Rect::new(0, 0, 40, 10);
        assert_eq!(centered(area, 100), area);
        assert_eq!(centered(area, 20), Rect::new(10, 0, 20, 10));
    }

    #[test]
    fn test_every_stage_draws() {
        let mut state = AppState::new();
        for _ in 0..20 {
            let text = draw(&mut state, 90, 30);
            assert!(text.contains(state.step().title()) || state.step() == Step::Results);
            if state.step() == Step::Landing {
                state.start();
            } else if state.step() == Step::Social {
                state.swipe(crate::ui::state::SwipeDirection::Right);
                state.next();
            } else {
                state.pick(state.cursor);
                state.next();
            }
        }
        assert_eq!(state.step(), Step::Results);
    }

    #[test]
    fn test_progress_hidden_on_landing() {
        let mut state = AppState::new();
        let text = draw(&mut state, 60, 20);
        assert!(!text.lines().next().unwrap().contains('░'));

        state.start();
        let text = draw(&mut state, 60, 20);
        assert!(text.lines().next().unwrap().contains("1/7"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let mut state = AppState::new();
        state.start();
        draw(&mut state, 8, 4);
    }
}
