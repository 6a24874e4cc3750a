// Hunger, healthiness, temperature and spice stages

use crate::quiz::Step;
use crate::ui::components::render_radio_group;
use crate::ui::constants::{
    SPICE_LEVELS, healthiness_mood, hunger_mood, slider_spec, spice_mood, temperature_mood,
};
use crate::ui::state::AppState;
use crate::ui::widgets::Slider;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
};

const ICON_WIDTH: u16 = 4;

pub struct SliderScreen;

impl SliderScreen {
    pub fn render(frame: &mut Frame, area: Rect, state: &mut AppState) {
        let step = state.step();
        let Some(spec) = slider_spec(step) else {
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(1), // Mood
                Constraint::Length(1),
                Constraint::Length(2), // Slider
                Constraint::Length(1),
                Constraint::Length(1), // Spice level buttons
                Constraint::Fill(1),
            ])
            .split(area);

        // Icons flank the slider; they sit on the bar row
        let row = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(ICON_WIDTH),
                Constraint::Min(0),
                Constraint::Length(ICON_WIDTH),
            ])
            .split(chunks[3]);

        // Drag previews project against this frame's bar
        state.hit.slider_bar = Slider::bar_area(row[1]);
        let Some(value) = state.slider_value() else {
            return;
        };

        let mood = Line::styled(
            Self::mood(step, value),
            Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
        );
        frame.render_widget(Paragraph::new(mood).alignment(Alignment::Center), chunks[1]);

        if let Some(bar) = Slider::bar_area(row[0]) {
            frame.render_widget(Paragraph::new(spec.left_icon), bar);
        }
        if let Some(bar) = Slider::bar_area(row[2]) {
            frame.render_widget(
                Paragraph::new(spec.right_icon).alignment(Alignment::Right),
                bar,
            );
        }

        let slider = Slider::from_spec(Self::label(step), spec)
            .value(value)
            .focused(true)
            .dragging(state.drag.is_some());
        frame.render_widget(slider, row[1]);

        if step == Step::Spice {
            let chosen = state.flow.answers().spice.map(usize::from);
            let levels = centered_row(chunks[5], SPICE_LEVELS);
            state.hit.options = render_radio_group(
                SPICE_LEVELS,
                chosen.unwrap_or(0),
                chosen,
                levels,
                frame.buffer_mut(),
            );
        }
    }

    fn label(step: Step) -> &'static str {
        match step {
            Step::Hunger => "Hunger",
            Step::Healthiness => "Naughtiness",
            Step::Temperature => "Temperature",
            Step::Spice => "Heat",
            _ => "",
        }
    }

    fn mood(step: Step, value: u32) -> String {
        let v = value as f64;
        match step {
            Step::Hunger => {
                let (emoji, label) = hunger_mood(v);
                format!("{} {}", emoji, label)
            }
            Step::Healthiness => healthiness_mood(v).to_string(),
            Step::Temperature => temperature_mood(v).to_string(),
            Step::Spice => {
                let (emoji, label) = spice_mood(value.min(u8::MAX as u32) as u8);
                format!("{} {}", emoji, label)
            }
            _ => String::new(),
        }
    }
}

/// Area just wide enough for a radio row, centered in `area`
fn centered_row(area: Rect, options: &[&str]) -> Rect {
    // "( ) x" per option plus two spaces between
    let width: usize = options.iter().map(|o| o.chars().count() + 4).sum::<usize>()
        + 2 * options.len().saturating_sub(1);
    super::centered(area, width as u16)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::screens::tests::draw;

    #[test]
    fn test_hunger_screen_shows_mood_and_value() {
        let mut state = AppState::new();
        state.start();
        let text = draw(&mut state, 80, 24);
        assert!(text.contains("Pretty Hungry"));
        assert!(text.contains("Hunger: 50 (0-100)"));
        assert!(state.hit.slider_bar.is_some());
    }

    #[test]
    fn test_spice_levels_are_clickable() {
        let mut state = AppState::new();
        state.start();
        while state.step() != Step::Spice {
            state.pick(state.cursor);
            state.next();
        }
        let text = draw(&mut state, 80, 24);
        assert!(text.contains("Mild"));
        assert_eq!(state.hit.options.len(), SPICE_LEVELS.len());

        let five = state.hit.options[5];
        state.click(five.x, five.y);
        assert_eq!(state.flow.answers().spice, Some(5));
    }

    #[test]
    fn test_centered_row_width() {
        let area = Rect::new(0, 0, 80, 1);
        // six options of width 5 plus five gaps of 2
        assert_eq!(centered_row(area, SPICE_LEVELS).width, 40);
    }
}
